//! Interaction mode and gesture state types.
//!
//! This module defines the state machine enums behind the two linking
//! gestures. The annotator is always in exactly one [`InteractionMode`];
//! switching modes clears any in-progress selection or drag, so the two
//! gestures can never be half-combined.

use crate::domain::link::Side;
use serde::{Deserialize, Serialize};

/// How gestures over tokens are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionMode {
    /// Pick up a token and release it over a token of the other side.
    ///
    /// A release over the same side is a no-op; a valid drop performs the
    /// create-or-remove toggle for that token pair.
    #[default]
    Drag,

    /// Click one token per side; the instant both sides are picked the
    /// toggle fires and both selections reset.
    Select,
}

/// Click-selection state in select mode.
///
/// `None` is waiting-for-both, `Source`/`Target` are one-side-picked, and
/// both-picked is transient: the toggle fires immediately and the state
/// returns to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// No token picked on either side.
    #[default]
    None,

    /// A source token is picked, waiting for a target.
    Source(usize),

    /// A target token is picked, waiting for a source.
    Target(usize),
}

impl Selection {
    /// Returns true if the given token is the currently picked one.
    #[must_use]
    pub fn holds(&self, side: Side, position: usize) -> bool {
        matches!(
            (self, side),
            (Self::Source(p), Side::Source) | (Self::Target(p), Side::Target) if *p == position
        )
    }
}

/// The token captured when a drag begins.
///
/// A tagged `(side, position)` pair; the drop handler only accepts a release
/// whose side differs from the payload's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    pub side: Side,
    pub position: usize,
}

/// A destructive bulk operation awaiting explicit user confirmation.
///
/// Both operations are irreversible, so the handler parks them here and only
/// executes on a confirmation event; the confirmation UI itself is external
/// and reads the prompt from the view model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkOperation {
    /// Delete every link of the currently loaded pair.
    ClearCurrent,

    /// Delete every link of every pair, then reload the current pair.
    ResetAll,
}

impl BulkOperation {
    /// Returns the confirmation prompt shown to the user.
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::ClearCurrent => {
                "Delete every alignment of this sentence pair? This cannot be undone."
            }
            Self::ResetAll => {
                "Delete ALL alignments across every sentence pair? This cannot be undone."
            }
        }
    }
}
