//! View model types representing renderable annotation state.
//!
//! This module defines immutable view models computed from application state.
//! They contain no business logic, only display-ready data: per-token
//! highlight flags and color indices, the alignment table rows, and the pair
//! selector options. The rendering layer itself lives outside this crate.

use crate::app::modes::InteractionMode;

/// Number of distinct highlight colors available to the renderer.
///
/// Link ids are mapped onto this palette by modulo, so a link keeps its color
/// across recomputations and across the token row and the table row.
pub const PALETTE_SIZE: usize = 8;

/// Complete view model for one render pass.
#[derive(Debug, Clone)]
pub struct UiViewModel {
    /// Source-sentence tokens in position order.
    pub source_tokens: Vec<TokenView>,

    /// Target-sentence tokens in position order.
    pub target_tokens: Vec<TokenView>,

    /// Alignment table rows in insertion order.
    pub alignment_rows: Vec<AlignmentRow>,

    /// Pair selector entries in list order.
    pub pair_options: Vec<PairOption>,

    /// Current gesture interpretation mode.
    pub mode: InteractionMode,

    /// True while a sentence edit is in progress (navigation and alignment
    /// gestures are disabled).
    pub editing: bool,

    /// Prompt of a destructive operation awaiting confirmation, if any.
    pub confirmation_prompt: Option<String>,

    /// Non-fatal persistence drift warning to surface, if any.
    pub sync_warning: Option<String>,

    /// Validation message for a rejected sentence edit, if any.
    pub edit_error: Option<String>,

    /// Header text (pair position within the corpus).
    pub header: String,

    /// Gesture hints for the current mode.
    pub footer: String,
}

/// Display information for a single token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenView {
    /// The word text.
    pub text: String,

    /// Zero-based position within its sentence.
    pub position: usize,

    /// Whether this token is picked by the current selection or drag.
    pub is_selected: bool,

    /// Whether at least one alignment link touches this token.
    pub is_linked: bool,

    /// Palette index of the first touching link, if that link is confirmed.
    ///
    /// Pending links highlight via `is_linked` but carry no stable color
    /// until the backend assigns their id.
    pub color_index: Option<usize>,
}

/// One row of the alignments table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentRow {
    /// Backend id, `None` while the link is pending.
    pub id: Option<i64>,

    /// Source words of the link joined with single spaces.
    pub source_text: String,

    /// Target words of the link joined with single spaces.
    pub target_text: String,

    /// Palette index for the row background, if confirmed.
    pub color_index: Option<usize>,
}

/// One entry of the pair selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairOption {
    /// Pair id to navigate to.
    pub id: i64,

    /// Label: languages plus a sentence preview.
    pub label: String,

    /// Whether this is the currently loaded pair.
    pub is_current: bool,
}
