//! Application state container and view model computation.
//!
//! [`AppState`] is the single owner of everything the interaction engine
//! mutates: the sentence pair session, the alignment store, the gesture state
//! machine, and the user-facing warning surfaces. The event handler mutates
//! it; the presentation layer reads it through
//! [`compute_viewmodel`](AppState::compute_viewmodel), which derives a
//! render-ready snapshot on demand.
//!
//! # State Components
//!
//! - **Session**: pair list, loaded pair, edit-mode flag
//! - **Store**: the authoritative alignment set of the loaded pair
//! - **Mode / Selection / Drag**: the gesture state machine
//! - **Pending confirmation**: a destructive bulk operation parked until the
//!   user confirms
//! - **Warnings**: non-fatal sync drift and edit validation surfaces

use crate::app::modes::{BulkOperation, DragPayload, InteractionMode, Selection};
use crate::app::session::SentencePairSession;
use crate::domain::link::Side;
use crate::domain::token::tokenize;
use crate::store::AlignmentStore;
use crate::ui::viewmodel::{
    AlignmentRow, PairOption, TokenView, UiViewModel, PALETTE_SIZE,
};

/// Central state container for the alignment engine.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Pair lifecycle: navigation list, loaded pair, edit flag.
    pub session: SentencePairSession,

    /// Alignment set of the loaded pair.
    pub store: AlignmentStore,

    /// Current gesture interpretation mode.
    pub mode: InteractionMode,

    /// Click-selection state (select mode only).
    pub selection: Selection,

    /// Token picked up by an in-progress drag (drag mode only).
    pub drag: Option<DragPayload>,

    /// Destructive operation awaiting explicit confirmation.
    pub pending_confirmation: Option<BulkOperation>,

    /// Non-fatal persistence drift message, surfaced until dismissed.
    pub sync_warning: Option<String>,

    /// Validation message for a rejected sentence edit.
    pub edit_error: Option<String>,
}

impl AppState {
    /// Creates a fresh state with no pair loaded, in drag mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the token is picked by the current selection or drag.
    #[must_use]
    pub fn is_token_selected(&self, side: Side, position: usize) -> bool {
        if self.selection.holds(side, position) {
            return true;
        }
        self.drag
            .is_some_and(|payload| payload.side == side && payload.position == position)
    }

    /// Clears any in-progress selection and drag.
    ///
    /// Called on mode switches and whenever a new pair is loaded; selections
    /// never survive either.
    pub fn clear_gesture_state(&mut self) {
        self.selection = Selection::None;
        self.drag = None;
    }

    /// Computes a renderable snapshot of the current state.
    ///
    /// Token rows, table rows, and selector options are all derived fresh:
    /// tokens are never cached across sentence changes because positions are
    /// defined purely by split order.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UiViewModel {
        let (source_tokens, target_tokens) = match self.session.current() {
            Some(pair) => (
                self.compute_tokens(Side::Source, &pair.source_sentence),
                self.compute_tokens(Side::Target, &pair.target_sentence),
            ),
            None => (vec![], vec![]),
        };

        UiViewModel {
            source_tokens,
            target_tokens,
            alignment_rows: self.compute_alignment_rows(),
            pair_options: self.compute_pair_options(),
            mode: self.mode,
            editing: self.session.is_editing(),
            confirmation_prompt: self
                .pending_confirmation
                .map(|operation| operation.prompt().to_string()),
            sync_warning: self.sync_warning.clone(),
            edit_error: self.edit_error.clone(),
            header: self.compute_header(),
            footer: self.compute_footer(),
        }
    }

    /// Derives the token views for one side of the loaded pair.
    fn compute_tokens(&self, side: Side, sentence: &str) -> Vec<TokenView> {
        tokenize(sentence)
            .into_iter()
            .map(|token| {
                let touching = self.store.links_touching(side, token.position);
                let color_index = touching
                    .first()
                    .and_then(|link| link.id)
                    .map(|id| usize::try_from(id).unwrap_or(0) % PALETTE_SIZE);
                TokenView {
                    is_selected: self.is_token_selected(side, token.position),
                    is_linked: !touching.is_empty(),
                    color_index,
                    text: token.text,
                    position: token.position,
                }
            })
            .collect()
    }

    /// Derives the alignment table rows, one per link in insertion order.
    fn compute_alignment_rows(&self) -> Vec<AlignmentRow> {
        let (source_words, target_words) = match self.session.current() {
            Some(pair) => (
                tokenize(&pair.source_sentence),
                tokenize(&pair.target_sentence),
            ),
            None => (vec![], vec![]),
        };

        let words_at = |words: &[crate::domain::token::Token], positions: &[usize]| {
            positions
                .iter()
                .filter_map(|&position| words.get(position).map(|t| t.text.clone()))
                .collect::<Vec<_>>()
                .join(" ")
        };

        self.store
            .links()
            .iter()
            .map(|link| AlignmentRow {
                id: link.id,
                source_text: words_at(&source_words, &link.source_positions),
                target_text: words_at(&target_words, &link.target_positions),
                color_index: link
                    .id
                    .map(|id| usize::try_from(id).unwrap_or(0) % PALETTE_SIZE),
            })
            .collect()
    }

    /// Derives the pair selector options from the session's pair list.
    fn compute_pair_options(&self) -> Vec<PairOption> {
        self.session
            .pairs()
            .iter()
            .map(|summary| PairOption {
                id: summary.id,
                label: summary.selector_label(),
                is_current: self.session.current_pair_id() == Some(summary.id),
            })
            .collect()
    }

    fn compute_header(&self) -> String {
        match (self.session.current_index(), self.session.pairs().len()) {
            (Some(index), total) => format!(" Alignment ({}/{total}) ", index + 1),
            (None, _) => " Alignment — no pair loaded ".to_string(),
        }
    }

    fn compute_footer(&self) -> String {
        if self.session.is_editing() {
            return "Save: apply edit (discards alignments)  Cancel: keep text".to_string();
        }
        match self.mode {
            InteractionMode::Drag => {
                "drag a word onto the other sentence to link/unlink  mode: switch to select"
                    .to_string()
            }
            InteractionMode::Select => {
                "click one word per side to link/unlink  click again: deselect  mode: switch to drag"
                    .to_string()
            }
        }
    }
}
