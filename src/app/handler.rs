//! Event handling and state transition logic.
//!
//! This module implements the core event handler that turns user gestures,
//! navigation commands, and gateway responses into state changes plus action
//! sequences. It is the interaction controller of the engine: the toggle
//! semantics, the optimistic-update ordering, and all reconciliation live
//! here.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the hosting runtime (gestures) or as gateway responses
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur synchronously on [`AppState`]
//! 4. Actions are collected and returned for execution
//!
//! The ordering guarantee of the engine is enforced structurally: every local
//! mutation happens before the function returns the request that persists it,
//! so the UI always reflects intent immediately and the network only ever
//! confirms, compensates, or warns.

use crate::app::actions::Action;
use crate::app::modes::{BulkOperation, DragPayload, InteractionMode, Selection};
use crate::app::session::SentencePairSession;
use crate::app::state::AppState;
use crate::domain::error::Result;
use crate::domain::link::{AlignmentLink, Side};
use crate::gateway::{GatewayRequest, GatewayResponse};

/// Events triggered by user input, navigation, editing, or gateway responses.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The handler processes them sequentially on a single
/// event loop, so two gestures can never race locally.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Switches the gesture interpretation mode, clearing any in-progress
    /// selection or drag.
    SwitchMode(InteractionMode),

    /// A token was picked up (drag mode).
    DragStarted { side: Side, position: usize },

    /// The dragged token was released over a token.
    ///
    /// Only accepted when the release side differs from the pickup side;
    /// a same-side release drops the payload without mutating anything.
    DragDropped { side: Side, position: usize },

    /// The drag was released outside any token.
    DragCancelled,

    /// A token was clicked (select mode).
    TokenClicked { side: Side, position: usize },

    /// Clears the click selection without linking.
    ClearSelection,

    /// Asks to delete every link of the current pair (needs confirmation).
    ClearCurrentRequested,

    /// Asks to delete every link of every pair (needs confirmation).
    ResetAllRequested,

    /// The user confirmed the pending destructive operation.
    ConfirmationAccepted,

    /// The user cancelled the pending destructive operation.
    ConfirmationCancelled,

    /// Navigate to the first pair of the list.
    LoadFirst,
    /// Navigate to the previous pair, clamped at the start.
    LoadPrevious,
    /// Navigate to the next pair, clamped at the end.
    LoadNext,
    /// Navigate to the last pair of the list.
    LoadLast,
    /// Navigate to a specific pair by id.
    LoadPair { pair_id: i64 },

    /// Enters sentence edit mode, freezing navigation and gestures.
    EditStarted,

    /// Leaves edit mode without changes.
    EditCancelled,

    /// Saves edited sentences, discarding the pair's alignment set.
    EditSaved {
        source_sentence: String,
        target_sentence: String,
    },

    /// Dismisses the non-fatal sync warning.
    WarningDismissed,

    /// Wraps the resolution of a previously issued gateway request.
    ///
    /// Responses may arrive in any order; reconciliation matches on link keys
    /// and pair ids, never on issue order.
    GatewayResponse(GatewayResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(render, actions)`: whether the presentation layer should recompute the
/// view model, and the gateway requests to issue in order.
///
/// # Errors
///
/// Store contract violations (`DuplicateLink`, `NotFound`) propagate to the
/// caller; they indicate a handler bug, not a user mistake. Transport
/// failures never surface here — they come back later as
/// [`GatewayResponse::Failed`] events and are reconciled.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SwitchMode(mode) => {
            if state.session.is_editing() || state.mode == *mode {
                return Ok((false, vec![]));
            }
            tracing::debug!(mode = ?mode, "interaction mode switched");
            state.mode = *mode;
            state.clear_gesture_state();
            Ok((true, vec![]))
        }

        Event::DragStarted { side, position } => {
            if state.session.is_editing() || state.mode != InteractionMode::Drag {
                return Ok((false, vec![]));
            }
            state.drag = Some(DragPayload {
                side: *side,
                position: *position,
            });
            Ok((true, vec![]))
        }

        Event::DragDropped { side, position } => {
            if state.session.is_editing() {
                return Ok((false, vec![]));
            }
            let Some(payload) = state.drag.take() else {
                return Ok((false, vec![]));
            };
            if payload.side == *side {
                tracing::debug!("same-side drop rejected");
                return Ok((true, vec![]));
            }
            let (source_position, target_position) = match payload.side {
                Side::Source => (payload.position, *position),
                Side::Target => (*position, payload.position),
            };
            let actions = toggle_link(state, source_position, target_position)?;
            Ok((true, actions))
        }

        Event::DragCancelled => {
            let had_drag = state.drag.take().is_some();
            Ok((had_drag, vec![]))
        }

        Event::TokenClicked { side, position } => {
            if state.session.is_editing() || state.mode != InteractionMode::Select {
                return Ok((false, vec![]));
            }
            handle_token_click(state, *side, *position)
        }

        Event::ClearSelection => {
            let had_selection = state.selection != Selection::None;
            state.selection = Selection::None;
            Ok((had_selection, vec![]))
        }

        Event::ClearCurrentRequested => {
            if state.session.is_editing() || state.store.pair_id().is_none() {
                return Ok((false, vec![]));
            }
            state.pending_confirmation = Some(BulkOperation::ClearCurrent);
            Ok((true, vec![]))
        }

        Event::ResetAllRequested => {
            if state.session.is_editing() {
                return Ok((false, vec![]));
            }
            state.pending_confirmation = Some(BulkOperation::ResetAll);
            Ok((true, vec![]))
        }

        Event::ConfirmationAccepted => {
            let Some(operation) = state.pending_confirmation.take() else {
                return Ok((false, vec![]));
            };
            Ok((true, execute_bulk(state, operation)))
        }

        Event::ConfirmationCancelled => {
            let had_pending = state.pending_confirmation.take().is_some();
            Ok((had_pending, vec![]))
        }

        Event::LoadFirst => {
            let target = state.session.first_target();
            navigate(state, target)
        }
        Event::LoadPrevious => {
            let target = state.session.previous_target();
            navigate(state, target)
        }
        Event::LoadNext => {
            let target = state.session.next_target();
            navigate(state, target)
        }
        Event::LoadLast => {
            let target = state.session.last_target();
            navigate(state, target)
        }
        Event::LoadPair { pair_id } => {
            let target = state.session.target_by_id(*pair_id);
            navigate(state, target)
        }

        Event::EditStarted => {
            if !state.session.begin_edit() {
                return Ok((false, vec![]));
            }
            state.clear_gesture_state();
            state.edit_error = None;
            Ok((true, vec![]))
        }

        Event::EditCancelled => {
            if !state.session.is_editing() {
                return Ok((false, vec![]));
            }
            state.session.cancel_edit();
            state.edit_error = None;
            Ok((true, vec![]))
        }

        Event::EditSaved {
            source_sentence,
            target_sentence,
        } => handle_edit_saved(state, source_sentence, target_sentence),

        Event::WarningDismissed => {
            let had_warning = state.sync_warning.take().is_some();
            Ok((had_warning, vec![]))
        }

        Event::GatewayResponse(response) => reconcile(state, response),
    }
}

/// Performs the create-or-remove toggle for a single token pair.
///
/// The local store mutates first (optimistic update), then the matching
/// persistence request is returned for the runtime to issue.
fn toggle_link(
    state: &mut AppState,
    source_position: usize,
    target_position: usize,
) -> Result<Vec<Action>> {
    let Some(pair_id) = state.store.pair_id() else {
        tracing::debug!("no pair loaded, gesture ignored");
        return Ok(vec![]);
    };

    let existing = state
        .store
        .find_single(source_position, target_position)
        .map(|link| (link.id, link.key()));

    match existing {
        Some((Some(id), _)) => {
            state.store.remove(id)?;
            tracing::debug!(id, "toggle removed existing link");
            Ok(vec![Action::CallGateway(GatewayRequest::DeleteLink { id })])
        }
        Some((None, key)) => {
            // Create still in flight: remove locally only. When the stale
            // confirmation arrives, reconciliation issues the compensating
            // delete for the server copy.
            state.store.remove_by_key(&key);
            tracing::debug!(key = %key, "toggle removed pending link");
            Ok(vec![])
        }
        None => {
            let link = AlignmentLink::single(pair_id, source_position, target_position);
            let request = GatewayRequest::CreateLink { link: link.clone() };
            state.store.add(link)?;
            tracing::debug!(source_position, target_position, "toggle created pending link");
            Ok(vec![Action::CallGateway(request)])
        }
    }
}

/// Select-mode click transitions.
///
/// One position per side; clicking the picked token again deselects it, and
/// the instant both sides are picked the toggle fires and both reset.
fn handle_token_click(
    state: &mut AppState,
    side: Side,
    position: usize,
) -> Result<(bool, Vec<Action>)> {
    match (state.selection, side) {
        (Selection::None, Side::Source) => {
            state.selection = Selection::Source(position);
            Ok((true, vec![]))
        }
        (Selection::None, Side::Target) => {
            state.selection = Selection::Target(position);
            Ok((true, vec![]))
        }
        (Selection::Source(picked), Side::Source) => {
            state.selection = if picked == position {
                Selection::None
            } else {
                Selection::Source(position)
            };
            Ok((true, vec![]))
        }
        (Selection::Target(picked), Side::Target) => {
            state.selection = if picked == position {
                Selection::None
            } else {
                Selection::Target(position)
            };
            Ok((true, vec![]))
        }
        (Selection::Target(target_position), Side::Source) => {
            state.selection = Selection::None;
            let actions = toggle_link(state, position, target_position)?;
            Ok((true, actions))
        }
        (Selection::Source(source_position), Side::Target) => {
            state.selection = Selection::None;
            let actions = toggle_link(state, source_position, position)?;
            Ok((true, actions))
        }
    }
}

/// Executes a confirmed destructive bulk operation.
fn execute_bulk(state: &mut AppState, operation: BulkOperation) -> Vec<Action> {
    match operation {
        BulkOperation::ClearCurrent => {
            let ids: Vec<i64> = state.store.links().iter().filter_map(|link| link.id).collect();
            tracing::debug!(
                local = state.store.len(),
                remote_deletes = ids.len(),
                "clearing current alignments"
            );
            state.store.clear();
            ids.into_iter()
                .map(|id| Action::CallGateway(GatewayRequest::DeleteLink { id }))
                .collect()
        }
        BulkOperation::ResetAll => {
            tracing::debug!("resetting all alignments");
            state.store.clear();
            vec![Action::CallGateway(GatewayRequest::ResetAllLinks)]
        }
    }
}

/// Issues a pair fetch for a navigation target, if there is one.
fn navigate(state: &mut AppState, target: Option<i64>) -> Result<(bool, Vec<Action>)> {
    if state.session.is_editing() {
        return Ok((false, vec![]));
    }
    match target {
        Some(pair_id) => {
            state.session.begin_navigation(pair_id);
            Ok((
                true,
                vec![Action::CallGateway(GatewayRequest::FetchPair { pair_id })],
            ))
        }
        None => Ok((false, vec![])),
    }
}

/// Validates and applies a sentence edit.
///
/// A blank sentence blocks the save and keeps edit mode active. A valid save
/// discards the pair's alignment set locally and remotely — old token
/// positions are meaningless against the new tokenization — then persists the
/// new text and refreshes the pair list.
fn handle_edit_saved(
    state: &mut AppState,
    source_sentence: &str,
    target_sentence: &str,
) -> Result<(bool, Vec<Action>)> {
    if !state.session.is_editing() {
        return Ok((false, vec![]));
    }
    if let Err(e) = SentencePairSession::validate_edit(source_sentence, target_sentence) {
        tracing::debug!(error = %e, "edit rejected");
        state.edit_error = Some(e.to_string());
        return Ok((true, vec![]));
    }
    let Some(pair_id) = state.session.current_pair_id() else {
        return Ok((false, vec![]));
    };
    state.edit_error = None;

    let mut actions: Vec<Action> = state
        .store
        .links()
        .iter()
        .filter_map(|link| link.id)
        .map(|id| Action::CallGateway(GatewayRequest::DeleteLink { id }))
        .collect();
    state.store.clear();
    state
        .session
        .apply_edit(source_sentence.to_string(), target_sentence.to_string());

    actions.push(Action::CallGateway(GatewayRequest::UpdateSentencePair {
        pair_id,
        source_sentence: source_sentence.to_string(),
        target_sentence: target_sentence.to_string(),
    }));
    actions.push(Action::CallGateway(GatewayRequest::ListPairs));

    tracing::debug!(pair_id, "edit saved, alignment set discarded");
    Ok((true, actions))
}

/// Applies a gateway response to local state.
///
/// Matching is by link key and pair id; responses for a no-longer-current
/// pair are discarded rather than applied.
fn reconcile(state: &mut AppState, response: &GatewayResponse) -> Result<(bool, Vec<Action>)> {
    match response {
        GatewayResponse::PairsListed { pairs } => {
            state.session.set_pairs(pairs.clone());
            // Initial load: no pair current yet, fetch the first one.
            if state.session.current_pair_id().is_none() {
                if let Some(first) = pairs.first() {
                    let pair_id = first.id;
                    state.session.begin_navigation(pair_id);
                    return Ok((
                        true,
                        vec![Action::CallGateway(GatewayRequest::FetchPair { pair_id })],
                    ));
                }
            }
            Ok((true, vec![]))
        }

        GatewayResponse::PairFetched { pair, links } => {
            if !state.session.apply_fetched(pair.clone()) {
                return Ok((false, vec![]));
            }
            state.store.load(pair.id, links.clone());
            state.clear_gesture_state();
            Ok((true, vec![]))
        }

        GatewayResponse::LinkCreated { link } => {
            if state.store.pair_id() != Some(link.sentence_pair_id) {
                tracing::debug!(
                    pair_id = link.sentence_pair_id,
                    "discarding link confirmation for non-current pair"
                );
                return Ok((false, vec![]));
            }
            let Some(id) = link.id else {
                tracing::warn!("link confirmation arrived without an id");
                return Ok((false, vec![]));
            };
            if state.store.confirm(&link.key(), id) {
                Ok((true, vec![]))
            } else {
                // The link was toggled off while the create was in flight;
                // delete the server copy rather than resurrect it locally.
                tracing::debug!(id, "compensating delete for superseded create");
                Ok((
                    false,
                    vec![Action::CallGateway(GatewayRequest::DeleteLink { id })],
                ))
            }
        }

        GatewayResponse::LinkDeleted { id } => {
            tracing::debug!(id, "remote delete confirmed");
            Ok((false, vec![]))
        }

        GatewayResponse::PairUpdated { pair } => {
            if state.session.current_pair_id() == Some(pair.id) {
                state.session.apply_fetched(pair.clone());
                Ok((true, vec![]))
            } else {
                tracing::debug!(pair_id = pair.id, "discarding stale pair update");
                Ok((false, vec![]))
            }
        }

        GatewayResponse::AllLinksReset => {
            // The local set was cleared when the reset was confirmed; reload
            // the current pair so its (now empty) remote set is authoritative.
            match state.session.current_pair_id() {
                Some(pair_id) => Ok((
                    false,
                    vec![Action::CallGateway(GatewayRequest::FetchPair { pair_id })],
                )),
                None => Ok((false, vec![])),
            }
        }

        GatewayResponse::Failed { request, message } => {
            Ok(reconcile_failure(state, request, message))
        }
    }
}

/// Compensation policy for failed gateway calls.
///
/// Create failures roll back the optimistic insert. Delete failures leave the
/// local removal in place — responsiveness over strict convergence — and
/// surface a non-fatal sync warning instead of resurrecting the link. No
/// failure is fatal; control always returns to the interactive loop.
fn reconcile_failure(
    state: &mut AppState,
    request: &GatewayRequest,
    message: &str,
) -> (bool, Vec<Action>) {
    tracing::warn!(request = ?request, message, "gateway call failed");

    let warning = match request {
        GatewayRequest::CreateLink { link } => {
            if state.store.pair_id() == Some(link.sentence_pair_id) {
                state.store.remove_by_key(&link.key());
            }
            format!("alignment was not saved: {message}")
        }
        GatewayRequest::DeleteLink { id } => {
            format!("remote delete failed for link {id}: {message}")
        }
        GatewayRequest::UpdateSentencePair { pair_id, .. } => {
            format!("sentence update was not saved for pair {pair_id}: {message}")
        }
        GatewayRequest::ResetAllLinks => format!("global reset failed: {message}"),
        GatewayRequest::FetchPair { pair_id } => {
            format!("could not load sentence pair {pair_id}: {message}")
        }
        GatewayRequest::ListPairs => format!("could not list sentence pairs: {message}"),
    };
    state.sync_warning = Some(warning);
    (true, vec![])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::{dispatch, JsonGateway, PersistenceGateway};
    use std::collections::VecDeque;

    fn seeded() -> (tempfile::TempDir, JsonGateway) {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut gateway = JsonGateway::new(dir.path().join("corpus.json")).expect("gateway");
        gateway
            .add_pair("en", "fr", "the cat sat", "le chat assis")
            .expect("pair");
        gateway
            .add_pair("en", "fr", "a small dog", "un petit chien")
            .expect("pair");
        (dir, gateway)
    }

    /// Drives the event loop to quiescence: executes every emitted gateway
    /// request in order and feeds each response back into the handler.
    fn pump(state: &mut AppState, gateway: &mut JsonGateway, actions: Vec<Action>) {
        let mut queue: VecDeque<Action> = actions.into();
        while let Some(Action::CallGateway(request)) = queue.pop_front() {
            let response = dispatch(gateway, request);
            let (_render, next) =
                handle_event(state, &Event::GatewayResponse(response)).expect("reconcile");
            queue.extend(next);
        }
    }

    /// Boots a state the way a runtime would: list pairs, load the first.
    fn booted(gateway: &mut JsonGateway) -> AppState {
        let mut state = AppState::new();
        pump(
            &mut state,
            gateway,
            vec![Action::CallGateway(GatewayRequest::ListPairs)],
        );
        assert_eq!(state.session.current_pair_id(), Some(1));
        state
    }

    fn drag(
        state: &mut AppState,
        gateway: &mut JsonGateway,
        from: (Side, usize),
        to: (Side, usize),
    ) {
        let (_, actions) = handle_event(
            state,
            &Event::DragStarted {
                side: from.0,
                position: from.1,
            },
        )
        .expect("drag start");
        assert!(actions.is_empty());
        let (_, actions) = handle_event(
            state,
            &Event::DragDropped {
                side: to.0,
                position: to.1,
            },
        )
        .expect("drag drop");
        pump(state, gateway, actions);
    }

    #[test]
    fn drag_toggle_creates_then_removes_the_link() {
        let (_dir, mut gateway) = seeded();
        let mut state = booted(&mut gateway);

        drag(&mut state, &mut gateway, (Side::Source, 0), (Side::Target, 0));
        assert_eq!(state.store.len(), 1);
        let link = &state.store.links()[0];
        assert_eq!(link.source_positions, vec![0]);
        assert_eq!(link.target_positions, vec![0]);
        assert!(link.id.is_some(), "create must confirm the pending id");
        assert_eq!(gateway.fetch_pair(1).expect("fetch").links.len(), 1);

        // The identical gesture removes the link again.
        drag(&mut state, &mut gateway, (Side::Source, 0), (Side::Target, 0));
        assert!(state.store.is_empty());
        assert!(gateway.fetch_pair(1).expect("fetch").links.is_empty());
    }

    #[test]
    fn dropping_on_the_same_side_is_a_no_op() {
        let (_dir, mut gateway) = seeded();
        let mut state = booted(&mut gateway);

        drag(&mut state, &mut gateway, (Side::Source, 0), (Side::Source, 2));
        assert!(state.store.is_empty());
        assert!(state.drag.is_none(), "payload is dropped either way");
    }

    #[test]
    fn dragging_from_the_target_side_still_orients_the_link() {
        let (_dir, mut gateway) = seeded();
        let mut state = booted(&mut gateway);

        drag(&mut state, &mut gateway, (Side::Target, 2), (Side::Source, 1));
        let link = &state.store.links()[0];
        assert_eq!(link.source_positions, vec![1]);
        assert_eq!(link.target_positions, vec![2]);
    }

    #[test]
    fn select_mode_links_on_the_second_click_and_resets() {
        let (_dir, mut gateway) = seeded();
        let mut state = booted(&mut gateway);
        handle_event(&mut state, &Event::SwitchMode(InteractionMode::Select)).expect("switch");

        let (_, actions) = handle_event(
            &mut state,
            &Event::TokenClicked {
                side: Side::Source,
                position: 1,
            },
        )
        .expect("click source");
        assert!(actions.is_empty());
        assert_eq!(state.selection, Selection::Source(1));

        let (_, actions) = handle_event(
            &mut state,
            &Event::TokenClicked {
                side: Side::Target,
                position: 2,
            },
        )
        .expect("click target");
        pump(&mut state, &mut gateway, actions);

        assert_eq!(state.selection, Selection::None, "both selections reset");
        assert_eq!(state.store.len(), 1);
        assert_eq!(state.store.links()[0].source_positions, vec![1]);
        assert_eq!(state.store.links()[0].target_positions, vec![2]);
    }

    #[test]
    fn clicking_the_picked_token_again_deselects_it() {
        let (_dir, mut gateway) = seeded();
        let mut state = booted(&mut gateway);
        handle_event(&mut state, &Event::SwitchMode(InteractionMode::Select)).expect("switch");

        let click = Event::TokenClicked {
            side: Side::Target,
            position: 0,
        };
        handle_event(&mut state, &click).expect("pick");
        assert_eq!(state.selection, Selection::Target(0));
        handle_event(&mut state, &click).expect("unpick");
        assert_eq!(state.selection, Selection::None);
    }

    #[test]
    fn switching_modes_clears_the_selection() {
        let (_dir, mut gateway) = seeded();
        let mut state = booted(&mut gateway);
        handle_event(&mut state, &Event::SwitchMode(InteractionMode::Select)).expect("switch");
        handle_event(
            &mut state,
            &Event::TokenClicked {
                side: Side::Source,
                position: 0,
            },
        )
        .expect("pick");

        handle_event(&mut state, &Event::SwitchMode(InteractionMode::Drag)).expect("switch back");
        assert_eq!(state.selection, Selection::None);
    }

    #[test]
    fn select_gesture_toggles_an_existing_link_off() {
        let (_dir, mut gateway) = seeded();
        let mut state = booted(&mut gateway);
        drag(&mut state, &mut gateway, (Side::Source, 0), (Side::Target, 0));
        assert_eq!(state.store.len(), 1);

        handle_event(&mut state, &Event::SwitchMode(InteractionMode::Select)).expect("switch");
        for (side, position) in [(Side::Source, 0), (Side::Target, 0)] {
            let (_, actions) =
                handle_event(&mut state, &Event::TokenClicked { side, position }).expect("click");
            pump(&mut state, &mut gateway, actions);
        }
        assert!(state.store.is_empty());
        assert!(gateway.fetch_pair(1).expect("fetch").links.is_empty());
    }

    #[test]
    fn reset_all_empties_every_pair_after_confirmation() {
        let (_dir, mut gateway) = seeded();
        let mut state = booted(&mut gateway);

        // Five links across the two pairs, seeded behind the engine's back.
        for (pair, s, t) in [(1, 0, 0), (1, 1, 1), (1, 2, 2), (2, 0, 0), (2, 1, 1)] {
            gateway
                .create_link(&AlignmentLink::single(pair, s, t))
                .expect("seed link");
        }

        let (_, actions) = handle_event(&mut state, &Event::ResetAllRequested).expect("request");
        assert!(actions.is_empty(), "nothing happens before confirmation");
        assert!(state.pending_confirmation.is_some());

        let (_, actions) = handle_event(&mut state, &Event::ConfirmationAccepted).expect("confirm");
        pump(&mut state, &mut gateway, actions);

        assert!(state.store.is_empty());
        assert!(state.pending_confirmation.is_none());
        assert!(gateway.fetch_pair(1).expect("fetch").links.is_empty());
        assert!(gateway.fetch_pair(2).expect("fetch").links.is_empty());
    }

    #[test]
    fn cancelling_a_confirmation_changes_nothing() {
        let (_dir, mut gateway) = seeded();
        let mut state = booted(&mut gateway);
        drag(&mut state, &mut gateway, (Side::Source, 0), (Side::Target, 0));

        handle_event(&mut state, &Event::ClearCurrentRequested).expect("request");
        handle_event(&mut state, &Event::ConfirmationCancelled).expect("cancel");
        assert!(state.pending_confirmation.is_none());
        assert_eq!(state.store.len(), 1);
    }

    #[test]
    fn clear_current_deletes_only_the_loaded_pairs_links() {
        let (_dir, mut gateway) = seeded();
        let mut state = booted(&mut gateway);
        drag(&mut state, &mut gateway, (Side::Source, 0), (Side::Target, 0));
        drag(&mut state, &mut gateway, (Side::Source, 1), (Side::Target, 1));
        gateway
            .create_link(&AlignmentLink::single(2, 0, 0))
            .expect("other pair link");

        handle_event(&mut state, &Event::ClearCurrentRequested).expect("request");
        let (_, actions) = handle_event(&mut state, &Event::ConfirmationAccepted).expect("confirm");
        assert_eq!(actions.len(), 2, "one sequential delete per confirmed link");
        pump(&mut state, &mut gateway, actions);

        assert!(state.store.is_empty());
        assert!(gateway.fetch_pair(1).expect("fetch").links.is_empty());
        assert_eq!(gateway.fetch_pair(2).expect("fetch").links.len(), 1);
    }

    #[test]
    fn navigation_clamps_and_loads_the_next_pair() {
        let (_dir, mut gateway) = seeded();
        let mut state = booted(&mut gateway);

        let (_, actions) = handle_event(&mut state, &Event::LoadPrevious).expect("prev");
        assert!(actions.is_empty(), "already at the first pair");

        let (_, actions) = handle_event(&mut state, &Event::LoadNext).expect("next");
        pump(&mut state, &mut gateway, actions);
        assert_eq!(state.session.current().map(|p| p.id), Some(2));
        assert_eq!(state.store.pair_id(), Some(2));

        let (_, actions) = handle_event(&mut state, &Event::LoadNext).expect("next at end");
        assert!(actions.is_empty(), "no wraparound past the end");
    }

    #[test]
    fn editing_freezes_navigation_and_gestures() {
        let (_dir, mut gateway) = seeded();
        let mut state = booted(&mut gateway);
        handle_event(&mut state, &Event::EditStarted).expect("edit");

        let (_, actions) = handle_event(&mut state, &Event::LoadNext).expect("nav");
        assert!(actions.is_empty());
        let (render, _) = handle_event(
            &mut state,
            &Event::DragStarted {
                side: Side::Source,
                position: 0,
            },
        )
        .expect("drag");
        assert!(!render);
        assert!(state.drag.is_none());
    }

    #[test]
    fn saving_an_edit_discards_the_alignment_set_everywhere() {
        let (_dir, mut gateway) = seeded();
        let mut state = booted(&mut gateway);
        drag(&mut state, &mut gateway, (Side::Source, 0), (Side::Target, 0));
        drag(&mut state, &mut gateway, (Side::Source, 2), (Side::Target, 2));

        handle_event(&mut state, &Event::EditStarted).expect("edit");
        let (_, actions) = handle_event(
            &mut state,
            &Event::EditSaved {
                source_sentence: "a cat sat down".into(),
                target_sentence: "un chat s'est assis".into(),
            },
        )
        .expect("save");
        pump(&mut state, &mut gateway, actions);

        assert!(!state.session.is_editing());
        assert!(state.store.is_empty());
        let current = state.session.current().expect("current");
        assert_eq!(current.source_sentence, "a cat sat down");
        assert!(gateway.fetch_pair(1).expect("fetch").links.is_empty());
        // The pair list was refreshed with the new text.
        assert_eq!(state.session.pairs()[0].source_sentence, "a cat sat down");
    }

    #[test]
    fn blank_edit_is_rejected_and_edit_mode_stays_active() {
        let (_dir, mut gateway) = seeded();
        let mut state = booted(&mut gateway);
        handle_event(&mut state, &Event::EditStarted).expect("edit");

        let (_, actions) = handle_event(
            &mut state,
            &Event::EditSaved {
                source_sentence: "   ".into(),
                target_sentence: "ok".into(),
            },
        )
        .expect("save");
        assert!(actions.is_empty());
        assert!(state.session.is_editing());
        assert!(state.edit_error.is_some());
    }

    #[test]
    fn failed_create_rolls_back_the_optimistic_insert() {
        let (_dir, mut gateway) = seeded();
        let mut state = booted(&mut gateway);

        handle_event(
            &mut state,
            &Event::DragStarted {
                side: Side::Source,
                position: 0,
            },
        )
        .expect("start");
        let (_, actions) = handle_event(
            &mut state,
            &Event::DragDropped {
                side: Side::Target,
                position: 0,
            },
        )
        .expect("drop");
        assert_eq!(state.store.len(), 1, "optimistic insert is immediate");

        // Simulate the transport rejecting the create instead of pumping it.
        let Action::CallGateway(request) = actions.into_iter().next().expect("create request");
        let (_, follow_up) = handle_event(
            &mut state,
            &Event::GatewayResponse(GatewayResponse::Failed {
                request,
                message: "connection reset".into(),
            }),
        )
        .expect("failure");
        assert!(follow_up.is_empty());
        assert!(state.store.is_empty(), "pending link rolled back");
        assert!(state.sync_warning.is_some());

        let (_, _) = handle_event(&mut state, &Event::WarningDismissed).expect("dismiss");
        assert!(state.sync_warning.is_none());
    }

    #[test]
    fn failed_delete_leaves_the_local_removal_in_place() {
        let (_dir, mut gateway) = seeded();
        let mut state = booted(&mut gateway);
        drag(&mut state, &mut gateway, (Side::Source, 0), (Side::Target, 0));

        // Remove locally, then fail the delete instead of dispatching it.
        handle_event(
            &mut state,
            &Event::DragStarted {
                side: Side::Source,
                position: 0,
            },
        )
        .expect("start");
        let (_, actions) = handle_event(
            &mut state,
            &Event::DragDropped {
                side: Side::Target,
                position: 0,
            },
        )
        .expect("drop");
        let Action::CallGateway(request) = actions.into_iter().next().expect("delete request");

        handle_event(
            &mut state,
            &Event::GatewayResponse(GatewayResponse::Failed {
                request,
                message: "timeout".into(),
            }),
        )
        .expect("failure");
        assert!(state.store.is_empty(), "no resurrection on delete failure");
        assert!(state.sync_warning.is_some());
    }

    #[test]
    fn toggling_off_an_in_flight_create_compensates_remotely() {
        let (_dir, mut gateway) = seeded();
        let mut state = booted(&mut gateway);

        // First gesture: pending link, create not yet dispatched.
        handle_event(
            &mut state,
            &Event::DragStarted {
                side: Side::Source,
                position: 0,
            },
        )
        .expect("start");
        let (_, create_actions) = handle_event(
            &mut state,
            &Event::DragDropped {
                side: Side::Target,
                position: 0,
            },
        )
        .expect("drop");

        // Second gesture before the response: removes the pending link
        // locally and issues nothing.
        handle_event(
            &mut state,
            &Event::DragStarted {
                side: Side::Source,
                position: 0,
            },
        )
        .expect("start again");
        let (_, actions) = handle_event(
            &mut state,
            &Event::DragDropped {
                side: Side::Target,
                position: 0,
            },
        )
        .expect("drop again");
        assert!(actions.is_empty());
        assert!(state.store.is_empty());

        // The slow create now resolves; its confirmation finds no pending
        // link and is compensated with a delete.
        pump(&mut state, &mut gateway, create_actions);
        assert!(state.store.is_empty());
        assert!(gateway.fetch_pair(1).expect("fetch").links.is_empty());
    }

    #[test]
    fn stale_pair_fetch_is_discarded_by_the_handler() {
        let (_dir, mut gateway) = seeded();
        let mut state = booted(&mut gateway);
        drag(&mut state, &mut gateway, (Side::Source, 0), (Side::Target, 0));

        // A response for pair 2 arrives although pair 1 is current.
        let response = dispatch(&mut gateway, GatewayRequest::FetchPair { pair_id: 2 });
        let (render, actions) =
            handle_event(&mut state, &Event::GatewayResponse(response)).expect("stale");
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.session.current().map(|p| p.id), Some(1));
        assert_eq!(state.store.len(), 1, "local set untouched by stale response");
    }
}
