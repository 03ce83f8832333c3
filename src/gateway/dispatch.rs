//! Request execution against a gateway backend.
//!
//! This is the runtime side of the message loop: the engine emits
//! [`GatewayRequest`] values, and the hosting runtime calls [`dispatch`] to
//! execute each one against whatever [`PersistenceGateway`] backend it owns,
//! then feeds the returned [`GatewayResponse`] back into the event handler.
//! Failures never escape as errors — they become
//! [`GatewayResponse::Failed`] so the handler can reconcile.

use crate::domain::error::Result;
use crate::gateway::contract::PersistenceGateway;
use crate::gateway::messages::{GatewayRequest, GatewayResponse};

/// Converts an operation result into a response with consistent logging.
///
/// Standardizes success/failure handling across all gateway operations: errors
/// are folded into [`GatewayResponse::Failed`] carrying the originating
/// request, which is everything reconciliation needs.
fn respond<T, F>(
    operation: &str,
    request: &GatewayRequest,
    result: Result<T>,
    on_success: F,
) -> GatewayResponse
where
    F: FnOnce(T) -> GatewayResponse,
{
    match result {
        Ok(value) => {
            tracing::debug!(operation, "gateway operation successful");
            on_success(value)
        }
        Err(e) => {
            tracing::debug!(operation, error = %e, "gateway operation failed");
            GatewayResponse::Failed {
                request: request.clone(),
                message: format!("{operation}: {e}"),
            }
        }
    }
}

/// Executes a single request against the given backend.
///
/// The returned response must be delivered back to the event handler as an
/// [`Event::GatewayResponse`](crate::app::Event::GatewayResponse); delivery
/// order relative to other responses does not matter, reconciliation matches
/// on link keys and pair ids rather than on issue order.
pub fn dispatch(gateway: &mut dyn PersistenceGateway, request: GatewayRequest) -> GatewayResponse {
    let span = tracing::debug_span!("gateway_dispatch", request_type = ?request);
    let _guard = span.entered();

    match &request {
        GatewayRequest::ListPairs => respond("list pairs", &request, gateway.list_pairs(), |pairs| {
            GatewayResponse::PairsListed { pairs }
        }),

        GatewayRequest::FetchPair { pair_id } => respond(
            "fetch pair",
            &request,
            gateway.fetch_pair(*pair_id),
            |fetched| GatewayResponse::PairFetched {
                pair: fetched.pair,
                links: fetched.links,
            },
        ),

        GatewayRequest::CreateLink { link } => respond(
            "create link",
            &request,
            gateway.create_link(link),
            |link| GatewayResponse::LinkCreated { link },
        ),

        GatewayRequest::DeleteLink { id } => {
            let id = *id;
            respond("delete link", &request, gateway.delete_link(id), |()| {
                GatewayResponse::LinkDeleted { id }
            })
        }

        GatewayRequest::UpdateSentencePair {
            pair_id,
            source_sentence,
            target_sentence,
        } => respond(
            "update sentence pair",
            &request,
            gateway.update_pair(*pair_id, source_sentence, target_sentence),
            |pair| GatewayResponse::PairUpdated { pair },
        ),

        GatewayRequest::ResetAllLinks => respond(
            "reset all links",
            &request,
            gateway.reset_all_links(),
            |()| GatewayResponse::AllLinksReset,
        ),
    }
}
