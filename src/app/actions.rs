//! Actions representing side effects to be executed by the hosting runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! keeping state transitions pure while queueing effects for the runtime to
//! perform. Persistence calls are the only effect the engine core emits:
//! rendering is driven by the returned render flag plus the view model, and
//! confirmation prompts live in state rather than in the effect queue.

use crate::gateway::GatewayRequest;

/// Commands emitted by the event handler for the runtime to execute.
///
/// The runtime executes actions in order. For gateway calls it runs
/// [`dispatch`](crate::gateway::dispatch) (or its remote equivalent) and
/// feeds the response back in as an
/// [`Event::GatewayResponse`](crate::app::Event::GatewayResponse); the handler
/// never waits for that to happen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Issues a persistence request, fire-and-reconcile.
    ///
    /// Ordering matters where the handler says it does: the sequential
    /// per-link deletes of a bulk clear must be issued in the order returned.
    CallGateway(GatewayRequest),
}
