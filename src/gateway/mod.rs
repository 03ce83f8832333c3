//! Persistence gateway layer.
//!
//! The engine core never blocks on persistence. It emits [`GatewayRequest`]
//! values from the event handler, a hosting runtime executes them against a
//! [`PersistenceGateway`] backend via [`dispatch`], and the resulting
//! [`GatewayResponse`] is fed back into the handler as an ordinary event.
//! Local state is mutated optimistically before the request is issued, so
//! responses only confirm pending ids, roll back failed creates, or get
//! discarded as stale.
//!
//! # Organization
//!
//! - [`contract`]: the backend trait and fetch result shape
//! - [`messages`]: serializable request/response enums
//! - [`dispatch`]: request execution with uniform failure folding
//! - [`json`]: the JSON file reference backend

pub mod contract;
pub mod dispatch;
pub mod json;
pub mod messages;

pub use contract::{PairWithLinks, PersistenceGateway};
pub use dispatch::dispatch;
pub use json::JsonGateway;
pub use messages::{GatewayRequest, GatewayResponse};
