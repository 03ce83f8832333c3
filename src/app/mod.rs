//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! hosting runtime and the domain/store/gateway layers. It implements the
//! event-driven architecture that powers the interactive annotator.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Gateway Calls
//!                           ↑                                  ↓
//!                           └────── Gateway Responses ─────────┘
//! ```
//!
//! State always mutates before the matching gateway request is emitted, so the
//! UI reflects every gesture immediately and responses only ever confirm,
//! compensate, or warn.
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and reconciliation
//! - [`modes`]: Gesture mode state machine types
//! - [`session`]: Sentence pair lifecycle (navigation, editing)
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod session;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{BulkOperation, DragPayload, InteractionMode, Selection};
pub use session::SentencePairSession;
pub use state::AppState;
