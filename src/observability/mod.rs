//! Observability infrastructure.
//!
//! Structured tracing for the event handler and gateway dispatch paths. The
//! handler opens a debug span per event and the dispatcher per request, so a
//! trace of a session reads as the exact sequence of gestures and the
//! persistence traffic each one produced.

pub mod init;

pub use init::init_tracing;
