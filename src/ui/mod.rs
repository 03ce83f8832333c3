//! Presentation-facing layer.
//!
//! Rendering is outside this crate's scope; what lives here are the view
//! model types the renderer consumes, computed on demand by
//! [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel).

pub mod viewmodel;

pub use viewmodel::{AlignmentRow, PairOption, TokenView, UiViewModel, PALETTE_SIZE};
