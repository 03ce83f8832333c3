//! Lexalign: an interactive word-alignment annotation engine for bilingual
//! sentence pairs.
//!
//! Lexalign drives a manual alignment tool: an annotator looks at a sentence
//! and its translation, both split into position-indexed tokens, and links
//! words across the two. The crate provides:
//! - A gesture state machine with two linking modes (drag-and-drop, click
//!   selection), both resolving to one create-or-remove toggle
//! - An optimistic alignment store that mutates before persistence confirms
//! - A fire-and-reconcile persistence gateway with explicit rollback and
//!   compensation rules
//! - Sentence pair navigation and editing, where editing a sentence discards
//!   its alignment set
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Hosting Runtime (event loop, rendering)            │  ← Outside this crate
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling and reconciliation                │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Store Layer   │   │ Gateway Layer │
//! │ (ui/)         │   │ (store/)      │   │ (gateway/)    │
//! │ - View models │   │ - Alignment   │   │ - Contract    │
//! │               │   │   set         │   │ - Messages    │
//! │               │   │ - Key lookup  │   │ - JSON backend│
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Sentence pairs, links, tokens                    │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (pairs, links, tokens, errors)
//! - [`store`]: In-memory alignment set of the loaded pair
//! - [`gateway`]: Persistence contract, wire messages, JSON file backend
//! - [`ui`]: Render-ready view model types
//! - [`observability`]: Tracing setup
//!
//! # Event Loop Contract
//!
//! The hosting runtime owns the loop. Per iteration it feeds one [`Event`]
//! into [`handle_event`], executes the returned [`Action`]s (each a gateway
//! request), and feeds every response back in as
//! [`Event::GatewayResponse`]. Handling is synchronous and never blocks on
//! I/O; waiting happens between iterations, in the runtime.
//!
//! # Examples
//!
//! ```rust
//! use lexalign::{handle_event, initialize, Action, Config, Event, InteractionMode};
//!
//! let config = Config::default();
//! let (mut state, startup_actions) = initialize(&config);
//!
//! // Execute startup_actions against a gateway, feed responses back in...
//!
//! let (render, actions) =
//!     handle_event(&mut state, &Event::SwitchMode(InteractionMode::Select))?;
//! assert!(actions.is_empty());
//! # let _ = (render, startup_actions.len());
//! # Ok::<(), lexalign::LexalignError>(())
//! ```

pub mod app;
pub mod domain;
pub mod gateway;
pub mod store;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InteractionMode, SentencePairSession};
pub use domain::{AlignmentLink, LexalignError, LinkKey, Result, SentencePair, Side};
pub use gateway::{GatewayRequest, GatewayResponse, JsonGateway, PersistenceGateway};
pub use store::AlignmentStore;
pub use ui::UiViewModel;

use std::collections::BTreeMap;

/// Engine configuration supplied by the hosting runtime.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Tracing level directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter`
    /// directive string. Default: `"info"` (or `RUST_LOG` if set).
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// Hosting runtimes typically hand configuration over as a flat
    /// `BTreeMap<String, String>`; unknown keys are ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use lexalign::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("trace_level".to_string(), "debug".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.trace_level.as_deref(), Some("debug"));
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        Self {
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Initializes the engine.
///
/// Sets up tracing, creates a fresh [`AppState`], and returns the startup
/// actions: a pair list request whose response makes the handler fetch and
/// load the first pair.
///
/// # Example
///
/// ```rust
/// use lexalign::{initialize, Config};
///
/// let (state, actions) = initialize(&Config::default());
/// assert_eq!(actions.len(), 1);
/// assert!(state.session.current().is_none());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> (AppState, Vec<Action>) {
    observability::init_tracing(config);
    tracing::debug!("initializing alignment engine");

    let state = AppState::new();
    let actions = vec![Action::CallGateway(GatewayRequest::ListPairs)];
    (state, actions)
}
