//! Tracing initialization and subscriber setup.
//!
//! Configures the tracing subscriber that carries the engine's structured
//! span and event output to stderr.

use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber.
///
/// # Trace Level Resolution
///
/// Level is determined by:
/// 1. `config.trace_level` if set
/// 2. The `RUST_LOG` environment variable
/// 3. Default: `"info"`
///
/// # Initialization Behavior
///
/// - Writes human-readable output to stderr
/// - Idempotent: safe to call multiple times (only the first call takes
///   effect, later ones are ignored)
///
/// # Example
///
/// ```rust
/// use lexalign::observability::init_tracing;
/// use lexalign::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let filter = match &config.trace_level {
        Some(level) => EnvFilter::new(level.clone()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let _ = subscriber.try_init();
}
