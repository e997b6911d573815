//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::TracingConfig;
use crate::constants::LOG_ENV_VAR;

/// Install a global `fmt` subscriber.
///
/// `VMGEN_LOG` takes precedence over `config.filter`. Returns `false` if a
/// global subscriber was already installed (the call is then a no-op).
pub fn init_tracing(config: &TracingConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(config.effective_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.effective_with_target())
        .try_init()
        .is_ok()
}
