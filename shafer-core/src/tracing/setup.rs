//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

/// Environment variable holding an `EnvFilter` directive string.
pub const LOG_ENV_VAR: &str = "SHAFER_LOG";

static INIT: Once = Once::new();

/// Initialize the Shafer tracing/logging system.
///
/// Reads `SHAFER_LOG` for per-crate log levels, e.g.
/// `SHAFER_LOG=shafer_fusion=debug,shafer_core=warn`.
/// Falls back to `shafer=info` if `SHAFER_LOG` is not set or is invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("shafer=info"));

        // A host application may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .try_init();
    });
}

/// Initialize tracing from an [`ObservabilityConfig`].
///
/// `SHAFER_LOG` still wins over `config.log_level` when set. Shares the
/// once-guard with [`init_tracing`].
pub fn init_tracing_with_config(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

        let registry = tracing_subscriber::registry().with(filter);
        let _ = if config.json {
            registry
                .with(fmt::layer().json().with_target(true))
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_line_number(true))
                .try_init()
        };
    });
}
