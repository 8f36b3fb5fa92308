use serde::{Deserialize, Serialize};

use super::defaults;

/// Observability subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub log_level: String,
    /// Emit JSON lines instead of the human-readable format.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::DEFAULT_LOG_LEVEL.to_string(),
            json: defaults::DEFAULT_JSON_LOGS,
        }
    }
}
