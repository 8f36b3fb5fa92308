use serde::{Deserialize, Serialize};

use super::defaults;

/// Upper bounds (exclusive) of the Low, Moderate and High conflict bands.
/// Anything at or above `high` is Very High.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConflictThresholds {
    pub low: f64,
    pub moderate: f64,
    pub high: f64,
}

impl Default for ConflictThresholds {
    fn default() -> Self {
        Self {
            low: defaults::DEFAULT_CONFLICT_LOW,
            moderate: defaults::DEFAULT_CONFLICT_MODERATE,
            high: defaults::DEFAULT_CONFLICT_HIGH,
        }
    }
}

/// Fusion subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionConfig {
    /// Reliability used for sources that do not state one.
    pub default_reliability: f64,
    /// Conflict classification bands.
    pub conflict_thresholds: ConflictThresholds,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            default_reliability: defaults::DEFAULT_RELIABILITY,
            conflict_thresholds: ConflictThresholds::default(),
        }
    }
}
