//! Conflict classification.

use std::fmt;

use serde::{Deserialize, Serialize};

use shafer_core::config::ConflictThresholds;

/// Qualitative band for a conflict scalar K.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl ConflictLevel {
    /// Place `k` into a band. Bounds are exclusive upper limits.
    pub fn classify(k: f64, thresholds: &ConflictThresholds) -> Self {
        if k < thresholds.low {
            Self::Low
        } else if k < thresholds.moderate {
            Self::Moderate
        } else if k < thresholds.high {
            Self::High
        } else {
            Self::VeryHigh
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for ConflictLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
