use serde::{Deserialize, Serialize};

use super::defaults;

/// What validation does with a total that misses 1 by more than the tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationPolicy {
    /// Any total outside the tolerance is an error.
    #[default]
    Reject,
    /// Totals within `renormalize_max_deviation` of 1 are rescaled to 1.
    Renormalize,
}

impl NormalizationPolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Some(Self::Reject),
            "renormalize" | "renormalise" => Some(Self::Renormalize),
            _ => None,
        }
    }
}

/// Mass function validation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MassConfig {
    /// Allowed absolute deviation of the total from 1.
    pub tolerance: f64,
    /// Policy for totals outside `tolerance`.
    pub normalization: NormalizationPolicy,
    /// Largest deviation `Renormalize` will still correct.
    pub renormalize_max_deviation: f64,
}

impl Default for MassConfig {
    fn default() -> Self {
        Self {
            tolerance: defaults::DEFAULT_MASS_TOLERANCE,
            normalization: NormalizationPolicy::default(),
            renormalize_max_deviation: defaults::DEFAULT_RENORMALIZE_MAX_DEVIATION,
        }
    }
}

impl MassConfig {
    /// Strict validation with the given tolerance.
    pub fn strict(tolerance: f64) -> Self {
        Self {
            tolerance,
            normalization: NormalizationPolicy::Reject,
            ..Self::default()
        }
    }

    /// Renormalizing validation accepting totals up to `max_deviation` from 1.
    pub fn renormalizing(max_deviation: f64) -> Self {
        Self {
            normalization: NormalizationPolicy::Renormalize,
            renormalize_max_deviation: max_deviation,
            ..Self::default()
        }
    }
}
