use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::FULL_TRUST_THRESHOLD;

/// Source reliability clamped to [0.0, 1.0].
/// 1.0 trusts the source fully, 0.0 ignores it entirely.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Reliability(f64);

impl Reliability {
    /// Create a new Reliability, clamping to [0.0, 1.0]. NaN maps to 0.0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self(0.0)
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    /// Full trust; discounting by it is the identity.
    pub fn full() -> Self {
        Self(1.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// True when the source is attenuated enough to be reported as discounted.
    pub fn is_discounting(self) -> bool {
        self.0 < FULL_TRUST_THRESHOLD
    }
}

impl Default for Reliability {
    fn default() -> Self {
        Self::full()
    }
}

impl fmt::Display for Reliability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.0 * 100.0)
    }
}

impl From<f64> for Reliability {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Reliability> for f64 {
    fn from(r: Reliability) -> Self {
        r.0
    }
}
