use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::{MassConfig, NormalizationPolicy};
use crate::errors::MassError;
use crate::frame::{Frame, Subset};

use super::RawMass;

/// A basic probability assignment over the subsets of one frame.
///
/// Only focal elements (strictly positive mass) are stored. Every value is
/// immutable: combination, discounting and renormalization all build a new
/// `MassFunction`. The frame travels with the value (shared, not copied) so
/// operations can refuse to mix frames, including frames of equal size whose
/// labels differ or are ordered differently.
#[derive(Debug, Clone, PartialEq)]
pub struct MassFunction {
    frame: Arc<Frame>,
    focal: BTreeMap<Subset, f64>,
}

impl MassFunction {
    /// Total ignorance: all mass on Θ.
    pub fn vacuous(frame: &Frame) -> Self {
        let theta = frame.theta();
        Self {
            frame: Arc::new(frame.clone()),
            focal: BTreeMap::from([(theta, 1.0)]),
        }
    }

    /// All mass on `subset`, which must be non-empty and inside the frame.
    pub fn categorical(frame: &Frame, subset: Subset) -> Result<Self, MassError> {
        if subset.is_empty() {
            return Err(MassError::EmptySubsetMass { mass: 1.0 });
        }
        if !frame.contains(subset) {
            return Err(MassError::SubsetOutsideFrame {
                bits: subset.bits(),
            });
        }
        Ok(Self {
            frame: Arc::new(frame.clone()),
            focal: BTreeMap::from([(subset, 1.0)]),
        })
    }

    /// Validate raw, label-keyed input against `frame`.
    pub fn from_raw(frame: &Frame, raw: &RawMass, config: &MassConfig) -> Result<Self, MassError> {
        let entries = raw
            .iter()
            .map(|(key, &mass)| {
                if !mass.is_finite() {
                    return Err(MassError::NonFiniteMass { key: key.clone() });
                }
                if mass < 0.0 {
                    return Err(MassError::NegativeMass {
                        key: key.clone(),
                        mass,
                    });
                }
                Ok((frame.parse_key(key)?, mass))
            })
            .collect::<Result<Vec<_>, MassError>>()?;
        Self::from_entries(frame, entries, config)
    }

    /// Validate `(subset, mass)` pairs. Pairs naming the same subset merge and
    /// zero masses are dropped.
    pub fn from_entries<I>(frame: &Frame, entries: I, config: &MassConfig) -> Result<Self, MassError>
    where
        I: IntoIterator<Item = (Subset, f64)>,
    {
        let mut focal: BTreeMap<Subset, f64> = BTreeMap::new();

        for (subset, mass) in entries {
            if !mass.is_finite() {
                return Err(MassError::NonFiniteMass {
                    key: frame.key(subset),
                });
            }
            if mass < 0.0 {
                return Err(MassError::NegativeMass {
                    key: frame.key(subset),
                    mass,
                });
            }
            if !frame.contains(subset) {
                return Err(MassError::SubsetOutsideFrame {
                    bits: subset.bits(),
                });
            }
            if subset.is_empty() {
                if mass > 0.0 {
                    return Err(MassError::EmptySubsetMass { mass });
                }
                continue;
            }
            if mass > 0.0 {
                *focal.entry(subset).or_insert(0.0) += mass;
            }
        }

        let total: f64 = focal.values().sum();
        let deviation = (total - 1.0).abs();
        let frame = Arc::new(frame.clone());
        if deviation <= config.tolerance {
            return Ok(Self { frame, focal });
        }

        let correctable = config.normalization == NormalizationPolicy::Renormalize
            && total > 0.0
            && deviation <= config.renormalize_max_deviation;
        if !correctable {
            return Err(MassError::InvalidTotal {
                total,
                tolerance: config.tolerance,
            });
        }

        ::tracing::debug!(total, deviation, "renormalizing near-valid mass input");
        for mass in focal.values_mut() {
            *mass /= total;
        }
        Ok(Self { frame, focal })
    }

    /// Assemble from already-valid parts, dropping non-positive entries.
    ///
    /// Used by operators (combination, discounting) whose output satisfies the
    /// invariants by construction. No total check happens here.
    pub fn from_focal_unchecked(frame: Arc<Frame>, focal: BTreeMap<Subset, f64>) -> Self {
        let focal = focal
            .into_iter()
            .filter(|(subset, mass)| !subset.is_empty() && *mass > 0.0)
            .collect();
        Self { frame, focal }
    }

    /// The frame this function is defined over.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Shared handle to the frame, for building derived functions.
    pub fn shared_frame(&self) -> &Arc<Frame> {
        &self.frame
    }

    /// True when both functions are defined over the same labels in the same order.
    pub fn same_frame(&self, other: &MassFunction) -> bool {
        Arc::ptr_eq(&self.frame, &other.frame) || self.frame == other.frame
    }

    /// Θ of the frame this function is defined over.
    pub fn theta(&self) -> Subset {
        self.frame.theta()
    }

    /// Mass of `subset`; zero when it is not a focal element.
    pub fn get(&self, subset: Subset) -> f64 {
        self.focal.get(&subset).copied().unwrap_or(0.0)
    }

    /// Focal elements in ascending mask order.
    pub fn focal_elements(&self) -> impl Iterator<Item = (Subset, f64)> + '_ {
        self.focal.iter().map(|(&subset, &mass)| (subset, mass))
    }

    /// Number of focal elements.
    pub fn len(&self) -> usize {
        self.focal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.focal.is_empty()
    }

    /// Sum of all masses (1 for a valid function, up to rounding).
    pub fn total(&self) -> f64 {
        self.focal.values().sum()
    }

    /// True when all mass sits on Θ.
    pub fn is_vacuous(&self) -> bool {
        self.focal.len() == 1 && (self.get(self.theta()) - 1.0).abs() <= f64::EPSILON
    }

    /// Key-wise equality within `tolerance`. A key absent on one side counts as 0.
    pub fn approx_eq(&self, other: &MassFunction, tolerance: f64) -> bool {
        self.same_frame(other)
            && self
                .focal
                .keys()
                .chain(other.focal.keys())
                .all(|&subset| (self.get(subset) - other.get(subset)).abs() <= tolerance)
    }

    /// Check every mass function invariant against `tolerance`.
    pub fn check_invariants(&self, tolerance: f64) -> Result<(), MassError> {
        for (&subset, &mass) in &self.focal {
            if subset.is_empty() {
                return Err(MassError::EmptySubsetMass { mass });
            }
            if !self.frame.contains(subset) {
                return Err(MassError::SubsetOutsideFrame {
                    bits: subset.bits(),
                });
            }
            if !mass.is_finite() {
                return Err(MassError::NonFiniteMass {
                    key: self.frame.key(subset),
                });
            }
            if mass < 0.0 {
                return Err(MassError::NegativeMass {
                    key: self.frame.key(subset),
                    mass,
                });
            }
        }
        let total = self.total();
        if (total - 1.0).abs() > tolerance {
            return Err(MassError::InvalidTotal { total, tolerance });
        }
        Ok(())
    }

    /// Canonical label-keyed view for serialization and display.
    pub fn to_raw(&self) -> RawMass {
        self.focal
            .iter()
            .map(|(&subset, &mass)| (self.frame.key(subset), mass))
            .collect()
    }
}
