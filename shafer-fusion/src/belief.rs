//! Belief and plausibility.
//!
//! - `Bel(T) = Σ m(B)` over focal `B ⊆ T`: support committed to `T`.
//! - `Pl(T)  = Σ m(B)` over focal `B ∩ T ≠ ∅`: support not against `T`.
//!
//! `Bel(T) ≤ Pl(T)` holds by construction since every `B ⊆ T` also meets `T`
//! (for non-empty `B`).

use serde::{Deserialize, Serialize};

use shafer_core::{Frame, MassFunction, Subset};

/// `[Bel, Pl]` for one atomic hypothesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeliefInterval {
    pub hypothesis: String,
    pub belief: f64,
    pub plausibility: f64,
}

impl BeliefInterval {
    /// Width of the interval: mass that neither supports nor refutes the hypothesis.
    pub fn uncertainty(&self) -> f64 {
        self.plausibility - self.belief
    }
}

/// Total mass of focal elements contained in `target`.
pub fn belief(mass: &MassFunction, target: Subset) -> f64 {
    mass.focal_elements()
        .filter(|(subset, _)| subset.is_subset_of(target))
        .map(|(_, m)| m)
        .sum()
}

/// Total mass of focal elements that intersect `target`.
pub fn plausibility(mass: &MassFunction, target: Subset) -> f64 {
    mass.focal_elements()
        .filter(|(subset, _)| subset.intersects(target))
        .map(|(_, m)| m)
        .sum()
}

/// Bel and Pl of every atomic hypothesis, in frame order.
pub fn belief_plausibility(mass: &MassFunction, frame: &Frame) -> Vec<BeliefInterval> {
    frame
        .labels()
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let target = Subset::singleton(i);
            BeliefInterval {
                hypothesis: label.clone(),
                belief: belief(mass, target),
                plausibility: plausibility(mass, target),
            }
        })
        .collect()
}
