//! Dempster's rule of combination.
//!
//! ```text
//! K        = Σ m1(a)·m2(b)            over a ∩ b = ∅
//! m(C)     = Σ m1(a)·m2(b) / (1 − K)  over a ∩ b = C ≠ ∅
//! ```
//!
//! Cost is `|focal(m1)| × |focal(m2)|` products; frames are small, so there is
//! no attempt to go below that.

use std::collections::BTreeMap;

use shafer_core::constants::TOTAL_CONFLICT_EPSILON;
use shafer_core::errors::FusionError;
use shafer_core::{MassFunction, Subset};

/// Output of one pairwise combination.
#[derive(Debug, Clone, PartialEq)]
pub struct Combination {
    /// The normalized combined mass function.
    pub combined: MassFunction,
    /// Mass that fell on disjoint focal pairs, in [0, 1).
    pub conflict: f64,
}

/// Combine two mass functions over the same frame.
///
/// Fails with [`FusionError::TotalConflict`] when no pair of focal elements
/// intersects (K = 1), and with [`FusionError::FrameMismatch`] when the inputs
/// belong to different frames. Frames differ when their labels differ in
/// content or order, even at equal size.
///
/// # Examples
///
/// ```
/// use shafer_core::config::MassConfig;
/// use shafer_core::{Frame, MassFunction, RawMass};
/// use shafer_fusion::combine;
///
/// let frame = Frame::new(["A", "B"]).unwrap();
/// let cfg = MassConfig::default();
/// let m1 = MassFunction::from_raw(&frame, &RawMass::from([("A".into(), 0.6), ("B".into(), 0.2), ("A,B".into(), 0.2)]), &cfg).unwrap();
/// let m2 = MassFunction::from_raw(&frame, &RawMass::from([("A".into(), 0.5), ("B".into(), 0.3), ("A,B".into(), 0.2)]), &cfg).unwrap();
///
/// let result = combine(&m1, &m2).unwrap();
/// assert!((result.conflict - 0.28).abs() < 1e-9);
/// assert!((result.combined.get(frame.singleton("A").unwrap()) - 0.52 / 0.72).abs() < 1e-9);
/// ```
pub fn combine(m1: &MassFunction, m2: &MassFunction) -> Result<Combination, FusionError> {
    if !m1.same_frame(m2) {
        return Err(FusionError::FrameMismatch {
            left: m1.frame().labels().to_vec(),
            right: m2.frame().labels().to_vec(),
        });
    }

    let mut conflict = 0.0;
    let mut unnormalized: BTreeMap<Subset, f64> = BTreeMap::new();

    for (a, ma) in m1.focal_elements() {
        for (b, mb) in m2.focal_elements() {
            let product = ma * mb;
            let cap = a.intersect(b);
            if cap.is_empty() {
                conflict += product;
            } else {
                *unnormalized.entry(cap).or_insert(0.0) += product;
            }
        }
    }

    let norm = 1.0 - conflict;
    if norm <= TOTAL_CONFLICT_EPSILON {
        return Err(FusionError::TotalConflict { conflict });
    }

    for mass in unnormalized.values_mut() {
        *mass /= norm;
    }

    Ok(Combination {
        combined: MassFunction::from_focal_unchecked(m1.shared_frame().clone(), unnormalized),
        conflict,
    })
}
