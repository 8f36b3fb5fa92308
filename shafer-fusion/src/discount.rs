//! Reliability discounting.
//!
//! ```text
//! m'(A) = r · m(A)             for A ≠ Θ
//! m'(Θ) = (1 − r) + r · m(Θ)
//! ```
//!
//! r = 1 leaves the source unchanged; r = 0 turns it into total ignorance.

use std::collections::BTreeMap;

use shafer_core::{MassFunction, Reliability};

/// Attenuate `mass` by `reliability`, moving the released mass onto Θ.
///
/// Θ is the frame carried by `mass`; an existing Θ entry is scaled and then
/// merged with the released mass, never counted twice.
pub fn discount(mass: &MassFunction, reliability: impl Into<Reliability>) -> MassFunction {
    let r = reliability.into().value();
    let theta = mass.theta();

    let mut result: BTreeMap<_, _> = mass
        .focal_elements()
        .filter(|(subset, _)| *subset != theta)
        .map(|(subset, m)| (subset, r * m))
        .collect();
    result.insert(theta, (1.0 - r) + r * mass.get(theta));

    MassFunction::from_focal_unchecked(mass.shared_frame().clone(), result)
}
