use std::sync::Arc;

use proptest::prelude::*;
use shafer_core::{Frame, MassFunction, Subset};
use shafer_fusion::{belief, belief_plausibility, combine, discount, fuse, plausibility};

const FRAME_SIZE: usize = 4;

fn frame() -> Frame {
    Frame::new((0..FRAME_SIZE).map(|i| format!("H{i}"))).unwrap()
}

/// Arbitrary normalized mass function over a four-hypothesis frame.
fn arb_mass() -> impl Strategy<Value = MassFunction> {
    let theta_bits = (1u32 << FRAME_SIZE) - 1;
    let shared = Arc::new(frame());
    prop::collection::btree_map(1u32..=theta_bits, 0.01f64..1.0, 1..6).prop_map(move |weights| {
        let total: f64 = weights.values().sum();
        let focal = weights
            .into_iter()
            .map(|(bits, w)| (Subset::from_bits(bits), w / total))
            .collect();
        MassFunction::from_focal_unchecked(shared.clone(), focal)
    })
}

fn arb_target() -> impl Strategy<Value = Subset> {
    (0u32..(1 << FRAME_SIZE)).prop_map(Subset::from_bits)
}

proptest! {
    #[test]
    fn combination_sums_to_one(m1 in arb_mass(), m2 in arb_mass()) {
        if let Ok(result) = combine(&m1, &m2) {
            prop_assert!((result.combined.total() - 1.0).abs() < 1e-9);
            prop_assert!((0.0..1.0).contains(&result.conflict));
            prop_assert!(result.combined.check_invariants(1e-9).is_ok());
        }
    }

    #[test]
    fn combination_is_commutative(m1 in arb_mass(), m2 in arb_mass()) {
        match (combine(&m1, &m2), combine(&m2, &m1)) {
            (Ok(a), Ok(b)) => {
                prop_assert!((a.conflict - b.conflict).abs() < 1e-12);
                prop_assert!(a.combined.approx_eq(&b.combined, 1e-9));
            }
            (Err(a), Err(b)) => prop_assert_eq!(a.is_total_conflict(), b.is_total_conflict()),
            _ => prop_assert!(false, "commuted inputs disagree on failure"),
        }
    }

    #[test]
    fn vacuous_is_the_neutral_element(m in arb_mass()) {
        let result = combine(&m, &MassFunction::vacuous(&frame())).unwrap();
        prop_assert_eq!(result.conflict, 0.0);
        prop_assert!(result.combined.approx_eq(&m, 1e-12));
    }

    #[test]
    fn belief_never_exceeds_plausibility(m in arb_mass(), target in arb_target()) {
        prop_assert!(belief(&m, target) <= plausibility(&m, target) + 1e-12);
    }

    #[test]
    fn belief_and_plausibility_are_dual(m in arb_mass(), target in arb_target()) {
        // Pl(T) = 1 − Bel(Θ \ T)
        let complement = Subset::from_bits(m.theta().bits() & !target.bits());
        prop_assert!((plausibility(&m, target) - (1.0 - belief(&m, complement))).abs() < 1e-9);
    }

    #[test]
    fn discount_keeps_mass_normalized(m in arb_mass(), r in 0.0f64..=1.0) {
        let d = discount(&m, r);
        prop_assert!((d.total() - 1.0).abs() < 1e-9);
        prop_assert!(d.get(d.theta()) >= m.get(m.theta()) - 1e-12);
        for (subset, mass) in m.focal_elements() {
            if subset != m.theta() {
                prop_assert!((d.get(subset) - r * mass).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn discounted_sources_widen_intervals(m in arb_mass(), r in 0.0f64..=1.0) {
        let f = frame();
        let before = belief_plausibility(&m, &f);
        let after = belief_plausibility(&discount(&m, r), &f);
        for (b, a) in before.iter().zip(&after) {
            prop_assert!(a.belief <= b.belief + 1e-12);
            prop_assert!(a.plausibility >= b.plausibility - 1e-12);
        }
    }

    #[test]
    fn pipeline_trace_lengths(sources in prop::collection::vec(arb_mass(), 1..5)) {
        if let Ok(trace) = fuse(&sources) {
            prop_assert_eq!(trace.conflicts.len(), sources.len() - 1);
            prop_assert_eq!(trace.intermediates.len(), sources.len());
            prop_assert_eq!(trace.combined.as_ref(), trace.intermediates.last());
        }
    }
}
