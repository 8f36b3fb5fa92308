use std::collections::HashSet;

use proptest::prelude::*;
use shafer_core::config::MassConfig;
use shafer_core::{Frame, MassFunction, Subset};

fn frame_of(size: usize) -> Frame {
    Frame::new((0..size).map(|i| format!("H{i}"))).unwrap()
}

// ── Subset codec ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn intersect_is_commutative(a in 0u32..256, b in 0u32..256) {
        let (a, b) = (Subset::from_bits(a), Subset::from_bits(b));
        prop_assert_eq!(a.intersect(b), b.intersect(a));
    }

    #[test]
    fn intersect_is_idempotent(a in 0u32..256) {
        let a = Subset::from_bits(a);
        prop_assert_eq!(a.intersect(a), a);
    }

    #[test]
    fn intersection_is_subset_of_both(a in 0u32..256, b in 0u32..256) {
        let (a, b) = (Subset::from_bits(a), Subset::from_bits(b));
        let cap = a.intersect(b);
        prop_assert!(cap.is_subset_of(a));
        prop_assert!(cap.is_subset_of(b));
        prop_assert_eq!(cap.is_empty(), !a.intersects(b));
    }

    #[test]
    fn power_set_has_expected_size_and_no_duplicates(size in 1usize..=8) {
        let frame = frame_of(size);
        let subsets = frame.enumerate_non_empty_subsets();
        prop_assert_eq!(subsets.len(), (1usize << size) - 1);
        let unique: HashSet<_> = subsets.iter().copied().collect();
        prop_assert_eq!(unique.len(), subsets.len());
    }

    #[test]
    fn key_parses_back_to_the_same_subset(size in 1usize..=8, bits in 1u32..256) {
        let frame = frame_of(size);
        let subset = Subset::from_bits(bits).intersect(frame.theta());
        prop_assume!(!subset.is_empty());
        let key = frame.key(subset);
        prop_assert_eq!(frame.parse_key(&key).unwrap(), subset);
    }
}

// ── Mass validation ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn validated_masses_sum_to_one(weights in prop::collection::vec(0.0f64..1.0, 1..8)) {
        let frame = frame_of(3);
        let total: f64 = weights.iter().sum();
        prop_assume!(total > 1e-3);
        let entries = weights
            .iter()
            .enumerate()
            .map(|(i, w)| (Subset::from_bits((i % 7) as u32 + 1), w / total));
        let m = MassFunction::from_entries(&frame, entries, &MassConfig::default()).unwrap();
        prop_assert!((m.total() - 1.0).abs() < 1e-9);
        prop_assert!(m.check_invariants(1e-9).is_ok());
        prop_assert!(m.focal_elements().all(|(s, v)| !s.is_empty() && v > 0.0));
    }
}
