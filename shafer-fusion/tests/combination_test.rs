use shafer_core::config::MassConfig;
use shafer_core::errors::FusionError;
use shafer_core::{Frame, MassFunction, RawMass};
use shafer_fusion::combine;

fn frame_ab() -> Frame {
    Frame::new(["A", "B"]).unwrap()
}

fn mass(frame: &Frame, entries: &[(&str, f64)]) -> MassFunction {
    let raw: RawMass = entries.iter().map(|(k, v)| (k.to_string(), *v)).collect();
    MassFunction::from_raw(frame, &raw, &MassConfig::default()).unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn partially_conflicting_pair() {
    let frame = frame_ab();
    let m1 = mass(&frame, &[("A", 0.6), ("B", 0.2), ("A,B", 0.2)]);
    let m2 = mass(&frame, &[("A", 0.5), ("B", 0.3), ("A,B", 0.2)]);

    let result = combine(&m1, &m2).unwrap();

    // K = 0.6·0.3 + 0.2·0.5
    assert!(close(result.conflict, 0.28));
    let a = frame.singleton("A").unwrap();
    let b = frame.singleton("B").unwrap();
    assert!(close(result.combined.get(a), 0.52 / 0.72));
    assert!(close(result.combined.get(b), 0.16 / 0.72));
    assert!(close(result.combined.get(frame.theta()), 0.04 / 0.72));
    assert!(close(result.combined.total(), 1.0));
}

#[test]
fn disjoint_certainties_are_a_total_conflict() {
    let frame = frame_ab();
    let m1 = mass(&frame, &[("A", 1.0)]);
    let m2 = mass(&frame, &[("B", 1.0)]);

    let err = combine(&m1, &m2).unwrap_err();
    assert!(err.is_total_conflict());
    assert_eq!(err, FusionError::TotalConflict { conflict: 1.0 });
}

#[test]
fn near_total_conflict_is_still_computed() {
    let frame = frame_ab();
    let m1 = mass(&frame, &[("A", 0.999), ("A,B", 0.001)]);
    let m2 = mass(&frame, &[("B", 1.0)]);

    let result = combine(&m1, &m2).unwrap();
    assert!(close(result.conflict, 0.999));
    // Only Θ ∩ B survives, so all mass lands on B.
    assert!(close(result.combined.get(frame.singleton("B").unwrap()), 1.0));
}

#[test]
fn vacuous_function_is_the_identity() {
    let frame = Frame::new(["A", "B", "C"]).unwrap();
    let m = mass(&frame, &[("A", 0.5), ("B,C", 0.3), ("A,B,C", 0.2)]);
    let vacuous = MassFunction::vacuous(&frame);

    let left = combine(&vacuous, &m).unwrap();
    let right = combine(&m, &vacuous).unwrap();

    assert_eq!(left.conflict, 0.0);
    assert_eq!(right.conflict, 0.0);
    assert!(left.combined.approx_eq(&m, 1e-12));
    assert!(right.combined.approx_eq(&m, 1e-12));
}

#[test]
fn combination_is_commutative() {
    let frame = Frame::new(["A", "B", "C"]).unwrap();
    let m1 = mass(&frame, &[("A", 0.4), ("A,B", 0.3), ("C", 0.1), ("A,B,C", 0.2)]);
    let m2 = mass(&frame, &[("B", 0.5), ("B,C", 0.2), ("A,B,C", 0.3)]);

    let forward = combine(&m1, &m2).unwrap();
    let backward = combine(&m2, &m1).unwrap();

    assert!(close(forward.conflict, backward.conflict));
    assert!(forward.combined.approx_eq(&backward.combined, 1e-12));
}

#[test]
fn result_never_carries_empty_set_mass() {
    let frame = Frame::new(["A", "B", "C"]).unwrap();
    let m1 = mass(&frame, &[("A", 0.7), ("B", 0.3)]);
    let m2 = mass(&frame, &[("B", 0.6), ("C", 0.4)]);

    let result = combine(&m1, &m2).unwrap();
    assert!(result.combined.focal_elements().all(|(s, m)| !s.is_empty() && m > 0.0));
    result.combined.check_invariants(1e-9).unwrap();
}

#[test]
fn frames_must_match() {
    let small = Frame::new(["A", "B"]).unwrap();
    let large = Frame::new(["A", "B", "C"]).unwrap();
    let m1 = MassFunction::vacuous(&small);
    let m2 = MassFunction::vacuous(&large);

    let err = combine(&m1, &m2).unwrap_err();
    assert!(matches!(err, FusionError::FrameMismatch { .. }));
    assert!(!err.is_total_conflict());
}

#[test]
fn reordered_labels_are_a_frame_mismatch() {
    let ab = Frame::new(["A", "B"]).unwrap();
    let ba = Frame::new(["B", "A"]).unwrap();
    let m1 = mass(&ab, &[("A", 1.0)]);
    let m2 = mass(&ba, &[("B", 1.0)]);

    // Bit 0 is A in one frame and B in the other; mixing them must not
    // produce a result.
    let err = combine(&m1, &m2).unwrap_err();
    assert_eq!(
        err,
        FusionError::FrameMismatch {
            left: vec!["A".to_string(), "B".to_string()],
            right: vec!["B".to_string(), "A".to_string()],
        }
    );
}

#[test]
fn same_size_frames_with_other_labels_are_a_frame_mismatch() {
    let ab = Frame::new(["A", "B"]).unwrap();
    let xy = Frame::new(["X", "Y"]).unwrap();
    let m1 = mass(&ab, &[("A", 1.0)]);
    let m2 = mass(&xy, &[("Y", 1.0)]);

    let err = combine(&m1, &m2).unwrap_err();
    assert!(matches!(err, FusionError::FrameMismatch { .. }));
    assert!(!err.is_total_conflict());
}

#[test]
fn separately_built_equal_frames_combine() {
    let m1 = mass(&frame_ab(), &[("A", 0.5), ("A,B", 0.5)]);
    let m2 = mass(&frame_ab(), &[("B", 0.5), ("A,B", 0.5)]);

    let result = combine(&m1, &m2).unwrap();
    assert!(close(result.conflict, 0.25));
}
