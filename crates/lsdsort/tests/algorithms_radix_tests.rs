#![cfg(feature = "dev")]

use lsdsort::internals::algorithms::radix::sort_segment;
use lsdsort::internals::primitives::segments::Segment;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn full(data: &mut Vec<f64>) {
    let len = data.len();
    let mut scratch = vec![0.0; len];
    sort_segment(data, &mut scratch, Segment::new(0, len));
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn sorts_mixed_signs() {
    let mut data = vec![3.0, -1.0, 2.0, -5.0, 0.0];
    full(&mut data);
    assert_eq!(data, vec![-5.0, -1.0, 0.0, 2.0, 3.0]);
}

#[test]
fn sorts_negatives_numerically() {
    // Raw bit patterns order negatives in reverse; the sign pass must undo
    // that.
    let mut data = vec![-1.0, -100.0, -0.5, -7.25];
    full(&mut data);
    assert_eq!(data, vec![-100.0, -7.25, -1.0, -0.5]);
}

#[test]
fn negative_zero_precedes_positive_zero() {
    let mut data = vec![0.0, -0.0, 1.0, -1.0];
    full(&mut data);
    assert_eq!(data, vec![-1.0, 0.0, 0.0, 1.0]);
    assert!(data[1].is_sign_negative());
    assert!(!data[2].is_sign_negative());
}

#[test]
fn handles_extreme_magnitudes() {
    let mut data = vec![
        f64::MAX,
        f64::MIN,
        f64::MIN_POSITIVE,
        -f64::MIN_POSITIVE,
        0.0,
        f64::INFINITY,
        f64::NEG_INFINITY,
    ];
    full(&mut data);
    assert_eq!(
        data,
        vec![
            f64::NEG_INFINITY,
            f64::MIN,
            -f64::MIN_POSITIVE,
            0.0,
            f64::MIN_POSITIVE,
            f64::MAX,
            f64::INFINITY,
        ]
    );
}

#[test]
fn matches_comparison_sort_on_random_data() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut data: Vec<f64> = (0..1000).map(|_| rng.gen_range(-1e9..1e9)).collect();
    let mut expected = data.clone();
    expected.sort_by(|a, b| a.partial_cmp(b).unwrap());

    full(&mut data);
    assert_eq!(data, expected);
}

#[test]
fn sorts_f32_keys() {
    let mut data = vec![2.5f32, -3.5, 0.25, -0.125];
    let mut scratch = vec![0.0f32; 4];
    sort_segment(&mut data, &mut scratch, Segment::new(0, 4));
    assert_eq!(data, vec![-3.5, -0.125, 0.25, 2.5]);
}

// ============================================================================
// Segment isolation
// ============================================================================

#[test]
fn only_the_segment_is_touched() {
    let mut data = vec![9.0, 8.0, 3.0, 1.0, 2.0, 8.0, 7.0];
    let mut scratch = vec![0.0; 7];
    sort_segment(&mut data, &mut scratch, Segment::new(2, 5));
    assert_eq!(data, vec![9.0, 8.0, 1.0, 2.0, 3.0, 8.0, 7.0]);
}

#[test]
fn trivial_segments_are_no_ops() {
    let mut data = vec![2.0, 1.0];
    let mut scratch = vec![0.0; 2];
    sort_segment(&mut data, &mut scratch, Segment::new(0, 1));
    sort_segment(&mut data, &mut scratch, Segment::new(1, 1));
    assert_eq!(data, vec![2.0, 1.0]);
}
