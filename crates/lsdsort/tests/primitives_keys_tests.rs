#![cfg(feature = "dev")]

use lsdsort::internals::primitives::keys::{RadixKey, RADIX, SIGN_SPLIT};
use lsdsort::internals::primitives::segments::{Segment, SegmentTable};

// ============================================================================
// Digit extraction
// ============================================================================

#[test]
fn f64_digits_cover_the_full_bit_pattern() {
    // 1.0f64 has bit pattern 0x3FF0_0000_0000_0000.
    let v = 1.0f64;
    assert_eq!(<f64 as RadixKey>::DIGITS, 8);
    assert_eq!(v.digit(7), 0x3F);
    assert_eq!(v.digit(6), 0xF0);
    for i in 0..6 {
        assert_eq!(v.digit(i), 0x00);
    }
}

#[test]
fn f32_digits_cover_the_full_bit_pattern() {
    // 1.0f32 has bit pattern 0x3F80_0000.
    let v = 1.0f32;
    assert_eq!(<f32 as RadixKey>::DIGITS, 4);
    assert_eq!(v.digit(3), 0x3F);
    assert_eq!(v.digit(2), 0x80);
    assert_eq!(v.digit(1), 0x00);
    assert_eq!(v.digit(0), 0x00);
}

#[test]
fn sign_bit_lands_in_the_top_digit() {
    assert!((-0.0f64).digit(7) >= SIGN_SPLIT);
    assert!((0.0f64).digit(7) < SIGN_SPLIT);
    assert!((-1.5f64).digit(7) >= SIGN_SPLIT);
    assert!((-2.5f32).digit(3) >= SIGN_SPLIT);
}

#[test]
fn digits_stay_within_the_radix() {
    for v in [0.0f64, -0.0, 1.0, -1.0, f64::MAX, f64::MIN, f64::NAN] {
        for i in 0..<f64 as RadixKey>::DIGITS {
            assert!(v.digit(i) < RADIX);
        }
    }
}

// ============================================================================
// Segments
// ============================================================================

#[test]
fn segment_accessors() {
    let seg = Segment::new(2, 7);
    assert_eq!(seg.len(), 5);
    assert!(!seg.is_empty());
    assert_eq!(seg.midpoint(), 4);

    let empty = Segment::new(3, 3);
    assert_eq!(empty.len(), 0);
    assert!(empty.is_empty());
}

#[test]
fn coarsen_fuses_adjacent_pairs() {
    let mut table = SegmentTable::new(vec![
        Segment::new(0, 2),
        Segment::new(2, 4),
        Segment::new(4, 6),
        Segment::new(6, 10),
    ]);

    table.coarsen();
    assert_eq!(table.len(), 2);
    assert_eq!(table.get(0), Some(Segment::new(0, 4)));
    assert_eq!(table.get(1), Some(Segment::new(4, 10)));

    table.coarsen();
    assert_eq!(table.len(), 1);
    assert_eq!(table.get(0), Some(Segment::new(0, 10)));
}

#[test]
fn coarsen_carries_a_lone_tail() {
    let mut table = SegmentTable::new(vec![
        Segment::new(0, 3),
        Segment::new(3, 5),
        Segment::new(5, 9),
    ]);

    table.coarsen();
    assert_eq!(table.len(), 2);
    assert_eq!(table.get(0), Some(Segment::new(0, 5)));
    assert_eq!(table.get(1), Some(Segment::new(5, 9)));
}
