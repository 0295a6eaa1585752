//! Split-point binary search over a sorted run.
//!
//! ## Purpose
//!
//! This module locates where a pivot value from one sorted run falls inside
//! a neighboring sorted run, so a merge of the pair can be cut into two
//! independent halves.
//!
//! ## Key concepts
//!
//! * **Split point**: An index `s` in `[seg.start, seg.end]` such that every
//!   element before `s` is at most the pivot and every element from `s` on
//!   is at least the pivot. Any such index yields a correct merge split.
//!
//! ## Design notes
//!
//! * Pivots outside the run's value range resolve to the run's boundary
//!   (`seg.start` or `seg.end`) rather than clamping to an interior index;
//!   clamping would leak elements smaller than the pivot into the upper
//!   half of the split and break the merge.
//! * A NaN pivot compares neither below nor above any element, so the search
//!   settles on an interior probe immediately. That index is still a valid
//!   cut; no ordering among NaN payloads is promised.

// Internal dependencies
use crate::primitives::keys::RadixKey;
use crate::primitives::segments::Segment;

// ============================================================================
// Split Point
// ============================================================================

/// Find a split index for `pivot` within the sorted run
/// `data[seg.start..seg.end]`.
pub fn split_point<K: RadixKey>(data: &[K], seg: Segment, pivot: K) -> usize {
    if seg.is_empty() || pivot < data[seg.start] {
        return seg.start;
    }
    if pivot > data[seg.end - 1] {
        return seg.end;
    }

    let mut left = seg.start;
    let mut right = seg.end - 1;
    while left <= right {
        let mid = (left + right) / 2;
        if data[mid] < pivot {
            left = mid + 1;
        } else if data[mid] > pivot {
            // mid > seg.start here: the range check above already ruled out
            // a first element greater than the pivot.
            right = mid - 1;
        } else {
            return mid;
        }
    }
    left
}
