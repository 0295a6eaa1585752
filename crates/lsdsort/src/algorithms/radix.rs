//! Byte-wise LSD radix sort of a single segment.
//!
//! ## Purpose
//!
//! This module sorts one contiguous segment of the array by running one
//! stable counting-sort pass per byte of the key's bit pattern, from least
//! to most significant.
//!
//! ## Key concepts
//!
//! * **Counting pass**: Each pass histograms one byte into 256 buckets,
//!   turns the histogram into bucket offsets, and scatters elements into the
//!   scratch slice at those offsets. Stability of each pass is what makes
//!   the byte-by-byte composition order the full key.
//! * **Sign pass**: The final pass covers the byte holding the sign bit.
//!   Raw bit patterns put negatives above positives and in reversed order
//!   among themselves, so the final pass lays out the sign-set buckets
//!   first, from bucket 255 down to 128, and fills each of those buckets
//!   back to front.
//!
//! ## Invariants
//!
//! * Passes ping-pong between `data` and `scratch`; the digit count is even
//!   for both supported key types, so the sorted run always ends up back in
//!   `data`.
//! * Within one segment the pass sequence is a stable sort: equal bit
//!   patterns keep their input order, which places `-0.0` before `+0.0`
//!   only by their distinct bit patterns, not by stability.
//!
//! ## Non-goals
//!
//! * No comparison fallback for small segments.
//! * No skipping of constant bytes; every pass runs unconditionally.

// Internal dependencies
use crate::primitives::keys::{RadixKey, RADIX, SIGN_SPLIT};
use crate::primitives::segments::Segment;

// ============================================================================
// Segment Sort
// ============================================================================

/// Radix sort `data[seg.start..seg.end]` in place, using the matching range
/// of `scratch` as the scatter target.
///
/// `data` and `scratch` must have the same length.
pub fn sort_segment<K: RadixKey>(data: &mut [K], scratch: &mut [K], seg: Segment) {
    if seg.len() <= 1 {
        return;
    }

    let run = &mut data[seg.start..seg.end];
    let aux = &mut scratch[seg.start..seg.end];

    // DIGITS is even for f32 and f64, so the last pass writes into `run`.
    for digit in 0..K::DIGITS {
        if digit % 2 == 0 {
            counting_pass(run, aux, digit);
        } else {
            counting_pass(aux, run, digit);
        }
    }
}

// ============================================================================
// Counting Pass
// ============================================================================

/// One stable counting-sort pass over byte `digit`, scattering `src` into
/// `dst`.
fn counting_pass<K: RadixKey>(src: &[K], dst: &mut [K], digit: usize) {
    let mut counters = [0usize; RADIX];
    for &v in src {
        counters[v.digit(digit)] += 1;
    }

    let sign_pass = digit == K::DIGITS - 1;
    if sign_pass {
        sign_prefix_sums(&mut counters);
    } else {
        prefix_sums(&mut counters);
    }

    for &v in src {
        let bucket = v.digit(digit);
        let slot = if sign_pass && bucket >= SIGN_SPLIT {
            // Sign-set buckets fill back to front, which reverses the
            // bit-pattern order of negatives into numeric order.
            counters[bucket] -= 1;
            counters[bucket]
        } else {
            let slot = counters[bucket];
            counters[bucket] += 1;
            slot
        };
        dst[slot] = v;
    }
}

// ============================================================================
// Offset Computation
// ============================================================================

/// Exclusive prefix sums in ascending bucket order.
fn prefix_sums(counters: &mut [usize; RADIX]) {
    let mut running = 0;
    for c in counters.iter_mut() {
        let n = *c;
        *c = running;
        running += n;
    }
}

/// Bucket offsets for the sign pass.
///
/// Buckets without the sign bit start after all sign-set elements, in
/// ascending order. Sign-set buckets accumulate from bucket 255 downward,
/// leaving each counter at the exclusive end of its bucket's range so the
/// scatter can decrement into it.
fn sign_prefix_sums(counters: &mut [usize; RADIX]) {
    let negatives: usize = counters[SIGN_SPLIT..].iter().sum();

    let mut running = negatives;
    for c in counters[..SIGN_SPLIT].iter_mut() {
        let n = *c;
        *c = running;
        running += n;
    }

    let mut running = 0;
    for c in counters[SIGN_SPLIT..].iter_mut().rev() {
        *c += running;
        running = *c;
    }
}
