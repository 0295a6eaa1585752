//! Radix digit extraction from float bit patterns.
//!
//! ## Purpose
//!
//! This module defines the `RadixKey` trait, which exposes the byte-wise view
//! of a floating-point value that the counting-sort passes operate on.
//!
//! ## Key concepts
//!
//! * **Digit**: One byte of the value's IEEE-754 bit pattern, indexed from
//!   the least significant byte (digit 0) to the most significant byte.
//! * **Sign digit**: The most significant digit carries the sign bit. Raw bit
//!   patterns order negatives in reverse relative to numeric value, so the
//!   final pass must treat buckets at or above [`SIGN_SPLIT`] specially.
//!
//! ## Design notes
//!
//! * **Sealed**: The trait is sealed; the bucket arithmetic in the radix
//!   passes is only correct for IEEE-754 binary formats with byte-aligned
//!   widths, so outside implementations are not accepted.
//! * **Generic**: Both `f64` (8 digits) and `f32` (4 digits) are supported;
//!   the pass count follows `DIGITS` so the same code drives both.
//!
//! ## Invariants
//!
//! * `digit(i)` is only meaningful for `i < DIGITS`.
//! * For non-negative finite values, ordering bit patterns byte-wise from
//!   least to most significant byte orders the values numerically.

// External dependencies
use num_traits::Float;

// ============================================================================
// Constants
// ============================================================================

/// Number of buckets per counting-sort pass (one per byte value).
pub const RADIX: usize = 256;

/// First bucket whose byte has the sign bit set.
///
/// During the final pass, buckets at or above this index hold negative
/// values and are placed below the non-negative buckets, in reversed
/// bucket order.
pub const SIGN_SPLIT: usize = 128;

// ============================================================================
// Sealing
// ============================================================================

mod sealed {
    pub trait Sealed {}
    impl Sealed for f64 {}
    impl Sealed for f32 {}
}

// ============================================================================
// RadixKey Trait
// ============================================================================

/// A floating-point type whose bit pattern can be consumed one byte at a
/// time by the radix passes.
pub trait RadixKey: Float + sealed::Sealed {
    /// Number of byte-wide digits in the bit pattern.
    const DIGITS: usize;

    /// Extract digit `i`, where digit 0 is the least significant byte.
    fn digit(self, i: usize) -> usize;
}

impl RadixKey for f64 {
    const DIGITS: usize = 8;

    #[inline]
    fn digit(self, i: usize) -> usize {
        ((self.to_bits() >> (i * 8)) & 0xFF) as usize
    }
}

impl RadixKey for f32 {
    const DIGITS: usize = 4;

    #[inline]
    fn digit(self, i: usize) -> usize {
        ((self.to_bits() >> (i * 8)) & 0xFF) as usize
    }
}
