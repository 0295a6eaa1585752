//! Scratch buffer management.
//!
//! ## Purpose
//!
//! This module owns the single auxiliary allocation the sort needs: a
//! scratch buffer of the same length as the input, reused across every
//! radix pass and merge round.
//!
//! ## Design notes
//!
//! * **Fallible allocation**: The buffer is reserved with
//!   `try_reserve_exact`, so an allocation failure surfaces as
//!   `SortError::AllocationFailure` instead of aborting the process. The
//!   caller's data is untouched in that case.
//! * **One allocation per sort**: The buffer is created once per `sort`
//!   call and dropped when the call returns; no allocation happens inside
//!   the passes themselves.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::ops::{Deref, DerefMut};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SortError;

// ============================================================================
// ScratchBuffer
// ============================================================================

/// Auxiliary buffer the radix passes scatter into and the merge rounds
/// write through.
#[derive(Debug)]
pub struct ScratchBuffer<T> {
    data: Vec<T>,
}

impl<T: Float> ScratchBuffer<T> {
    /// Allocate a zero-filled buffer of `n` elements.
    ///
    /// Returns `SortError::AllocationFailure` if the reservation fails.
    pub fn try_new(n: usize) -> Result<Self, SortError> {
        let mut data = Vec::new();
        data.try_reserve_exact(n)
            .map_err(|_| SortError::AllocationFailure { requested: n })?;
        data.resize(n, T::zero());
        Ok(Self { data })
    }
}

impl<T> Deref for ScratchBuffer<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.data
    }
}

impl<T> DerefMut for ScratchBuffer<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}
