//! Input container abstraction.
//!
//! ## Purpose
//!
//! This module defines the `SortInput` trait, which lets the parallel
//! sorter accept slices, `Vec`s, and one-dimensional `ndarray` containers
//! through a single `sort` method.
//!
//! ## Design notes
//!
//! * The sort operates on one contiguous mutable slice; containers that
//!   cannot expose one (strided array views) are rejected with
//!   `SortError::InvalidInput` before anything is touched.

// External dependencies
use lsdsort::prelude::{RadixKey, SortError};
use ndarray::{ArrayBase, DataMut, Ix1};

// ============================================================================
// SortInput Trait
// ============================================================================

/// A mutable container the sorter can operate on in place.
pub trait SortInput<K: RadixKey> {
    /// Expose the container's elements as one contiguous mutable slice.
    fn sort_slice_mut(&mut self) -> Result<&mut [K], SortError>;
}

impl<K: RadixKey> SortInput<K> for [K] {
    fn sort_slice_mut(&mut self) -> Result<&mut [K], SortError> {
        Ok(self)
    }
}

impl<K: RadixKey> SortInput<K> for Vec<K> {
    fn sort_slice_mut(&mut self) -> Result<&mut [K], SortError> {
        Ok(self.as_mut_slice())
    }
}

impl<K: RadixKey, S: DataMut<Elem = K>> SortInput<K> for ArrayBase<S, Ix1> {
    fn sort_slice_mut(&mut self) -> Result<&mut [K], SortError> {
        self.as_slice_mut().ok_or_else(|| {
            SortError::InvalidInput(
                "array is not contiguous in standard order; sort requires a contiguous buffer"
                    .into(),
            )
        })
    }
}
