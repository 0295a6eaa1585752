//! High-level fluent API for parallel sorting.
//!
//! ## Purpose
//!
//! This module wraps the core crate's builder and sorter with parallel
//! pass installation and container-generic input handling.
//!
//! ## Design notes
//!
//! * **Thin wrapper**: Configuration, validation, and orchestration all
//!   live in the core crate; this layer decides which passes to install
//!   and widens the accepted input types.
//! * **Parallel by default**: An unconfigured builder installs the rayon
//!   passes and takes the pool's thread count as its worker hint.

// Internal dependencies
use crate::engine::executor::build_parallel;
use crate::input::SortInput;

// External dependencies
use lsdsort::prelude::{RadixKey, SortError, SortReport, Sorter, SorterBuilder};

// ============================================================================
// ParallelSorterBuilder
// ============================================================================

/// Fluent builder for [`ParallelSorter`].
///
/// # Example
///
/// ```rust
/// use fastLsdsort::prelude::*;
///
/// let sorter = ParallelSorterBuilder::<f64>::new().workers(4).build()?;
/// # Result::<(), SortError>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct ParallelSorterBuilder<K: RadixKey> {
    base: SorterBuilder<K>,
}

impl<K: RadixKey + Send + Sync> Default for ParallelSorterBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: RadixKey + Send + Sync> ParallelSorterBuilder<K> {
    /// Builder with every parameter unset.
    pub fn new() -> Self {
        Self {
            base: SorterBuilder::new(),
        }
    }

    /// Advisory worker / partition-count hint.
    ///
    /// When unset, the rayon pool's thread count is used. Clamped during
    /// planning either way.
    pub fn workers(mut self, workers: usize) -> Self {
        self.base = self.base.workers(workers);
        self
    }

    /// Run the passes on the thread pool (default `true`).
    ///
    /// `parallel(false)` keeps the core crate's sequential passes, which
    /// is useful for comparing runs.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
        self
    }

    /// Validate the configuration and construct the sorter.
    pub fn build(self) -> Result<ParallelSorter<K>, SortError> {
        Ok(ParallelSorter {
            base: build_parallel(self.base)?,
        })
    }
}

// ============================================================================
// ParallelSorter
// ============================================================================

/// A configured parallel sorter, reusable across any number of inputs.
#[derive(Debug, Clone)]
pub struct ParallelSorter<K: RadixKey> {
    base: Sorter<K>,
}

impl<K: RadixKey> ParallelSorter<K> {
    /// Sort `input` ascending in place.
    ///
    /// Accepts any [`SortInput`] container. On error the input is left
    /// with its original contents.
    pub fn sort<I: SortInput<K> + ?Sized>(&self, input: &mut I) -> Result<SortReport, SortError> {
        self.base.sort(input.sort_slice_mut()?)
    }
}
