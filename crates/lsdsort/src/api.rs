//! Layer 4: API
//!
//! # Purpose
//!
//! This module provides the public, fluent interface for configuring and
//! running sorts. It validates configuration at `build()` time and keeps
//! the sorting surface itself to a single `sort` call.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```
//!
//! # Design notes
//!
//! * **Fluent**: Parameters chain; each may be set at most once, and a
//!   duplicate is reported at `build()` rather than silently overwritten.
//! * **Advisory hint**: `workers` is a hint, not a demand. It is clamped to
//!   a usable power of two during planning; only an explicit 0 is an error.
//! * **Extension hooks**: Hidden methods let companion crates install
//!   parallel pass implementations without the core crate depending on a
//!   thread pool.

// Internal dependencies
use crate::engine::executor::{MergePassFn, SortExecutor, SortPassFn};
use crate::engine::validator::Validator;

// Re-exports for the prelude.
pub use crate::engine::output::SortReport;
pub use crate::primitives::errors::SortError;
pub use crate::primitives::keys::RadixKey;

// ============================================================================
// SorterBuilder
// ============================================================================

/// Fluent builder for [`Sorter`].
///
/// # Example
///
/// ```rust
/// use lsdsort::prelude::*;
///
/// let sorter = SorterBuilder::<f64>::new().workers(4).build()?;
/// # Result::<(), SortError>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct SorterBuilder<K: RadixKey> {
    /// Advisory partition/worker hint.
    pub workers: Option<usize>,
    /// Whether companion crates should install parallel passes.
    #[doc(hidden)]
    pub parallel: Option<bool>,
    #[doc(hidden)]
    pub custom_sort_pass: Option<SortPassFn<K>>,
    #[doc(hidden)]
    pub custom_merge_pass: Option<MergePassFn<K>>,
    duplicate_param: Option<&'static str>,
}

impl<K: RadixKey> Default for SorterBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: RadixKey> SorterBuilder<K> {
    /// Builder with every parameter unset.
    pub fn new() -> Self {
        Self {
            workers: None,
            parallel: None,
            custom_sort_pass: None,
            custom_merge_pass: None,
            duplicate_param: None,
        }
    }

    /// Advisory worker / partition-count hint.
    ///
    /// Clamped during planning: usable values are powers of two no larger
    /// than the input length; anything else resolves to 2. When unset, the
    /// environment's available parallelism is used.
    pub fn workers(mut self, workers: usize) -> Self {
        if self.workers.is_some() {
            self.duplicate_param = Some("workers");
        }
        self.workers = Some(workers);
        self
    }

    /// Whether companion crates should install parallel passes.
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    /// Install a replacement for the per-partition radix pass.
    #[doc(hidden)]
    pub fn with_custom_sort_pass(mut self, pass: SortPassFn<K>) -> Self {
        self.custom_sort_pass = Some(pass);
        self
    }

    /// Install a replacement for the per-round merge pass.
    #[doc(hidden)]
    pub fn with_custom_merge_pass(mut self, pass: MergePassFn<K>) -> Self {
        self.custom_merge_pass = Some(pass);
        self
    }

    /// Validate the configuration and construct the sorter.
    pub fn build(self) -> Result<Sorter<K>, SortError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_workers(self.workers)?;

        Ok(Sorter {
            workers: self.workers,
            executor: SortExecutor {
                custom_sort_pass: self.custom_sort_pass,
                custom_merge_pass: self.custom_merge_pass,
            },
        })
    }
}

// ============================================================================
// Sorter
// ============================================================================

/// A configured sorter, reusable across any number of slices.
#[derive(Debug, Clone)]
pub struct Sorter<K: RadixKey> {
    workers: Option<usize>,
    executor: SortExecutor<K>,
}

impl<K: RadixKey> Sorter<K> {
    /// Sort `data` ascending in place.
    ///
    /// Returns a [`SortReport`] describing the partitioning used. On error
    /// the slice is left with its original contents.
    pub fn sort(&self, data: &mut [K]) -> Result<SortReport, SortError> {
        let hint = self.workers.unwrap_or_else(default_workers);
        self.executor.run(data, hint)
    }
}

// ============================================================================
// Environment Defaults
// ============================================================================

/// Worker hint when none was configured.
#[cfg(feature = "std")]
fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(2)
}

/// Without `std` the environment cannot be queried.
#[cfg(not(feature = "std"))]
fn default_workers() -> usize {
    2
}
