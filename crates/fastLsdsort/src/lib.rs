//! # fastLsdsort: Parallel Execution Layer for lsdsort
//!
//! This crate wraps the `lsdsort` radix sorter with multi-threaded pass
//! implementations. The partitions of the radix stage and the jobs of each
//! merge round are independent by construction, so both stages parallelize
//! without locking: the data and scratch slices are carved into disjoint
//! chunks up front and handed to a rayon thread pool.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastLsdsort::prelude::*;
//!
//! let mut data = vec![3.0, -1.0, 2.0, -5.0, 0.0];
//!
//! // Build the parallel sorter
//! let sorter = ParallelSorterBuilder::new()
//!     .workers(2)     // Advisory partition/worker hint
//!     .build()?;
//!
//! // Sort in place
//! let report = sorter.sort(&mut data)?;
//!
//! assert_eq!(data, vec![-5.0, -1.0, 0.0, 2.0, 3.0]);
//! assert_eq!(report.workers, 2);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ## Input containers
//!
//! `sort` accepts anything implementing [`SortInput`]: slices, `Vec`s, and
//! one-dimensional `ndarray` arrays or views. Arrays must be contiguous; a
//! strided view returns `SortError::InvalidInput` without touching the
//! data.
//!
//! ```rust
//! use fastLsdsort::prelude::*;
//! use ndarray::array;
//!
//! let mut data = array![4.0, -2.0, 1.0, -3.0];
//! let sorter = ParallelSorterBuilder::new().workers(2).build()?;
//! sorter.sort(&mut data)?;
//!
//! assert_eq!(data, array![-3.0, -2.0, 1.0, 4.0]);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ## Worker defaults
//!
//! When no `workers` hint is given, the rayon pool's thread count is used.
//! The hint stays advisory either way: planning clamps it to a usable power
//! of two.
//!
//! ## Sequential fallback
//!
//! Disable the `cpu` feature (or call `.parallel(false)`) to run the same
//! sort with the core crate's sequential passes.

#![allow(non_snake_case)]

// Parallel pass implementations and builder wiring.
mod engine;

// Input container abstraction.
mod input;

// High-level fluent API for parallel sorting.
mod api;

// Standard fastLsdsort prelude.
pub mod prelude {
    pub use crate::api::{ParallelSorter, ParallelSorterBuilder};
    pub use crate::input::SortInput;
    pub use lsdsort::prelude::{RadixKey, SortError, SortReport};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
