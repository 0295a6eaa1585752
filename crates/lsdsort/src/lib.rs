//! # lsdsort: Byte-wise LSD Radix Sort for IEEE-754 Floats
//!
//! A least-significant-digit (LSD) radix sort that operates directly on the
//! bit patterns of floating-point numbers, combined with a divide-and-conquer
//! merge that recombines independently sorted partitions into one globally
//! sorted sequence.
//!
//! ## How does it work?
//!
//! Comparison sorts pay `O(n log n)` comparisons no matter what; a radix sort
//! pays `O(n)` per digit instead. An IEEE-754 double is eight bytes, so eight
//! stable counting-sort passes over those bytes order any slice of doubles,
//! provided the final pass compensates for the sign bit, because raw bit
//! patterns order negative numbers in reverse relative to their numeric
//! value. The array is first split into contiguous partitions that are radix
//! sorted independently, then a binary merge tournament collapses the sorted
//! partitions pairwise until one segment spans the whole array.
//!
//! ## Quick Start
//!
//! ```rust
//! use lsdsort::prelude::*;
//!
//! let mut data = vec![3.0, -1.0, 2.0, -5.0, 0.0];
//!
//! // Build the sorter
//! let sorter = SorterBuilder::new()
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
//! ### Result and Error Handling
//!
//! The `sort` method returns a `Result<SortReport, SortError>`.
//!
//! - **`Ok(SortReport)`**: Contains the effective worker count and the number
//!   of merge rounds performed.
//! - **`Err(SortError)`**: Indicates a failure (e.g., scratch allocation
//!   failure, invalid builder configuration). The input slice is left
//!   unsorted but otherwise untouched.
//!
//! The `?` operator is idiomatic:
//!
//! ```rust
//! use lsdsort::prelude::*;
//! # let mut data = vec![2.0, 1.0];
//!
//! let sorter = SorterBuilder::new().build()?;
//! let report = sorter.sort(&mut data)?;
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ## Semantics
//!
//! - Sorts ascending by numeric value, in place, using one internal scratch
//!   buffer of the same length as the input.
//! - `-0.0` sorts among the negatives: within a radix-sorted partition it
//!   precedes `+0.0`.
//! - NaN values are accepted and placed according to their raw bit pattern;
//!   no total order over NaN payloads is guaranteed.
//! - Length 0 and length 1 inputs return immediately without planning,
//!   partitioning, or merging.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! lsdsort = { version = "0.1", default-features = false }
//! ```
//!
//! Without `std` the environment's parallelism cannot be queried, so an
//! unset worker hint falls back to 2 partitions.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Algorithms - radix passes, split search, and merging.
mod algorithms;

// Layer 3: Engine - planning, orchestration, and execution control.
mod engine;

// High-level fluent API for sorting.
mod api;

// Standard lsdsort prelude.
pub mod prelude {
    pub use crate::api::{RadixKey, SortError, SortReport, Sorter, SorterBuilder};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
