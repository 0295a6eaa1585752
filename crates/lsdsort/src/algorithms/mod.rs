//! Layer 2: Algorithms
//!
//! # Purpose
//!
//! This layer implements the computational kernels of the sort: the
//! byte-wise counting-sort passes, the split-point binary search, and the
//! two-pointer segment merge.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Byte-wise LSD radix sort of a single segment.
pub mod radix;

/// Split-point binary search over a sorted run.
pub mod search;

/// Pairwise merging of sorted runs.
pub mod merge;
