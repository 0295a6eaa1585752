//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions, data structures, and
//! utility functions used throughout the crate. It has zero internal
//! dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Radix digit extraction from float bit patterns.
pub mod keys;

/// Segment and boundary-table bookkeeping.
pub mod segments;

/// Shared error types.
pub mod errors;

/// Scratch buffer management.
pub mod buffer;
