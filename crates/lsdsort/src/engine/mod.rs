//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer coordinates the sort end to end: it partitions the input,
//! validates configuration, drives the radix and merge passes, and reports
//! what was done.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Partition planning and worker-count clamping.
pub mod planner;

/// Configuration validation.
pub mod validator;

/// Pass orchestration.
pub mod executor;

/// Sort report types.
pub mod output;
