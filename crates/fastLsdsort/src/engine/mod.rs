//! Parallel execution engine.
//!
//! # Purpose
//!
//! This layer provides the multi-threaded replacements for the core
//! crate's sequential passes and wires them into a sorter at build time.

/// Parallel pass implementations and builder wiring.
pub mod executor;
