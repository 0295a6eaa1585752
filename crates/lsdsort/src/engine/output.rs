//! Sort report types.
//!
//! ## Purpose
//!
//! This module defines the summary a completed sort returns to the caller:
//! how large the input was, how many partitions were used, and how many
//! merge rounds it took to fuse them.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// SortReport
// ============================================================================

/// Summary of a completed sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortReport {
    /// Number of elements sorted.
    pub len: usize,
    /// Effective partition count after clamping the hint.
    pub workers: usize,
    /// Number of merge rounds performed (`log2(workers)`).
    pub merge_rounds: usize,
}

impl Display for SortReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "sorted {} elements across {} partitions in {} merge rounds",
            self.len, self.workers, self.merge_rounds
        )
    }
}
