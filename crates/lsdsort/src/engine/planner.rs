//! Partition planning and worker-count clamping.
//!
//! ## Purpose
//!
//! This module resolves the advisory worker hint into an effective partition
//! count and lays the initial partitions over the array.
//!
//! ## Design notes
//!
//! * **Power-of-two partitions**: The merge stage halves the segment count
//!   every round, so the partition count must be a power of two for the
//!   tournament to bottom out in exactly `log2(workers)` rounds. Hints that
//!   are not usable collapse to 2 rather than failing; the hint is advisory.
//! * **Remainder placement**: Partitions share `n / workers` elements each;
//!   the division remainder goes to the last partition.
//!
//! ## Invariants
//!
//! * The planned segments tile `[0, n)` in order with no gaps.
//! * `workers` is 1 only for trivially small inputs; otherwise it is a
//!   power of two with `2 <= workers <= n`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::primitives::segments::{Segment, SegmentTable};

// ============================================================================
// ExecutionPlan
// ============================================================================

/// Resolved partition layout for one sort.
#[derive(Debug, Clone)]
pub struct ExecutionPlan {
    /// Effective partition count after clamping the hint.
    pub workers: usize,
    /// Initial partitions, tiling the array in order.
    pub segments: SegmentTable,
}

// ============================================================================
// Planner
// ============================================================================

/// Resolves worker hints and lays out the initial partitions.
pub struct Planner;

impl Planner {
    /// Clamp `hint` to a usable partition count for an input of `n`
    /// elements.
    pub fn effective_workers(n: usize, hint: usize) -> usize {
        if n <= 1 {
            return 1;
        }
        if hint > 1 && hint <= n && hint.is_power_of_two() {
            hint
        } else {
            2
        }
    }

    /// Build the partition layout for `n` elements under `hint`.
    pub fn plan(n: usize, hint: usize) -> ExecutionPlan {
        let workers = Self::effective_workers(n, hint);

        let part = n / workers;
        let mut segments = Vec::with_capacity(workers);
        for i in 0..workers {
            let start = i * part;
            let end = if i == workers - 1 { n } else { start + part };
            segments.push(Segment::new(start, end));
        }

        ExecutionPlan {
            workers,
            segments: SegmentTable::new(segments),
        }
    }
}
