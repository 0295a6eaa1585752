//! Pairwise merging of sorted runs.
//!
//! ## Purpose
//!
//! This module turns one merge round over the segment table into a set of
//! independent jobs, and provides the two-pointer kernel that executes a
//! single job.
//!
//! ## Key concepts
//!
//! * **Merge job**: A pair of sorted sub-runs plus the output offset where
//!   their merged result belongs. Jobs in one round never overlap in input
//!   or output, so they can run in any order or in parallel.
//! * **Pivot split**: Each pair of adjacent runs is cut at the left run's
//!   midpoint element; a binary search places the same value in the right
//!   run. The two lower halves and the two upper halves then merge as
//!   separate jobs with output ranges that are known up front.
//!
//! ## Invariants
//!
//! * The jobs of one round tile the array exactly: output ranges are
//!   contiguous, disjoint, and cover `[0, n)`.
//! * Merging is stable across runs: on ties the element from the left run
//!   is emitted first.
//!
//! ## Edge cases
//!
//! * A run with no partner (odd table length) becomes a single job with an
//!   empty right side, which degenerates into a copy.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::algorithms::search::split_point;
use crate::primitives::keys::RadixKey;
use crate::primitives::segments::{Segment, SegmentTable};

// ============================================================================
// MergeJob
// ============================================================================

/// One independent unit of merge work: two sorted input runs and the start
/// of the contiguous output range they fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeJob {
    /// Sorted run whose elements win ties.
    pub left: Segment,
    /// Sorted run merged against `left`.
    pub right: Segment,
    /// First output index of the merged result.
    pub out_start: usize,
}

impl MergeJob {
    /// Number of output elements this job produces.
    pub fn output_len(&self) -> usize {
        self.left.len() + self.right.len()
    }
}

// ============================================================================
// Round Planning
// ============================================================================

/// Build the jobs for one merge round over `table`.
///
/// Each adjacent pair of runs yields two jobs split at the left run's
/// midpoint element; the matching cut in the right run comes from a binary
/// search for that pivot.
pub fn plan_round<K: RadixKey>(data: &[K], table: &SegmentTable) -> Vec<MergeJob> {
    let mut jobs = Vec::with_capacity(table.len());

    let mut i = 0;
    while i < table.len() {
        let left = match table.get(i) {
            Some(seg) => seg,
            None => break,
        };
        let right = match table.get(i + 1) {
            Some(seg) => seg,
            None => {
                // Lone trailing run: carry it through as a copy.
                jobs.push(MergeJob {
                    left,
                    right: Segment::new(left.end, left.end),
                    out_start: left.start,
                });
                break;
            }
        };

        let mid = left.midpoint();
        let split = split_point(data, right, data[mid]);

        // The pivot element itself joins the lower half. Any cut leaving
        // the lower inputs <= pivot and the upper inputs >= pivot is a
        // valid decomposition; this one keeps the left sub-run non-empty.
        let lower = MergeJob {
            left: Segment::new(left.start, mid + 1),
            right: Segment::new(right.start, split),
            out_start: left.start,
        };
        let upper = MergeJob {
            left: Segment::new(mid + 1, left.end),
            right: Segment::new(split, right.end),
            out_start: left.start + lower.output_len(),
        };
        jobs.push(lower);
        jobs.push(upper);

        i += 2;
    }

    jobs
}

// ============================================================================
// Merge Kernel
// ============================================================================

/// Merge one job's two runs from `input` into `output`, where `output` is
/// the job's own window of length [`MergeJob::output_len`].
pub fn merge_range<K: RadixKey>(input: &[K], output: &mut [K], job: &MergeJob) {
    let mut i = job.left.start;
    let mut j = job.right.start;
    let mut out = 0;

    while i < job.left.end && j < job.right.end {
        // Strict comparison keeps the left run first on ties.
        if input[j] < input[i] {
            output[out] = input[j];
            j += 1;
        } else {
            output[out] = input[i];
            i += 1;
        }
        out += 1;
    }
    while i < job.left.end {
        output[out] = input[i];
        i += 1;
        out += 1;
    }
    while j < job.right.end {
        output[out] = input[j];
        j += 1;
        out += 1;
    }
}
