//! Pass orchestration.
//!
//! ## Purpose
//!
//! This module drives a full sort: plan partitions, radix sort each one,
//! then run merge rounds until a single sorted run spans the array.
//!
//! ## Design notes
//!
//! * **Pass hooks**: The executor runs its passes sequentially by default.
//!   Extension crates can install replacement pass functions that execute
//!   the same per-segment and per-job kernels in parallel; the hooks are
//!   plain function pointers so the core crate carries no threading
//!   dependency.
//! * **Ping-pong merging**: Each merge round writes the fused runs into the
//!   scratch buffer, then copies it back, keeping `data` the authoritative
//!   slice between rounds.
//!
//! ## Invariants
//!
//! * Inputs of length 0 or 1 return immediately: no planning, no
//!   allocation, no passes.
//! * If scratch allocation fails, `data` still holds its original contents.

// Internal dependencies
use crate::algorithms::merge::{merge_range, plan_round, MergeJob};
use crate::algorithms::radix::sort_segment;
use crate::engine::output::SortReport;
use crate::engine::planner::{ExecutionPlan, Planner};
use crate::primitives::buffer::ScratchBuffer;
use crate::primitives::errors::SortError;
use crate::primitives::keys::RadixKey;
use crate::primitives::segments::SegmentTable;

// ============================================================================
// Pass Hooks
// ============================================================================

/// Replacement for the per-partition radix pass.
///
/// Receives the full data slice, the full scratch slice, and the partition
/// table; must leave every partition of `data` sorted.
pub type SortPassFn<K> = fn(&mut [K], &mut [K], &SegmentTable);

/// Replacement for the per-round merge pass.
///
/// Receives the full data slice, the full scratch slice, and the round's
/// jobs; must execute every job into its output range of scratch.
pub type MergePassFn<K> = fn(&[K], &mut [K], &[MergeJob]);

// ============================================================================
// SortExecutor
// ============================================================================

/// Runs the partition, radix, and merge stages of one sort.
#[derive(Debug, Clone)]
pub struct SortExecutor<K: RadixKey> {
    /// Optional replacement for the sequential radix pass.
    pub custom_sort_pass: Option<SortPassFn<K>>,
    /// Optional replacement for the sequential merge pass.
    pub custom_merge_pass: Option<MergePassFn<K>>,
}

impl<K: RadixKey> Default for SortExecutor<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: RadixKey> SortExecutor<K> {
    /// Executor running every pass sequentially.
    pub fn new() -> Self {
        Self {
            custom_sort_pass: None,
            custom_merge_pass: None,
        }
    }

    /// Sort `data` in place under the advisory `worker_hint`.
    pub fn run(&self, data: &mut [K], worker_hint: usize) -> Result<SortReport, SortError> {
        let n = data.len();
        if n <= 1 {
            return Ok(SortReport {
                len: n,
                workers: 1,
                merge_rounds: 0,
            });
        }

        let ExecutionPlan {
            workers,
            mut segments,
        } = Planner::plan(n, worker_hint);
        let mut scratch = ScratchBuffer::try_new(n)?;

        // Stage 1: radix sort each partition independently.
        match self.custom_sort_pass {
            Some(pass) => pass(data, &mut scratch, &segments),
            None => {
                for seg in segments.iter() {
                    sort_segment(data, &mut scratch, seg);
                }
            }
        }

        // Stage 2: fuse partitions pairwise until one run remains.
        let mut merge_rounds = 0;
        while segments.len() > 1 {
            let jobs = plan_round(data, &segments);
            match self.custom_merge_pass {
                Some(pass) => pass(data, &mut scratch, &jobs),
                None => {
                    for job in &jobs {
                        let window =
                            &mut scratch[job.out_start..job.out_start + job.output_len()];
                        merge_range(data, window, job);
                    }
                }
            }
            data.copy_from_slice(&scratch);
            segments.coarsen();
            merge_rounds += 1;
        }

        Ok(SortReport {
            len: n,
            workers,
            merge_rounds,
        })
    }
}
