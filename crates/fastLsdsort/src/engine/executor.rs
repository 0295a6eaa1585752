//! Parallel pass implementations and builder wiring.
//!
//! ## Purpose
//!
//! This module implements the radix and merge passes on a rayon thread
//! pool and installs them into a core-crate builder.
//!
//! ## Design notes
//!
//! * **Disjoint carving**: Both passes split the mutable slices into
//!   non-overlapping chunks before any thread runs. Partitions tile the
//!   data slice and merge jobs tile the scratch slice, so `split_at_mut`
//!   walks each boundary in order and no synchronization is needed.
//! * **Same kernels**: The per-chunk work is the core crate's own
//!   `sort_segment` and `merge_range`; this module only changes where they
//!   run.
//!
//! ## Invariants
//!
//! * Pass functions assume the invariants the core executor guarantees:
//!   segments are in positional order and tile the data slice, and jobs
//!   are in output order and tile the scratch slice.

// Feature-gated imports
#[cfg(feature = "cpu")]
use lsdsort::internals::algorithms::merge::{merge_range, MergeJob};
#[cfg(feature = "cpu")]
use lsdsort::internals::algorithms::radix::sort_segment;
#[cfg(feature = "cpu")]
use lsdsort::internals::primitives::segments::{Segment, SegmentTable};
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use lsdsort::internals::api::{Sorter, SorterBuilder};
use lsdsort::internals::primitives::errors::SortError;
use lsdsort::internals::primitives::keys::RadixKey;

// ============================================================================
// Parallel Passes
// ============================================================================

/// Radix sort every partition on the thread pool.
#[cfg(feature = "cpu")]
pub fn sort_pass_parallel<K: RadixKey + Send + Sync>(
    data: &mut [K],
    scratch: &mut [K],
    segments: &SegmentTable,
) {
    let mut chunks = Vec::with_capacity(segments.len());
    let mut rest_data = data;
    let mut rest_scratch = scratch;
    for seg in segments.iter() {
        let (chunk, rd) = rest_data.split_at_mut(seg.len());
        let (aux, rs) = rest_scratch.split_at_mut(seg.len());
        rest_data = rd;
        rest_scratch = rs;
        chunks.push((chunk, aux));
    }

    chunks.into_par_iter().for_each(|(chunk, aux)| {
        let len = chunk.len();
        sort_segment(chunk, aux, Segment::new(0, len));
    });
}

/// Execute every merge job of one round on the thread pool.
#[cfg(feature = "cpu")]
pub fn merge_pass_parallel<K: RadixKey + Send + Sync>(
    data: &[K],
    scratch: &mut [K],
    jobs: &[MergeJob],
) {
    let mut windows = Vec::with_capacity(jobs.len());
    let mut rest = scratch;
    for job in jobs {
        let (window, r) = rest.split_at_mut(job.output_len());
        windows.push(window);
        rest = r;
    }

    jobs.par_iter()
        .zip(windows.into_par_iter())
        .for_each(|(job, window)| merge_range(data, window, job));
}

// ============================================================================
// Builder Wiring
// ============================================================================

/// Install the parallel passes into `builder` and build the sorter.
///
/// With the `cpu` feature disabled, or `parallel(false)` configured, the
/// builder is passed through unchanged and the sort runs sequentially.
pub fn build_parallel<K: RadixKey + Send + Sync>(
    builder: SorterBuilder<K>,
) -> Result<Sorter<K>, SortError> {
    #[cfg(feature = "cpu")]
    let builder = {
        let mut builder = builder;
        if builder.parallel.unwrap_or(true) {
            if builder.workers.is_none() {
                builder = builder.workers(rayon::current_num_threads());
            }
            builder = builder
                .with_custom_sort_pass(sort_pass_parallel::<K>)
                .with_custom_merge_pass(merge_pass_parallel::<K>);
        }
        builder
    };

    builder.build()
}
