#![cfg(feature = "dev")]

use std::sync::atomic::{AtomicUsize, Ordering};

use lsdsort::internals::algorithms::merge::{merge_range, MergeJob};
use lsdsort::internals::algorithms::radix::sort_segment;
use lsdsort::internals::engine::executor::SortExecutor;
use lsdsort::internals::primitives::segments::SegmentTable;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ============================================================================
// End-to-end runs
// ============================================================================

#[test]
fn sorts_across_partitions() {
    let mut data = vec![9.0, -2.0, 7.0, 1.0, -8.0, 3.0, 0.0, -4.0];
    let report = SortExecutor::new().run(&mut data, 4).unwrap();

    assert_eq!(data, vec![-8.0, -4.0, -2.0, 0.0, 1.0, 3.0, 7.0, 9.0]);
    assert_eq!(report.len, 8);
    assert_eq!(report.workers, 4);
    assert_eq!(report.merge_rounds, 2);
}

#[test]
fn merge_round_count_follows_the_partition_count() {
    let mut rng = StdRng::seed_from_u64(7);
    for (hint, rounds) in [(2usize, 1usize), (4, 2), (8, 3), (16, 4)] {
        let mut data: Vec<f64> = (0..256).map(|_| rng.gen_range(-1e6..1e6)).collect();
        let mut expected = data.clone();
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let report = SortExecutor::new().run(&mut data, hint).unwrap();
        assert_eq!(data, expected);
        assert_eq!(report.workers, hint);
        assert_eq!(report.merge_rounds, rounds);
    }
}

#[test]
fn trivial_inputs_skip_every_stage() {
    let mut empty: Vec<f64> = vec![];
    let report = SortExecutor::new().run(&mut empty, 8).unwrap();
    assert_eq!(report.len, 0);
    assert_eq!(report.workers, 1);
    assert_eq!(report.merge_rounds, 0);

    let mut single = vec![5.0];
    let report = SortExecutor::new().run(&mut single, 8).unwrap();
    assert_eq!(single, vec![5.0]);
    assert_eq!(report.workers, 1);
    assert_eq!(report.merge_rounds, 0);
}

#[test]
fn duplicate_heavy_input_is_preserved() {
    let mut data = vec![2.0; 8];
    let report = SortExecutor::new().run(&mut data, 4).unwrap();
    assert_eq!(data, vec![2.0; 8]);
    assert_eq!(report.workers, 4);
    assert_eq!(report.merge_rounds, 2);
}

// ============================================================================
// Pass hooks
// ============================================================================

static SORT_PASS_CALLS: AtomicUsize = AtomicUsize::new(0);
static MERGE_PASS_CALLS: AtomicUsize = AtomicUsize::new(0);

fn counting_sort_pass(data: &mut [f64], scratch: &mut [f64], segments: &SegmentTable) {
    SORT_PASS_CALLS.fetch_add(1, Ordering::SeqCst);
    for seg in segments.iter() {
        sort_segment(data, scratch, seg);
    }
}

fn counting_merge_pass(data: &[f64], scratch: &mut [f64], jobs: &[MergeJob]) {
    MERGE_PASS_CALLS.fetch_add(1, Ordering::SeqCst);
    for job in jobs {
        let window = &mut scratch[job.out_start..job.out_start + job.output_len()];
        merge_range(data, window, job);
    }
}

#[test]
fn custom_passes_replace_the_sequential_ones() {
    let executor = SortExecutor {
        custom_sort_pass: Some(counting_sort_pass),
        custom_merge_pass: Some(counting_merge_pass),
    };

    let mut data = vec![4.0, -1.0, 3.0, -2.0, 8.0, 6.0, -7.0, 5.0];
    let report = executor.run(&mut data, 4).unwrap();

    assert_eq!(data, vec![-7.0, -2.0, -1.0, 3.0, 4.0, 5.0, 6.0, 8.0]);
    assert_eq!(report.merge_rounds, 2);
    assert_eq!(SORT_PASS_CALLS.load(Ordering::SeqCst), 1);
    assert_eq!(MERGE_PASS_CALLS.load(Ordering::SeqCst), 2);
}
