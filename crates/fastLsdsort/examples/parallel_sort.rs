//! Parallel sorting example.
//!
//! Run with: cargo run --example parallel_sort

use fastLsdsort::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() -> Result<(), SortError> {
    let mut rng = StdRng::seed_from_u64(99);
    let mut data: Vec<f64> = (0..1_000_000).map(|_| rng.gen_range(-1e9..1e9)).collect();

    let sorter = ParallelSorterBuilder::new().build()?;
    let report = sorter.sort(&mut data)?;

    println!("{report}");
    println!("first: {:.3}, last: {:.3}", data[0], data[data.len() - 1]);

    assert!(data.windows(2).all(|w| w[0] <= w[1]));
    Ok(())
}
