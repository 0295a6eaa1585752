#![cfg(feature = "dev")]

use lsdsort::internals::primitives::buffer::ScratchBuffer;
use lsdsort::internals::primitives::errors::SortError;

// ============================================================================
// Allocation
// ============================================================================

#[test]
fn allocates_a_zero_filled_buffer() {
    let buffer = ScratchBuffer::<f64>::try_new(16).unwrap();
    assert_eq!(buffer.len(), 16);
    assert!(buffer.iter().all(|&v| v == 0.0));
}

#[test]
fn zero_length_buffers_are_fine() {
    let buffer = ScratchBuffer::<f64>::try_new(0).unwrap();
    assert!(buffer.is_empty());
}

#[test]
fn impossible_reservations_report_allocation_failure() {
    let result = ScratchBuffer::<f64>::try_new(usize::MAX);
    assert_eq!(
        result.unwrap_err(),
        SortError::AllocationFailure {
            requested: usize::MAX
        }
    );
}
