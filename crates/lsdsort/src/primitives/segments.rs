//! Segment and boundary-table bookkeeping.
//!
//! ## Purpose
//!
//! This module defines the `Segment` half-open range and the `SegmentTable`
//! that tracks the sorted runs of the array between merge rounds.
//!
//! ## Key concepts
//!
//! * **Segment**: A half-open index range `[start, end)` into the data slice.
//! * **Segment table**: The ordered, non-overlapping set of sorted runs that
//!   tile the array. After each merge round adjacent runs have fused, so the
//!   table is coarsened by collapsing pairs.
//!
//! ## Invariants
//!
//! * Segments in a table are in ascending positional order and tile the
//!   array exactly: each segment's `start` equals the previous `end`.
//! * `coarsen` halves the table size (rounding up); a lone trailing segment
//!   is carried unchanged into the next round.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// ============================================================================
// Segment
// ============================================================================

/// A half-open index range `[start, end)` into the data slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Inclusive start index.
    pub start: usize,
    /// Exclusive end index.
    pub end: usize,
}

impl Segment {
    /// Create a segment covering `[start, end)`.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of elements in the segment.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the segment covers no elements.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Index of the middle element, biased low for even lengths.
    ///
    /// Used to pick the pivot when splitting a pair of sorted runs for
    /// merging.
    pub fn midpoint(&self) -> usize {
        (self.start + self.end) / 2
    }
}

// ============================================================================
// SegmentTable
// ============================================================================

/// Ordered table of the sorted runs currently tiling the array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentTable {
    segments: Vec<Segment>,
}

impl SegmentTable {
    /// Build a table from segments already in positional order.
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Number of runs in the table.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the table holds no runs.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The run at position `i`, if any.
    pub fn get(&self, i: usize) -> Option<Segment> {
        self.segments.get(i).copied()
    }

    /// Iterate over the runs in positional order.
    pub fn iter(&self) -> impl Iterator<Item = Segment> + '_ {
        self.segments.iter().copied()
    }

    /// Collapse adjacent pairs after a merge round.
    ///
    /// Each pair `(2i, 2i + 1)` fuses into one run spanning both; a lone
    /// trailing run is kept as-is.
    pub fn coarsen(&mut self) {
        let mut fused = Vec::with_capacity(self.segments.len().div_ceil(2));
        let mut pairs = self.segments.chunks_exact(2);
        for pair in &mut pairs {
            fused.push(Segment::new(pair[0].start, pair[1].end));
        }
        if let Some(&tail) = pairs.remainder().first() {
            fused.push(tail);
        }
        self.segments = fused;
    }
}
