//! Error types for sorting operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while configuring or
//! running a sort, including allocation failure, builder misuse, and input
//! container limitations.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., the requested
//!   allocation size).
//! * **Minimal**: The sort itself is a closed-form batch computation; almost
//!   all failure surface lives at the edges (allocation, configuration).
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic
//!   messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Invariants
//!
//! * A returned error means no partial sort was applied: the input slice is
//!   left with its original contents.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide retry or recovery strategies; there is no
//!   meaningful "retry a sort".

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for sorting operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// The scratch buffer could not be allocated; the input is unchanged.
    AllocationFailure {
        /// Number of elements the scratch buffer required.
        requested: usize,
    },

    /// An explicitly configured worker count of 0. The hint is advisory and
    /// any count >= 1 is accepted (and clamped), but 0 is meaningless.
    InvalidWorkerHint(usize),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::AllocationFailure { requested } => {
                write!(
                    f,
                    "Failed to allocate scratch buffer for {requested} elements"
                )
            }
            Self::InvalidWorkerHint(hint) => {
                write!(f, "Invalid worker hint: {hint} (must be at least 1)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SortError {}
