//! Configuration validation.
//!
//! ## Purpose
//!
//! This module checks builder configuration before a sorter is constructed,
//! so misuse surfaces at `build()` time rather than mid-sort.
//!
//! ## Design notes
//!
//! * The worker hint is advisory and clamped during planning, so almost any
//!   value is accepted here; only an explicit 0 is rejected because no
//!   clamp can make sense of it.

// Internal dependencies
use crate::primitives::errors::SortError;

// ============================================================================
// Validator
// ============================================================================

/// Validates builder configuration.
pub struct Validator;

impl Validator {
    /// Reject an explicitly configured worker hint of 0.
    pub fn validate_workers(workers: Option<usize>) -> Result<(), SortError> {
        if let Some(0) = workers {
            return Err(SortError::InvalidWorkerHint(0));
        }
        Ok(())
    }

    /// Reject builders where a parameter was set more than once.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SortError> {
        if let Some(parameter) = duplicate_param {
            return Err(SortError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
