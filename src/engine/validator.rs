//! Configuration validation for trend-line builders.
//!
//! ## Purpose
//!
//! This module checks builder parameters before a processor is constructed.
//! Sample values are never validated: the accumulator accepts any input.
//! Only the shape of slice inputs is checked.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Deferred**: Builders record problems while chaining and report them here.
//!
//! ## Non-goals
//!
//! * This module does not inspect or correct sample data.

// Internal dependencies
use crate::primitives::errors::RegressionError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for builder configuration and slice inputs.
pub struct Validator;

impl Validator {
    /// Validate that parallel coordinate slices have matching lengths.
    pub fn validate_lengths<T>(x: &[T], y: &[T]) -> Result<(), RegressionError> {
        if x.len() != y.len() {
            return Err(RegressionError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(())
    }

    /// Validate the number of segments for a segmented fit.
    pub fn validate_segments(segments: usize) -> Result<(), RegressionError> {
        if segments == 0 {
            return Err(RegressionError::InvalidSegments(segments));
        }
        Ok(())
    }

    /// Validate that no parameter was set more than once.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), RegressionError> {
        if let Some(param) = duplicate_param {
            return Err(RegressionError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
