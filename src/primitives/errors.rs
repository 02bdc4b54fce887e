//! Error types for trend-line regression.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while fitting
//! least-squares trend lines, both in the streaming accumulator and in the
//! segmented fitting front end.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the values needed for diagnosis (sample counts).
//! * **No-std**: No allocation is needed to build or display any variant.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Invariants
//!
//! * `InsufficientData` is the only error the accumulator itself can raise.
//! * Numerical degeneracy (identical x values) is never reported as an error.
//! * Only slice-based entry points report `MismatchedInputs`.
//!
//! ## Non-goals
//!
//! * This module does not provide error recovery or retry strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for regression operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegressionError {
    /// Fewer samples were ingested than a least-squares line needs.
    InsufficientData {
        /// Number of samples ingested.
        got: usize,
        /// Minimum required samples.
        min: usize,
    },

    /// `x` and `y` slices must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` slice.
        x_len: usize,
        /// Number of elements in the `y` slice.
        y_len: usize,
    },

    /// A segmented fit needs at least one segment.
    InvalidSegments(usize),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for RegressionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InsufficientData { got, min } => {
                write!(f, "Insufficient data: got {got} samples, need at least {min}")
            }
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::InvalidSegments(segments) => {
                write!(f, "Invalid segments: {segments} (must be at least 1)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for RegressionError {}
