//! Segmented trend lines over a recorded series.
//!
//! ## Purpose
//!
//! This module cuts a series into equal-length consecutive segments and fits
//! one trend line per segment, each through its own streaming accumulator.
//! It is the piecewise view a chart uses to overlay local trends on a curve.
//!
//! ## Design notes
//!
//! * **Segment size**: `len / segments`, rounded down.
//! * **Remainder**: Trailing samples that do not fill a segment are ignored.
//! * **Isolation**: Every segment gets a fresh accumulator, so widths never
//!   leak across segments.
//!
//! ## Invariants
//!
//! * On success the output has exactly `segments` regressions, in series order.
//!
//! ## Non-goals
//!
//! * This adapter does not choose breakpoints adaptively.
//! * This adapter does not sort the input.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::marker::PhantomData;
use num_traits::Float;

// Internal dependencies
use crate::adapters::accumulator::{RegressionAccumulator, MIN_SAMPLES};
use crate::engine::output::Regression;
use crate::engine::validator::Validator;
use crate::primitives::errors::RegressionError;
use crate::primitives::sample::Sample;

/// Segment count used when none is configured.
pub const DEFAULT_SEGMENTS: usize = 10;

// ============================================================================
// Segmented Builder
// ============================================================================

/// Builder for a segmented fitter.
#[derive(Debug, Clone)]
pub struct SegmentedBuilder<T> {
    /// Number of equal segments to cut the series into
    pub segments: usize,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,

    _marker: PhantomData<T>,
}

impl<T: Float> Default for SegmentedBuilder<T> {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
            duplicate_param: None,
            _marker: PhantomData,
        }
    }
}

impl<T: Float> SegmentedBuilder<T> {
    /// Set the number of segments.
    pub fn segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    /// Build the segmented fitter.
    pub fn build(self) -> Result<SegmentedRegression<T>, RegressionError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_segments(self.segments)?;

        Ok(SegmentedRegression {
            segments: self.segments,
            _marker: PhantomData,
        })
    }
}

// ============================================================================
// Segmented Regression
// ============================================================================

/// Fits one trend line per equal-length segment of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentedRegression<T> {
    segments: usize,
    _marker: PhantomData<T>,
}

impl<T: Float> SegmentedRegression<T> {
    /// Number of segments produced per fit.
    pub fn segments(&self) -> usize {
        self.segments
    }

    /// Samples per segment for a series of `len` samples.
    pub fn segment_size(&self, len: usize) -> usize {
        len / self.segments
    }

    /// Fit every segment of `samples`.
    pub fn fit(&self, samples: &[Sample<T>]) -> Result<Vec<Regression<T>>, RegressionError> {
        let size = self.segment_size(samples.len());
        if size < MIN_SAMPLES {
            return Err(RegressionError::InsufficientData {
                got: size,
                min: MIN_SAMPLES,
            });
        }

        log::debug!(
            "fitting {} segments of {} samples ({} dropped)",
            self.segments,
            size,
            samples.len() - size * self.segments
        );

        samples
            .chunks_exact(size)
            .take(self.segments)
            .map(|segment| {
                segment
                    .iter()
                    .copied()
                    .collect::<RegressionAccumulator<T>>()
                    .regression()
            })
            .collect()
    }

    /// Fit every segment of a series given as parallel coordinate slices.
    ///
    /// Fails with `MismatchedInputs` when the slices differ in length.
    pub fn fit_xy(&self, x: &[T], y: &[T]) -> Result<Vec<Regression<T>>, RegressionError> {
        Validator::validate_lengths(x, y)?;

        let samples: Vec<Sample<T>> = x
            .iter()
            .zip(y.iter())
            .map(|(&xi, &yi)| Sample::new(xi, yi))
            .collect();
        self.fit(&samples)
    }
}
