//! Streaming accumulator for least-squares trend lines.
//!
//! ## Purpose
//!
//! This module provides `RegressionAccumulator`, which ingests (x, y) samples
//! one at a time and can produce a `Regression` at any point without ever
//! storing the samples.
//!
//! ## Design notes
//!
//! * **Storage**: Running sums plus three scalars (`start`, `end`, `width`).
//! * **Processing**: O(1) work per sample, including the width update.
//! * **Ownership**: A plain value mutated through `&mut self`; share it across
//!   threads only behind external synchronization.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Online width**: After each sample (from the second on) the current fit
//!   is solved with that sample included and the sample's residual against it
//!   raises `width`. Earlier samples are never re-measured, so `width` can
//!   differ from the largest residual against the final line.
//! * **Ingestion order**: `start` is the first x seen and `end` the latest,
//!   not the minimum and maximum.
//!
//! ## Invariants
//!
//! * `len()` equals the number of samples added since construction or `reset`.
//! * `width` never decreases between additions.
//! * Results are only produced once at least two samples are present.
//!
//! ## Non-goals
//!
//! * This adapter does not guard against identical x values; the fit is then
//!   infinite or NaN.
//! * This adapter does not merge two accumulators.
//! * This adapter does not validate inputs for finiteness.

// External dependencies
use core::marker::PhantomData;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::sums::RunningSums;
use crate::engine::output::Regression;
use crate::engine::validator::Validator;
use crate::primitives::errors::RegressionError;
use crate::primitives::sample::Sample;

/// Samples needed before a line is defined.
pub const MIN_SAMPLES: usize = 2;

// ============================================================================
// Stream Builder
// ============================================================================

/// Builder for a streaming accumulator.
///
/// A stream has no tunable parameters, so values such as `segments` set on
/// the generic builder are discarded. Setting any parameter twice is still
/// rejected with `DuplicateParameter`, the same as for every other adapter.
#[derive(Debug, Clone)]
pub struct StreamBuilder<T> {
    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,

    _marker: PhantomData<T>,
}

impl<T: Float> Default for StreamBuilder<T> {
    fn default() -> Self {
        Self {
            duplicate_param: None,
            _marker: PhantomData,
        }
    }
}

impl<T: Float> StreamBuilder<T> {
    /// Build an empty accumulator.
    ///
    /// Fails with `DuplicateParameter` if the generic builder saw a parameter
    /// more than once, even one this adapter ignores.
    pub fn build(self) -> Result<RegressionAccumulator<T>, RegressionError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(RegressionAccumulator::new())
    }
}

// ============================================================================
// Regression Accumulator
// ============================================================================

/// Single-pass ordinary-least-squares accumulator.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionAccumulator<T> {
    sums: RunningSums<T>,
    count: usize,
    start: T,
    end: T,
    width: T,
}

impl<T: Float> Default for RegressionAccumulator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> RegressionAccumulator<T> {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self {
            sums: RunningSums::new(),
            count: 0,
            start: T::zero(),
            end: T::zero(),
            width: T::zero(),
        }
    }

    // ========================================================================
    // Ingestion
    // ========================================================================

    /// Ingest one sample.
    pub fn add(&mut self, sample: Sample<T>) {
        let Sample { x, y } = sample;

        if self.count == 0 {
            self.start = x;
        }
        self.end = x;

        self.count += 1;
        self.sums.update(x, y);

        if self.count >= MIN_SAMPLES {
            let residual = self.sums.solve().residual(x, y);
            // NaN residuals (degenerate x) leave width untouched.
            self.width = self.width.max(residual);
        }

        log::trace!(
            "sample #{} ingested, width={:?}",
            self.count,
            self.width.to_f64()
        );
    }

    /// Ingest one sample given as two scalars.
    #[inline]
    pub fn add_point(&mut self, x: T, y: T) {
        self.add(Sample::new(x, y));
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Current least-squares slope.
    pub fn gradient(&self) -> Result<T, RegressionError> {
        self.ensure_sufficient()?;
        Ok(self.sums.gradient())
    }

    /// Current least-squares intercept.
    pub fn intercept(&self) -> Result<T, RegressionError> {
        self.ensure_sufficient()?;
        Ok(self.sums.intercept())
    }

    /// Pearson correlation coefficient of the samples ingested so far.
    pub fn correlation(&self) -> Result<T, RegressionError> {
        self.ensure_sufficient()?;
        Ok(self.sums.correlation())
    }

    /// Snapshot the current fit.
    pub fn regression(&self) -> Result<Regression<T>, RegressionError> {
        self.ensure_sufficient()?;

        let fit = self.sums.solve();
        let regression = Regression {
            start: self.start,
            end: self.end,
            intercept: fit.intercept,
            gradient: fit.gradient,
            width: self.width,
        };

        log::debug!(
            "regression over {} samples: gradient={:?} intercept={:?} width={:?}",
            self.count,
            fit.gradient.to_f64(),
            fit.intercept.to_f64(),
            self.width.to_f64()
        );

        Ok(regression)
    }

    /// Number of samples ingested.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether no sample has been ingested.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The running sums backing this accumulator.
    #[inline]
    pub fn sums(&self) -> &RunningSums<T> {
        &self.sums
    }

    /// Discard all ingested state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn ensure_sufficient(&self) -> Result<(), RegressionError> {
        if self.count < MIN_SAMPLES {
            return Err(RegressionError::InsufficientData {
                got: self.count,
                min: MIN_SAMPLES,
            });
        }
        Ok(())
    }
}

// ============================================================================
// Iterator Integration
// ============================================================================

impl<T: Float> Extend<Sample<T>> for RegressionAccumulator<T> {
    fn extend<I: IntoIterator<Item = Sample<T>>>(&mut self, iter: I) {
        for sample in iter {
            self.add(sample);
        }
    }
}

impl<T: Float> Extend<(T, T)> for RegressionAccumulator<T> {
    fn extend<I: IntoIterator<Item = (T, T)>>(&mut self, iter: I) {
        self.extend(iter.into_iter().map(Sample::from));
    }
}

impl<T: Float> FromIterator<Sample<T>> for RegressionAccumulator<T> {
    fn from_iter<I: IntoIterator<Item = Sample<T>>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

impl<T: Float> FromIterator<(T, T)> for RegressionAccumulator<T> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}
