//! Output type for a finalized regression.
//!
//! ## Purpose
//!
//! This module defines `Regression`, the immutable snapshot produced by the
//! accumulator, and the geometry a renderer needs to draw it as a thick line
//! segment over the observed x-range.
//!
//! ## Design notes
//!
//! * **Snapshot**: `Copy` value with no link back to the accumulator.
//! * **Generics**: Generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `start` and `end` are in ingestion order; `start > end` is possible.
//! * `width` is non-negative unless an input was NaN.
//!
//! ## Non-goals
//!
//! * This module does not render anything.
//! * This module does not recompute width against the final coefficients.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Result Structure
// ============================================================================

/// Least-squares trend line over a run of samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Regression<T> {
    /// x of the first ingested sample.
    pub start: T,

    /// x of the most recently ingested sample.
    pub end: T,

    /// Value of the line at `x = 0`.
    pub intercept: T,

    /// Slope of the line.
    pub gradient: T,

    /// Largest absolute residual seen during ingestion, each sample measured
    /// against the fit as it stood right after that sample was added.
    pub width: T,
}

impl<T: Float> Regression<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Evaluate the line at `x`.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.gradient * x + self.intercept
    }

    /// Signed length of the x-range, `end − start`.
    #[inline]
    pub fn span(&self) -> T {
        self.end - self.start
    }

    /// The line segment from `start` to `end`.
    pub fn endpoints(&self) -> ((T, T), (T, T)) {
        (
            (self.start, self.predict(self.start)),
            (self.end, self.predict(self.end)),
        )
    }

    /// Evenly spaced points along the line, beginning at `start`.
    ///
    /// The step is `span / points`, so the last point sits one step short of
    /// `end`.
    pub fn line_points(&self, points: usize) -> Vec<(T, T)> {
        let Some(count) = T::from(points).filter(|c| *c > T::zero()) else {
            return Vec::new();
        };
        let step = self.span() / count;

        let mut out = Vec::with_capacity(points);
        let mut i = T::zero();
        for _ in 0..points {
            let x = self.start + step * i;
            out.push((x, self.predict(x)));
            i = i + T::one();
        }
        out
    }

    /// Stroke thickness for drawing the line, `width · 2 · padding`.
    #[inline]
    pub fn stroke_width(&self, padding: T) -> T {
        self.width * (T::one() + T::one()) * padding
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Regression<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Regression:")?;
        writeln!(f, "  Range:     {:.4} .. {:.4}", self.start, self.end)?;
        writeln!(f, "  Gradient:  {:.6}", self.gradient)?;
        writeln!(f, "  Intercept: {:.6}", self.intercept)?;
        write!(f, "  Width:     {:.6}", self.width)
    }
}
