//! High-level API for trend-line regression.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuration and an adapter selection step that hands
//! over to the processor-specific builder (Stream or Segmented).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter builders.
//! * **Validated**: Parameters are validated when `.build()` is called on the adapter.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`TrendlineBuilder`] via `Trendline::new()`.
//! 2. Chain configuration methods (`.segments()`).
//! 3. Select an adapter via `.adapter(Adapter::Stream)` to get an execution builder.

// External dependencies
use core::marker::PhantomData;
use num_traits::Float;

// Internal dependencies
use crate::adapters::accumulator::StreamBuilder;
use crate::adapters::segmented::SegmentedBuilder;

// Publicly re-exported types
pub use crate::adapters::accumulator::RegressionAccumulator;
pub use crate::adapters::segmented::SegmentedRegression;
pub use crate::engine::output::Regression;
pub use crate::primitives::errors::RegressionError;
pub use crate::primitives::sample::Sample;

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Segmented, Stream};
}

/// Fluent builder for configuring trend-line fitting.
#[derive(Debug, Clone)]
pub struct TrendlineBuilder<T> {
    /// Number of equal segments (Segmented only).
    pub segments: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,

    _marker: PhantomData<T>,
}

impl<T: Float> Default for TrendlineBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> TrendlineBuilder<T> {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: TrendlineAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            segments: None,
            duplicate_param: None,
            _marker: PhantomData,
        }
    }

    /// Set the number of equal segments to fit (Segmented only).
    pub fn segments(mut self, segments: usize) -> Self {
        if self.segments.is_some() {
            self.duplicate_param = Some("segments");
        }
        self.segments = Some(segments);
        self
    }
}

// ============================================================================
// Adapter Selection
// ============================================================================

/// Trait for transitioning from the generic builder to a processor builder.
pub trait TrendlineAdapter<T: Float> {
    /// The processor-specific builder produced by the conversion.
    type Output;

    /// Convert a generic builder into a processor-specific builder.
    fn convert(builder: TrendlineBuilder<T>) -> Self::Output;
}

/// Sample-at-a-time streaming accumulator.
///
/// Ignores `segments`, but duplicate parameters still fail `build`.
#[derive(Debug, Clone, Copy)]
pub struct Stream;

/// One trend line per equal segment of a recorded series.
#[derive(Debug, Clone, Copy)]
pub struct Segmented;

impl<T: Float> TrendlineAdapter<T> for Stream {
    type Output = StreamBuilder<T>;

    fn convert(builder: TrendlineBuilder<T>) -> Self::Output {
        let mut result = StreamBuilder::default();

        // Segments are ignored; duplicates are reported like any adapter.
        result.duplicate_param = builder.duplicate_param;

        result
    }
}

impl<T: Float> TrendlineAdapter<T> for Segmented {
    type Output = SegmentedBuilder<T>;

    fn convert(builder: TrendlineBuilder<T>) -> Self::Output {
        let mut result = SegmentedBuilder::default();

        if let Some(segments) = builder.segments {
            result.segments = segments;
        }
        result.duplicate_param = builder.duplicate_param;

        result
    }
}
