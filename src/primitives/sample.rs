//! Sample type for (x, y) observations.
//!
//! A `Sample` is the unit of ingestion for the accumulator. It is a plain
//! `Copy` value; the accumulator folds it into running sums and never keeps it.

// External dependencies
use num_traits::Float;

/// One observed (x, y) pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample<T> {
    /// Independent variable.
    pub x: T,

    /// Dependent variable.
    pub y: T,
}

impl<T: Float> Sample<T> {
    /// Create a sample from its coordinates.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Float> From<(T, T)> for Sample<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T: Float> From<[T; 2]> for Sample<T> {
    #[inline]
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y }
    }
}

impl<T: Float> From<Sample<T>> for (T, T) {
    #[inline]
    fn from(sample: Sample<T>) -> Self {
        (sample.x, sample.y)
    }
}
