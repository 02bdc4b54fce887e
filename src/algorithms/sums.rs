//! Running sums and least-squares solving.
//!
//! ## Purpose
//!
//! This module holds the sufficient statistics of an ordinary least-squares
//! line (`n, Σx, Σy, Σxy, Σx², Σy²`) and the closed-form formulas that turn
//! them into a gradient and an intercept.
//!
//! ## Design notes
//!
//! * **Single pass**: Sums-of-products form gives O(1) update and O(1) space.
//! * **Raw formulas**: No guard against a zero denominator; callers decide
//!   how many samples are enough.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Denominator**: `n·Σx² − Σx·Σx`, which is `n²` times the population
//!   variance of x. It is zero when all x values are identical.
//! * **Cancellation**: For large or poorly centered x the denominator is the
//!   difference of two large, nearly equal numbers and loses precision.
//!
//! ## Invariants
//!
//! * `n` equals the number of `update` calls since construction.
//! * Every sum is the plain left-to-right total of its term.
//!
//! ## Non-goals
//!
//! * This module does not track domain bounds or residual width.
//! * This module does not support weighted samples or merging two sum sets.

// External dependencies
use num_traits::Float;

// ============================================================================
// Linear Fit
// ============================================================================

/// Least-squares line coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit<T> {
    /// Slope of the line.
    pub gradient: T,

    /// Value of the line at `x = 0`.
    pub intercept: T,
}

impl<T: Float> LinearFit<T> {
    /// Predict y-value for a given x using the line.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.gradient * x + self.intercept
    }

    /// Absolute vertical distance between `(x, y)` and the line.
    #[inline]
    pub fn residual(&self, x: T, y: T) -> T {
        (y - self.predict(x)).abs()
    }
}

// ============================================================================
// Running Sums
// ============================================================================

/// Sufficient statistics for a simple linear regression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningSums<T> {
    /// Number of samples, kept in the float domain for the formulas.
    pub n: T,

    /// Σx
    pub sum_x: T,

    /// Σy
    pub sum_y: T,

    /// Σxy
    pub sum_xy: T,

    /// Σx²
    pub sum_xx: T,

    /// Σy², only consumed by `correlation`.
    pub sum_yy: T,
}

impl<T: Float> Default for RunningSums<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> RunningSums<T> {
    /// Create an empty set of sums.
    pub fn new() -> Self {
        Self {
            n: T::zero(),
            sum_x: T::zero(),
            sum_y: T::zero(),
            sum_xy: T::zero(),
            sum_xx: T::zero(),
            sum_yy: T::zero(),
        }
    }

    /// Fold one observation into the sums.
    #[inline]
    pub fn update(&mut self, x: T, y: T) {
        self.n = self.n + T::one();

        self.sum_x = self.sum_x + x;
        self.sum_y = self.sum_y + y;
        self.sum_xy = self.sum_xy + x * y;
        self.sum_xx = self.sum_xx + x * x;
        self.sum_yy = self.sum_yy + y * y;
    }

    /// Shared denominator of the gradient and intercept formulas.
    #[inline]
    pub fn denominator(&self) -> T {
        self.n * self.sum_xx - self.sum_x * self.sum_x
    }

    /// Least-squares slope, `(n·Σxy − Σx·Σy) / (n·Σx² − Σx·Σx)`.
    #[inline]
    pub fn gradient(&self) -> T {
        (self.n * self.sum_xy - self.sum_x * self.sum_y) / self.denominator()
    }

    /// Least-squares intercept, `(Σy·Σx² − Σx·Σxy) / (n·Σx² − Σx·Σx)`.
    #[inline]
    pub fn intercept(&self) -> T {
        (self.sum_y * self.sum_xx - self.sum_x * self.sum_xy) / self.denominator()
    }

    /// Solve both coefficients from the current sums.
    #[inline]
    pub fn solve(&self) -> LinearFit<T> {
        LinearFit {
            gradient: self.gradient(),
            intercept: self.intercept(),
        }
    }

    /// Pearson correlation coefficient of the observations.
    ///
    /// NaN when either variable has zero spread.
    pub fn correlation(&self) -> T {
        let covariance = self.n * self.sum_xy - self.sum_x * self.sum_y;
        let var_x = self.denominator();
        let var_y = self.n * self.sum_yy - self.sum_y * self.sum_y;

        covariance / (var_x * var_y).sqrt()
    }
}
