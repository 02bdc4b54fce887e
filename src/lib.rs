//! # trendline: streaming least-squares trend lines
//!
//! Fits an ordinary-least-squares line to a stream of (x, y) samples in a
//! single pass, without keeping the samples. At any point the accumulator can
//! report the gradient and intercept of the current fit, the x-range it spans,
//! and a *width*: the largest vertical distance between a sample and the line,
//! measured as each sample arrived.
//!
//! ## Quick Start
//!
//! ```rust
//! use trendline::prelude::*;
//!
//! let mut acc = RegressionAccumulator::<f64>::new();
//! acc.add(Sample::new(1.0, 1.0));
//! acc.add(Sample::new(3.0, 2.0));
//! acc.add(Sample::new(5.0, 3.0));
//!
//! let r = acc.regression()?;
//! assert_eq!((r.start, r.end), (1.0, 5.0));
//! assert!((r.gradient - 0.5).abs() < 1e-12);
//! assert!((r.intercept - 0.5).abs() < 1e-12);
//! # Result::<(), RegressionError>::Ok(())
//! ```
//!
//! ### Builder
//!
//! ```rust
//! use trendline::prelude::*;
//!
//! let x: Vec<f64> = (0..40).map(f64::from).collect();
//! let y: Vec<f64> = x.iter().map(|v| 2.0 * v + 1.0).collect();
//!
//! let fitter = Trendline::new()
//!     .segments(4)          // Four consecutive lines
//!     .adapter(Segmented)
//!     .build()?;
//!
//! let lines = fitter.fit_xy(&x, &y)?;
//! assert_eq!(lines.len(), 4);
//! for line in &lines {
//!     println!("{}", line);
//! }
//! # Result::<(), RegressionError>::Ok(())
//! ```
//!
//! ```text
//! Regression:
//!   Range:     0.0000 .. 9.0000
//!   Gradient:  2.000000
//!   Intercept: 1.000000
//!   Width:     0.000000
//! ```
//!
//! ### Result and Error Handling
//!
//! `gradient`, `intercept` and `regression` return
//! `Err(RegressionError::InsufficientData { .. })` until two samples have
//! been ingested. Ingestion itself never fails.
//!
//! ```rust
//! use trendline::prelude::*;
//!
//! let mut acc = RegressionAccumulator::<f64>::new();
//! acc.add_point(0.0, 0.0);
//!
//! match acc.regression() {
//!     Ok(r) => println!("{}", r),
//!     Err(e) => eprintln!("Not yet: {}", e),
//! }
//! ```
//!
//! ## Numerical notes
//!
//! * The fit uses raw sums of products. For x values far from zero the
//!   denominator `n·Σx² − (Σx)²` suffers cancellation; center large x domains
//!   before ingesting.
//! * If every x is identical the denominator is zero and the gradient and
//!   intercept are infinite or NaN. No error is raised.
//! * Width is an online measure: sample *k* is compared against the fit of the
//!   first *k* samples, so it may differ from the largest residual against the
//!   final line.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! ```toml
//! [dependencies]
//! trendline = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - data types and errors.
mod primitives;

// Layer 2: Algorithms - running sums and least-squares solve.
mod algorithms;

// Layer 3: Engine - result type and validation.
mod engine;

// Layer 4: Adapters - streaming and segmented processors.
mod adapters;

// High-level fluent API.
mod api;

// Standard trendline prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::{Segmented, Stream},
        Regression, RegressionAccumulator, RegressionError, Sample, SegmentedRegression,
        TrendlineBuilder as Trendline,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
