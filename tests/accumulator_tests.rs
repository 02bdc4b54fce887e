//! Tests for the streaming regression accumulator.
//!
//! The accumulator folds (x, y) samples into running sums and produces a
//! least-squares line on request. These tests cover:
//! - Reference scenarios with known coefficients and widths
//! - The online width measure and its difference from a batch maximum
//! - Ingestion-order semantics of `start` and `end`
//! - Insufficient-data errors and degenerate inputs
//!
//! ## Test Organization
//!
//! 1. **Reference Scenarios** - Fixed inputs with known outputs
//! 2. **Width Semantics** - Online width, monotonicity, collinear inputs
//! 3. **Error Handling** - Fewer than two samples
//! 4. **Edge Cases** - Out-of-order and identical x values, f32
//! 5. **Lifecycle** - Idempotence, reset, iterator integration

use approx::assert_relative_eq;
use trendline::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn accumulate(samples: &[(f64, f64)]) -> RegressionAccumulator<f64> {
    let mut acc = RegressionAccumulator::new();
    for &(x, y) in samples {
        acc.add(Sample::new(x, y));
    }
    acc
}

const NON_ZERO_WIDTH: [(f64, f64); 6] = [
    (1.0, 2.0),
    (2.0, 1.0),
    (2.0, 3.0),
    (3.0, 2.0),
    (3.0, 4.0),
    (4.0, 3.0),
];

// ============================================================================
// Reference Scenarios
// ============================================================================

/// Test two samples on the identity line.
#[test]
fn test_two_samples() {
    let r = accumulate(&[(0.0, 0.0), (1.0, 1.0)]).regression().unwrap();

    assert_eq!(r.start, 0.0);
    assert_eq!(r.end, 1.0);
    assert_relative_eq!(r.intercept, 0.0, epsilon = 1e-12);
    assert_relative_eq!(r.gradient, 1.0, epsilon = 1e-12);
    assert_relative_eq!(r.width, 0.0, epsilon = 1e-12);
}

/// Test two samples in the negative domain.
#[test]
fn test_two_negative_samples() {
    let r = accumulate(&[(-1.0, -1.0), (0.0, 0.0)])
        .regression()
        .unwrap();

    assert_eq!(r.start, -1.0);
    assert_eq!(r.end, 0.0);
    assert_relative_eq!(r.intercept, 0.0, epsilon = 1e-12);
    assert_relative_eq!(r.gradient, 1.0, epsilon = 1e-12);
    assert_relative_eq!(r.width, 0.0, epsilon = 1e-12);
}

/// Test that any two samples with distinct x give the exact line through them.
#[test]
fn test_two_samples_exact_line() {
    let (x0, y0, x1, y1) = (2.0, 7.0, 6.0, -1.0);
    let r = accumulate(&[(x0, y0), (x1, y1)]).regression().unwrap();

    let gradient = (y1 - y0) / (x1 - x0);
    assert_relative_eq!(r.gradient, gradient, epsilon = 1e-12);
    assert_relative_eq!(r.intercept, y0 - gradient * x0, epsilon = 1e-12);
    assert_relative_eq!(r.width, 0.0, epsilon = 1e-12);
    assert_eq!((r.start, r.end), (x0, x1));
}

/// Test a shallow collinear line.
#[test]
fn test_lower_gradient_line() {
    let r = accumulate(&[(1.0, 1.0), (3.0, 2.0), (5.0, 3.0)])
        .regression()
        .unwrap();

    assert_eq!(r.start, 1.0);
    assert_eq!(r.end, 5.0);
    assert_relative_eq!(r.intercept, 0.5, epsilon = 1e-12);
    assert_relative_eq!(r.gradient, 0.5, epsilon = 1e-12);
    assert_relative_eq!(r.width, 0.0, epsilon = 1e-12);
}

/// Test a scattered cloud with a non-zero width.
#[test]
fn test_non_zero_width_line() {
    let r = accumulate(&NON_ZERO_WIDTH).regression().unwrap();

    assert_eq!(r.start, 1.0);
    assert_eq!(r.end, 4.0);
    assert_relative_eq!(r.intercept, 1.363, epsilon = 1e-3);
    assert_relative_eq!(r.gradient, 0.454, epsilon = 1e-3);
    assert_relative_eq!(r.width, 1.142, epsilon = 1e-3);

    // Closed forms: 15/11, 5/11 and 8/7.
    assert_relative_eq!(r.intercept, 15.0 / 11.0, epsilon = 1e-12);
    assert_relative_eq!(r.gradient, 5.0 / 11.0, epsilon = 1e-12);
    assert_relative_eq!(r.width, 8.0 / 7.0, epsilon = 1e-12);
}

/// Test the standalone gradient and intercept queries agree with the snapshot.
#[test]
fn test_gradient_intercept_queries() {
    let acc = accumulate(&NON_ZERO_WIDTH);
    let r = acc.regression().unwrap();

    assert_eq!(acc.gradient().unwrap(), r.gradient);
    assert_eq!(acc.intercept().unwrap(), r.intercept);
}

// ============================================================================
// Width Semantics
// ============================================================================

/// Test that width is measured online, not against the final fit.
///
/// Against the final line the worst residual is 14/11 (≈1.273), but the
/// online measure only ever saw 8/7 (≈1.143).
#[test]
fn test_width_is_online_not_batch() {
    let acc = accumulate(&NON_ZERO_WIDTH);
    let r = acc.regression().unwrap();

    let batch_width = NON_ZERO_WIDTH
        .iter()
        .map(|&(x, y)| (y - r.predict(x)).abs())
        .fold(0.0f64, f64::max);

    assert_relative_eq!(batch_width, 14.0 / 11.0, epsilon = 1e-12);
    assert_relative_eq!(r.width, 8.0 / 7.0, epsilon = 1e-12);
    assert!(r.width < batch_width);
}

/// Test width never decreases as samples arrive.
#[test]
fn test_width_monotonic() {
    let samples = [
        (0.0, 0.3),
        (1.0, -0.2),
        (2.0, 2.5),
        (3.0, 1.1),
        (4.0, 4.9),
        (5.0, 3.0),
        (6.0, 7.7),
        (7.0, 5.2),
        (8.0, 8.1),
    ];

    let mut acc = RegressionAccumulator::new();
    let mut previous = None;
    for &(x, y) in &samples {
        acc.add_point(x, y);
        if let Ok(r) = acc.regression() {
            if let Some(prev) = previous {
                assert!(r.width >= prev, "width decreased: {} -> {}", prev, r.width);
            }
            previous = Some(r.width);
        }
    }

    assert!(previous.unwrap() > 0.0);
}

/// Test collinear samples give zero width regardless of count.
#[test]
fn test_collinear_zero_width() {
    let samples: Vec<(f64, f64)> = (0..50)
        .map(|i| {
            let x = f64::from(i) * 0.5;
            (x, -3.0 * x + 4.0)
        })
        .collect();

    let r = accumulate(&samples).regression().unwrap();

    assert_relative_eq!(r.gradient, -3.0, epsilon = 1e-9);
    assert_relative_eq!(r.intercept, 4.0, epsilon = 1e-9);
    assert_relative_eq!(r.width, 0.0, epsilon = 1e-9);
}

// ============================================================================
// Error Handling
// ============================================================================

/// Test an empty accumulator refuses every query.
#[test]
fn test_zero_samples() {
    let acc = RegressionAccumulator::<f64>::new();
    let expected = RegressionError::InsufficientData { got: 0, min: 2 };

    assert_eq!(acc.regression().unwrap_err(), expected);
    assert_eq!(acc.gradient().unwrap_err(), expected);
    assert_eq!(acc.intercept().unwrap_err(), expected);
    assert_eq!(acc.correlation().unwrap_err(), expected);
}

/// Test a single sample is still insufficient.
#[test]
fn test_one_sample() {
    let acc = accumulate(&[(0.0, 0.0)]);
    let expected = RegressionError::InsufficientData { got: 1, min: 2 };

    assert_eq!(acc.regression().unwrap_err(), expected);
    assert_eq!(acc.gradient().unwrap_err(), expected);
    assert_eq!(acc.intercept().unwrap_err(), expected);
}

/// Test the error message is descriptive.
#[test]
fn test_insufficient_data_message() {
    let err = RegressionAccumulator::<f64>::new().regression().unwrap_err();

    assert_eq!(
        err.to_string(),
        "Insufficient data: got 0 samples, need at least 2"
    );
}

// ============================================================================
// Edge Cases
// ============================================================================

/// Test start and end follow ingestion order, not min and max.
#[test]
fn test_out_of_order_bounds() {
    let r = accumulate(&[(5.0, 1.0), (1.0, 2.0), (9.0, 0.0), (3.0, 0.5)])
        .regression()
        .unwrap();

    assert_eq!(r.start, 5.0);
    assert_eq!(r.end, 3.0);
    assert_relative_eq!(r.span(), -2.0, epsilon = 1e-12);
}

/// Test identical x values produce a non-finite fit without an error.
#[test]
fn test_identical_x_degenerate() {
    let acc = accumulate(&[(1.0, 1.0), (1.0, 2.0), (1.0, 3.0)]);

    let r = acc.regression().expect("degenerate input is not an error");
    assert!(!r.gradient.is_finite());
    assert!(!r.intercept.is_finite());
    assert_eq!(r.start, 1.0);
    assert_eq!(r.end, 1.0);
    assert_eq!(r.width, 0.0);
}

/// Test single precision gives the same reference results.
#[test]
fn test_f32_precision() {
    let mut acc = RegressionAccumulator::<f32>::new();
    acc.add_point(1.0, 1.0);
    acc.add_point(3.0, 2.0);
    acc.add_point(5.0, 3.0);

    let r = acc.regression().unwrap();
    assert_relative_eq!(r.gradient, 0.5f32, epsilon = 1e-5);
    assert_relative_eq!(r.intercept, 0.5f32, epsilon = 1e-5);
    assert_relative_eq!(r.width, 0.0f32, epsilon = 1e-5);
}

/// Test the correlation coefficient of perfectly linear data.
#[test]
fn test_correlation_perfect() {
    let up = accumulate(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]);
    let down = accumulate(&[(0.0, 5.0), (1.0, 3.0), (2.0, 1.0)]);

    assert_relative_eq!(up.correlation().unwrap(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(down.correlation().unwrap(), -1.0, epsilon = 1e-12);
}

/// Test the correlation coefficient of scattered data stays inside (-1, 1).
#[test]
fn test_correlation_scattered() {
    let r = accumulate(&NON_ZERO_WIDTH).correlation().unwrap();

    // Σ(dx·dy) = 2.5, Σdx² = 5.5, Σdy² = 5.5 around the means (2.5, 2.5).
    assert_relative_eq!(r, 2.5 / 5.5, epsilon = 1e-12);
}

// ============================================================================
// Lifecycle Tests
// ============================================================================

/// Test repeated snapshots without new samples are identical.
#[test]
fn test_regression_idempotent() {
    let acc = accumulate(&NON_ZERO_WIDTH);

    let first = acc.regression().unwrap();
    let second = acc.regression().unwrap();

    assert_eq!(first, second);
}

/// Test snapshots are detached from later ingestion.
#[test]
fn test_snapshot_detached() {
    let mut acc = accumulate(&[(0.0, 0.0), (1.0, 1.0)]);
    let before = acc.regression().unwrap();

    acc.add_point(2.0, 5.0);
    let after = acc.regression().unwrap();

    assert_eq!(before.end, 1.0);
    assert_eq!(after.end, 2.0);
    assert_relative_eq!(before.gradient, 1.0, epsilon = 1e-12);
    assert!(after.gradient > before.gradient);
}

/// Test length tracking and reset.
#[test]
fn test_len_and_reset() {
    let mut acc = accumulate(&NON_ZERO_WIDTH);
    assert_eq!(acc.len(), 6);
    assert!(!acc.is_empty());

    acc.reset();
    assert_eq!(acc.len(), 0);
    assert!(acc.is_empty());
    assert_eq!(acc, RegressionAccumulator::new());

    // Start is re-captured after a reset.
    acc.add_point(10.0, 0.0);
    acc.add_point(11.0, 1.0);
    assert_eq!(acc.regression().unwrap().start, 10.0);
}

/// Test collecting from an iterator matches repeated `add` calls.
#[test]
fn test_from_iterator_matches_add() {
    let manual = accumulate(&NON_ZERO_WIDTH);

    let from_tuples: RegressionAccumulator<f64> = NON_ZERO_WIDTH.iter().copied().collect();
    let from_samples: RegressionAccumulator<f64> = NON_ZERO_WIDTH
        .iter()
        .map(|&(x, y)| Sample::new(x, y))
        .collect();

    assert_eq!(from_tuples, manual);
    assert_eq!(from_samples, manual);
}

/// Test extending continues the existing stream.
#[test]
fn test_extend_continues_stream() {
    let mut acc = accumulate(&NON_ZERO_WIDTH[..3]);
    acc.extend(NON_ZERO_WIDTH[3..].iter().copied());

    assert_eq!(acc, accumulate(&NON_ZERO_WIDTH));
}
