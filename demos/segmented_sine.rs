//! Segmented Trend Lines over a Sine Wave
//!
//! This example demonstrates piecewise trend fitting:
//! - One full period of `sin(x°)` sampled at every degree
//! - Ten consecutive segments, each fitted by its own accumulator
//! - The geometry a chart needs to draw each trend line

use trendline::prelude::*;

const SEGMENTS: usize = 10;
const WIDTH_PADDING: f64 = 25.0;
const LINE_POINTS: usize = 10;

fn sine_wave_samples() -> Vec<Sample<f64>> {
    (0..360)
        .map(|deg| {
            let x = f64::from(deg);
            Sample::new(x, (x * std::f64::consts::PI / 180.0).sin())
        })
        .collect()
}

fn main() -> Result<(), RegressionError> {
    println!("{}", "=".repeat(80));
    println!("Segmented Trend Lines - sin(x) over one period");
    println!("{}", "=".repeat(80));
    println!();

    let samples = sine_wave_samples();

    let fitter = Trendline::new()
        .segments(SEGMENTS)
        .adapter(Segmented)
        .build()?;

    let regressions = fitter.fit(&samples)?;

    for (i, r) in regressions.iter().enumerate() {
        println!("Segment {}", i + 1);
        println!("{}", "-".repeat(80));
        println!("{}", r);

        let ((x0, y0), (x1, y1)) = r.endpoints();
        println!("  Segment:   ({x0:.1}, {y0:.4}) -> ({x1:.1}, {y1:.4})");
        println!("  Stroke:    {:.3}", r.stroke_width(WIDTH_PADDING));

        let points = r.line_points(LINE_POINTS);
        let rendered: Vec<String> = points
            .iter()
            .map(|(x, y)| format!("({x:.1}, {y:.3})"))
            .collect();
        println!("  Line:      {}", rendered.join(" "));
        println!();
    }

    /* Expected Output (first segment):
    Segment 1
    --------------------------------------------------------------------------------
    Regression:
      Range:     0.0000 .. 35.0000
      Gradient:  0.016482
      Intercept: 0.007351
      ...
    */

    Ok(())
}
