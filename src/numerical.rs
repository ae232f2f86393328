#![allow(non_snake_case)]
/// # Numerical scanning
///
/// Sampling-based analysis of a function over an interval: key point
/// classification (roots, extrema, inflection points) for the plot overlay,
/// curve sampling for the polyline, and tangent line construction.
///
///# Example
/// ```
/// use RustedCalcSteps::numerical::key_points::{SampleRange, scan};
/// use RustedCalcSteps::symbolic::symbolic_traits::{NativeEngine, SymbolicEngine};
/// let engine = NativeEngine;
/// let f = engine.parse("x^2 - 1").unwrap();
/// let points = scan(&engine, &f, "x", &SampleRange::new(-3.0, 3.0, 0.05));
/// println!("roots near: {:?}", points.roots);
/// ```
pub mod key_points;
