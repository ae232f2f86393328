//! # Key Point Scanning Module
//!
//! Samples a function and its first two derivatives over a range and
//! classifies roots, local extrema and inflection points for the plot
//! overlay. This is a coarse screen tuned to pixel-resolution sampling, not
//! an exact root finder: the tolerances are fixed, hits at adjacent samples
//! are kept as duplicates, and every numeric failure degrades to skipping
//! that one sample. No error ever escapes [`scan`].

use crate::symbolic::symbolic_traits::SymbolicEngine;
use log::{debug, warn};
use std::collections::HashMap;
use strum_macros::{Display, EnumIter};

/// Classification threshold for roots: |f(x)| below this tags a root.
pub const ROOT_TOLERANCE: f64 = 0.1;
/// Classification threshold for extremum candidates: |f'(x)| below this.
pub const SLOPE_TOLERANCE: f64 = 0.1;
/// Classification threshold for inflection points: |f''(x)| below this.
pub const CURVATURE_TOLERANCE: f64 = 0.1;

/// Sampling domain: `x` runs from `start` to `end` in increments of `step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRange {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl SampleRange {
    pub fn new(start: f64, end: f64, step: f64) -> Self {
        SampleRange { start, end, step }
    }

    /// A range is scannable when the step is positive and the bounds are
    /// ordered; anything else would loop badly or not at all.
    pub fn is_valid(&self) -> bool {
        self.step > 0.0 && self.start <= self.end && self.step.is_finite()
    }
}

/// Category tags for scanned points, used by the plot legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum KeyPointKind {
    Root,
    Maximum,
    Minimum,
    Inflection,
}

/// Scan output: x-coordinates per category, ascending in x because the scan
/// iterates the range monotonically. A single x may appear in several
/// categories, and near-by duplicate hits are expected and kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyPointSet {
    pub roots: Vec<f64>,
    pub maxima: Vec<f64>,
    pub minima: Vec<f64>,
    pub inflection: Vec<f64>,
}

impl KeyPointSet {
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
            && self.maxima.is_empty()
            && self.minima.is_empty()
            && self.inflection.is_empty()
    }

    pub fn points_of(&self, kind: KeyPointKind) -> &[f64] {
        match kind {
            KeyPointKind::Root => &self.roots,
            KeyPointKind::Maximum => &self.maxima,
            KeyPointKind::Minimum => &self.minima,
            KeyPointKind::Inflection => &self.inflection,
        }
    }
}

/// Scans `f` over `range`, classifying each sample against the fixed
/// tolerances.
///
/// `f'` and `f''` are differentiated once up front; if that fails the scan
/// silently returns an empty set so a plot redraw never fails as a whole.
/// Per-sample evaluation failures surface as `NaN`, which fails every
/// tolerance comparison and thereby skips the sample.
///
/// An extremum candidate with `f''(x) == 0` exactly is classified as
/// neither minimum nor maximum.
pub fn scan<E: SymbolicEngine>(
    engine: &E,
    f: &E::Expression,
    variable: &str,
    range: &SampleRange,
) -> KeyPointSet {
    let mut points = KeyPointSet::default();

    if !range.is_valid() {
        warn!(
            "rejecting key point scan over invalid range [{}, {}] step {}",
            range.start, range.end, range.step
        );
        return points;
    }

    let first = match engine.differentiate(f, variable) {
        Ok(d) => d,
        Err(e) => {
            warn!("differentiation failed, returning empty key point set: {}", e);
            return points;
        }
    };
    let second = match engine.differentiate(&first, variable) {
        Ok(d) => d,
        Err(e) => {
            warn!("second differentiation failed, returning empty key point set: {}", e);
            return points;
        }
    };

    let mut bindings = HashMap::new();
    let mut x = range.start;
    while x <= range.end {
        bindings.insert(variable.to_string(), x);
        let y = engine.evaluate(f, &bindings);
        let dy = engine.evaluate(&first, &bindings);
        let ddy = engine.evaluate(&second, &bindings);

        if y.abs() < ROOT_TOLERANCE {
            points.roots.push(x);
        }
        if dy.abs() < SLOPE_TOLERANCE {
            if ddy > 0.0 {
                points.minima.push(x);
            } else if ddy < 0.0 {
                points.maxima.push(x);
            }
        }
        if ddy.abs() < CURVATURE_TOLERANCE {
            points.inflection.push(x);
        }

        x += range.step;
    }

    debug!(
        "scan found {} roots, {} maxima, {} minima, {} inflection points",
        points.roots.len(),
        points.maxima.len(),
        points.minima.len(),
        points.inflection.len()
    );
    points
}

/// Samples the curve for plotting. `NaN` samples (domain errors, unbound
/// variables) are skipped so the polyline simply has gaps where the
/// function is undefined.
pub fn sample_curve<E: SymbolicEngine>(
    engine: &E,
    f: &E::Expression,
    variable: &str,
    range: &SampleRange,
) -> Vec<(f64, f64)> {
    let mut samples = Vec::new();
    if !range.is_valid() {
        warn!(
            "rejecting curve sampling over invalid range [{}, {}] step {}",
            range.start, range.end, range.step
        );
        return samples;
    }
    let mut x = range.start;
    while x <= range.end {
        let y = engine.evaluate_at(f, variable, x);
        if !y.is_nan() {
            samples.push((x, y));
        }
        x += range.step;
    }
    samples
}

/// Tangent line of `f` at `x0`: slope, point of tangency and the expression
/// text `slope * (x - x0) + y0` ready for re-parsing or display.
#[derive(Debug, Clone, PartialEq)]
pub struct TangentLine {
    pub slope: f64,
    pub point: (f64, f64),
    pub equation: String,
}

/// Computes the tangent line at `x0`, or `None` when the function or its
/// derivative is not finite there.
pub fn tangent_line<E: SymbolicEngine>(
    engine: &E,
    f: &E::Expression,
    variable: &str,
    x0: f64,
) -> Option<TangentLine> {
    let y0 = engine.evaluate_at(f, variable, x0);
    let derivative = engine.differentiate(f, variable).ok()?;
    let slope = engine.evaluate_at(&derivative, variable, x0);
    if !y0.is_finite() || !slope.is_finite() {
        return None;
    }
    Some(TangentLine {
        slope,
        point: (x0, y0),
        equation: format!("{} * ({} - {}) + {}", slope, variable, x0, y0),
    })
}
