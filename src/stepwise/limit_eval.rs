//! # Limit Evaluation Module
//!
//! Evaluates `lim(var→point) expr` by direct substitution, with a single
//! derivative-ratio (L'Hôpital) fallback for indeterminate rational forms.
//!
//! The fallback deliberately applies the rule exactly once and splits the
//! expression text at the FIRST `/` only: the component assumes one rational
//! division at top level and is not a general limit engine. Every numeric
//! failure degrades to the "Requires advanced limit techniques" sentinel,
//! paired with the trail accumulated so far.

use crate::stepwise::derivation_trail::DerivationTrail;
use crate::symbolic::symbolic_traits::{EngineError, SymbolicEngine};
use log::debug;

pub const LIMIT_SENTINEL: &str = "Requires advanced limit techniques";

/// Evaluates the limit of `expression` as `variable` approaches `point`.
///
/// A parse failure of the whole expression aborts before any step is
/// recorded; after that the function always returns a finished trail.
pub fn evaluate_limit<E: SymbolicEngine>(
    engine: &E,
    expression: &str,
    variable: &str,
    point: f64,
) -> Result<DerivationTrail, EngineError> {
    let parsed = engine.parse(expression)?;
    let expression = expression.trim();

    let mut trail = DerivationTrail::new();
    trail.append(
        "Step 1",
        format!(
            "Start with the limit expression: lim({}→{}) {}",
            variable, point, expression
        ),
    );
    trail.append(
        "Step 2",
        format!(
            "To evaluate the limit, we'll substitute {} = {} into the expression if possible",
            variable, point
        ),
    );

    let direct = engine.evaluate_at(&parsed, variable, point);
    if direct.is_finite() {
        trail.append(
            "Step 3",
            format!(
                "Substitute {} = {} into the expression\n{} = {}",
                variable, point, expression, direct
            ),
        );
        trail.finish(direct.to_string());
        return Ok(trail);
    }
    debug!(
        "direct substitution of {} = {} is indeterminate ({})",
        variable, point, direct
    );

    if let Some((numerator, denominator)) = expression.split_once('/') {
        trail.append(
            "Step 3",
            "Direct substitution leads to an indeterminate form (like 0/0 or ∞/∞).".to_string(),
        );
        trail.append(
            "Step 4",
            "Apply L'Hôpital's rule: If lim f(x)/g(x) gives 0/0 or ∞/∞, then it equals lim f'(x)/g'(x)"
                .to_string(),
        );

        match lhopital_ratio(engine, numerator.trim(), denominator.trim(), variable, point) {
            Some((num_derivative, den_derivative, ratio)) => {
                trail.append(
                    "Step 5",
                    format!(
                        "Find derivatives of numerator and denominator:\n   Numerator derivative: {}\n   Denominator derivative: {}",
                        num_derivative, den_derivative
                    ),
                );
                if ratio.is_finite() {
                    trail.append(
                        "Step 6",
                        format!(
                            "Evaluate the limit of the derivatives at {} = {}\n   Result: {}",
                            variable, point, ratio
                        ),
                    );
                    trail.finish(ratio.to_string());
                } else {
                    trail.append(
                        "Step 6",
                        "Further application of L'Hôpital's rule or other techniques required"
                            .to_string(),
                    );
                    trail.finish(LIMIT_SENTINEL);
                }
            }
            None => {
                trail.append(
                    "Step 5",
                    "Advanced techniques required to evaluate this limit".to_string(),
                );
                trail.finish(LIMIT_SENTINEL);
            }
        }
    } else {
        trail.append(
            "Step 3",
            "Direct substitution leads to an indeterminate form. Advanced techniques required."
                .to_string(),
        );
        trail.finish(LIMIT_SENTINEL);
    }

    Ok(trail)
}

/// One application of the derivative-ratio rule. Returns the rendered
/// derivatives and their evaluated ratio; `None` when either side fails to
/// parse or differentiate (a malformed division degrades, it never aborts).
fn lhopital_ratio<E: SymbolicEngine>(
    engine: &E,
    numerator: &str,
    denominator: &str,
    variable: &str,
    point: f64,
) -> Option<(String, String, f64)> {
    let num_expr = engine.parse(numerator).ok()?;
    let den_expr = engine.parse(denominator).ok()?;
    let num_derivative = engine.differentiate(&num_expr, variable).ok()?;
    let den_derivative = engine.differentiate(&den_expr, variable).ok()?;
    let num_derivative = engine.simplify(&num_derivative);
    let den_derivative = engine.simplify(&den_derivative);

    let ratio = engine.evaluate_at(&num_derivative, variable, point)
        / engine.evaluate_at(&den_derivative, variable, point);

    Some((
        engine.render(&num_derivative),
        engine.render(&den_derivative),
        ratio,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbolic::symbolic_traits::NativeEngine;

    #[test]
    fn test_direct_substitution_is_the_common_case() {
        let engine = NativeEngine;
        let trail = evaluate_limit(&engine, "x^2 + 1", "x", 2.0).unwrap();
        assert_eq!(trail.result(), Some("5"));
        assert_eq!(trail.steps().len(), 3);
    }

    #[test]
    fn test_sin_x_over_x_resolves_by_lhopital() {
        let engine = NativeEngine;
        let trail = evaluate_limit(&engine, "sin(x)/x", "x", 0.0).unwrap();
        assert_eq!(trail.result(), Some("1"));
        // Steps 1-6: substitution attempt, indeterminate detection,
        // L'Hôpital statement, derivatives, evaluation
        assert_eq!(trail.steps().len(), 6);
        assert!(trail.steps()[4].body.contains("cos(x)"));
    }

    #[test]
    fn test_indeterminate_without_division_gets_sentinel() {
        let engine = NativeEngine;
        let trail = evaluate_limit(&engine, "ln(x)", "x", 0.0).unwrap();
        assert_eq!(trail.result(), Some(LIMIT_SENTINEL));
    }

    #[test]
    fn test_still_indeterminate_after_one_application() {
        // (x^3)/(x^2) at 0: derivative ratio (3x^2)/(2x) is still 0/0;
        // the rule is applied once and never iterated
        let engine = NativeEngine;
        let trail = evaluate_limit(&engine, "x^3/x^2", "x", 0.0).unwrap();
        assert_eq!(trail.result(), Some(LIMIT_SENTINEL));
    }

    #[test]
    fn test_parse_failure_aborts() {
        let engine = NativeEngine;
        assert!(evaluate_limit(&engine, "(x +", "x", 0.0).is_err());
    }
}
