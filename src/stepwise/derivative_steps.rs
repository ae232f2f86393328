//! # Derivative Walkthrough Module
//!
//! Narrated differentiation: the engine does the actual calculus, this
//! module wraps it in the advisory rule narration and the simplify step
//! shown to the user.

use crate::stepwise::derivation_trail::DerivationTrail;
use crate::symbolic::symbolic_traits::{EngineError, SymbolicEngine};

/// Builds the narrated derivative of `expression` with respect to
/// `variable`. A parse or differentiation failure aborts the whole request
/// rather than producing a partial trail.
pub fn differentiate_stepwise<E: SymbolicEngine>(
    engine: &E,
    expression: &str,
    variable: &str,
) -> Result<DerivationTrail, EngineError> {
    let parsed = engine.parse(expression)?;
    let expression = expression.trim();

    let mut trail = DerivationTrail::new();
    trail.append(
        "Step 1",
        format!(
            "Start with the expression f({}) = {}",
            variable, expression
        ),
    );

    // advisory narration by substring presence, like the integrator
    let mut rule_lines = vec!["Apply the derivative rules".to_string()];
    if expression.contains('^') {
        rule_lines.push(
            "- For terms with powers (x^n), use the power rule: d/dx(x^n) = n·x^(n-1)".to_string(),
        );
    }
    if expression.contains("sin") || expression.contains("cos") {
        rule_lines.push(
            "- For trigonometric functions, use: d/dx(sin(x)) = cos(x) and d/dx(cos(x)) = -sin(x)"
                .to_string(),
        );
    }
    if expression.contains("e^") {
        rule_lines.push("- For exponential functions, use: d/dx(e^x) = e^x".to_string());
    }
    if expression.contains("ln") || expression.contains("log") {
        rule_lines.push(
            "- For logarithmic functions, use: d/dx(ln(x)) = 1/x and d/dx(log(x)) = 1/(x·ln(10))"
                .to_string(),
        );
    }
    trail.append("Step 2", rule_lines.join("\n"));

    let derivative = engine.differentiate(&parsed, variable)?;
    let derivative_text = engine.render(&derivative);
    trail.append(
        "Step 3",
        format!(
            "Calculate the derivative\nf'({}) = {}",
            variable, derivative_text
        ),
    );

    let simplified = engine.simplify(&derivative);
    let simplified_text = engine.render(&simplified);
    if simplified_text != derivative_text {
        trail.append(
            "Step 4",
            format!(
                "Simplify the result\nf'({}) = {}",
                variable, simplified_text
            ),
        );
        trail.finish(simplified_text);
    } else {
        trail.finish(derivative_text);
    }
    Ok(trail)
}
