//! # Rule-Based Integration Module
//!
//! Assembles an antiderivative for an expression by table lookup, narrating
//! every step into a [`DerivationTrail`].
//!
//! Expressions with additive structure are decomposed into signed terms and
//! each term is run through [`TERM_RULES`], a fixed-priority table of
//! antiderivative patterns. A term matching no rule passes through as an
//! unresolved `(∫term dx)` fragment instead of failing the whole request.
//! Single-term expressions are looked up against a table of known closed
//! forms; an expression outside the table terminates with the
//! "requires advanced techniques" sentinel as a normal result.
//!
//! This is deliberately not a computer-algebra integrator: no integration by
//! parts, no substitution, no nested-expression analysis.

use crate::stepwise::derivation_trail::DerivationTrail;
use crate::stepwise::term_decompose::{Term, decompose};
use crate::symbolic::symbolic_traits::{EngineError, SymbolicEngine};
use itertools::Itertools;
use log::debug;
use regex::Regex;

/// One entry of the antiderivative table: `apply` returns the signed
/// antiderivative text when the term matches its pattern.
pub struct AntiderivativeRule {
    pub name: &'static str,
    pub apply: fn(&Term, &str) -> Option<String>,
}

/// Term-level antiderivative rules, tried in priority order.
pub const TERM_RULES: &[AntiderivativeRule] = &[
    AntiderivativeRule {
        name: "power",
        apply: power_rule,
    },
    AntiderivativeRule {
        name: "bare-variable",
        apply: bare_variable_rule,
    },
    AntiderivativeRule {
        name: "scaled-variable",
        apply: scaled_variable_rule,
    },
    AntiderivativeRule {
        name: "constant",
        apply: constant_rule,
    },
    AntiderivativeRule {
        name: "sine",
        apply: sine_rule,
    },
    AntiderivativeRule {
        name: "cosine",
        apply: cosine_rule,
    },
    AntiderivativeRule {
        name: "exponential",
        apply: exponential_rule,
    },
];

/// coef? * var^n  ->  coef/(n+1) * var^(n+1)
fn power_rule(term: &Term, var: &str) -> Option<String> {
    let re = Regex::new(&format!(
        r"^(\d*\.?\d*)\*?{}\^(\d+(?:\.\d+)?)$",
        regex::escape(var)
    ))
    .ok()?;
    let caps = re.captures(&term.text)?;
    let coef = parse_coefficient(&caps[1])? * term.sign as f64;
    let power: f64 = caps[2].parse().ok()?;
    let new_power = power + 1.0;
    Some(format!("{} * {}^{}", coef / new_power, var, new_power))
}

/// var  ->  var^2/2
fn bare_variable_rule(term: &Term, var: &str) -> Option<String> {
    if term.text != var {
        return None;
    }
    if term.sign < 0 {
        Some(format!("-{}^2/2", var))
    } else {
        Some(format!("{}^2/2", var))
    }
}

/// coef * var (no power)  ->  coef/2 * var^2
fn scaled_variable_rule(term: &Term, var: &str) -> Option<String> {
    let re = Regex::new(&format!(r"^(\d*\.?\d*)\*?{}$", regex::escape(var))).ok()?;
    let caps = re.captures(&term.text)?;
    let coef = parse_coefficient(&caps[1])? * term.sign as f64;
    Some(format!("{} * {}^2", coef / 2.0, var))
}

/// k  ->  k * var
fn constant_rule(term: &Term, var: &str) -> Option<String> {
    let value: f64 = term.text.parse().ok()?;
    Some(format!("{} * {}", value * term.sign as f64, var))
}

/// coef? * sin(var)  ->  -coef * cos(var)
fn sine_rule(term: &Term, var: &str) -> Option<String> {
    let re = Regex::new(&format!(
        r"^(\d*\.?\d*)\*?sin\({}\)$",
        regex::escape(var)
    ))
    .ok()?;
    let caps = re.captures(&term.text)?;
    if caps[1].is_empty() && term.sign > 0 {
        return Some(format!("-cos({})", var));
    }
    let coef = parse_coefficient(&caps[1])? * term.sign as f64;
    Some(format!("{} * cos({})", -coef, var))
}

/// coef? * cos(var)  ->  coef * sin(var)
fn cosine_rule(term: &Term, var: &str) -> Option<String> {
    let re = Regex::new(&format!(
        r"^(\d*\.?\d*)\*?cos\({}\)$",
        regex::escape(var)
    ))
    .ok()?;
    let caps = re.captures(&term.text)?;
    if caps[1].is_empty() && term.sign > 0 {
        return Some(format!("sin({})", var));
    }
    let coef = parse_coefficient(&caps[1])? * term.sign as f64;
    Some(format!("{} * sin({})", coef, var))
}

/// coef? * e^var  ->  coef * e^var
fn exponential_rule(term: &Term, var: &str) -> Option<String> {
    let re = Regex::new(&format!(r"^(\d*\.?\d*)\*?e\^{}$", regex::escape(var))).ok()?;
    let caps = re.captures(&term.text)?;
    if caps[1].is_empty() && term.sign > 0 {
        return Some(format!("e^{}", var));
    }
    let coef = parse_coefficient(&caps[1])? * term.sign as f64;
    Some(format!("{} * e^{}", coef, var))
}

/// Empty capture means an implicit coefficient of 1.
fn parse_coefficient(text: &str) -> Option<f64> {
    if text.is_empty() {
        Some(1.0)
    } else {
        text.parse().ok()
    }
}

/// Integrates one term through the rule table; unmatched terms degrade to
/// the unresolved integral form, never to an error.
pub fn integrate_term(term: &Term, variable: &str) -> String {
    for rule in TERM_RULES {
        if let Some(antiderivative) = (rule.apply)(term, variable) {
            debug!("term '{}' matched the {} rule", term.text, rule.name);
            return antiderivative;
        }
    }
    debug!("term '{}' matched no antiderivative rule", term.text);
    if term.sign < 0 {
        format!("(∫-{} d{})", term.text, variable)
    } else {
        format!("(∫{} d{})", term.text, variable)
    }
}

/// True when a `+`/`-` sits at bracket depth zero. Signs buried inside
/// function arguments do not trigger decomposition; the whole expression is
/// looked up against the closed-form table instead.
fn has_top_level_sign(expression: &str) -> bool {
    let mut depth = 0;
    for c in expression.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            '+' | '-' if depth == 0 => return true,
            _ => {}
        }
    }
    false
}

fn integrate_term_by_term(expression: &str, variable: &str) -> String {
    let terms = decompose(expression);
    let joined = terms
        .iter()
        .map(|term| integrate_term(term, variable))
        .join(" + ");
    format!("{} + C", joined.replace("+ -", "- "))
}

/// Fixed table of whole-expression closed forms, keyed to the request
/// variable. Anything outside the table gets the sentinel.
fn integrate_closed_form(expression: &str, variable: &str) -> String {
    let v = variable;
    if expression == v {
        return format!("{v}^2/2 + C");
    }
    if expression == format!("{v}^2") {
        return format!("{v}^3/3 + C");
    }
    if let Ok(re) = Regex::new(&format!(r"^{}\^(\d+)$", regex::escape(v))) {
        if let Some(caps) = re.captures(expression) {
            if let Ok(power) = caps[1].parse::<u32>() {
                return format!("{v}^{}/{} + C", power + 1, power + 1);
            }
        }
    }
    if expression == format!("1/{v}") {
        return format!("ln|{v}| + C");
    }
    if expression == format!("sin({v})") {
        return format!("-cos({v}) + C");
    }
    if expression == format!("cos({v})") {
        return format!("sin({v}) + C");
    }
    if expression == format!("tan({v})") {
        return format!("-ln|cos({v})| + C");
    }
    if expression == format!("e^{v}") {
        return format!("e^{v} + C");
    }
    if expression == format!("ln({v})") {
        return format!("{v}·ln({v}) - {v} + C");
    }
    if expression == format!("1/(1+{v}^2)") {
        return format!("arctan({v}) + C");
    }
    if expression == format!("1/sqrt(1-{v}^2)") {
        return format!("arcsin({v}) + C");
    }
    format!("∫{} d{} (requires advanced techniques)", expression, variable)
}

/// Builds the narrated integral of `expression` with respect to `variable`.
///
/// The expression is parse-validated first; a parse failure aborts before
/// any step is recorded. Everything after that degrades locally: an
/// unmatched term stays in the output as an unresolved fragment and an
/// unknown single-term expression finishes with the sentinel result.
pub fn integrate<E: SymbolicEngine>(
    engine: &E,
    expression: &str,
    variable: &str,
) -> Result<DerivationTrail, EngineError> {
    engine.parse(expression)?;
    let expression = expression.trim();

    let mut trail = DerivationTrail::new();
    trail.append(
        "Step 1",
        format!(
            "Start with the expression to integrate: ∫{} d{}",
            expression, variable
        ),
    );

    // advisory narration only: driven by substring presence, independent of
    // what the rule tables below actually resolve
    let mut rule_lines = vec!["Apply the integration rules".to_string()];
    if expression.contains('^') {
        rule_lines.push(
            "- For terms with powers (x^n), use the power rule: ∫x^n dx = x^(n+1)/(n+1) + C (for n ≠ -1)"
                .to_string(),
        );
    }
    if expression.contains("sin") {
        rule_lines.push("- For sin(x), use: ∫sin(x) dx = -cos(x) + C".to_string());
    }
    if expression.contains("cos") {
        rule_lines.push("- For cos(x), use: ∫cos(x) dx = sin(x) + C".to_string());
    }
    if expression.contains("e^") {
        rule_lines.push("- For exponential functions, use: ∫e^x dx = e^x + C".to_string());
    }
    if expression.contains("1/x") {
        rule_lines.push("- For 1/x, use: ∫1/x dx = ln|x| + C".to_string());
    }
    if expression.contains("log") || expression.contains("ln") {
        rule_lines
            .push("- For logarithmic functions, use: ∫ln(x) dx = x·ln(x) - x + C".to_string());
    }
    trail.append("Step 2", rule_lines.iter().join("\n"));

    let integral_result = if has_top_level_sign(expression) {
        integrate_term_by_term(expression, variable)
    } else {
        integrate_closed_form(expression, variable)
    };

    trail.append(
        "Step 3",
        format!(
            "Calculate the integral\n∫{} d{} = {}",
            expression, variable, integral_result
        ),
    );
    trail.finish(integral_result);
    Ok(trail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbolic::symbolic_traits::NativeEngine;

    fn result_of(expression: &str) -> String {
        let engine = NativeEngine;
        integrate(&engine, expression, "x")
            .unwrap()
            .result()
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_power_closed_forms() {
        assert_eq!(result_of("x"), "x^2/2 + C");
        assert_eq!(result_of("x^2"), "x^3/3 + C");
        assert_eq!(result_of("x^3"), "x^4/4 + C");
    }

    #[test]
    fn test_trig_and_exp_closed_forms() {
        assert_eq!(result_of("sin(x)"), "-cos(x) + C");
        assert_eq!(result_of("cos(x)"), "sin(x) + C");
        assert_eq!(result_of("tan(x)"), "-ln|cos(x)| + C");
        assert_eq!(result_of("e^x"), "e^x + C");
        assert_eq!(result_of("1/x"), "ln|x| + C");
        assert_eq!(result_of("ln(x)"), "x·ln(x) - x + C");
        assert_eq!(result_of("1/(1+x^2)"), "arctan(x) + C");
        assert_eq!(result_of("1/sqrt(1-x^2)"), "arcsin(x) + C");
    }

    #[test]
    fn test_closed_form_respects_variable() {
        let engine = NativeEngine;
        let trail = integrate(&engine, "t^2", "t").unwrap();
        assert_eq!(trail.result(), Some("t^3/3 + C"));
    }

    #[test]
    fn test_term_by_term_polynomial() {
        assert_eq!(result_of("x + 2"), "x^2/2 + 2 * x + C");
    }

    #[test]
    fn test_term_by_term_negative_coefficient_normalized() {
        // "+ -" from the negative term collapses into "- "
        assert_eq!(result_of("x^2 - 2*x"), "0.3333333333333333 * x^3 - 1 * x^2 + C");
    }

    #[test]
    fn test_unmatched_term_passes_through_unresolved() {
        let result = result_of("x + ln(x)");
        assert_eq!(result, "x^2/2 + (∫ln(x) dx) + C");
    }

    #[test]
    fn test_unknown_single_form_gets_sentinel() {
        let result = result_of("sin(x^2)");
        assert!(result.contains("requires advanced techniques"));
    }

    #[test]
    fn test_nested_sign_does_not_trigger_decomposition() {
        // the '+' inside the argument is not top-level: the expression is a
        // single term, misses the closed-form table and gets the sentinel
        let result = result_of("sin(x+1)");
        assert_eq!(result, "∫sin(x+1) dx (requires advanced techniques)");
    }

    #[test]
    fn test_top_level_sign_exposes_the_blind_decomposer() {
        // with a genuine top-level '+', decomposition runs and splits the
        // sin argument as well; the broken fragments pass through unresolved
        let result = result_of("x + sin(x+1)");
        assert_eq!(result, "x^2/2 + (∫sin(x dx) + (∫1) dx) + C");
    }

    #[test]
    fn test_parse_failure_aborts_before_steps() {
        let engine = NativeEngine;
        assert!(integrate(&engine, "(x +", "x").is_err());
    }

    #[test]
    fn test_step_trail_shape() {
        let engine = NativeEngine;
        let trail = integrate(&engine, "x^2", "x").unwrap();
        let labels: Vec<&str> = trail.steps().iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Step 1", "Step 2", "Step 3"]);
        assert!(trail.steps()[1].body.contains("power rule"));
        assert!(trail.is_finished());
    }

    #[test]
    fn test_idempotence() {
        let engine = NativeEngine;
        let first = integrate(&engine, "x^2 + sin(x)", "x").unwrap();
        let second = integrate(&engine, "x^2 + sin(x)", "x").unwrap();
        assert_eq!(first, second);
    }
}
