//! # Linear Equation Solving Module
//!
//! Isolates a variable in one linear equation, or solves a 2×2
//! addition/subtraction elimination pair, by symbolic text rearrangement
//! with a narrated trail.
//!
//! This component is intentionally a narrow pattern-matcher, not a general
//! linear-algebra solver: everything outside the recognized shapes
//! terminates with a descriptive sentinel result and the trail produced up
//! to that point. It never calls the expression engine.

use crate::stepwise::derivation_trail::DerivationTrail;
use log::debug;
use std::fmt;

pub const EQUATION_SENTINEL: &str = "Equation requires manual algebraic manipulation";
pub const SYSTEM_SENTINEL: &str = "System requires manual algebraic manipulation";
pub const COMPLEX_SENTINEL: &str = "Complex system requires advanced techniques";

/// One equation, split on the first `=` of its raw text.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearEquation {
    pub left: String,
    pub right: String,
}

impl LinearEquation {
    /// Splits raw text on the first `=`. Returns `None` when there is none.
    pub fn from_text(text: &str) -> Option<Self> {
        let (left, right) = text.split_once('=')?;
        Some(LinearEquation {
            left: left.trim().to_string(),
            right: right.trim().to_string(),
        })
    }
}

impl fmt::Display for LinearEquation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.left, self.right)
    }
}

/// Parallel pair of variable names and raw equation texts. The solver has
/// closed-form behavior only for cardinalities (1, 1) and (2, 2).
#[derive(Debug, Clone, PartialEq)]
pub struct EquationSystem {
    pub variables: Vec<String>,
    pub equations: Vec<String>,
}

impl EquationSystem {
    pub fn new<V, Q>(variables: V, equations: Q) -> Self
    where
        V: IntoIterator,
        V::Item: Into<String>,
        Q: IntoIterator,
        Q::Item: Into<String>,
    {
        EquationSystem {
            variables: variables.into_iter().map(Into::into).collect(),
            equations: equations.into_iter().map(Into::into).collect(),
        }
    }
}

/// Longest-numeric-prefix parse, mirroring JavaScript `parseFloat`:
/// `"2*"` reads as 2, `"2.5x"` as 2.5, `"-"` and `"abc"` as nothing.
pub fn parse_leading_f64(text: &str) -> Option<f64> {
    let text = text.trim();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, c) in text.char_indices() {
        match c {
            '+' | '-' if i == 0 => end = i + c.len_utf8(),
            '0'..='9' => {
                seen_digit = true;
                end = i + c.len_utf8();
            }
            '.' if !seen_dot => {
                seen_dot = true;
                end = i + c.len_utf8();
            }
            _ => break,
        }
    }
    if !seen_digit {
        return None;
    }
    let prefix = text[..end].trim_end_matches('.');
    prefix.parse().ok()
}

/// Solves the system with a narrated trail. The trail is always finished:
/// unrecognized shapes finish with one of the sentinel results.
pub fn solve(system: &EquationSystem) -> DerivationTrail {
    match (system.equations.len(), system.variables.len()) {
        (1, 1) => solve_single(&system.equations[0], &system.variables[0]),
        (2, 2) => solve_pair(
            &system.equations[0],
            &system.equations[1],
            &system.variables[0],
            &system.variables[1],
        ),
        (eqs, vars) => {
            let mut trail = DerivationTrail::new();
            trail.append(
                "Step 1",
                format!(
                    "Start with the system of {} equations and {} variables",
                    eqs, vars
                ),
            );
            trail.append(
                "Step 2",
                "This system requires advanced techniques to solve".to_string(),
            );
            trail.finish(COMPLEX_SENTINEL);
            trail
        }
    }
}

fn solve_single(equation_text: &str, variable: &str) -> DerivationTrail {
    let mut trail = DerivationTrail::new();
    trail.append(
        "Step 1",
        format!("Start with the equation {}", equation_text.trim()),
    );

    let Some(equation) = LinearEquation::from_text(equation_text) else {
        debug!("no '=' in equation '{}'", equation_text);
        return finish_single_fallback(trail, variable);
    };

    trail.append("Step 2", format!("Isolate the variable {}", variable));

    // x = <anything>: the right side is the answer verbatim
    if equation.left == variable {
        trail.append(
            "Step 3",
            format!("The solution is {} = {}", variable, equation.right),
        );
        trail.finish(format!("{} = {}", variable, equation.right));
        return trail;
    }

    if equation.left.contains(variable) {
        // x + a = b (or a + x = b): move constants right by summation
        if equation.left.contains('+') {
            if let Some(trail) = try_additive_isolation(&equation, variable, &mut trail) {
                return trail;
            }
        }
        // a*x = b: divide by the leading coefficient
        else if !equation.left.contains('-') {
            if let Some(trail) = try_coefficient_division(&equation, variable, &mut trail) {
                return trail;
            }
        }
    }

    finish_single_fallback(trail, variable)
}

/// `x + a = b` shape. Returns the finished trail on success; `None` hands
/// control back to the caller's fallback.
fn try_additive_isolation(
    equation: &LinearEquation,
    variable: &str,
    trail: &mut DerivationTrail,
) -> Option<DerivationTrail> {
    let parts: Vec<&str> = equation.left.split('+').map(str::trim).collect();
    let variable_part = *parts.iter().find(|p| p.contains(variable))?;
    let constant_parts: Vec<&str> = parts
        .iter()
        .copied()
        .filter(|p| !p.contains(variable))
        .collect();
    if constant_parts.is_empty() {
        return None;
    }

    let mut constant_sum = 0.0;
    for part in &constant_parts {
        constant_sum += parse_leading_f64(part)?;
    }
    let right_value = parse_leading_f64(&equation.right)?;
    let moved = right_value - constant_sum;

    trail.append(
        "Step 3",
        format!(
            "Move constant terms to the right side\n{} = {} - {}\n{} = {}",
            variable_part, equation.right, constant_sum, variable_part, moved
        ),
    );

    if variable_part != variable {
        let coefficient = parse_leading_f64(&variable_part.replacen(variable, "", 1))?;
        if coefficient == 0.0 {
            return None;
        }
        let answer = moved / coefficient;
        trail.append(
            "Step 4",
            format!(
                "Divide both sides by the coefficient {}\n{} = {}",
                coefficient, variable, answer
            ),
        );
        trail.finish(format!("{} = {}", variable, answer));
    } else {
        trail.finish(format!("{} = {}", variable, moved));
    }
    Some(trail.clone())
}

/// `a*x = b` shape (no additive structure on the left).
fn try_coefficient_division(
    equation: &LinearEquation,
    variable: &str,
    trail: &mut DerivationTrail,
) -> Option<DerivationTrail> {
    let coefficient = parse_leading_f64(&equation.left.replacen(variable, "", 1))?;
    if coefficient == 0.0 {
        return None;
    }
    let right_value = parse_leading_f64(&equation.right)?;
    let answer = right_value / coefficient;
    trail.append(
        "Step 3",
        format!(
            "Divide both sides by the coefficient {}\n{} = {}",
            coefficient, variable, answer
        ),
    );
    trail.finish(format!("{} = {}", variable, answer));
    Some(trail.clone())
}

fn finish_single_fallback(mut trail: DerivationTrail, variable: &str) -> DerivationTrail {
    trail.append(
        "Step 3",
        format!(
            "This equation requires algebraic manipulation to isolate {}",
            variable
        ),
    );
    trail.append(
        "Step 4",
        format!("After rearranging, solve for {}", variable),
    );
    trail.finish(EQUATION_SENTINEL);
    trail
}

fn solve_pair(eq1: &str, eq2: &str, var1: &str, var2: &str) -> DerivationTrail {
    let mut trail = DerivationTrail::new();
    trail.append(
        "Step 1",
        format!("Start with the system of equations\n   {}\n   {}", eq1, eq2),
    );
    trail.append(
        "Step 2",
        "Solve the system using substitution or elimination method".to_string(),
    );
    trail.append(
        "Step 3",
        "First, isolate one variable in one equation".to_string(),
    );

    // only the v1 + v2 = a / v1 - v2 = b elimination pair is recognized
    if eq1.contains('+') && eq1.contains('=') && eq2.contains('-') && eq2.contains('=') {
        let first = LinearEquation::from_text(eq1);
        let second = LinearEquation::from_text(eq2);
        if let (Some(first), Some(second)) = (first, second) {
            if let (Some(a), Some(b)) = (
                parse_leading_f64(&first.right),
                parse_leading_f64(&second.right),
            ) {
                let v1 = (a + b) / 2.0;
                let v2 = a - v1;
                trail.append(
                    "Step 4",
                    format!(
                        "Add the equations to eliminate {}\n   {}\n   {}\n   Result: 2{} = {}\n   {} = {}",
                        var2,
                        eq1,
                        eq2,
                        var1,
                        a + b,
                        var1,
                        v1
                    ),
                );
                trail.append(
                    "Step 5",
                    format!(
                        "Substitute {} = {} into the first equation\n   {} + {} = {}\n   {} = {} - {}\n   {} = {}",
                        var1, v1, v1, var2, a, var2, a, v1, var2, v2
                    ),
                );
                trail.finish(format!("{} = {}, {} = {}", var1, v1, var2, v2));
                return trail;
            }
        }
    }

    trail.append(
        "Step 4",
        "This system requires algebraic manipulation to solve".to_string(),
    );
    trail.append(
        "Step 5",
        "After substitution or elimination, solve for both variables".to_string(),
    );
    trail.finish(SYSTEM_SENTINEL);
    trail
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(equation: &str, variable: &str) -> DerivationTrail {
        solve(&EquationSystem::new([variable], [equation]))
    }

    #[test]
    fn test_verbatim_right_side() {
        let trail = single("x = 5", "x");
        assert_eq!(trail.result(), Some("x = 5"));
    }

    #[test]
    fn test_move_constant_to_the_right() {
        let trail = single("x + 3 = 8", "x");
        assert_eq!(trail.result(), Some("x = 5"));
    }

    #[test]
    fn test_constant_before_variable() {
        let trail = single("3 + x = 8", "x");
        assert_eq!(trail.result(), Some("x = 5"));
    }

    #[test]
    fn test_coefficient_with_additive_constant() {
        let trail = single("2x + 3 = 8", "x");
        assert_eq!(trail.result(), Some("x = 2.5"));
    }

    #[test]
    fn test_coefficient_division() {
        assert_eq!(single("2x = 8", "x").result(), Some("x = 4"));
        assert_eq!(single("2*x = 8", "x").result(), Some("x = 4"));
    }

    #[test]
    fn test_subtraction_on_the_left_degrades() {
        let trail = single("x - 3 = 8", "x");
        assert_eq!(trail.result(), Some(EQUATION_SENTINEL));
    }

    #[test]
    fn test_missing_equals_degrades() {
        let trail = single("x + 3", "x");
        assert_eq!(trail.result(), Some(EQUATION_SENTINEL));
    }

    #[test]
    fn test_non_numeric_constant_degrades() {
        let trail = single("x + a = 8", "x");
        assert_eq!(trail.result(), Some(EQUATION_SENTINEL));
    }

    #[test]
    fn test_elimination_pair() {
        let system = EquationSystem::new(["x", "y"], ["x + y = 10", "x - y = 5"]);
        let trail = solve(&system);
        assert_eq!(trail.result(), Some("x = 7.5, y = 2.5"));
    }

    #[test]
    fn test_unrecognized_pair_degrades() {
        let system = EquationSystem::new(["x", "y"], ["x + y = 10", "2x + y = 5"]);
        let trail = solve(&system);
        assert_eq!(trail.result(), Some(SYSTEM_SENTINEL));
    }

    #[test]
    fn test_cardinality_mismatch_short_circuits() {
        let system = EquationSystem::new(["x", "y", "z"], ["x + y = 10"]);
        let trail = solve(&system);
        assert_eq!(trail.result(), Some(COMPLEX_SENTINEL));
        assert_eq!(trail.steps().len(), 2);
    }

    #[test]
    fn test_parse_leading_f64() {
        assert_eq!(parse_leading_f64("2*"), Some(2.0));
        assert_eq!(parse_leading_f64("2.5x"), Some(2.5));
        assert_eq!(parse_leading_f64("-3"), Some(-3.0));
        assert_eq!(parse_leading_f64("-"), None);
        assert_eq!(parse_leading_f64("abc"), None);
    }
}
