//! a module turns a String expression into a symbolic expression
//!
//! The parser works by recursive splitting: it looks for the lowest-priority
//! operator outside brackets (rightmost `+`/`-`, then rightmost `*`/`/`, then
//! leftmost `^`), splits the input there and parses both halves. What remains
//! after all splits is a function call, a bracketed group, a constant or a
//! variable.
//!
//! `e^u` parses to `Exp(u)` (not `Pow`) so that differentiation and
//! evaluation of exponentials are exact, and `sqrt(u)` lowers to
//! `Pow(u, 0.5)`.
//!
//!# Example
//! ```rust, ignore
//! use RustedCalcSteps::symbolic::symbolic_engine::Expr;
//! let parsed = Expr::parse_expression("x^2 - 1").unwrap();
//! assert_eq!(parsed.eval_at("x", 2.0), 3.0);
//! ```

use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::utils::{
    find_leftmost_operator_outside_brackets, find_matching_bracket,
    find_rightmost_operator_outside_brackets,
};
use log::trace;
use std::f64::consts::{E, PI};

/// Function heads recognized by the parser, tried in order. Several spellings
/// map onto one variant (tan/tg, acos/arccos, ...).
const FUNCTION_HEADS: &[(&str, fn(Box<Expr>) -> Expr)] = &[
    ("exp", Expr::Exp),
    ("ln", Expr::Ln),
    ("log", Expr::Ln),
    ("sqrt", sqrt_expr),
    ("arcsin", Expr::arcsin),
    ("asin", Expr::arcsin),
    ("arccos", Expr::arccos),
    ("acos", Expr::arccos),
    ("arctan", Expr::arctg),
    ("arctg", Expr::arctg),
    ("atan", Expr::arctg),
    ("sin", Expr::sin),
    ("cos", Expr::cos),
    ("tan", Expr::tg),
    ("tg", Expr::tg),
    ("cot", Expr::ctg),
    ("ctg", Expr::ctg),
];

fn sqrt_expr(inner: Box<Expr>) -> Expr {
    Expr::Pow(inner, Box::new(Expr::Const(0.5)))
}

/// Parses a textual expression into an [`Expr`] tree.
///
/// # Supported Syntax
/// - Variables: x, y, var_name
/// - Constants: 3.14, -2.5, pi, e
/// - Operators: +, -, *, /, ^ and unary minus
/// - Functions: sin, cos, tan, cot, asin, acos, atan, exp, ln, log, sqrt
/// - Parentheses for grouping
pub fn parse_expression_str(input: &str) -> Result<Expr, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Invalid expression format: empty input".to_string());
    }
    trace!("parsing fragment: {}", input);

    // a group that spans the whole input is stripped and re-parsed
    if input.starts_with('(') {
        if let Some(end) = find_matching_bracket(input, 0) {
            if end == input.len() - 1 {
                return parse_expression_str(&input[1..end]);
            }
        } else {
            return Err(format!("Unmatched bracket in '{}'", input));
        }
    }

    // addition / subtraction (rightmost split keeps them left-associative)
    if let Some((pos, op)) = find_rightmost_operator_outside_brackets(input, &['+', '-']) {
        let left = &input[..pos];
        let right = &input[pos + 1..];
        trace!("SIGN '{}' found at position {}", op, pos);
        let lhs = parse_expression_str(left)?;
        let rhs = parse_expression_str(right)?;
        return Ok(match op {
            '+' => Expr::Add(lhs.boxed(), rhs.boxed()),
            _ => Expr::Sub(lhs.boxed(), rhs.boxed()),
        });
    }

    // unary minus / plus survives only when no binary +/- was found
    if let Some(rest) = input.strip_prefix('-') {
        let inner = parse_expression_str(rest)?;
        return Ok(match inner {
            Expr::Const(val) => Expr::Const(-val),
            other => Expr::Mul(Box::new(Expr::Const(-1.0)), other.boxed()),
        });
    }
    if let Some(rest) = input.strip_prefix('+') {
        return parse_expression_str(rest);
    }

    // multiplication / division
    if let Some((pos, op)) = find_rightmost_operator_outside_brackets(input, &['*', '/']) {
        let lhs = parse_expression_str(&input[..pos])?;
        let rhs = parse_expression_str(&input[pos + 1..])?;
        return Ok(match op {
            '*' => Expr::Mul(lhs.boxed(), rhs.boxed()),
            _ => Expr::Div(lhs.boxed(), rhs.boxed()),
        });
    }

    // power; leftmost split makes chained powers right-associative
    if let Some(pos) = find_leftmost_operator_outside_brackets(input, '^') {
        let base = input[..pos].trim();
        let exponent = parse_expression_str(&input[pos + 1..])?;
        if base == "e" {
            return Ok(Expr::Exp(exponent.boxed()));
        }
        let base_expr = parse_expression_str(base)?;
        return Ok(Expr::Pow(base_expr.boxed(), exponent.boxed()));
    }

    // function heads: name(...)
    for (name, constructor) in FUNCTION_HEADS {
        if let Some(after_head) = input.strip_prefix(name) {
            if after_head.starts_with('(') && input.ends_with(')') {
                let open = name.len();
                match find_matching_bracket(input, open) {
                    Some(end) if end == input.len() - 1 => {
                        let inner = parse_expression_str(&input[open + 1..end])?;
                        return Ok(constructor(inner.boxed()));
                    }
                    Some(_) => {}
                    None => return Err(format!("Unmatched bracket in '{}'", input)),
                }
            }
        }
    }

    // constants and variables
    if let Ok(value) = input.parse::<f64>() {
        trace!("found constant: {}", value);
        return Ok(Expr::Const(value));
    }
    match input {
        "pi" => return Ok(Expr::Const(PI)),
        "e" => return Ok(Expr::Const(E)),
        _ => {}
    }
    if input
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
        && input.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
    {
        trace!("found variable: {}", input);
        return Ok(Expr::Var(input.to_string()));
    }

    Err(format!("Invalid expression format: '{}'", input))
}

impl Expr {
    /// Parses a mathematical expression from its string representation.
    ///
    /// # Errors
    /// Returns a description of the offending fragment when the input is not
    /// valid syntax.
    pub fn parse_expression(input: &str) -> Result<Expr, String> {
        parse_expression_str(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_constant() {
        let expr = parse_expression_str("42").unwrap();
        assert_eq!(expr, Expr::Const(42.0));
    }

    #[test]
    fn test_parse_variable() {
        let expr = parse_expression_str("x").unwrap();
        assert_eq!(expr, Expr::Var("x".to_string()));
    }

    #[test]
    fn test_parse_addition() {
        let expr = parse_expression_str("x + 2").unwrap();
        assert_eq!(
            expr,
            Expr::Add(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Const(2.0))
            )
        );
    }

    #[test]
    fn test_parse_subtraction_left_associative() {
        let expr = parse_expression_str("x - 2 - 1").unwrap();
        let inner = Expr::Sub(
            Box::new(Expr::Var("x".to_string())),
            Box::new(Expr::Const(2.0)),
        );
        assert_eq!(expr, Expr::Sub(Box::new(inner), Box::new(Expr::Const(1.0))));
    }

    #[test]
    fn test_parse_power() {
        let expr = parse_expression_str("x^2").unwrap();
        assert_eq!(
            expr,
            Expr::Pow(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Const(2.0))
            )
        );
    }

    #[test]
    fn test_parse_polynomial() {
        let expr = parse_expression_str("x^2 - x - 1").unwrap();
        let x = Box::new(Expr::Var("x".to_string()));
        let expected =
            Expr::Pow(x.clone(), Box::new(Expr::Const(2.0))) - *x - Expr::Const(1.0);
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_parse_brackets() {
        let expr = parse_expression_str("(x + y) * z").unwrap();
        assert_eq!(
            expr,
            Expr::Mul(
                Box::new(Expr::Add(
                    Box::new(Expr::Var("x".to_string())),
                    Box::new(Expr::Var("y".to_string()))
                )),
                Box::new(Expr::Var("z".to_string()))
            )
        );
    }

    #[test]
    fn test_parse_unary_minus() {
        let expr = parse_expression_str("-3*x").unwrap();
        assert_relative_eq!(expr.eval_at("x", 2.0), -6.0);
    }

    #[test]
    fn test_parse_trig_and_nested() {
        let expr = parse_expression_str("sin(cos(x))").unwrap();
        assert_eq!(
            expr,
            Expr::sin(Box::new(Expr::cos(Box::new(Expr::Var("x".to_string())))))
        );
    }

    #[test]
    fn test_parse_tan_alias() {
        assert_eq!(
            parse_expression_str("tan(x)").unwrap(),
            Expr::tg(Box::new(Expr::Var("x".to_string())))
        );
    }

    #[test]
    fn test_parse_euler_power_becomes_exp() {
        let expr = parse_expression_str("e^x").unwrap();
        assert_eq!(expr, Expr::Exp(Box::new(Expr::Var("x".to_string()))));
    }

    #[test]
    fn test_parse_sqrt_lowers_to_pow() {
        let expr = parse_expression_str("sqrt(1 - x^2)").unwrap();
        assert_relative_eq!(expr.eval_at("x", 0.6), 0.8);
    }

    #[test]
    fn test_parse_division_chain() {
        let expr = parse_expression_str("8/4/2").unwrap();
        assert_relative_eq!(expr.eval_at("x", 0.0), 1.0);
    }

    #[test]
    fn test_parse_rational() {
        let expr = parse_expression_str("sin(x)/x").unwrap();
        assert_relative_eq!(expr.eval_at("x", 1.0), 1.0_f64.sin(), epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_expression() {
        assert!(parse_expression_str("(x +").is_err());
        assert!(parse_expression_str("").is_err());
        assert!(parse_expression_str("@invalid@").is_err());
    }
}
