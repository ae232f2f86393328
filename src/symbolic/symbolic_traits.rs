// SYMBOLIC TRAITS //////////////////////////////////////////////////////////////////
// The capability set the derivation components are allowed to use:
// parse / evaluate / differentiate / simplify / render. Implemented for the
// native engine below; add other engines here as needed.

use crate::symbolic::symbolic_engine::Expr;
use std::collections::HashMap;
use thiserror::Error;

/// Errors crossing the engine boundary. A parse failure is the only error
/// that aborts a derivation request; everything downstream degrades locally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("invalid expression: {0}")]
    Parse(String),
    #[error("differentiation failed: {0}")]
    Differentiate(String),
}

/// Expression-engine capability set.
///
/// Expressions are opaque handles owned by the engine: the derivation
/// components obtain them through [`parse`](SymbolicEngine::parse) or
/// [`differentiate`](SymbolicEngine::differentiate), never construct or
/// mutate them, and hand them back for evaluation and rendering.
pub trait SymbolicEngine {
    type Expression: Clone;

    /// Parses textual input into an expression handle.
    fn parse(&self, input: &str) -> Result<Self::Expression, EngineError>;

    /// Evaluates an expression against a binding map. Failures (unbound
    /// variable, domain error) come back as `NaN`, never as an error.
    fn evaluate(&self, expr: &Self::Expression, bindings: &HashMap<String, f64>) -> f64;

    /// Analytical derivative with respect to `var`.
    fn differentiate(&self, expr: &Self::Expression, var: &str)
    -> Result<Self::Expression, EngineError>;

    /// Algebraic simplification.
    fn simplify(&self, expr: &Self::Expression) -> Self::Expression;

    /// Human-readable rendering for derivation trails.
    fn render(&self, expr: &Self::Expression) -> String;

    /// Convenience: evaluate a single-variable expression at one point.
    fn evaluate_at(&self, expr: &Self::Expression, var: &str, value: f64) -> f64 {
        let mut bindings = HashMap::new();
        bindings.insert(var.to_string(), value);
        self.evaluate(expr, &bindings)
    }
}

///////////////// IMPLEMENTATION OF THE TRAIT FOR THE NATIVE ENGINE /////////////////////////

/// The crate's own symbolic engine: [`Expr`] trees built by
/// `parse_expr`, differentiated and simplified by the sibling modules.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeEngine;

impl SymbolicEngine for NativeEngine {
    type Expression = Expr;

    fn parse(&self, input: &str) -> Result<Expr, EngineError> {
        Expr::parse_expression(input).map_err(EngineError::Parse)
    }

    fn evaluate(&self, expr: &Expr, bindings: &HashMap<String, f64>) -> f64 {
        expr.eval_with_bindings(bindings)
    }

    fn differentiate(&self, expr: &Expr, var: &str) -> Result<Expr, EngineError> {
        Ok(expr.diff(var))
    }

    fn simplify(&self, expr: &Expr) -> Expr {
        expr.simplify()
    }

    fn render(&self, expr: &Expr) -> String {
        expr.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_native_engine_roundtrip() {
        let engine = NativeEngine;
        let expr = engine.parse("x^2 + 1").unwrap();
        assert_relative_eq!(engine.evaluate_at(&expr, "x", 2.0), 5.0);
        assert_eq!(engine.render(&expr), "((x ^ 2) + 1)");
    }

    #[test]
    fn test_native_engine_parse_error() {
        let engine = NativeEngine;
        let err = engine.parse("(x +").unwrap_err();
        assert!(matches!(err, EngineError::Parse(_)));
    }

    #[test]
    fn test_native_engine_differentiate() {
        let engine = NativeEngine;
        let expr = engine.parse("sin(x)").unwrap();
        let df = engine.differentiate(&expr, "x").unwrap();
        let df = engine.simplify(&df);
        assert_eq!(engine.render(&df), "cos(x)");
    }
}
