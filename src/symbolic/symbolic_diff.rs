//! # Symbolic Differentiation Module
//!
//! Analytical differentiation over the [`Expr`] tree: power rule, product
//! rule, quotient rule and the chain rule for every supported function.
//!
//! The power rule treats the exponent as a constant with respect to the
//! differentiation variable; exponentials with a variable exponent are
//! covered by the dedicated `Exp` variant (the parser lowers `e^u` to it),
//! so `d/dx e^x = e^x` holds exactly.

use crate::symbolic::symbolic_engine::Expr;

impl Expr {
    /// Computes the analytical derivative with respect to `var`.
    ///
    /// The result is not simplified; pass it through [`Expr::simplify`] for a
    /// readable form.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let f = Expr::parse_expression("x^2").unwrap();
    /// let df = f.diff("x").simplify(); // 2 * x
    /// ```
    pub fn diff(&self, var: &str) -> Expr {
        match self {
            Expr::Var(name) => {
                if name == var {
                    Expr::Const(1.0)
                } else {
                    Expr::Const(0.0)
                }
            }
            Expr::Const(_) => Expr::Const(0.0),
            Expr::Add(lhs, rhs) => Expr::Add(Box::new(lhs.diff(var)), Box::new(rhs.diff(var))),
            Expr::Sub(lhs, rhs) => Expr::Sub(Box::new(lhs.diff(var)), Box::new(rhs.diff(var))),
            Expr::Mul(lhs, rhs) => Expr::Add(
                Box::new(Expr::Mul(Box::new(lhs.diff(var)), rhs.clone())),
                Box::new(Expr::Mul(lhs.clone(), Box::new(rhs.diff(var)))),
            ),
            Expr::Div(lhs, rhs) => Expr::Div(
                Box::new(Expr::Sub(
                    Box::new(Expr::Mul(Box::new(lhs.diff(var)), rhs.clone())),
                    Box::new(Expr::Mul(Box::new(rhs.diff(var)), lhs.clone())),
                )),
                Box::new(Expr::Mul(rhs.clone(), rhs.clone())),
            ),
            // power rule with chain factor; exponent treated as constant
            Expr::Pow(base, exp) => Expr::Mul(
                Box::new(Expr::Mul(
                    exp.clone(),
                    Box::new(Expr::Pow(
                        base.clone(),
                        Box::new(Expr::Sub(exp.clone(), Box::new(Expr::Const(1.0)))),
                    )),
                )),
                Box::new(base.diff(var)),
            ),
            Expr::Exp(expr) => {
                Expr::Mul(Box::new(Expr::Exp(expr.clone())), Box::new(expr.diff(var)))
            }
            Expr::Ln(expr) => Expr::Div(Box::new(expr.diff(var)), expr.clone()),
            Expr::sin(expr) => {
                Expr::Mul(Box::new(Expr::cos(expr.clone())), Box::new(expr.diff(var)))
            }
            Expr::cos(expr) => Expr::Mul(
                Box::new(Expr::Mul(
                    Box::new(Expr::Const(-1.0)),
                    Box::new(Expr::sin(expr.clone())),
                )),
                Box::new(expr.diff(var)),
            ),
            Expr::tg(expr) => Expr::Mul(
                Box::new(Expr::Div(
                    Box::new(Expr::Const(1.0)),
                    Box::new(Expr::Pow(
                        Box::new(Expr::cos(expr.clone())),
                        Box::new(Expr::Const(2.0)),
                    )),
                )),
                Box::new(expr.diff(var)),
            ),
            Expr::ctg(expr) => Expr::Mul(
                Box::new(Expr::Div(
                    Box::new(Expr::Const(-1.0)),
                    Box::new(Expr::Pow(
                        Box::new(Expr::sin(expr.clone())),
                        Box::new(Expr::Const(2.0)),
                    )),
                )),
                Box::new(expr.diff(var)),
            ),
            Expr::arcsin(expr) => Expr::Div(
                Box::new(expr.diff(var)),
                Box::new(Expr::Pow(
                    Box::new(Expr::Sub(
                        Box::new(Expr::Const(1.0)),
                        Box::new(Expr::Pow(expr.clone(), Box::new(Expr::Const(2.0)))),
                    )),
                    Box::new(Expr::Const(0.5)),
                )),
            ),
            Expr::arccos(expr) => Expr::Div(
                Box::new(Expr::Mul(
                    Box::new(Expr::Const(-1.0)),
                    Box::new(expr.diff(var)),
                )),
                Box::new(Expr::Pow(
                    Box::new(Expr::Sub(
                        Box::new(Expr::Const(1.0)),
                        Box::new(Expr::Pow(expr.clone(), Box::new(Expr::Const(2.0)))),
                    )),
                    Box::new(Expr::Const(0.5)),
                )),
            ),
            Expr::arctg(expr) => Expr::Div(
                Box::new(expr.diff(var)),
                Box::new(Expr::Add(
                    Box::new(Expr::Const(1.0)),
                    Box::new(Expr::Pow(expr.clone(), Box::new(Expr::Const(2.0)))),
                )),
            ),
        }
    }

    /// Computes the nth derivative of a single-variable expression,
    /// simplifying between applications to keep the tree small.
    pub fn nth_derivative(&self, var: &str, n: usize) -> Expr {
        let mut expr = self.clone();
        for _ in 0..n {
            expr = expr.diff(var).simplify();
        }
        expr
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_diff_power() {
        let f = Expr::parse_expression("x^2").unwrap();
        let df = f.diff("x");
        assert_relative_eq!(df.eval_at("x", 3.0), 6.0);
    }

    #[test]
    fn test_diff_constant_is_zero() {
        let f = Expr::parse_expression("7").unwrap();
        assert_eq!(f.diff("x").simplify(), Expr::Const(0.0));
    }

    #[test]
    fn test_diff_sin_is_cos() {
        let f = Expr::parse_expression("sin(x)").unwrap();
        let df = f.diff("x").simplify();
        assert_eq!(df, Expr::cos(Box::new(Expr::Var("x".to_string()))));
    }

    #[test]
    fn test_diff_exp_is_exp() {
        let f = Expr::parse_expression("e^x").unwrap();
        let df = f.diff("x").simplify();
        assert_eq!(df, Expr::Exp(Box::new(Expr::Var("x".to_string()))));
    }

    #[test]
    fn test_diff_quotient_rule() {
        // d/dx (x / (x + 1)) = 1 / (x + 1)^2
        let f = Expr::parse_expression("x/(x + 1)").unwrap();
        let df = f.diff("x");
        assert_relative_eq!(df.eval_at("x", 1.0), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_diff_partial_other_variable() {
        let f = Expr::parse_expression("x*y").unwrap();
        let df_dy = f.diff("y").simplify();
        assert_eq!(df_dy, Expr::Var("x".to_string()));
    }

    #[test]
    fn test_nth_derivative() {
        let f = Expr::parse_expression("x^3").unwrap();
        let d2 = f.nth_derivative("x", 2);
        assert_relative_eq!(d2.eval_at("x", 2.0), 12.0);
    }
}
