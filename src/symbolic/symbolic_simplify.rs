//! # Symbolic Expression Simplification Module
//!
//! Algebraic cleanup for [`Expr`] trees. One bottom-up pass that combines:
//!
//! 1. **Constant Folding**: arithmetic and functions applied to constants
//! 2. **Algebraic Identities**: x + 0 = x, x * 1 = x, 0 * x = 0, x^1 = x, ...
//!
//! Differentiation produces heavily nested trees full of `* 1` and `+ 0`
//! noise; this pass reduces them to the form shown in derivation trails.

use crate::symbolic::symbolic_engine::Expr;

impl Expr {
    /// Simplifies the expression: folds constants and applies the standard
    /// algebraic identities bottom-up. Returns a new expression.
    pub fn simplify(&self) -> Expr {
        match self {
            Expr::Var(_) | Expr::Const(_) => self.clone(),
            Expr::Add(lhs, rhs) => match (lhs.simplify(), rhs.simplify()) {
                (Expr::Const(a), Expr::Const(b)) => Expr::Const(a + b),
                (Expr::Const(z), e) if z == 0.0 => e,
                (e, Expr::Const(z)) if z == 0.0 => e,
                (l, r) => Expr::Add(l.boxed(), r.boxed()),
            },
            Expr::Sub(lhs, rhs) => match (lhs.simplify(), rhs.simplify()) {
                (Expr::Const(a), Expr::Const(b)) => Expr::Const(a - b),
                (e, Expr::Const(z)) if z == 0.0 => e,
                (Expr::Const(z), e) if z == 0.0 => {
                    Expr::Mul(Box::new(Expr::Const(-1.0)), e.boxed())
                }
                (l, r) => Expr::Sub(l.boxed(), r.boxed()),
            },
            Expr::Mul(lhs, rhs) => match (lhs.simplify(), rhs.simplify()) {
                (Expr::Const(a), Expr::Const(b)) => Expr::Const(a * b),
                (Expr::Const(z), _) | (_, Expr::Const(z)) if z == 0.0 => Expr::Const(0.0),
                (Expr::Const(one), e) if one == 1.0 => e,
                (e, Expr::Const(one)) if one == 1.0 => e,
                (l, r) => Expr::Mul(l.boxed(), r.boxed()),
            },
            Expr::Div(lhs, rhs) => match (lhs.simplify(), rhs.simplify()) {
                (Expr::Const(a), Expr::Const(b)) if b != 0.0 => Expr::Const(a / b),
                (Expr::Const(z), e) if z == 0.0 && !e.is_zero() => Expr::Const(0.0),
                (e, Expr::Const(one)) if one == 1.0 => e,
                (l, r) => Expr::Div(l.boxed(), r.boxed()),
            },
            Expr::Pow(base, exp) => match (base.simplify(), exp.simplify()) {
                (Expr::Const(a), Expr::Const(b)) => Expr::Const(a.powf(b)),
                (e, Expr::Const(one)) if one == 1.0 => e,
                (_, Expr::Const(z)) if z == 0.0 => Expr::Const(1.0),
                (b, e) => Expr::Pow(b.boxed(), e.boxed()),
            },
            Expr::Exp(expr) => match expr.simplify() {
                Expr::Const(v) => Expr::Const(v.exp()),
                e => Expr::Exp(e.boxed()),
            },
            Expr::Ln(expr) => match expr.simplify() {
                Expr::Const(v) if v > 0.0 => Expr::Const(v.ln()),
                e => Expr::Ln(e.boxed()),
            },
            Expr::sin(expr) => match expr.simplify() {
                Expr::Const(v) => Expr::Const(v.sin()),
                e => Expr::sin(e.boxed()),
            },
            Expr::cos(expr) => match expr.simplify() {
                Expr::Const(v) => Expr::Const(v.cos()),
                e => Expr::cos(e.boxed()),
            },
            Expr::tg(expr) => match expr.simplify() {
                Expr::Const(v) => Expr::Const(v.tan()),
                e => Expr::tg(e.boxed()),
            },
            Expr::ctg(expr) => match expr.simplify() {
                Expr::Const(v) => Expr::Const(1.0 / v.tan()),
                e => Expr::ctg(e.boxed()),
            },
            Expr::arcsin(expr) => match expr.simplify() {
                Expr::Const(v) => Expr::Const(v.asin()),
                e => Expr::arcsin(e.boxed()),
            },
            Expr::arccos(expr) => match expr.simplify() {
                Expr::Const(v) => Expr::Const(v.acos()),
                e => Expr::arccos(e.boxed()),
            },
            Expr::arctg(expr) => match expr.simplify() {
                Expr::Const(v) => Expr::Const(v.atan()),
                e => Expr::arctg(e.boxed()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_folding() {
        let expr = Expr::Const(2.0) + Expr::Const(3.0);
        assert_eq!(expr.simplify(), Expr::Const(5.0));
    }

    #[test]
    fn test_mul_by_one_and_zero() {
        let x = Expr::Var("x".to_string());
        assert_eq!((x.clone() * Expr::Const(1.0)).simplify(), x.clone());
        assert_eq!((x.clone() * Expr::Const(0.0)).simplify(), Expr::Const(0.0));
    }

    #[test]
    fn test_add_zero() {
        let x = Expr::Var("x".to_string());
        assert_eq!((x.clone() + Expr::Const(0.0)).simplify(), x.clone());
        assert_eq!((Expr::Const(0.0) + x.clone()).simplify(), x);
    }

    #[test]
    fn test_pow_identities() {
        let x = Expr::Var("x".to_string());
        assert_eq!(x.clone().pow(Expr::Const(1.0)).simplify(), x.clone());
        assert_eq!(x.pow(Expr::Const(0.0)).simplify(), Expr::Const(1.0));
    }

    #[test]
    fn test_derivative_noise_collapses() {
        // raw d/dx x^2 is ((2 * x^(2 - 1)) * 1); the pass reduces it to 2 * x
        let f = Expr::parse_expression("x^2").unwrap();
        let df = f.diff("x").simplify();
        let expected = Expr::Mul(
            Box::new(Expr::Const(2.0)),
            Box::new(Expr::Var("x".to_string())),
        );
        assert_eq!(df, expected);
    }

    #[test]
    fn test_div_by_one() {
        let x = Expr::Var("x".to_string());
        assert_eq!((x.clone() / Expr::Const(1.0)).simplify(), x);
    }
}
