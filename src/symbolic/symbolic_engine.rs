//! # Symbolic Engine Module
//!
//! Core expression tree for the derivation engine. An [`Expr`] is an immutable
//! value: every transformation (differentiation, simplification, substitution)
//! returns a new tree, so expressions can be shared freely between the scanner
//! and the step-by-step components.
//!
//! ## Main Structures and Methods
//!
//! ### `Expr` Enum
//! - **Variables**: `Var(String)` - symbolic variables like "x", "y"
//! - **Constants**: `Const(f64)` - numerical constants
//! - **Operations**: `Add`, `Sub`, `Mul`, `Div`, `Pow` - basic arithmetic
//! - **Functions**: `Exp`, `Ln`, `sin`, `cos`, etc. - mathematical functions
//!
//! ### Key Methods
//! - `eval_with_bindings()` - evaluate against a variable map; failures come
//!   back as `NaN`, never as a panic
//! - `contains_variable()` - dependency check used by the solver components
//! - `diff()` / `simplify()` - provided by the sibling modules

#![allow(non_camel_case_types)]

use std::collections::HashMap;
use std::f64;
use std::f64::consts::PI;
use std::fmt;

/// Symbolic expression tree. Recursive variants hold `Box<Expr>` so trees of
/// arbitrary depth can be built from parsed input.
///
/// Trigonometric variants use mathematical notation (`tg`, `ctg`, `arctg`)
/// rather than programming names.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Symbolic variable with a name (e.g., "x", "y")
    Var(String),
    /// Numerical constant value
    Const(f64),
    /// Addition operation: left + right
    Add(Box<Expr>, Box<Expr>),
    /// Subtraction operation: left - right
    Sub(Box<Expr>, Box<Expr>),
    /// Multiplication operation: left * right
    Mul(Box<Expr>, Box<Expr>),
    /// Division operation: left / right
    Div(Box<Expr>, Box<Expr>),
    /// Power operation: base ^ exponent
    Pow(Box<Expr>, Box<Expr>),
    /// Exponential function: e^x
    Exp(Box<Expr>),
    /// Natural logarithm: ln(x)
    Ln(Box<Expr>),
    /// Sine function: sin(x)
    sin(Box<Expr>),
    /// Cosine function: cos(x)
    cos(Box<Expr>),
    /// Tangent function: tan(x) - mathematical notation 'tg'
    tg(Box<Expr>),
    /// Cotangent function: cot(x) - mathematical notation 'ctg'
    ctg(Box<Expr>),
    /// Arcsine function: arcsin(x)
    arcsin(Box<Expr>),
    /// Arccosine function: arccos(x)
    arccos(Box<Expr>),
    /// Arctangent function: arctan(x) - mathematical notation 'arctg'
    arctg(Box<Expr>),
}

/// Pretty printing with explicit parentheses so operator precedence is never
/// ambiguous in derivation trails.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Const(val) => write!(f, "{}", val),
            Expr::Add(lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            Expr::Sub(lhs, rhs) => write!(f, "({} - {})", lhs, rhs),
            Expr::Mul(lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
            Expr::Div(lhs, rhs) => write!(f, "({} / {})", lhs, rhs),
            Expr::Pow(base, exp) => write!(f, "({} ^ {})", base, exp),
            Expr::Exp(expr) => write!(f, "exp({})", expr),
            Expr::Ln(expr) => write!(f, "ln({})", expr),
            Expr::sin(expr) => write!(f, "sin({})", expr),
            Expr::cos(expr) => write!(f, "cos({})", expr),
            Expr::tg(expr) => write!(f, "tg({})", expr),
            Expr::ctg(expr) => write!(f, "ctg({})", expr),
            Expr::arcsin(expr) => write!(f, "arcsin({})", expr),
            Expr::arccos(expr) => write!(f, "arccos({})", expr),
            Expr::arctg(expr) => write!(f, "arctg({})", expr),
        }
    }
}

impl std::ops::Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::Add(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::Sub(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::Mul(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::Div(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Expr::Mul(Box::new(Expr::Const(-1.0)), Box::new(self))
    }
}

impl Expr {
    /// Convenience wrapper for recursive construction.
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    /// Creates power expression self^rhs.
    pub fn pow(self, rhs: Expr) -> Expr {
        Expr::Pow(self.boxed(), rhs.boxed())
    }

    /// Creates exponential function e^(self).
    pub fn exp(self) -> Expr {
        Expr::Exp(self.boxed())
    }

    /// Creates natural logarithm ln(self).
    pub fn ln(self) -> Expr {
        Expr::Ln(self.boxed())
    }

    /// Checks if expression is exactly the constant 0.0.
    pub fn is_zero(&self) -> bool {
        match self {
            Expr::Const(val) => val == &0.0,
            _ => false,
        }
    }

    /// check if the expression contains a variable
    pub fn contains_variable(&self, var_name: &str) -> bool {
        match self {
            Expr::Var(name) => name == var_name,
            Expr::Const(_) => false,
            Expr::Add(left, right)
            | Expr::Sub(left, right)
            | Expr::Mul(left, right)
            | Expr::Div(left, right)
            | Expr::Pow(left, right) => {
                left.contains_variable(var_name) || right.contains_variable(var_name)
            }
            Expr::Exp(expr)
            | Expr::Ln(expr)
            | Expr::sin(expr)
            | Expr::cos(expr)
            | Expr::tg(expr)
            | Expr::ctg(expr)
            | Expr::arcsin(expr)
            | Expr::arccos(expr)
            | Expr::arctg(expr) => expr.contains_variable(var_name),
        }
    }

    /// Extracts all unique variable names, sorted and deduplicated.
    pub fn extract_variables(&self) -> Vec<String> {
        let mut vars = Vec::new();
        match self {
            Expr::Var(name) => {
                vars.push(name.clone());
            }
            Expr::Const(_) => {}
            Expr::Add(lhs, rhs)
            | Expr::Sub(lhs, rhs)
            | Expr::Mul(lhs, rhs)
            | Expr::Div(lhs, rhs)
            | Expr::Pow(lhs, rhs) => {
                vars.extend(lhs.extract_variables());
                vars.extend(rhs.extract_variables());
            }
            Expr::Exp(expr)
            | Expr::Ln(expr)
            | Expr::sin(expr)
            | Expr::cos(expr)
            | Expr::tg(expr)
            | Expr::ctg(expr)
            | Expr::arcsin(expr)
            | Expr::arccos(expr)
            | Expr::arctg(expr) => {
                vars.extend(expr.extract_variables());
            }
        }
        vars.sort();
        vars.dedup();
        vars
    }

    /// Evaluates the expression against a variable binding map.
    ///
    /// Every failure mode degrades to `NaN` instead of panicking: an unbound
    /// variable yields `NaN` directly, and domain errors (ln of a negative
    /// number, arcsin outside [-1, 1]) produce `NaN` through f64 arithmetic.
    /// Division by zero follows IEEE semantics and may return an infinity;
    /// callers that need "finite or nothing" must check with `is_finite()`.
    ///
    /// # Arguments
    /// * `bindings` - map from variable name (case-sensitive) to its value
    pub fn eval_with_bindings(&self, bindings: &HashMap<String, f64>) -> f64 {
        match self {
            Expr::Var(name) => bindings.get(name).copied().unwrap_or(f64::NAN),
            Expr::Const(val) => *val,
            Expr::Add(lhs, rhs) => {
                lhs.eval_with_bindings(bindings) + rhs.eval_with_bindings(bindings)
            }
            Expr::Sub(lhs, rhs) => {
                lhs.eval_with_bindings(bindings) - rhs.eval_with_bindings(bindings)
            }
            Expr::Mul(lhs, rhs) => {
                lhs.eval_with_bindings(bindings) * rhs.eval_with_bindings(bindings)
            }
            Expr::Div(lhs, rhs) => {
                lhs.eval_with_bindings(bindings) / rhs.eval_with_bindings(bindings)
            }
            Expr::Pow(base, exp) => base
                .eval_with_bindings(bindings)
                .powf(exp.eval_with_bindings(bindings)),
            Expr::Exp(expr) => expr.eval_with_bindings(bindings).exp(),
            Expr::Ln(expr) => expr.eval_with_bindings(bindings).ln(),
            Expr::sin(expr) => expr.eval_with_bindings(bindings).sin(),
            Expr::cos(expr) => expr.eval_with_bindings(bindings).cos(),
            Expr::tg(expr) => expr.eval_with_bindings(bindings).tan(),
            Expr::ctg(expr) => 1.0 / expr.eval_with_bindings(bindings).tan(),
            Expr::arcsin(expr) => expr.eval_with_bindings(bindings).asin(),
            Expr::arccos(expr) => expr.eval_with_bindings(bindings).acos(),
            Expr::arctg(expr) => expr.eval_with_bindings(bindings).atan(),
        }
    }

    /// Evaluates a single-variable expression at one point.
    pub fn eval_at(&self, var: &str, value: f64) -> f64 {
        let mut bindings = HashMap::new();
        bindings.insert(var.to_string(), value);
        self.eval_with_bindings(&bindings)
    }

    /// pi as an expression constant
    pub fn pi() -> Expr {
        Expr::Const(PI)
    }

    /// Euler's number as an expression constant
    pub fn euler() -> Expr {
        Expr::Const(f64::consts::E)
    }
}
