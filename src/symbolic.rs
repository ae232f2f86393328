#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// a module turns a String expression into a symbolic expression
///
///# Example
/// ```
/// use RustedCalcSteps::symbolic::symbolic_engine::Expr;
/// let parsed_expression = Expr::parse_expression("x^2 - 1").unwrap();
/// println!(" parsed_expression {}", parsed_expression);
/// assert_eq!(parsed_expression.eval_at("x", 2.0), 3.0);
/// ```
pub mod parse_expr;
///____________________________________________________________________________________________________________________________
/// # Symbolic engine
/// a module
/// 1) holds the symbolic expression tree
/// 2) evaluates expressions against variable bindings (failures degrade to NaN)
/// 3) turns a symbolic expression into a string expression for printing and control of results
///# Example#
/// ```
/// use RustedCalcSteps::symbolic::symbolic_engine::Expr;
/// let f = Expr::parse_expression("sin(x)/x").unwrap();
/// // evaluate at a point; division by zero follows IEEE semantics
/// let y = f.eval_at("x", 1.0);
/// println!("{}", y);
/// // differentiate with respect to x and simplify
/// let df_dx = f.diff("x").simplify();
/// println!("df_dx = {}", df_dx);
/// ```
pub mod symbolic_engine;
/// analytical differentiation rules (power, product, quotient, chain)
pub mod symbolic_diff;
/// constant folding and algebraic identity cleanup
pub mod symbolic_simplify;
///______________________________________________________________________________________________________________________________________________
/// the capability interface injected into the derivation components
/// (parse / evaluate / differentiate / simplify / render) and the native
/// implementation of it
/// _____________________________________________________________________________________________________________________________________________
pub mod symbolic_traits;
///______________________________________________________________________________________________________________________________________________
/// the collection of utility functions for bracket parsing and proceeding
/// _____________________________________________________________________________________________________________________________________________
pub mod utils;
