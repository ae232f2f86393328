#![allow(non_snake_case)]
/// # Stepwise derivation components
///
/// The four derivation request kinds and their shared step recorder:
/// - narrated differentiation (`derivative_steps`)
/// - table-driven integration (`integrate_rules` + `term_decompose`)
/// - limits with a single L'Hôpital fallback (`limit_eval`)
/// - small linear equation/system solving (`linear_solve`)
///
/// Every request builds one fresh `DerivationTrail` and either finishes it
/// with a closed-form result or with a descriptive sentinel; only a parse
/// failure of the top-level expression aborts a request.
///
///# Example
/// ```
/// use RustedCalcSteps::stepwise::step_solver::StepSolver;
/// let mut solver = StepSolver::new();
/// solver.set_loglevel(Some("off".to_string()));
/// let trail = solver.integrate("x^2", "x").unwrap();
/// for step in trail.steps() {
///     println!("{}", step);
/// }
/// assert_eq!(trail.result(), Some("x^3/3 + C"));
/// ```
pub mod derivation_trail;
/// splits an additive expression into signed terms (parenthesis-blind)
pub mod term_decompose;
/// table-driven antiderivative assembly with a narrated rule trail
pub mod integrate_rules;
/// direct substitution limits with one derivative-ratio fallback
pub mod limit_eval;
/// single-equation isolation and 2x2 elimination by text rearrangement
pub mod linear_solve;
/// narrated differentiation walkthrough
pub mod derivative_steps;
/// request facade: dispatch + per-request logger setup
pub mod step_solver;

#[cfg(test)]
mod stepwise_tests;
