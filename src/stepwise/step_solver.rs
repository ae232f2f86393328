//! # Step Solver Facade
//!
//! Entry point for derivation requests: "differentiate f", "integrate f",
//! "find the limit of f as x→c", "solve these equations". Each request runs
//! one of the stepwise components against the configured expression engine
//! and returns a fresh [`DerivationTrail`]; nothing is cached between calls.
//!
//! The facade also owns the logging setup: like the numerical solvers this
//! crate descends from, it initializes a terminal logger per request from an
//! optional `loglevel` string ("off"/"none" disables logging entirely).

use crate::stepwise::derivation_trail::DerivationTrail;
use crate::stepwise::derivative_steps::differentiate_stepwise;
use crate::stepwise::integrate_rules::integrate;
use crate::stepwise::limit_eval::evaluate_limit;
use crate::stepwise::linear_solve::{EquationSystem, solve};
use crate::symbolic::symbolic_traits::{EngineError, NativeEngine, SymbolicEngine};
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};

/// Derivation request dispatcher holding the injected expression engine.
pub struct StepSolver<E: SymbolicEngine = NativeEngine> {
    pub engine: E,
    pub loglevel: Option<String>,
}

impl StepSolver<NativeEngine> {
    pub fn new() -> Self {
        StepSolver {
            engine: NativeEngine,
            loglevel: Some("info".to_string()),
        }
    }
}

impl Default for StepSolver<NativeEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: SymbolicEngine> StepSolver<E> {
    /// Builds a solver around a custom engine implementation.
    pub fn with_engine(engine: E) -> Self {
        StepSolver {
            engine,
            loglevel: Some("info".to_string()),
        }
    }

    pub fn set_loglevel(&mut self, loglevel: Option<String>) {
        self.loglevel = loglevel;
    }

    /// Narrated derivative of `expression` with respect to `variable`.
    pub fn differentiate(
        &self,
        expression: &str,
        variable: &str,
    ) -> Result<DerivationTrail, EngineError> {
        self.init_logging();
        differentiate_stepwise(&self.engine, expression, variable)
    }

    /// Narrated integral of `expression` with respect to `variable`.
    pub fn integrate(
        &self,
        expression: &str,
        variable: &str,
    ) -> Result<DerivationTrail, EngineError> {
        self.init_logging();
        integrate(&self.engine, expression, variable)
    }

    /// Narrated limit of `expression` as `variable` approaches `point`.
    pub fn limit(
        &self,
        expression: &str,
        variable: &str,
        point: f64,
    ) -> Result<DerivationTrail, EngineError> {
        self.init_logging();
        evaluate_limit(&self.engine, expression, variable, point)
    }

    /// Narrated solve of a small linear system. Always succeeds with a
    /// finished trail; unsupported shapes finish with a sentinel result.
    pub fn solve_equations(&self, system: &EquationSystem) -> DerivationTrail {
        self.init_logging();
        solve(system)
    }

    // logger setup in the manner of the numerical solver wrappers: pick the
    // level from the loglevel string, tolerate re-initialization errors
    fn init_logging(&self) {
        let is_logging_disabled = self
            .loglevel
            .as_ref()
            .map(|level| level == "off" || level == "none")
            .unwrap_or(false);
        if is_logging_disabled {
            return;
        }
        let log_option = if let Some(level) = self.loglevel.clone() {
            match level.as_str() {
                "debug" => LevelFilter::Debug,
                "info" => LevelFilter::Info,
                "warn" => LevelFilter::Warn,
                "error" => LevelFilter::Error,
                _ => panic!("loglevel must be debug, info, warn or error"),
            }
        } else {
            LevelFilter::Info
        };
        let _ = CombinedLogger::init(vec![TermLogger::new(
            log_option,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        )]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_solver() -> StepSolver<NativeEngine> {
        let mut solver = StepSolver::new();
        solver.set_loglevel(Some("off".to_string()));
        solver
    }

    #[test]
    fn test_facade_dispatches_all_four_request_kinds() {
        let solver = quiet_solver();

        let derivative = solver.differentiate("x^2", "x").unwrap();
        assert!(derivative.is_finished());

        let integral = solver.integrate("x^2", "x").unwrap();
        assert_eq!(integral.result(), Some("x^3/3 + C"));

        let limit = solver.limit("sin(x)/x", "x", 0.0).unwrap();
        assert_eq!(limit.result(), Some("1"));

        let system = EquationSystem::new(["x"], ["x + 3 = 8"]);
        let solved = solver.solve_equations(&system);
        assert_eq!(solved.result(), Some("x = 5"));
    }

    #[test]
    fn test_invalid_expression_is_surfaced() {
        let solver = quiet_solver();
        assert!(solver.integrate("(x +", "x").is_err());
    }
}
