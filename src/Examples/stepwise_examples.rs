use crate::stepwise::linear_solve::EquationSystem;
use crate::stepwise::step_solver::StepSolver;

/// Narrated derivative of a polynomial with a trig part.
pub fn derivative_example() {
    let solver = StepSolver::new();
    let trail = solver.differentiate("x^2 + sin(x)", "x").unwrap();
    println!("{}", trail);
}

/// Term-by-term integration of a polynomial; unmatched terms stay as
/// unresolved integral fragments.
pub fn integral_example() {
    let solver = StepSolver::new();
    for input in ["x^2", "x^2 + 2*x + 1", "x + ln(x)", "sin(x^2)"] {
        let trail = solver.integrate(input, "x").unwrap();
        println!("∫{} dx", input);
        println!("{}", trail);
    }
}

/// The classic 0/0 limit resolved by one application of L'Hôpital's rule.
pub fn limit_example() {
    let solver = StepSolver::new();
    let trail = solver.limit("sin(x)/x", "x", 0.0).unwrap();
    println!("{}", trail);

    // indeterminate with no usable division degrades to the sentinel
    let trail = solver.limit("ln(x)", "x", 0.0).unwrap();
    println!("{}", trail);
}

/// Single-equation isolation and the 2x2 elimination pair.
pub fn equation_example() {
    let solver = StepSolver::new();

    let single = EquationSystem::new(["x"], ["2x + 3 = 8"]);
    println!("{}", solver.solve_equations(&single));

    let pair = EquationSystem::new(["x", "y"], ["x + y = 10", "x - y = 5"]);
    println!("{}", solver.solve_equations(&pair));
}
