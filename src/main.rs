#![allow(non_snake_case)]
use RustedCalcSteps::Examples::plotting_examples::{key_points_plot_example, tangent_example};
use RustedCalcSteps::Examples::stepwise_examples::{
    derivative_example, equation_example, integral_example, limit_example,
};

fn main() {
    let example = 0;
    match example {
        0 => {
            // STEP-BY-STEP DERIVATIVE
            // narrate the derivative of x^2 + sin(x) and simplify the result
            derivative_example();
        }
        1 => {
            // RULE-BASED INTEGRATION
            // closed forms, term-by-term decomposition, unresolved fragments
            // and the "requires advanced techniques" sentinel
            integral_example();
        }
        2 => {
            // LIMITS
            // direct substitution, then one L'Hôpital fallback for 0/0
            limit_example();
        }
        3 => {
            // LINEAR EQUATIONS
            // isolate a variable; solve the addition/subtraction pair
            equation_example();
        }
        4 => {
            // PLOT WITH KEY POINTS
            // scan x^2 - 1 for roots/extrema/inflection and render a PNG
            key_points_plot_example();
        }
        5 => {
            // TANGENT LINE
            tangent_example();
        }
        _ => {
            println!("no such example: {}", example);
        }
    }
}
