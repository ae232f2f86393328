use crate::Utils::logger::save_curve_to_csv;
use crate::Utils::plots::plot_function_with_key_points;
use crate::numerical::key_points::{SampleRange, sample_curve, scan, tangent_line};
use crate::symbolic::symbolic_traits::{NativeEngine, SymbolicEngine};

/// Plots x^2 - 1 with its roots and minimum marked, and saves the sampled
/// curve next to the image.
pub fn key_points_plot_example() {
    let engine = NativeEngine;
    let input = "x^2 - 1";
    let f = engine.parse(input).unwrap();
    let range = SampleRange::new(-3.0, 3.0, 0.05);

    let points = scan(&engine, &f, "x", &range);
    println!(
        "roots {:?}\nmaxima {:?}\nminima {:?}\ninflection {:?}",
        points.roots, points.maxima, points.minima, points.inflection
    );

    plot_function_with_key_points(&engine, &f, "x", &range, input, "parabola.png", &points);

    let samples = sample_curve(&engine, &f, "x", &range);
    save_curve_to_csv(&samples, "x", input, "parabola.csv").unwrap();
}

/// Tangent line construction: the equation text round-trips through the
/// parser, so it can be plotted like any other expression.
pub fn tangent_example() {
    let engine = NativeEngine;
    let f = engine.parse("x^2").unwrap();
    let tangent = tangent_line(&engine, &f, "x", 1.0).unwrap();
    println!(
        "slope {} at {:?}: y = {}",
        tangent.slope, tangent.point, tangent.equation
    );
}
