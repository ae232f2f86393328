use crate::numerical::key_points::{KeyPointKind, KeyPointSet, SampleRange, sample_curve};
use crate::symbolic::symbolic_traits::SymbolicEngine;
use strum::IntoEnumIterator;

/// Plots a sampled curve to a PNG file.
pub fn plot_function<E: SymbolicEngine>(
    engine: &E,
    f: &E::Expression,
    variable: &str,
    range: &SampleRange,
    caption: &str,
    filename: &str,
) {
    plot_with_overlay(engine, f, variable, range, caption, filename, None);
}

/// Plots a sampled curve with the scanned key points scattered on top of it,
/// one marker color per category with a legend entry.
pub fn plot_function_with_key_points<E: SymbolicEngine>(
    engine: &E,
    f: &E::Expression,
    variable: &str,
    range: &SampleRange,
    caption: &str,
    filename: &str,
    points: &KeyPointSet,
) {
    plot_with_overlay(engine, f, variable, range, caption, filename, Some(points));
}

fn plot_with_overlay<E: SymbolicEngine>(
    engine: &E,
    f: &E::Expression,
    variable: &str,
    range: &SampleRange,
    caption: &str,
    filename: &str,
    points: Option<&KeyPointSet>,
) {
    use plotters::prelude::*;

    let series = sample_curve(engine, f, variable, range);
    if series.is_empty() {
        log::warn!("nothing to plot for '{}': no finite samples", caption);
        return;
    }

    let x_min = series.iter().map(|(x, _)| *x).fold(f64::INFINITY, f64::min);
    let x_max = series
        .iter()
        .map(|(x, _)| *x)
        .fold(f64::NEG_INFINITY, f64::max);
    let y_min = series.iter().map(|(_, y)| *y).fold(f64::INFINITY, f64::min);
    let y_max = series
        .iter()
        .map(|(_, y)| *y)
        .fold(f64::NEG_INFINITY, f64::max);
    let y_pad = 0.05 * (y_max - y_min).max(1e-6);

    let root_area = BitMapBackend::new(filename, (800, 600)).into_drawing_area();
    root_area.fill(&WHITE).unwrap();

    let mut chart = ChartBuilder::on(&root_area)
        .caption(caption, ("sans-serif", 50))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(x_min..x_max, (y_min - y_pad)..(y_max + y_pad))
        .unwrap();

    chart
        .configure_mesh()
        .x_desc(variable)
        .y_desc(caption)
        .draw()
        .unwrap();

    chart
        .draw_series(LineSeries::new(series, &Palette99::pick(0)))
        .unwrap()
        .label(format!(" {}", caption))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &Palette99::pick(0)));

    if let Some(points) = points {
        for (idx, kind) in KeyPointKind::iter().enumerate() {
            let xs = points.points_of(kind);
            if xs.is_empty() {
                continue;
            }
            let color = Palette99::pick(idx + 1);
            let markers: Vec<(f64, f64)> = xs
                .iter()
                .map(|&x| (x, engine.evaluate_at(f, variable, x)))
                .filter(|(_, y)| y.is_finite())
                .collect();
            chart
                .draw_series(
                    markers
                        .into_iter()
                        .map(|xy| Circle::new(xy, 5, color.filled())),
                )
                .unwrap()
                .label(format!(" {}", kind))
                .legend(move |(x, y)| Circle::new((x + 10, y), 5, Palette99::pick(idx + 1).filled()));
        }
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .unwrap();
}
