use plotters::prelude::*;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;

use std::path::Path;

use crate::constants::CHART_SIZE;
use crate::error::{NBayesError, Result};

use super::alpha_sweep::SweepRecord;


/// Draws the accuracy of each record against its smoothing parameter.
/// The output is an SVG file if `filename` ends with `.svg`,
/// and a bitmap (e.g., PNG) otherwise.
pub fn plot_accuracy<P: AsRef<Path>>(records: &[SweepRecord], filename: P)
    -> Result<()>
{
    if records.is_empty() {
        return Err(NBayesError::Plot("no sweep record to draw".into()));
    }

    let path = filename.as_ref();
    if path.extension().is_some_and(|ext| ext == "svg") {
        let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
        draw(root, records)
    } else {
        let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
        draw(root, records)
    }
}


fn draw<DB>(root: DrawingArea<DB, Shift>, records: &[SweepRecord])
    -> Result<()>
    where DB: DrawingBackend,
{
    let (x_min, x_max) = bounds(records.iter().map(|r| r.alpha));
    let (y_min, y_max) = bounds(records.iter().map(|r| r.accuracy));

    root.fill(&WHITE).map_err(plot_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Accuracy vs. alpha", ("sans-serif", 24).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(plot_error)?;

    chart.configure_mesh()
        .x_desc("alpha")
        .y_desc("accuracy (%)")
        .draw()
        .map_err(plot_error)?;

    let points = records.iter()
        .map(|r| (r.alpha, r.accuracy))
        .collect::<Vec<_>>();
    chart.draw_series(LineSeries::new(points.iter().copied(), &BLUE))
        .map_err(plot_error)?;
    chart.draw_series(
            points.iter()
                .map(|&(x, y)| Circle::new((x, y), 3, BLUE.filled()))
        )
        .map_err(plot_error)?;

    root.present().map_err(plot_error)?;
    Ok(())
}


/// Returns a non-empty range covering every value with a small margin.
fn bounds<I: Iterator<Item = f64>>(values: I) -> (f64, f64) {
    let (lo, hi) = values.fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), v| (lo.min(v), hi.max(v)),
    );
    let margin = if hi > lo { 0.05 * (hi - lo) } else { 1f64 };
    (lo - margin, hi + margin)
}


fn plot_error<E>(err: DrawingAreaErrorKind<E>) -> NBayesError
    where E: std::error::Error + Send + Sync,
{
    NBayesError::Plot(err.to_string())
}
