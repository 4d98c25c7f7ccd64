//! Visual trendline over an assembled series

use crate::data::{to_units, SeriesPoint};
use crate::trend::TrendModel;

/// Fit a line over the base values at positions `0..n` and evaluate it at
/// every position. Missing or zero values do not take part in the fit.
pub fn compute_trendline(base_values: &[Option<u64>]) -> Vec<u64> {
    let points: Vec<(f64, f64)> = base_values
        .iter()
        .enumerate()
        .filter_map(|(i, value)| value.filter(|v| *v > 0).map(|v| (i as f64, v as f64)))
        .collect();

    let model = TrendModel::from_points(&points);
    (0..base_values.len())
        .map(|i| to_units(model.intercept + model.slope * i as f64))
        .collect()
}

/// Recompute each point's trendline from its position in the series
pub fn with_trendline(mut points: Vec<SeriesPoint>) -> Vec<SeriesPoint> {
    let base_values: Vec<Option<u64>> = points.iter().map(SeriesPoint::base_value).collect();
    for (point, trend) in points.iter_mut().zip(compute_trendline(&base_values)) {
        point.trendline = trend;
    }
    points
}
