//! Linear trend over the historical window

use crate::data::DaySlot;
use serde::Serialize;
use trend_math::LinearFit;

/// Least squares trend of value on day index
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TrendModel {
    pub slope: f64,
    pub intercept: f64,
    /// Mean of the values the trend was fitted on, never negative
    pub base_level: f64,
}

impl TrendModel {
    /// Fit on every historical day that has a positive actual or forecast.
    ///
    /// With nothing to fit on, the model is flat at zero.
    pub fn estimate(history: &[DaySlot]) -> Self {
        let points: Vec<(f64, f64)> = history
            .iter()
            .filter_map(|slot| {
                slot.observed_base()
                    .map(|value| (slot.index as f64, value as f64))
            })
            .collect();

        Self::from_points(&points)
    }

    /// Fit on arbitrary `(index, value)` pairs
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        let fit = LinearFit::fit(points);
        Self {
            slope: fit.slope,
            intercept: fit.intercept,
            base_level: fit.mean_level,
        }
    }

    /// Trend value at `index`, floored at zero
    pub fn level_at(&self, index: usize) -> f64 {
        (self.intercept + self.slope * index as f64).max(0.0)
    }
}
