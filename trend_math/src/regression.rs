//! Ordinary least squares over `(x, y)` pairs
//!
//! The fit never fails: an empty input yields a flat zero line and a
//! degenerate x spread yields a zero slope through the mean.

use serde::{Deserialize, Serialize};

/// Result of a least squares fit of `y = intercept + slope * x`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LinearFit {
    /// Change in y per unit of x
    pub slope: f64,
    /// Value of the line at `x = 0`
    pub intercept: f64,
    /// Mean of the observed y values, floored at zero
    pub mean_level: f64,
    /// Number of pairs the fit was computed from
    pub observations: usize,
}

impl LinearFit {
    /// Fit a line through the given pairs using the closed-form normal equations.
    ///
    /// `slope = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)`, zero when the denominator vanishes,
    /// and `intercept = (Σy − slope·Σx) / n`.
    pub fn fit(points: &[(f64, f64)]) -> Self {
        if points.is_empty() {
            return Self::default();
        }

        let n = points.len() as f64;
        let (mut sum_x, mut sum_y, mut sum_xy, mut sum_xx) = (0.0, 0.0, 0.0, 0.0);
        for &(x, y) in points {
            sum_x += x;
            sum_y += y;
            sum_xy += x * y;
            sum_xx += x * x;
        }

        let denominator = n * sum_xx - sum_x * sum_x;
        let slope = if denominator.abs() < f64::EPSILON {
            0.0
        } else {
            (n * sum_xy - sum_x * sum_y) / denominator
        };
        let intercept = (sum_y - slope * sum_x) / n;

        Self {
            slope,
            intercept,
            mean_level: (sum_y / n).max(0.0),
            observations: points.len(),
        }
    }

    /// Evaluate the line at `x`
    pub fn value_at(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Evaluate the line at `x`, floored at zero
    pub fn level_at(&self, x: f64) -> f64 {
        self.value_at(x).max(0.0)
    }

    /// Whether the fit saw any data at all
    pub fn is_empty(&self) -> bool {
        self.observations == 0
    }
}
