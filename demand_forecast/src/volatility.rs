//! Recent demand volatility used to size forecast oscillation

use crate::config::VolatilityConfig;
use crate::data::DaySlot;
use serde::Serialize;
use tracing::debug;
use trend_math::{clip, dispersion};

/// The most recent positive actuals, oldest first.
///
/// At most `min(max_window, max(min_window, days_past))` samples are kept.
pub fn recent_actuals(history: &[DaySlot], days_past: u32, config: &VolatilityConfig) -> Vec<f64> {
    let window = (days_past as usize).max(config.min_window).min(config.max_window);
    let observed: Vec<f64> = history
        .iter()
        .filter_map(|slot| slot.observed_actual())
        .map(|v| v as f64)
        .collect();

    let skip = observed.len().saturating_sub(window);
    observed[skip..].to_vec()
}

/// Coefficient of variation of recent demand, clipped to a safe band
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VolatilityRatio(f64);

impl VolatilityRatio {
    /// Estimate from recent samples, falling back to the configured default
    /// when there are fewer than two samples or their mean is zero.
    pub fn estimate(samples: &[f64], config: &VolatilityConfig) -> Self {
        match dispersion::coefficient_of_variation(samples) {
            Ok(cv) => Self(clip(cv, config.floor, config.ceiling)),
            Err(err) => {
                debug!(%err, default = config.default_ratio, "using default volatility");
                Self(config.default_ratio)
            }
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}
