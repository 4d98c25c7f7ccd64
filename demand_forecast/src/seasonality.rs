//! Weekday seasonality estimation

use crate::config::SeasonalityConfig;
use crate::data::{weekday_index, DaySlot};
use chrono::Weekday;
use serde::Serialize;
use trend_math::clip;

/// Observed positive actuals grouped by weekday
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeekdaySamples {
    sums: [f64; 7],
    counts: [usize; 7],
}

impl WeekdaySamples {
    /// Collect every supplied positive actual from the historical slots
    pub fn collect(history: &[DaySlot]) -> Self {
        let mut samples = Self::default();
        for slot in history {
            if let Some(actual) = slot.observed_actual() {
                let day = weekday_index(slot.weekday());
                samples.sums[day] += actual as f64;
                samples.counts[day] += 1;
            }
        }
        samples
    }

    /// Number of samples for the weekday
    pub fn count(&self, weekday: Weekday) -> usize {
        self.counts[weekday_index(weekday)]
    }

    /// Mean of the weekday's samples, if it has any
    pub fn mean(&self, weekday: Weekday) -> Option<f64> {
        let day = weekday_index(weekday);
        if self.counts[day] == 0 {
            return None;
        }
        Some(self.sums[day] / self.counts[day] as f64)
    }
}

/// Multiplicative demand ratio per weekday, Monday first
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeasonalityProfile {
    ratios: [f64; 7],
}

impl SeasonalityProfile {
    /// Profile made of the configured defaults only
    pub fn fallback(config: &SeasonalityConfig) -> Self {
        Self {
            ratios: config.default_profile,
        }
    }

    /// Estimate the profile from weekday samples relative to `base_level`.
    ///
    /// A weekday with samples gets `mean / base_level` clipped to the configured
    /// band; a weekday without samples keeps its default ratio.
    pub fn estimate(samples: &WeekdaySamples, base_level: f64, config: &SeasonalityConfig) -> Self {
        let mut profile = Self::fallback(config);
        if base_level <= 0.0 {
            return profile;
        }

        for (day, ratio) in profile.ratios.iter_mut().enumerate() {
            if samples.counts[day] == 0 {
                continue;
            }
            let mean = samples.sums[day] / samples.counts[day] as f64;
            *ratio = clip(mean / base_level, config.min_ratio, config.max_ratio);
        }

        profile
    }

    pub fn ratio(&self, weekday: Weekday) -> f64 {
        self.ratios[weekday_index(weekday)]
    }

    pub fn ratios(&self) -> &[f64; 7] {
        &self.ratios
    }
}
