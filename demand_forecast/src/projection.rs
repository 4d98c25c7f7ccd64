//! Forward projection of demand from today onward

use crate::config::ProjectionConfig;
use crate::data::{to_units, DaySlot};
use crate::seasonality::SeasonalityProfile;
use crate::trend::TrendModel;
use crate::volatility::VolatilityRatio;
use chrono::{Datelike, NaiveDate};
use std::f64::consts::PI;
use tracing::trace;

/// Level the future curve grows from.
///
/// Walks backward from the day before today and takes the first positive
/// supplied actual, or forecast when the day has no actual. Without one, the
/// mean of the recent actuals is used, floored at one.
pub fn history_anchor(history: &[DaySlot], recent_actuals: &[f64]) -> f64 {
    if let Some(value) = history.iter().rev().find_map(|slot| slot.observed_base()) {
        return value as f64;
    }

    trend_math::dispersion::mean(recent_actuals)
        .unwrap_or(0.0)
        .max(1.0)
}

/// Projects each future day from the learned models and any supplied forecast
#[derive(Debug, Clone)]
pub struct ForwardProjector<'a> {
    trend: &'a TrendModel,
    seasonality: &'a SeasonalityProfile,
    volatility: VolatilityRatio,
    anchor: f64,
    today: NaiveDate,
    horizon: u32,
    config: &'a ProjectionConfig,
}

impl<'a> ForwardProjector<'a> {
    pub fn new(
        trend: &'a TrendModel,
        seasonality: &'a SeasonalityProfile,
        volatility: VolatilityRatio,
        anchor: f64,
        today: NaiveDate,
        horizon: u32,
        config: &'a ProjectionConfig,
    ) -> Self {
        Self {
            trend,
            seasonality,
            volatility,
            anchor,
            today,
            horizon: horizon.max(1),
            config,
        }
    }

    /// 1-based distance of `date` from today
    pub fn day_ahead(&self, date: NaiveDate) -> i64 {
        (date - self.today).num_days() + 1
    }

    /// Growth applied to the anchor at `phase` (share of the horizon elapsed)
    pub fn growth_multiplier(&self, phase: f64) -> f64 {
        self.config
            .growth_base
            .powf(phase.max(0.0).powf(self.config.phase_exponent))
    }

    /// Anchor level grown for the given day ahead
    pub fn upward_baseline(&self, day_ahead: i64) -> f64 {
        let phase = day_ahead as f64 / f64::from(self.horizon);
        self.anchor * self.growth_multiplier(phase)
    }

    /// Two superposed sine waves scaled by volatility, bounded below
    pub fn wave_multiplier(&self, day_ahead: i64) -> f64 {
        let c = self.config;
        let vol = self.volatility.value();
        let t = day_ahead as f64;
        let weekly = c.weekly_wave_amplitude * vol * (2.0 * PI * t / c.weekly_wave_period).sin();
        let short = c.short_wave_amplitude
            * vol
            * (2.0 * PI * t / c.short_wave_period + c.short_wave_phase).sin();
        (1.0 + weekly + short).max(c.wave_floor)
    }

    /// Final forecast for one future day.
    ///
    /// `index` is the day's offset from the window start; `supplied_forecast`
    /// is the loader's forecast for the day, if any.
    pub fn project(&self, date: NaiveDate, index: usize, supplied_forecast: Option<u64>) -> u64 {
        let c = self.config;
        let ratio = self.seasonality.ratio(date.weekday());
        let projected = self.trend.level_at(index) * ratio;

        let forecast = match supplied_forecast.filter(|v| *v > 0) {
            Some(supplied) => {
                let blended =
                    to_units(c.supplied_weight * supplied as f64 + c.learned_weight * projected);
                to_units(blended as f64 * (1.0 + (ratio - 1.0) * c.seasonal_damping)) as f64
            }
            None => projected,
        };

        let day_ahead = self.day_ahead(date);
        let baseline = self.upward_baseline(day_ahead);
        let wave = self.wave_multiplier(day_ahead);

        let blended = c.forecast_weight * forecast + c.baseline_weight * baseline;
        let value = to_units(blended * wave);
        let floor = to_units(baseline * c.baseline_floor_ratio);

        trace!(%date, day_ahead, projected, baseline, wave, value, floor, "projected day");
        value.max(floor).max(1)
    }
}
