//! Orchestration of the trend forecast synthesis
//!
//! The engine lays the loader's sparse records onto one slot per calendar
//! day, learns trend, weekday seasonality and volatility from the days before
//! today, then rebuilds history and projects the future in a single pass.
//! Each call owns its buffers; the engine itself holds only configuration.

use crate::aggregate::{aggregate, Period};
use crate::config::{EmptyInputPolicy, ForecastConfig};
use crate::data::{layout_window, DailyRecord, DayKind, ForecastWindow, SeriesPoint};
use crate::gap_fill::fill_history;
use crate::projection::{history_anchor, ForwardProjector};
use crate::seasonality::{SeasonalityProfile, WeekdaySamples};
use crate::smoothing::smooth_recent_dips;
use crate::trend::TrendModel;
use crate::trendline::with_trendline;
use crate::volatility::{recent_actuals, VolatilityRatio};
use tracing::debug;

/// Synthesizes complete actual/forecast/trendline series from sparse daily records
#[derive(Debug, Clone, Default)]
pub struct TrendForecastEngine {
    config: ForecastConfig,
}

impl TrendForecastEngine {
    pub fn new(config: ForecastConfig) -> Self {
        Self { config }
    }

    /// Build the series for `window`, bucketed by `period`.
    ///
    /// Days before `window.today` carry an actual and no forecast; days from
    /// today on carry a forecast and no actual. Every calendar day of the
    /// window is present in the daily output. Never fails: sparse or missing
    /// input degrades to default-driven values.
    pub fn synthesize(
        &self,
        records: &[DailyRecord],
        window: &ForecastWindow,
        period: Period,
    ) -> Vec<SeriesPoint> {
        let window = &window.capped();
        if window.is_empty() {
            return Vec::new();
        }
        if records.is_empty() && self.config.empty_input == EmptyInputPolicy::ShortCircuit {
            debug!("no records supplied, returning empty series");
            return Vec::new();
        }

        let cfg = &self.config;
        let slots = layout_window(window, records);
        let history = &slots[..window.history_len()];

        let trend = TrendModel::estimate(history);
        let samples = WeekdaySamples::collect(history);
        let seasonality = SeasonalityProfile::estimate(&samples, trend.base_level, &cfg.seasonality);
        let recent = recent_actuals(history, window.days_past, &cfg.volatility);
        let volatility = VolatilityRatio::estimate(&recent, &cfg.volatility);
        let anchor = history_anchor(history, &recent);

        debug!(
            slope = trend.slope,
            intercept = trend.intercept,
            base_level = trend.base_level,
            volatility = volatility.value(),
            anchor,
            "fitted history"
        );

        let filled = fill_history(history, &trend, &seasonality, &samples, &cfg.gap_fill);
        let projector = ForwardProjector::new(
            &trend,
            &seasonality,
            volatility,
            anchor,
            window.today,
            window.horizon(),
            &cfg.projection,
        );
        let filled = smooth_recent_dips(filled, window, &cfg.smoothing);

        let points: Vec<SeriesPoint> = slots
            .iter()
            .map(|slot| match slot.kind {
                DayKind::Historical { .. } => SeriesPoint {
                    date: slot.date,
                    actual: Some(filled[slot.index]),
                    forecast: None,
                    trendline: 0,
                },
                DayKind::Future { supplied_forecast } => SeriesPoint {
                    date: slot.date,
                    actual: None,
                    forecast: Some(projector.project(slot.date, slot.index, supplied_forecast)),
                    trendline: 0,
                },
            })
            .collect();

        aggregate(with_trendline(points), period)
    }
}

/// Synthesize with the default configuration
pub fn synthesize_trend_forecast(
    records: &[DailyRecord],
    window: &ForecastWindow,
    period: Period,
) -> Vec<SeriesPoint> {
    TrendForecastEngine::default().synthesize(records, window, period)
}
