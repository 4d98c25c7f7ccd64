//! Reconstruction of missing historical days

use crate::config::GapFillConfig;
use crate::data::{to_units, DaySlot};
use crate::seasonality::{SeasonalityProfile, WeekdaySamples};
use crate::trend::TrendModel;
use tracing::debug;

/// Complete the historical series, one value per slot.
///
/// A supplied positive actual is kept unchanged. Any other day is imputed from
/// the trend scaled by its weekday ratio, blended with the weekday's observed
/// mean when that weekday has samples. Imputed days are never below one.
pub fn fill_history(
    history: &[DaySlot],
    trend: &TrendModel,
    seasonality: &SeasonalityProfile,
    samples: &WeekdaySamples,
    config: &GapFillConfig,
) -> Vec<u64> {
    let mut imputed = 0usize;

    let filled = history
        .iter()
        .map(|slot| {
            if let Some(actual) = slot.observed_actual() {
                return actual;
            }
            imputed += 1;

            let weekday = slot.weekday();
            let projected = trend.level_at(slot.index) * seasonality.ratio(weekday);
            let value = match samples.mean(weekday) {
                Some(weekday_mean) => to_units(
                    projected * config.trend_weight + weekday_mean * config.weekday_weight,
                ),
                None => to_units(projected),
            };
            value.max(1)
        })
        .collect();

    debug!(days = history.len(), imputed, "filled historical gaps");
    filled
}
