//! Correction of isolated near-zero days at the recent end of history
//!
//! Late-arriving upstream data leaves single days in the last week looking
//! almost empty. Such a day is rebuilt from its two neighbors.

use crate::config::SmoothingConfig;
use crate::data::{to_units, ForecastWindow};
use tracing::debug;

/// Replace isolated dips in the recent part of the historical series.
///
/// `history[i]` is the value of `window.date_at(i)`. The first and last
/// values have only one neighbor and are left alone. Corrections are applied
/// left to right, so a corrected day serves as the left neighbor of the next.
pub fn smooth_recent_dips(
    mut history: Vec<u64>,
    window: &ForecastWindow,
    config: &SmoothingConfig,
) -> Vec<u64> {
    if history.len() < 3 {
        return history;
    }

    let mut corrected = 0usize;
    for i in 1..history.len() - 1 {
        let date = window.date_at(i);
        if (window.today - date).num_days() > config.lookback_days {
            continue;
        }

        let baseline = (history[i - 1] as f64 + history[i + 1] as f64) / 2.0;
        if baseline <= 0.0 {
            continue;
        }

        let threshold = to_units(baseline * config.dip_ratio).max(1);
        if history[i] <= threshold {
            let restored = to_units(baseline * config.restore_ratio).max(1);
            debug!(%date, from = history[i], to = restored, "corrected recent dip");
            history[i] = restored;
            corrected += 1;
        }
    }

    if corrected > 0 {
        debug!(corrected, "smoothed recent history");
    }
    history
}
