//! Rebucketing of the daily series into weeks or months

use crate::data::SeriesPoint;
use crate::error::{ForecastError, Result};
use crate::trendline::with_trendline;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Bucket size of the output series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Daily,
    /// ISO weeks starting on Monday
    Weekly,
    /// Calendar months
    Monthly,
}

impl Period {
    /// Parse a period name, falling back to daily for anything but the exact
    /// lowercase names `daily`, `weekly` and `monthly`
    pub fn parse_or_daily(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            debug!(value, "unsupported period, using daily");
            Period::Daily
        })
    }

    /// First day of the bucket containing `date`
    pub fn bucket_start(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Period::Daily => date,
            Period::Weekly => date - Duration::days(i64::from(date.weekday().num_days_from_monday())),
            Period::Monthly => NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
        }
    }
}

impl FromStr for Period {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "daily" => Ok(Period::Daily),
            "weekly" => Ok(Period::Weekly),
            "monthly" => Ok(Period::Monthly),
            other => Err(ForecastError::InvalidParameter(format!(
                "Unsupported period: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sum the series into buckets of `period` and refit the trendline per bucket.
///
/// `points` must be in date order. A bucket's actual (or forecast) is the
/// sum over its points, or `None` when no point in the bucket had one.
/// Daily returns the points unchanged.
pub fn aggregate(points: Vec<SeriesPoint>, period: Period) -> Vec<SeriesPoint> {
    if period == Period::Daily {
        return points;
    }

    let mut buckets: Vec<SeriesPoint> = Vec::new();
    for point in points {
        let start = period.bucket_start(point.date);
        match buckets.last_mut() {
            Some(bucket) if bucket.date == start => {
                bucket.actual = add_optional(bucket.actual, point.actual);
                bucket.forecast = add_optional(bucket.forecast, point.forecast);
            }
            _ => buckets.push(SeriesPoint {
                date: start,
                actual: point.actual,
                forecast: point.forecast,
                trendline: 0,
            }),
        }
    }

    debug!(%period, buckets = buckets.len(), "aggregated series");
    with_trendline(buckets)
}

fn add_optional(total: Option<u64>, value: Option<u64>) -> Option<u64> {
    match (total, value) {
        (Some(a), Some(b)) => Some(a.saturating_add(b)),
        (a, b) => a.or(b),
    }
}
