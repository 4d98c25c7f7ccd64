//! Daily series types and the per-day layout of a forecast window

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One aggregated day as supplied by a loader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    /// Observed sales, only meaningful before today
    pub actual: Option<u64>,
    /// Model-provided forecast, only meaningful from today on
    pub forecast: Option<u64>,
}

impl DailyRecord {
    pub fn new(date: NaiveDate, actual: Option<u64>, forecast: Option<u64>) -> Self {
        Self {
            date,
            actual,
            forecast,
        }
    }

    /// Record carrying only an observed value
    pub fn observed(date: NaiveDate, actual: u64) -> Self {
        Self::new(date, Some(actual), None)
    }

    /// Record carrying only a supplied forecast
    pub fn forecasted(date: NaiveDate, forecast: u64) -> Self {
        Self::new(date, None, Some(forecast))
    }
}

/// One output day (or bucket) of the synthesized series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Serialized as an ISO-8601 date
    pub date: NaiveDate,
    pub actual: Option<u64>,
    pub forecast: Option<u64>,
    pub trendline: u64,
}

impl SeriesPoint {
    /// Value used for trend fitting: the actual where present, else the forecast
    pub fn base_value(&self) -> Option<u64> {
        self.actual.or(self.forecast)
    }
}

/// Longest span in days accepted on either side of today
pub const MAX_WINDOW_DAYS: u32 = 3_660;

/// The calendar span of one request, anchored on "today"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastWindow {
    pub today: NaiveDate,
    pub days_past: u32,
    pub days_future: u32,
}

impl ForecastWindow {
    /// Window around `today`; each side is capped at [`MAX_WINDOW_DAYS`]
    pub fn new(today: NaiveDate, days_past: u32, days_future: u32) -> Self {
        Self {
            today,
            days_past: days_past.min(MAX_WINDOW_DAYS),
            days_future: days_future.min(MAX_WINDOW_DAYS),
        }
    }

    /// Same window with the cap reapplied to both sides
    pub fn capped(&self) -> Self {
        Self::new(self.today, self.days_past, self.days_future)
    }

    /// First day of the window, `today - days_past`, saturating at the
    /// earliest representable date
    pub fn start(&self) -> NaiveDate {
        self.today
            .checked_sub_signed(Duration::days(i64::from(self.days_past)))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the window, `today + days_future - 1`, saturating at the
    /// latest representable date
    pub fn end(&self) -> NaiveDate {
        self.today
            .checked_add_signed(Duration::days(i64::from(self.days_future) - 1))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Number of calendar days covered
    pub fn len(&self) -> usize {
        self.days_past as usize + self.days_future as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of days strictly before today
    pub fn history_len(&self) -> usize {
        self.days_past as usize
    }

    /// Days projected forward, never less than one
    pub fn horizon(&self) -> u32 {
        self.days_future.max(1)
    }

    /// Date of the day at `index` days after the window start
    pub fn date_at(&self, index: usize) -> NaiveDate {
        self.start()
            .checked_add_signed(Duration::days(index as i64))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Offset of `date` from the window start, if it lies inside the window
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        let offset = (date - self.start()).num_days();
        if offset < 0 || offset as usize >= self.len() {
            return None;
        }
        Some(offset as usize)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.index_of(date).is_some()
    }
}

/// What is known about one calendar day before synthesis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    /// A day before today; any supplied values are carried as-is
    Historical {
        actual: Option<u64>,
        forecast: Option<u64>,
    },
    /// Today or later; only a supplied forecast can be present
    Future { supplied_forecast: Option<u64> },
}

/// One calendar day of the working buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySlot {
    pub date: NaiveDate,
    /// Offset from the window start
    pub index: usize,
    pub kind: DayKind,
}

impl DaySlot {
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Supplied positive actual for a historical day
    pub fn observed_actual(&self) -> Option<u64> {
        match self.kind {
            DayKind::Historical { actual, .. } => positive(actual),
            DayKind::Future { .. } => None,
        }
    }

    /// Supplied positive actual, else supplied positive forecast
    pub fn observed_base(&self) -> Option<u64> {
        match self.kind {
            DayKind::Historical { actual, forecast } => positive(actual).or(positive(forecast)),
            DayKind::Future { supplied_forecast } => positive(supplied_forecast),
        }
    }
}

/// Lay the loader's records onto one slot per calendar day of the window.
///
/// Missing dates become slots with no supplied values. Records outside the
/// window are dropped; a repeated date keeps the last record seen.
pub fn layout_window(window: &ForecastWindow, records: &[DailyRecord]) -> Vec<DaySlot> {
    let mut by_index: Vec<Option<&DailyRecord>> = vec![None; window.len()];
    let mut outside = 0usize;

    for record in records {
        match window.index_of(record.date) {
            Some(index) => by_index[index] = Some(record),
            None => outside += 1,
        }
    }

    if outside > 0 {
        warn!(outside, start = %window.start(), end = %window.end(), "dropped records outside the window");
    }

    by_index
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let date = window.date_at(index);
            let kind = if date < window.today {
                DayKind::Historical {
                    actual: record.and_then(|r| r.actual),
                    forecast: record.and_then(|r| r.forecast),
                }
            } else {
                DayKind::Future {
                    supplied_forecast: record.and_then(|r| r.forecast),
                }
            };
            DaySlot { date, index, kind }
        })
        .collect()
}

/// Treat zero the same as missing
pub(crate) fn positive(value: Option<u64>) -> Option<u64> {
    value.filter(|v| *v > 0)
}

/// Round a non-negative model value to a whole unit count
pub(crate) fn to_units(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}

/// Weekday as an index, Monday = 0
pub(crate) fn weekday_index(weekday: Weekday) -> usize {
    weekday.num_days_from_monday() as usize
}
