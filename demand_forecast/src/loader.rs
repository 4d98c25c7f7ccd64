//! Sources of per-day sales and forecast records

use crate::aggregate::Period;
use crate::config::WindowConfig;
use crate::data::{DailyRecord, ForecastWindow, MAX_WINDOW_DAYS};
use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Filters and window of one trend forecast request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendForecastQuery {
    /// Stores to include, empty for all
    #[serde(default)]
    pub store_ids: Vec<u32>,
    /// Products to include, empty for all
    #[serde(default)]
    pub product_ids: Vec<u64>,
    /// Categories to include, empty for all
    #[serde(default)]
    pub category_ids: Vec<u32>,
    /// Requested bucket size; unrecognized values mean daily
    #[serde(default)]
    pub period: String,
    pub today: NaiveDate,
    pub days_past: u32,
    pub days_future: u32,
}

impl TrendForecastQuery {
    /// Unfiltered daily query with the given window defaults
    pub fn new(today: NaiveDate, window: &WindowConfig) -> Self {
        Self {
            store_ids: Vec::new(),
            product_ids: Vec::new(),
            category_ids: Vec::new(),
            period: Period::Daily.to_string(),
            today,
            days_past: window.days_past,
            days_future: window.days_future,
        }
    }

    pub fn with_stores(mut self, store_ids: Vec<u32>) -> Self {
        self.store_ids = store_ids;
        self
    }

    pub fn with_products(mut self, product_ids: Vec<u64>) -> Self {
        self.product_ids = product_ids;
        self
    }

    pub fn with_categories(mut self, category_ids: Vec<u32>) -> Self {
        self.category_ids = category_ids;
        self
    }

    pub fn with_period(mut self, period: impl Into<String>) -> Self {
        self.period = period.into();
        self
    }

    /// Reject windows longer than [`MAX_WINDOW_DAYS`] on either side
    pub fn validate(&self) -> Result<()> {
        for (name, days) in [("days_past", self.days_past), ("days_future", self.days_future)] {
            if days > MAX_WINDOW_DAYS {
                return Err(ForecastError::InvalidParameter(format!(
                    "{} must be at most {}, got {}",
                    name, MAX_WINDOW_DAYS, days
                )));
            }
        }
        Ok(())
    }

    pub fn window(&self) -> ForecastWindow {
        ForecastWindow::new(self.today, self.days_past, self.days_future)
    }

    pub fn period(&self) -> Period {
        Period::parse_or_daily(&self.period)
    }

    /// Whether a row with these ids passes every filter
    pub fn matches(&self, store_id: u32, product_id: u64, category_id: u32) -> bool {
        (self.store_ids.is_empty() || self.store_ids.contains(&store_id))
            && (self.product_ids.is_empty() || self.product_ids.contains(&product_id))
            && (self.category_ids.is_empty() || self.category_ids.contains(&category_id))
    }
}

/// Supplies one aggregated record per active day of a query's window
pub trait SeriesLoader {
    /// Records in date order, at most one per date, all inside the query window
    fn load(&self, query: &TrendForecastQuery) -> Result<Vec<DailyRecord>>;
}

/// Loader over records already in memory
#[derive(Debug, Clone, Default)]
pub struct StaticSeriesLoader {
    records: Vec<DailyRecord>,
}

impl StaticSeriesLoader {
    pub fn new(mut records: Vec<DailyRecord>) -> Self {
        records.sort_by_key(|r| r.date);
        Self { records }
    }
}

impl SeriesLoader for StaticSeriesLoader {
    fn load(&self, query: &TrendForecastQuery) -> Result<Vec<DailyRecord>> {
        let window = query.window();
        Ok(self
            .records
            .iter()
            .filter(|r| window.contains(r.date))
            .copied()
            .collect())
    }
}

/// One row of a warehouse extract
#[derive(Debug, Clone, Deserialize)]
struct WarehouseRow {
    date: NaiveDate,
    store_id: u32,
    product_id: u64,
    category_id: u32,
    sales: f64,
    #[serde(default)]
    rolling_forecast: Option<f64>,
}

/// Loader over a CSV warehouse extract.
///
/// Expected header: `date,store_id,product_id,category_id,sales,rolling_forecast`.
/// Rows are filtered by the query ids and summed per day: sales before today
/// become the actual, rolling forecasts from today on become the forecast.
#[derive(Debug, Clone)]
pub struct CsvSeriesLoader {
    path: PathBuf,
}

impl CsvSeriesLoader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SeriesLoader for CsvSeriesLoader {
    fn load(&self, query: &TrendForecastQuery) -> Result<Vec<DailyRecord>> {
        let file = File::open(&self.path)?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let window = query.window();
        let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        let mut rows = 0usize;
        let mut matched = 0usize;

        for row in reader.deserialize::<WarehouseRow>() {
            let row = row?;
            rows += 1;
            if !window.contains(row.date)
                || !query.matches(row.store_id, row.product_id, row.category_id)
            {
                continue;
            }
            matched += 1;

            let value = if row.date < query.today {
                row.sales
            } else {
                row.rolling_forecast.unwrap_or(0.0)
            };
            if !value.is_finite() {
                return Err(ForecastError::DataError(format!(
                    "Non-finite value on {} in {}",
                    row.date,
                    self.path.display()
                )));
            }
            *totals.entry(row.date).or_insert(0.0) += value;
        }

        debug!(rows, matched, days = totals.len(), "read warehouse extract");
        info!(path = %self.path.display(), days = totals.len(), "loaded daily records");

        Ok(totals
            .into_iter()
            .map(|(date, total)| {
                // Partial units are dropped, matching integer casts of the summed columns
                let units = total.max(0.0).trunc() as u64;
                if date < query.today {
                    DailyRecord::observed(date, units)
                } else {
                    DailyRecord::forecasted(date, units)
                }
            })
            .collect())
    }
}
