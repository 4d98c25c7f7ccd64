//! # Demand Forecast
//!
//! Daily demand trend and forecast synthesis for dashboard charts.
//!
//! ## Features
//!
//! - Reconstruction of missing or zero historical days from trend and weekday seasonality
//! - Least squares trend, weekday seasonality and recent volatility learned per request
//! - Forward projection blending a supplied forecast with the learned baseline,
//!   horizon-dependent growth and bounded oscillation
//! - Correction of isolated near-zero days caused by late upstream data
//! - Visual trendline over the assembled series
//! - Daily, weekly (ISO, Monday start) and monthly buckets
//!
//! ## Series layout
//!
//! Every calendar day of `[today - days_past, today + days_future - 1]` appears
//! exactly once in the daily output:
//!
//! - **Before today**: `actual` is set, `forecast` is `None`
//! - **From today on**: `forecast` is set, `actual` is `None`
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use demand_forecast::{synthesize_trend_forecast, DailyRecord, ForecastWindow, Period};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//! let records = vec![
//!     DailyRecord::observed(NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(), 120),
//!     DailyRecord::observed(NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(), 135),
//!     DailyRecord::forecasted(NaiveDate::from_ymd_opt(2024, 3, 16).unwrap(), 140),
//! ];
//!
//! let window = ForecastWindow::new(today, 7, 14);
//! let series = synthesize_trend_forecast(&records, &window, Period::Daily);
//!
//! assert_eq!(series.len(), 21);
//! assert!(series.iter().filter(|p| p.date < today).all(|p| p.actual.is_some()));
//! ```

pub mod aggregate;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod gap_fill;
pub mod loader;
pub mod projection;
pub mod seasonality;
pub mod service;
pub mod smoothing;
pub mod trend;
pub mod trendline;
pub mod volatility;

// Re-export commonly used types
pub use crate::aggregate::Period;
pub use crate::config::{EmptyInputPolicy, ForecastConfig};
pub use crate::data::{DailyRecord, ForecastWindow, SeriesPoint};
pub use crate::engine::{synthesize_trend_forecast, TrendForecastEngine};
pub use crate::error::{ForecastError, Result};
pub use crate::loader::{CsvSeriesLoader, SeriesLoader, StaticSeriesLoader, TrendForecastQuery};
pub use crate::service::{TrendForecastResponse, TrendForecastService};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
