//! # Trendcast
//!
//! Workspace facade for demand trend synthesis.
//!
//! - [`demand_forecast`]: the trend and forecast synthesis engine, its
//!   configuration, loaders and request service
//! - [`trend_math`]: least squares and dispersion helpers
//!
//! ## Example
//!
//! ```
//! use trendcast_workspace::demand_forecast::{ForecastWindow, Period, TrendForecastEngine};
//! use trendcast_workspace::demand_forecast::{EmptyInputPolicy, ForecastConfig};
//!
//! let config = ForecastConfig {
//!     empty_input: EmptyInputPolicy::Synthesize,
//!     ..ForecastConfig::default()
//! };
//! let engine = TrendForecastEngine::new(config);
//! let today = chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//!
//! let series = engine.synthesize(&[], &ForecastWindow::new(today, 7, 7), Period::Daily);
//! assert_eq!(series.len(), 14);
//! ```

pub use demand_forecast;
pub use trend_math;
