//! Tunable constants of the synthesis pipeline
//!
//! Every weight, band and exponent used by the stages lives here under a
//! name. Defaults reproduce the production chart behavior; a file or the
//! environment may override any of them.

use crate::data::MAX_WINDOW_DAYS;
use crate::error::{ForecastError, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Prefix for environment overrides, e.g. `TRENDCAST__PROJECTION__GROWTH_BASE=1.2`
const ENV_PREFIX: &str = "TRENDCAST";

/// Weekday ratios used when a weekday has no history, Monday first
pub const DEFAULT_WEEKDAY_PROFILE: [f64; 7] = [1.04, 1.00, 1.02, 1.00, 1.06, 0.92, 0.88];

/// What to do when the loader returns no records at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyInputPolicy {
    /// Return an empty series without projecting anything
    #[default]
    ShortCircuit,
    /// Build the full window from defaults alone
    Synthesize,
}

/// Weekday seasonality estimation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonalityConfig {
    pub default_profile: [f64; 7],
    pub min_ratio: f64,
    pub max_ratio: f64,
}

impl Default for SeasonalityConfig {
    fn default() -> Self {
        Self {
            default_profile: DEFAULT_WEEKDAY_PROFILE,
            min_ratio: 0.5,
            max_ratio: 1.6,
        }
    }
}

/// Recent-window coefficient of variation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolatilityConfig {
    /// Lower bound on the number of recent samples considered
    pub min_window: usize,
    /// Upper bound on the number of recent samples considered
    pub max_window: usize,
    pub floor: f64,
    pub ceiling: f64,
    /// Used when fewer than two samples are available
    pub default_ratio: f64,
}

impl Default for VolatilityConfig {
    fn default() -> Self {
        Self {
            min_window: 7,
            max_window: 28,
            floor: 0.05,
            ceiling: 0.25,
            default_ratio: 0.08,
        }
    }
}

/// Historical imputation blend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GapFillConfig {
    /// Weight of the trend and seasonality projection
    pub trend_weight: f64,
    /// Weight of the observed same-weekday mean
    pub weekday_weight: f64,
}

impl Default for GapFillConfig {
    fn default() -> Self {
        Self {
            trend_weight: 0.6,
            weekday_weight: 0.4,
        }
    }
}

/// Forward projection blend, growth and oscillation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Weight of the externally supplied forecast
    pub supplied_weight: f64,
    /// Weight of the learned trend and seasonality baseline
    pub learned_weight: f64,
    /// Fraction of the seasonal deviation reapplied after blending
    pub seasonal_damping: f64,
    pub growth_base: f64,
    pub phase_exponent: f64,
    pub weekly_wave_amplitude: f64,
    pub weekly_wave_period: f64,
    pub short_wave_amplitude: f64,
    pub short_wave_period: f64,
    pub short_wave_phase: f64,
    /// Lowest allowed oscillation multiplier
    pub wave_floor: f64,
    /// Weight of the per-day forecast in the final blend
    pub forecast_weight: f64,
    /// Weight of the growing anchor baseline in the final blend
    pub baseline_weight: f64,
    /// The projection never drops below this share of the growing baseline
    pub baseline_floor_ratio: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            supplied_weight: 0.7,
            learned_weight: 0.3,
            seasonal_damping: 0.45,
            growth_base: 1.14,
            phase_exponent: 1.35,
            weekly_wave_amplitude: 0.55,
            weekly_wave_period: 7.0,
            short_wave_amplitude: 0.30,
            short_wave_period: 3.5,
            short_wave_phase: 1.3,
            wave_floor: 0.93,
            forecast_weight: 0.30,
            baseline_weight: 0.70,
            baseline_floor_ratio: 0.95,
        }
    }
}

/// Recent dip correction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    /// Only days at most this far before today are corrected
    pub lookback_days: i64,
    /// A day is a dip when it is at most this share of its neighbors' mean
    pub dip_ratio: f64,
    /// Share of the neighbors' mean written back over a dip
    pub restore_ratio: f64,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            lookback_days: 7,
            dip_ratio: 0.08,
            restore_ratio: 0.92,
        }
    }
}

/// Window used when a caller does not specify one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub days_past: u32,
    pub days_future: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            days_past: 60,
            days_future: 30,
        }
    }
}

/// Complete configuration of the trend forecast engine
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    pub seasonality: SeasonalityConfig,
    pub volatility: VolatilityConfig,
    pub gap_fill: GapFillConfig,
    pub projection: ProjectionConfig,
    pub smoothing: SmoothingConfig,
    pub window: WindowConfig,
    pub empty_input: EmptyInputPolicy,
}

impl ForecastConfig {
    /// Load configuration from built-in defaults, an optional file, and the environment.
    ///
    /// Sources are layered in this order:
    /// 1. Defaults
    /// 2. The given file (TOML, JSON or YAML, picked by extension)
    /// 3. Environment variables prefixed `TRENDCAST__`
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if let Some(path) = path {
            if !path.exists() {
                return Err(ForecastError::ConfigError(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(File::from(path));
        }

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: ForecastConfig = settings.try_deserialize()?;
        loaded.validate()?;

        debug!(source = ?path, "loaded forecast config");
        Ok(loaded)
    }

    /// Check that every band and weight is usable
    pub fn validate(&self) -> Result<()> {
        let s = &self.seasonality;
        if !(s.min_ratio > 0.0 && s.min_ratio <= s.max_ratio) {
            return Err(ForecastError::InvalidParameter(format!(
                "Seasonality band must satisfy 0 < min_ratio <= max_ratio, got [{}, {}]",
                s.min_ratio, s.max_ratio
            )));
        }
        if s.default_profile.iter().any(|r| !r.is_finite() || *r <= 0.0) {
            return Err(ForecastError::InvalidParameter(
                "Default weekday profile must contain positive ratios".to_string(),
            ));
        }

        let v = &self.volatility;
        if v.min_window == 0 || v.min_window > v.max_window {
            return Err(ForecastError::InvalidParameter(format!(
                "Volatility window must satisfy 0 < min_window <= max_window, got [{}, {}]",
                v.min_window, v.max_window
            )));
        }
        if !(v.floor >= 0.0 && v.floor <= v.ceiling) {
            return Err(ForecastError::InvalidParameter(format!(
                "Volatility band must satisfy 0 <= floor <= ceiling, got [{}, {}]",
                v.floor, v.ceiling
            )));
        }

        let p = &self.projection;
        let weights = [
            ("gap_fill.trend_weight", self.gap_fill.trend_weight),
            ("gap_fill.weekday_weight", self.gap_fill.weekday_weight),
            ("projection.supplied_weight", p.supplied_weight),
            ("projection.learned_weight", p.learned_weight),
            ("projection.forecast_weight", p.forecast_weight),
            ("projection.baseline_weight", p.baseline_weight),
            ("projection.baseline_floor_ratio", p.baseline_floor_ratio),
            ("smoothing.dip_ratio", self.smoothing.dip_ratio),
            ("smoothing.restore_ratio", self.smoothing.restore_ratio),
        ];
        if let Some((name, value)) = weights.iter().find(|(_, w)| !w.is_finite() || *w < 0.0) {
            return Err(ForecastError::InvalidParameter(format!(
                "{} must be a non-negative number, got {}",
                name, value
            )));
        }

        if p.growth_base <= 0.0 {
            return Err(ForecastError::InvalidParameter(format!(
                "projection.growth_base must be positive, got {}",
                p.growth_base
            )));
        }
        if p.weekly_wave_period <= 0.0 || p.short_wave_period <= 0.0 {
            return Err(ForecastError::InvalidParameter(
                "Oscillation periods must be positive".to_string(),
            ));
        }
        let w = &self.window;
        if w.days_past > MAX_WINDOW_DAYS || w.days_future > MAX_WINDOW_DAYS {
            return Err(ForecastError::InvalidParameter(format!(
                "Window sides must be at most {} days, got {} past and {} future",
                MAX_WINDOW_DAYS, w.days_past, w.days_future
            )));
        }
        if self.smoothing.lookback_days < 0 {
            return Err(ForecastError::InvalidParameter(format!(
                "smoothing.lookback_days must not be negative, got {}",
                self.smoothing.lookback_days
            )));
        }

        Ok(())
    }
}
