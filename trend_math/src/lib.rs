//! # Trend Math
//!
//! Numeric building blocks for demand trend synthesis.
//! This crate provides the least squares fit used for trend estimation and
//! trendlines, plus the dispersion measures used to size forecast oscillation.

use thiserror::Error;

pub mod dispersion;
pub mod regression;

pub use crate::regression::LinearFit;

/// Errors that can occur in trend calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Result type for trend math operations
pub type Result<T> = std::result::Result<T, MathError>;

/// Clamp `value` into `[lower, upper]`, mapping NaN to `lower`.
pub fn clip(value: f64, lower: f64, upper: f64) -> f64 {
    if value.is_nan() {
        return lower;
    }
    value.max(lower).min(upper)
}
