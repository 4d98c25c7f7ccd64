//! Error types for the demand_forecast crate
//!
//! The synthesis pipeline itself never fails; these errors come from the
//! surfaces around it (configuration, loading, strict parameter parsing).

use thiserror::Error;

/// Custom error types for the demand_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Error related to input data validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error while layering or deserializing configuration
    #[error("Config error: {0}")]
    ConfigError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error while reading a CSV extract
    #[error("CSV error: {0}")]
    CsvError(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl From<csv::Error> for ForecastError {
    fn from(err: csv::Error) -> Self {
        ForecastError::CsvError(err.to_string())
    }
}

impl From<config::ConfigError> for ForecastError {
    fn from(err: config::ConfigError) -> Self {
        ForecastError::ConfigError(err.to_string())
    }
}
