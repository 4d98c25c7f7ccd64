//! Dispersion measures over sample windows
//!
//! Contains:
//! - Arithmetic mean
//! - Population standard deviation
//! - Coefficient of variation

use crate::{MathError, Result};
use statrs::statistics::Statistics;

/// Arithmetic mean of the samples, `None` when there are none
pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().mean())
}

/// Population standard deviation of the samples
pub fn population_std_dev(samples: &[f64]) -> Result<f64> {
    if samples.is_empty() {
        return Err(MathError::InsufficientData(
            "Cannot compute standard deviation of an empty sample".to_string(),
        ));
    }
    Ok(samples.iter().population_std_dev())
}

/// Coefficient of variation (`std / mean`) of the samples.
///
/// Requires at least two finite samples and a non-zero mean.
pub fn coefficient_of_variation(samples: &[f64]) -> Result<f64> {
    if samples.iter().any(|v| !v.is_finite()) {
        return Err(MathError::InvalidInput("Samples must be finite".to_string()));
    }
    if samples.len() < 2 {
        return Err(MathError::InsufficientData(format!(
            "Need at least 2 samples for coefficient of variation, have {}",
            samples.len()
        )));
    }

    let mean = samples.iter().mean();
    if mean.abs() < f64::EPSILON {
        return Err(MathError::CalculationError(
            "Coefficient of variation is undefined for a zero mean".to_string(),
        ));
    }

    Ok(population_std_dev(samples)? / mean)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        assert_relative_eq!(mean(&[2.0, 4.0, 9.0]).unwrap(), 5.0);
    }

    #[test]
    fn test_population_std_dev() {
        // Classic textbook sample with population std of exactly 2
        let samples = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(population_std_dev(&samples).unwrap(), 2.0, epsilon = 1e-12);
        assert!(population_std_dev(&[]).is_err());
    }

    #[test]
    fn test_coefficient_of_variation() {
        let samples = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(
            coefficient_of_variation(&samples).unwrap(),
            0.4,
            epsilon = 1e-12
        );

        // Constant series has no spread
        assert_eq!(coefficient_of_variation(&[10.0, 10.0, 10.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_coefficient_of_variation_errors() {
        assert!(matches!(
            coefficient_of_variation(&[5.0]),
            Err(MathError::InsufficientData(_))
        ));
        assert!(matches!(
            coefficient_of_variation(&[0.0, 0.0]),
            Err(MathError::CalculationError(_))
        ));
        assert!(matches!(
            coefficient_of_variation(&[10.0, f64::NAN, 12.0]),
            Err(MathError::InvalidInput(_))
        ));
        assert!(matches!(
            coefficient_of_variation(&[10.0, f64::INFINITY]),
            Err(MathError::InvalidInput(_))
        ));
    }
}
