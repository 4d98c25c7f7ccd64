use demand_forecast::error::ForecastError;
use std::io;

#[test]
fn test_error_conversion() {
    // IO errors convert directly
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let forecast_error = ForecastError::from(io_error);

    match forecast_error {
        ForecastError::IoError(_) => {}
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_csv_error_conversion() {
    let data = "date,sales\n2024-01-01,many\n";
    let mut reader = csv::Reader::from_reader(data.as_bytes());
    let csv_error = reader
        .deserialize::<(String, f64)>()
        .next()
        .unwrap()
        .unwrap_err();

    match ForecastError::from(csv_error) {
        ForecastError::CsvError(msg) => assert!(!msg.is_empty()),
        _ => panic!("Expected CsvError variant"),
    }
}

#[test]
fn test_error_display() {
    let error = ForecastError::InvalidParameter("unknown period: hourly".to_string());
    let error_string = format!("{}", error);

    assert!(error_string.contains("unknown period: hourly"));

    let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
    let error_string = ForecastError::from(io_error).to_string();

    assert!(error_string.contains("IO error"));
    assert!(error_string.contains("permission denied"));

    let error = ForecastError::ConfigError("missing field".to_string());
    assert_eq!(error.to_string(), "Config error: missing field");
}

#[test]
fn test_error_creation() {
    let data_error = ForecastError::DataError("Non-finite value".to_string());
    let parameter_error = ForecastError::InvalidParameter("Invalid window".to_string());

    assert!(matches!(data_error, ForecastError::DataError(_)));
    assert!(matches!(parameter_error, ForecastError::InvalidParameter(_)));
    assert_ne!(data_error.to_string(), parameter_error.to_string());
}
