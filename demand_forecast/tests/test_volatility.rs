use approx::assert_relative_eq;
use chrono::NaiveDate;
use demand_forecast::config::VolatilityConfig;
use demand_forecast::data::{layout_window, DailyRecord, ForecastWindow};
use demand_forecast::volatility::{recent_actuals, VolatilityRatio};
use rstest::rstest;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// History where day `i` sold `i + 1` units
fn counting_history(days: u32) -> (ForecastWindow, Vec<DailyRecord>) {
    let window = ForecastWindow::new(date(2024, 6, 1), days, 0);
    let records = (0..days as usize)
        .map(|i| DailyRecord::observed(window.date_at(i), i as u64 + 1))
        .collect();
    (window, records)
}

#[rstest]
#[case(3, 3)]
#[case(7, 7)]
#[case(20, 20)]
#[case(28, 28)]
#[case(60, 28)]
fn test_recent_window_size(#[case] days_past: u32, #[case] expected: usize) {
    let (window, records) = counting_history(days_past);
    let slots = layout_window(&window, &records);
    let samples = recent_actuals(&slots, days_past, &VolatilityConfig::default());

    assert_eq!(samples.len(), expected);
    // The most recent day is always last
    assert_eq!(samples.last().copied(), Some(f64::from(days_past)));
}

#[test]
fn test_recent_window_skips_zero_days() {
    let window = ForecastWindow::new(date(2024, 6, 1), 10, 0);
    let records: Vec<DailyRecord> = (0..10)
        .map(|i| DailyRecord::observed(window.date_at(i), if i % 2 == 0 { 0 } else { 10 }))
        .collect();
    let slots = layout_window(&window, &records);
    let samples = recent_actuals(&slots, 10, &VolatilityConfig::default());

    assert_eq!(samples, vec![10.0; 5]);
}

#[test]
fn test_ratio_defaults_without_samples() {
    let config = VolatilityConfig::default();

    assert_relative_eq!(VolatilityRatio::estimate(&[], &config).value(), 0.08);
    assert_relative_eq!(VolatilityRatio::estimate(&[120.0], &config).value(), 0.08);
}

#[rstest]
#[case(vec![90.0, 110.0], 0.1)]
#[case(vec![100.0, 100.0, 100.0], 0.05)]
#[case(vec![100.0, 101.0], 0.05)]
#[case(vec![10.0, 200.0, 5.0], 0.25)]
fn test_ratio_is_clipped_cv(#[case] samples: Vec<f64>, #[case] expected: f64) {
    let ratio = VolatilityRatio::estimate(&samples, &VolatilityConfig::default());
    assert_relative_eq!(ratio.value(), expected, epsilon = 1e-12);
}

#[test]
fn test_non_finite_samples_use_default() {
    let config = VolatilityConfig::default();
    let ratio = VolatilityRatio::estimate(&[100.0, f64::NAN, 120.0], &config);

    assert_relative_eq!(ratio.value(), 0.08);
}
