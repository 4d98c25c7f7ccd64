use approx::assert_relative_eq;
use chrono::{Duration, NaiveDate};
use demand_forecast::data::{layout_window, DailyRecord, ForecastWindow};
use demand_forecast::trend::TrendModel;
use rstest::rstest;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// History of `days` days where day `i` sold `intercept + slope * i`
fn linear_history(days: u32, intercept: f64, slope: f64) -> (ForecastWindow, Vec<DailyRecord>) {
    let today = date(2024, 3, 1);
    let window = ForecastWindow::new(today, days, 0);
    let records = (0..days)
        .map(|i| {
            DailyRecord::observed(
                window.start() + Duration::days(i64::from(i)),
                (intercept + slope * f64::from(i)) as u64,
            )
        })
        .collect();
    (window, records)
}

#[rstest]
#[case(50.0, 3.0)]
#[case(400.0, -5.0)]
#[case(120.0, 0.0)]
fn test_recovers_linear_history(#[case] intercept: f64, #[case] slope: f64) {
    let (window, records) = linear_history(28, intercept, slope);
    let slots = layout_window(&window, &records);
    let trend = TrendModel::estimate(&slots);

    assert_relative_eq!(trend.slope, slope, epsilon = 1e-9);
    assert_relative_eq!(trend.intercept, intercept, epsilon = 1e-9);
    assert_relative_eq!(trend.base_level, intercept + slope * 13.5, epsilon = 1e-9);
}

#[test]
fn test_no_pairs_gives_zero_model() {
    let window = ForecastWindow::new(date(2024, 3, 1), 14, 0);
    let records = vec![
        DailyRecord::new(date(2024, 2, 20), Some(0), None),
        DailyRecord::new(date(2024, 2, 21), None, Some(0)),
    ];
    let slots = layout_window(&window, &records);
    let trend = TrendModel::estimate(&slots);

    assert_eq!(trend, TrendModel::default());
    assert_eq!(trend.level_at(10), 0.0);
}

#[test]
fn test_forecast_used_when_actual_missing() {
    let window = ForecastWindow::new(date(2024, 3, 1), 4, 0);
    // Indices 0..4 map to Feb 26..29 (2024 is a leap year)
    let records = vec![
        DailyRecord::observed(date(2024, 2, 26), 10),
        DailyRecord::new(date(2024, 2, 27), Some(0), Some(20)),
        DailyRecord::new(date(2024, 2, 28), None, Some(30)),
        DailyRecord::observed(date(2024, 2, 29), 40),
    ];
    let slots = layout_window(&window, &records);
    let trend = TrendModel::estimate(&slots);

    assert_relative_eq!(trend.slope, 10.0, epsilon = 1e-9);
    assert_relative_eq!(trend.intercept, 10.0, epsilon = 1e-9);
    assert_relative_eq!(trend.base_level, 25.0, epsilon = 1e-9);
}

#[test]
fn test_gaps_keep_day_indices() {
    let window = ForecastWindow::new(date(2024, 3, 1), 10, 0);
    // Only days 1, 5 and 9 of the window are present
    let records = vec![
        DailyRecord::observed(window.date_at(1), 12),
        DailyRecord::observed(window.date_at(5), 20),
        DailyRecord::observed(window.date_at(9), 28),
    ];
    let slots = layout_window(&window, &records);
    let trend = TrendModel::estimate(&slots);

    assert_relative_eq!(trend.slope, 2.0, epsilon = 1e-9);
    assert_relative_eq!(trend.intercept, 10.0, epsilon = 1e-9);
}

#[test]
fn test_level_is_floored_at_zero() {
    let trend = TrendModel {
        slope: -10.0,
        intercept: 50.0,
        base_level: 25.0,
    };

    assert_relative_eq!(trend.level_at(2), 30.0);
    assert_eq!(trend.level_at(8), 0.0);
}
