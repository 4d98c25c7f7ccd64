use chrono::{Duration, NaiveDate};
use demand_forecast::config::WindowConfig;
use demand_forecast::{
    DailyRecord, ForecastError, Result, SeriesLoader, StaticSeriesLoader, TrendForecastEngine,
    TrendForecastQuery, TrendForecastResponse, TrendForecastService,
};
use pretty_assertions::assert_eq;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

struct FailingLoader;

impl SeriesLoader for FailingLoader {
    fn load(&self, _query: &TrendForecastQuery) -> Result<Vec<DailyRecord>> {
        Err(ForecastError::DataError("warehouse unavailable".to_string()))
    }
}

fn query(days_past: u32, days_future: u32) -> TrendForecastQuery {
    TrendForecastQuery::new(
        date(2024, 1, 3),
        &WindowConfig {
            days_past,
            days_future,
        },
    )
}

#[test]
fn test_response_carries_full_series() {
    let loader = StaticSeriesLoader::new(vec![
        DailyRecord::observed(date(2024, 1, 1), 100),
        DailyRecord::new(date(2024, 1, 2), None, None),
    ]);
    let service = TrendForecastService::new(loader, TrendForecastEngine::default());

    let response = service.trend_forecast(&query(2, 0));

    assert_eq!(response.error, None);
    assert_eq!(response.data.len(), 2);
    assert_eq!(response.data[0].actual, Some(100));
    assert!(response.data[1].actual.unwrap() >= 1);
}

#[test]
fn test_response_json_shape() {
    let loader = StaticSeriesLoader::new(vec![DailyRecord::observed(date(2024, 1, 1), 100)]);
    let service = TrendForecastService::new(loader, TrendForecastEngine::default());

    let json = serde_json::to_value(service.trend_forecast(&query(2, 1))).unwrap();

    assert!(json.get("error").is_none());
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 3);
    assert_eq!(data[0]["date"], "2024-01-01");
    assert_eq!(data[2]["date"], "2024-01-03");
    assert!(data[2]["forecast"].is_u64());
}

#[test]
fn test_loader_failure_is_reported_in_envelope() {
    let service = TrendForecastService::new(FailingLoader, TrendForecastEngine::default());
    let response = service.trend_forecast(&query(7, 7));

    assert!(response.data.is_empty());
    assert_eq!(
        response.error.as_deref(),
        Some("Data error: warehouse unavailable")
    );

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["data"], serde_json::json!([]));
    assert_eq!(json["error"], "Data error: warehouse unavailable");
}

#[test]
fn test_oversized_window_is_reported_in_envelope() {
    let loader = StaticSeriesLoader::new(vec![DailyRecord::observed(date(2024, 1, 1), 100)]);
    let service = TrendForecastService::new(loader, TrendForecastEngine::default());

    let response = service.trend_forecast(&query(u32::MAX, 7));

    assert!(response.data.is_empty());
    assert!(response.error.unwrap().contains("days_past"));
}

#[test]
fn test_no_records_gives_empty_data_without_error() {
    let service = TrendForecastService::new(
        StaticSeriesLoader::default(),
        TrendForecastEngine::default(),
    );
    let response = service.trend_forecast(&query(7, 7));

    assert_eq!(response, TrendForecastResponse::default());
}

#[test]
fn test_weekly_request_is_bucketed() {
    let loader = StaticSeriesLoader::new(
        (0..14)
            .map(|i| DailyRecord::observed(date(2023, 12, 20) + Duration::days(i), 50))
            .collect(),
    );
    let service = TrendForecastService::new(loader, TrendForecastEngine::default());

    let response = service.trend_forecast(&query(14, 14).with_period("weekly"));

    assert_eq!(response.error, None);
    assert!(response.data.len() < 28);
    assert!(response
        .data
        .iter()
        .all(|p| p.date.format("%u").to_string() == "1"));
}

#[test]
fn test_period_aliases_return_daily_series() {
    let loader = StaticSeriesLoader::new(
        (0..14)
            .map(|i| DailyRecord::observed(date(2023, 12, 20) + Duration::days(i), 50))
            .collect(),
    );
    let service = TrendForecastService::new(loader, TrendForecastEngine::default());

    for period in ["Weekly", "month", " monthly"] {
        let response = service.trend_forecast(&query(14, 14).with_period(period));
        assert_eq!(response.error, None);
        assert_eq!(response.data.len(), 28, "period {:?}", period);
    }
}

#[test]
fn test_response_round_trips_through_json() {
    let loader = StaticSeriesLoader::new(vec![DailyRecord::observed(date(2024, 1, 2), 40)]);
    let service = TrendForecastService::new(loader, TrendForecastEngine::default());
    let response = service.trend_forecast(&query(3, 2));

    let text = serde_json::to_string(&response).unwrap();
    let parsed: TrendForecastResponse = serde_json::from_str(&text).unwrap();

    assert_eq!(parsed, response);
}
