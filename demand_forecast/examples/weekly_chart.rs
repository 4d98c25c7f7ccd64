use chrono::{Datelike, Duration, NaiveDate, Weekday};
use demand_forecast::config::WindowConfig;
use demand_forecast::{
    DailyRecord, StaticSeriesLoader, TrendForecastEngine, TrendForecastQuery, TrendForecastService,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let today = NaiveDate::from_ymd_opt(2024, 3, 15).ok_or("invalid date")?;

    // Six weeks of sales with a weekend dip and a few missing days
    let mut records = Vec::new();
    for i in 1..=42 {
        if i % 11 == 0 {
            continue;
        }
        let date = today - Duration::days(i);
        let base = match date.weekday() {
            Weekday::Sat | Weekday::Sun => 80,
            _ => 120,
        };
        records.push(DailyRecord::observed(date, base + (42 - i) as u64));
    }

    // Upstream forecasts for the next two weeks
    for i in 0..14 {
        records.push(DailyRecord::forecasted(today + Duration::days(i), 150));
    }

    let service = TrendForecastService::new(
        StaticSeriesLoader::new(records),
        TrendForecastEngine::default(),
    );
    let query = TrendForecastQuery::new(today, &WindowConfig::default()).with_period("weekly");

    let response = service.trend_forecast(&query);
    println!("Weekly trend forecast around {}:", today);
    for point in &response.data {
        println!(
            "{}  actual {:>6}  forecast {:>6}  trend {:>6}",
            point.date,
            point.actual.map_or("-".to_string(), |v| v.to_string()),
            point.forecast.map_or("-".to_string(), |v| v.to_string()),
            point.trendline
        );
    }

    Ok(())
}
