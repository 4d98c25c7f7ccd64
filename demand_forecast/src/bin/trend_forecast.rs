use chrono::{Local, NaiveDate};
use clap::Parser;
use demand_forecast::{
    CsvSeriesLoader, ForecastConfig, TrendForecastEngine, TrendForecastQuery,
    TrendForecastService,
};
use std::path::PathBuf;
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Synthesize a daily demand trend and forecast from a warehouse extract
#[derive(Debug, Parser)]
#[command(name = "trend_forecast", version)]
struct Args {
    /// CSV extract with date,store_id,product_id,category_id,sales,rolling_forecast
    #[arg(short, long)]
    input: PathBuf,

    /// Day treated as today (defaults to the local date)
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Days of history before today
    #[arg(long)]
    days_past: Option<u32>,

    /// Days projected from today on
    #[arg(long)]
    days_future: Option<u32>,

    /// daily, weekly or monthly
    #[arg(long, default_value = "daily")]
    period: String,

    /// Store id filter, repeatable
    #[arg(long = "store")]
    stores: Vec<u32>,

    /// Product id filter, repeatable
    #[arg(long = "product")]
    products: Vec<u64>,

    /// Category id filter, repeatable
    #[arg(long = "category")]
    categories: Vec<u32>,

    /// Configuration file overriding the built-in tunables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    /// Pretty-print the response
    #[arg(long)]
    pretty: bool,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("demand_forecast=info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        let _ = builder.json().try_init();
    } else {
        let _ = builder.try_init();
    }
}

fn main() {
    let args = Args::parse();
    init_tracing(args.log_json);

    let config = match ForecastConfig::load(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            error!("Config error: {e}");
            process::exit(1);
        }
    };

    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let mut query = TrendForecastQuery::new(today, &config.window)
        .with_stores(args.stores)
        .with_products(args.products)
        .with_categories(args.categories)
        .with_period(args.period);
    if let Some(days_past) = args.days_past {
        query.days_past = days_past;
    }
    if let Some(days_future) = args.days_future {
        query.days_future = days_future;
    }

    let service = TrendForecastService::new(
        CsvSeriesLoader::new(&args.input),
        TrendForecastEngine::new(config),
    );
    let response = service.trend_forecast(&query);

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&response)
    } else {
        serde_json::to_string(&response)
    };
    match rendered {
        Ok(json) => println!("{json}"),
        Err(e) => {
            error!("Failed to serialize response: {e}");
            process::exit(1);
        }
    }

    if response.error.is_some() {
        process::exit(2);
    }
}
