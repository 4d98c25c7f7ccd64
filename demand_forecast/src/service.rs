//! Request-level entry point: load, synthesize, wrap

use crate::data::SeriesPoint;
use crate::engine::TrendForecastEngine;
use crate::loader::{SeriesLoader, TrendForecastQuery};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Response body of a trend forecast request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendForecastResponse {
    pub data: Vec<SeriesPoint>,
    /// Present only when the records could not be loaded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Serves trend forecast requests from a loader
#[derive(Debug, Clone)]
pub struct TrendForecastService<L> {
    loader: L,
    engine: TrendForecastEngine,
}

impl<L: SeriesLoader> TrendForecastService<L> {
    pub fn new(loader: L, engine: TrendForecastEngine) -> Self {
        Self { loader, engine }
    }

    /// Answer one request. An invalid window or a loader failure yields an
    /// empty series with the error message instead of an error result.
    pub fn trend_forecast(&self, query: &TrendForecastQuery) -> TrendForecastResponse {
        let records = match query.validate().and_then(|_| self.loader.load(query)) {
            Ok(records) => records,
            Err(err) => {
                warn!(%err, "failed to load trend forecast records");
                return TrendForecastResponse {
                    data: Vec::new(),
                    error: Some(err.to_string()),
                };
            }
        };

        let window = query.window();
        let period = query.period();
        let data = self.engine.synthesize(&records, &window, period);

        info!(
            records = records.len(),
            points = data.len(),
            %period,
            start = %window.start(),
            end = %window.end(),
            "built trend forecast"
        );

        TrendForecastResponse { data, error: None }
    }
}
