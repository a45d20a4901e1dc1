//! Request pipeline: validate, fetch once, compute.

use std::sync::Arc;

use crate::{
    error::WeatherError,
    forecast::process_forecast,
    model::{Coordinate, ForecastDay, WeeklySummary},
    provider::{Dataset, OpenMeteoResponse, WeatherSource},
    summary::summarize,
    validate::validate_request,
};

#[derive(Debug, Clone)]
pub struct WeatherService {
    source: Arc<dyn WeatherSource>,
    base_url: String,
}

impl WeatherService {
    pub fn new(source: Arc<dyn WeatherSource>, base_url: impl Into<String>) -> Self {
        Self { source, base_url: base_url.into() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Seven days (or however many the upstream returns) of forecast with solar yield.
    pub async fn seven_day_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<ForecastDay>, WeatherError> {
        let coordinate = Coordinate::new(latitude, longitude);
        let response = self.fetch(coordinate, Dataset::SevenDayForecast).await?;
        let daily = response.into_forecast_series()?;
        process_forecast(&daily)
    }

    pub async fn weekly_summary(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeeklySummary, WeatherError> {
        let coordinate = Coordinate::new(latitude, longitude);
        let response = self.fetch(coordinate, Dataset::WeeklySummary).await?;
        let (daily, pressures) = response.into_summary_series()?;
        Ok(summarize(&daily, &pressures))
    }

    async fn fetch(
        &self,
        coordinate: Coordinate,
        dataset: Dataset,
    ) -> Result<OpenMeteoResponse, WeatherError> {
        validate_request(coordinate, &self.base_url)?;

        self.source
            .fetch(&self.base_url, coordinate, dataset)
            .await
            .map_err(|err| {
                tracing::error!(%dataset, error = %format!("{err:#}"), "upstream fetch failed");
                WeatherError::Fetch(err)
            })
    }
}
