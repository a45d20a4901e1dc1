use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use std::time::Duration;

use crate::{
    error::{MISSING_DAILY, MISSING_DAILY_OR_HOURLY, MISSING_FIELDS, WeatherError},
    model::{Coordinate, DailySeries},
};

use super::{Dataset, WeatherSource};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client for Open-Meteo")?;

        Ok(Self { http })
    }
}

#[async_trait]
impl WeatherSource for OpenMeteoProvider {
    async fn fetch(
        &self,
        base_url: &str,
        coordinate: Coordinate,
        dataset: Dataset,
    ) -> Result<OpenMeteoResponse> {
        tracing::debug!(%base_url, %dataset, ?coordinate, "requesting Open-Meteo");

        let res = self
            .http
            .get(base_url)
            .query(&[
                ("latitude", coordinate.latitude.to_string()),
                ("longitude", coordinate.longitude.to_string()),
            ])
            .query(&dataset.query())
            .send()
            .await
            .with_context(|| format!("Failed to send request to Open-Meteo ({dataset})"))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read Open-Meteo response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "Open-Meteo {} request failed with status {}: {}",
                dataset,
                status,
                truncate_body(&body),
            ));
        }

        serde_json::from_str(&body).context("Failed to parse Open-Meteo JSON")
    }
}

/// Upstream response. Every part is optional: a key that is absent, null or of the
/// wrong type decodes as `None` and is reported as missing data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenMeteoResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub daily: Option<DailyPayload>,
    #[serde(default, deserialize_with = "lenient")]
    pub hourly: Option<HourlyPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailyPayload {
    #[serde(default, deserialize_with = "lenient")]
    pub time: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub weathercode: Option<Vec<i32>>,
    #[serde(default, deserialize_with = "lenient")]
    pub temperature_2m_max: Option<Vec<f64>>,
    #[serde(default, deserialize_with = "lenient")]
    pub temperature_2m_min: Option<Vec<f64>>,
    #[serde(default, deserialize_with = "lenient")]
    pub sunshine_duration: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HourlyPayload {
    #[serde(default, deserialize_with = "lenient")]
    pub surface_pressure: Option<Vec<f64>>,
}

impl OpenMeteoResponse {
    /// Daily series for the 7-day forecast; dates are required.
    pub fn into_forecast_series(self) -> Result<DailySeries, WeatherError> {
        let daily = self.daily.ok_or(WeatherError::UpstreamDataMissing(MISSING_DAILY))?;

        match daily {
            DailyPayload {
                time: Some(dates),
                weathercode: Some(weather_codes),
                temperature_2m_max: Some(max_temperatures),
                temperature_2m_min: Some(min_temperatures),
                sunshine_duration: Some(sunshine_durations),
            } => Ok(DailySeries {
                dates,
                weather_codes,
                max_temperatures,
                min_temperatures,
                sunshine_durations,
            }),
            _ => Err(WeatherError::UpstreamDataMissing(MISSING_FIELDS)),
        }
    }

    /// Daily series plus hourly surface pressures for the weekly summary.
    /// Dates are optional here since the summary never reads them.
    pub fn into_summary_series(self) -> Result<(DailySeries, Vec<f64>), WeatherError> {
        let (Some(daily), Some(hourly)) = (self.daily, self.hourly) else {
            return Err(WeatherError::UpstreamDataMissing(MISSING_DAILY_OR_HOURLY));
        };

        match (daily, hourly.surface_pressure) {
            (
                DailyPayload {
                    time,
                    weathercode: Some(weather_codes),
                    temperature_2m_max: Some(max_temperatures),
                    temperature_2m_min: Some(min_temperatures),
                    sunshine_duration: Some(sunshine_durations),
                },
                Some(pressures),
            ) => Ok((
                DailySeries {
                    dates: time.unwrap_or_default(),
                    weather_codes,
                    max_temperatures,
                    min_temperatures,
                    sunshine_durations,
                },
                pressures,
            )),
            _ => Err(WeatherError::UpstreamDataMissing(MISSING_FIELDS)),
        }
    }
}

fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
