use async_trait::async_trait;
use std::fmt::Debug;

use crate::model::Coordinate;

pub mod open_meteo;

pub use open_meteo::{DailyPayload, HourlyPayload, OpenMeteoProvider, OpenMeteoResponse};

/// Daily fields requested for both endpoints.
pub const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,weathercode,sunshine_duration";
pub const HOURLY_FIELDS: &str = "surface_pressure";

/// Which upstream field set a request needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    SevenDayForecast,
    WeeklySummary,
}

impl Dataset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dataset::SevenDayForecast => "7-day-forecast",
            Dataset::WeeklySummary => "weekly-summary",
        }
    }

    /// Query parameters, excluding the coordinate, for the upstream call.
    pub fn query(&self) -> Vec<(&'static str, &'static str)> {
        let mut params = vec![("daily", DAILY_FIELDS)];
        if *self == Dataset::WeeklySummary {
            params.push(("hourly", HOURLY_FIELDS));
        }
        params.push(("timezone", "auto"));
        params
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An Open-Meteo compatible forecast source.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    /// Issue one request against `base_url`. Errors are transport-level failures:
    /// the request could not be sent, the status was not a success, or the body was not JSON.
    async fn fetch(
        &self,
        base_url: &str,
        coordinate: Coordinate,
        dataset: Dataset,
    ) -> anyhow::Result<OpenMeteoResponse>;
}
