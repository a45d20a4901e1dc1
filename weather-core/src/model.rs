use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Daily fields as delivered by the upstream, indexed in lock-step by day offset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailySeries {
    pub dates: Vec<String>,
    pub weather_codes: Vec<i32>,
    pub max_temperatures: Vec<f64>,
    pub min_temperatures: Vec<f64>,
    /// Minutes of sunshine per day.
    pub sunshine_durations: Vec<f64>,
}

/// One day of the 7-day forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    /// `DD/MM/YYYY`
    pub date: String,
    pub weather_code: i32,
    pub max_temperature: f64,
    pub min_temperature: f64,
    /// Estimated panel yield in kWh.
    pub generated_energy: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Precipitation {
    #[serde(rename = "with precipitation")]
    With,
    #[serde(rename = "without precipitation")]
    Without,
}

impl Precipitation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Precipitation::With => "with precipitation",
            Precipitation::Without => "without precipitation",
        }
    }
}

impl std::fmt::Display for Precipitation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate over the whole fetched week. Field order is the JSON key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySummary {
    pub min_temperature: f64,
    pub max_temperature: f64,
    pub average_pressure: f64,
    pub average_sunshine_hours: f64,
    pub weekly_summary: Precipitation,
}
