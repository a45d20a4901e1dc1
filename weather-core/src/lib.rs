//! Core library for the weather service.
//!
//! This crate defines:
//! - Coordinate and base URL validation
//! - The Open-Meteo provider abstraction and its typed response model
//! - Forecast enrichment (solar yield) and weekly summary aggregation
//! - Configuration handling
//!
//! It is used by `weather-server`, but has no dependency on any HTTP framework.

pub mod config;
pub mod error;
pub mod forecast;
pub mod model;
pub mod provider;
pub mod rounding;
pub mod service;
pub mod summary;
pub mod validate;

pub use config::Config;
pub use error::WeatherError;
pub use model::{Coordinate, DailySeries, ForecastDay, Precipitation, WeeklySummary};
pub use provider::{Dataset, OpenMeteoProvider, WeatherSource};
pub use service::WeatherService;
