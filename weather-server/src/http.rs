//! HTTP REST API for the weather endpoints.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use weather_core::{Dataset, ForecastDay, WeatherError, WeatherService, WeeklySummary};

const FORECAST_FETCH_ERROR: &str = "Error while fetching data from API: ";
const SUMMARY_FETCH_ERROR: &str = "Error while fetching data from API. \
    the server is currently unable to handle the incoming requests.";

/// Shared state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<WeatherService>,
}

/// Query params shared by both endpoints
#[derive(Debug, Deserialize)]
pub struct CoordinateQuery {
    pub latitude: f64,
    pub longitude: f64,
}

/// A [`WeatherError`] tagged with the endpoint it came from, since upstream
/// failures map to a different status per endpoint.
#[derive(Debug)]
pub struct ApiError {
    dataset: Dataset,
    error: WeatherError,
}

impl ApiError {
    fn new(dataset: Dataset, error: WeatherError) -> Self {
        Self { dataset, error }
    }

    pub fn status(&self) -> StatusCode {
        match (&self.error, self.dataset) {
            (err, _) if err.is_client_error() => StatusCode::BAD_REQUEST,
            (_, Dataset::SevenDayForecast) => StatusCode::INTERNAL_SERVER_ERROR,
            (_, Dataset::WeeklySummary) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn message(&self) -> String {
        if self.error.is_client_error() {
            return self.error.to_string();
        }

        match self.dataset {
            Dataset::SevenDayForecast => format!("{FORECAST_FETCH_ERROR}{}", self.error),
            Dataset::WeeklySummary => format!("{SUMMARY_FETCH_ERROR}{}", self.error),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        if status.is_client_error() {
            tracing::warn!(dataset = %self.dataset, %message, "rejected request");
        } else {
            tracing::error!(dataset = %self.dataset, %message, "request failed");
        }

        (status, message).into_response()
    }
}

/// GET /weather/7-day-forecast - Daily forecast with estimated solar yield
async fn seven_day_forecast(
    State(state): State<AppState>,
    Query(query): Query<CoordinateQuery>,
) -> Result<Json<Vec<ForecastDay>>, ApiError> {
    tracing::info!(latitude = query.latitude, longitude = query.longitude, "7-day forecast requested");

    state
        .service
        .seven_day_forecast(query.latitude, query.longitude)
        .await
        .map(Json)
        .map_err(|err| ApiError::new(Dataset::SevenDayForecast, err))
}

/// GET /weather/weekly-summary - Aggregates over the coming week
async fn weekly_summary(
    State(state): State<AppState>,
    Query(query): Query<CoordinateQuery>,
) -> Result<Json<WeeklySummary>, ApiError> {
    tracing::info!(latitude = query.latitude, longitude = query.longitude, "weekly summary requested");

    state
        .service
        .weekly_summary(query.latitude, query.longitude)
        .await
        .map(Json)
        .map_err(|err| ApiError::new(Dataset::WeeklySummary, err))
}

/// GET /health - Health check endpoint
async fn health_check() -> &'static str {
    "ok"
}

/// Create the HTTP router
pub fn create_router(service: Arc<WeatherService>) -> Router {
    let state = AppState { service };

    // Browser clients on any origin may call the API.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/weather/7-day-forecast", get(seven_day_forecast))
        .route("/weather/weekly-summary", get(weekly_summary))
        .layer(cors)
        .with_state(state)
}

/// Run the HTTP server until the listener fails.
pub async fn run_server(service: Arc<WeatherService>, bind_address: &str) -> anyhow::Result<()> {
    let app = create_router(service);

    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    tracing::info!("HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
