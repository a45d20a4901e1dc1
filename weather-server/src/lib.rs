//! HTTP front end for `weather-core`.
//!
//! This crate focuses on:
//! - Routing the two weather endpoints
//! - Mapping core errors onto HTTP statuses
//! - Logging setup and server startup

pub mod http;

pub use http::{create_router, run_server};

/// Install the global `tracing` subscriber, honouring `RUST_LOG` and
/// defaulting to `info`.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
