use thiserror::Error;

/// Failures a forecast or summary request can end with.
///
/// Every variant except [`WeatherError::Fetch`] is the caller's (or the upstream
/// payload's) fault and is reported as a client error.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Invalid latitude or longitude.")]
    InvalidCoordinates,

    #[error("Invalid base URL.")]
    InvalidBaseUrl,

    /// The upstream answered, but without the series we need.
    #[error("{0}")]
    UpstreamDataMissing(&'static str),

    #[error("Daily series '{field}' has {actual} entries, expected {expected}.")]
    MismatchedSeries {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Unparseable date '{value}' in upstream data: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Transport failure, non-success status or a body that is not JSON.
    #[error("{0:#}")]
    Fetch(anyhow::Error),
}

pub const MISSING_DAILY: &str = "Unable to fetch weather data.";
pub const MISSING_DAILY_OR_HOURLY: &str =
    "Missing either daily or hourly data. Check your parameters.";
pub const MISSING_FIELDS: &str =
    "Some required data is missing. Are you sure the API supports these parameters?";

impl WeatherError {
    pub fn is_client_error(&self) -> bool {
        !matches!(self, WeatherError::Fetch(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn fixed_messages() {
        assert_eq!(WeatherError::InvalidCoordinates.to_string(), "Invalid latitude or longitude.");
        assert_eq!(WeatherError::InvalidBaseUrl.to_string(), "Invalid base URL.");
        assert_eq!(
            WeatherError::UpstreamDataMissing(MISSING_FIELDS).to_string(),
            MISSING_FIELDS
        );
    }

    #[test]
    fn fetch_is_the_only_server_error() {
        assert!(WeatherError::InvalidCoordinates.is_client_error());
        assert!(WeatherError::UpstreamDataMissing(MISSING_DAILY).is_client_error());
        assert!(
            WeatherError::MismatchedSeries { field: "weathercode", expected: 7, actual: 6 }
                .is_client_error()
        );
        assert!(!WeatherError::Fetch(anyhow!("connection refused")).is_client_error());
    }

    #[test]
    fn fetch_message_includes_context_chain() {
        let err = WeatherError::Fetch(anyhow!("connection refused").context("Failed to send"));
        assert_eq!(err.to_string(), "Failed to send: connection refused");
    }
}
