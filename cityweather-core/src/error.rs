use reqwest::StatusCode;
use thiserror::Error;

/// Failures surfaced by a weather lookup.
///
/// All variants bubble to the caller unchanged; nothing is retried or
/// logged-and-suppressed, and failed lookups are never cached.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The outbound call could not be completed (DNS failure, refused
    /// connection, timeout).
    #[error("failed to reach the weather API: {0}")]
    Network(#[from] reqwest::Error),

    /// The upstream API answered with a non-success status.
    #[error("weather API returned status {status}: {body}")]
    Upstream { status: StatusCode, body: String },

    /// The response body was missing an expected field or carried an
    /// unexpected type.
    #[error("failed to parse weather API response: {0}")]
    Parse(#[from] serde_json::Error),
}
