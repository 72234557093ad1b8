use reqwest::StatusCode;
use thiserror::Error;

/// Failures talking to the forecast provider.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("building http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("calling {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("getting forecast from {url}: {source}")]
    ForecastRequest {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("calling {url}: {status}")]
    Status { url: String, status: StatusCode },

    #[error("decoding points response: {0}")]
    DecodePoints(#[source] serde_json::Error),

    #[error("decoding forecast json: {0}")]
    DecodeForecast(#[source] serde_json::Error),

    #[error("no forecast location in response from {url}")]
    MissingForecastLocation { url: String },

    #[error("getting gridpoint: {0}")]
    Gridpoint(#[source] Box<ForecastError>),
}

impl ForecastError {
    /// True when the root cause is a body that could not be decoded.
    pub fn is_decode(&self) -> bool {
        match self {
            ForecastError::DecodePoints(_) | ForecastError::DecodeForecast(_) => true,
            ForecastError::Gridpoint(inner) => inner.is_decode(),
            _ => false,
        }
    }
}
