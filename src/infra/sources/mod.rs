//! Third-party data sources for the dashboard.
//!
//! Each remote source makes exactly one bounded-time GET and returns a
//! typed [`FetchResult`]. Sources never substitute fallback content
//! themselves; [`crate::services::DashboardService`] does that.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

pub mod fallback;
mod jokes;
mod quotes;
mod weather;

pub use fallback::{FallbackPicker, FixedPicker, RandomPicker};
pub use jokes::JokeApiClient;
pub use quotes::QuotableClient;
pub use weather::OpenWeatherClient;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Why a remote fetch produced no value
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no API key configured")]
    MissingApiKey,

    #[error("unexpected status {0}")]
    Status(StatusCode),

    /// Connection failure or timeout
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl FetchError {
    /// The provider answered but refused (bad status or no credentials).
    pub fn is_rejection(&self) -> bool {
        matches!(self, FetchError::MissingApiKey | FetchError::Status(_))
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        FetchError::Malformed(msg.into())
    }
}

pub type FetchResult<T> = Result<T, FetchError>;

/// Current conditions and short-range forecast for a city.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// One formatted line of current weather
    async fn current(&self, city: &str) -> FetchResult<String>;

    /// Up to five formatted forecast entries, in provider order
    async fn forecast(&self, city: &str) -> FetchResult<Vec<String>>;
}

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// One formatted inspirational quote
    async fn quote(&self) -> FetchResult<String>;
}

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait JokeSource: Send + Sync {
    /// One formatted joke
    async fn joke(&self) -> FetchResult<String>;
}

/// Build the HTTP client shared by every remote source.
pub fn http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("daily-dashboard/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Send a request and decode a 200 JSON body.
async fn get_json<T: DeserializeOwned>(request: RequestBuilder) -> FetchResult<T> {
    let response = request.send().await?;
    let status = response.status();
    if status != StatusCode::OK {
        return Err(FetchError::Status(status));
    }

    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| FetchError::malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_classification() {
        assert!(FetchError::MissingApiKey.is_rejection());
        assert!(FetchError::Status(StatusCode::UNAUTHORIZED).is_rejection());
        assert!(!FetchError::malformed("missing field").is_rejection());
    }
}
