//! Mars weather port
//!
//! Defines the interface for retrieving the upstream weather feed.

use async_trait::async_trait;
use domain::WeatherDocument;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for fetching the raw Mars weather document
///
/// One call is one upstream request: no retries, no caching.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MarsWeatherPort: Send + Sync {
    /// Fetch the current weather document
    ///
    /// Every transport, status or parse failure surfaces as
    /// [`ApplicationError::UpstreamFetch`].
    async fn fetch_weather(&self) -> Result<WeatherDocument, ApplicationError>;
}
