//! InSight weather client
//!
//! HTTP client for the NASA InSight Mars weather feed.

use async_trait::async_trait;
use domain::WeatherDocument;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

/// Feed format requested from the API
const FEED_TYPE: &str = "json";

/// Feed version requested from the API
const FEED_VERSION: &str = "1.0";

/// Public NASA key, heavily rate limited
pub const DEMO_API_KEY: &str = "DEMO_KEY";

/// InSight client errors
#[derive(Debug, Error)]
pub enum InsightError {
    /// The HTTP client could not be created
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the InSight service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the InSight service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// InSight service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightConfig {
    /// InSight weather endpoint (default: <https://api.nasa.gov/insight_weather/>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// api.nasa.gov key sent as the `api_key` query parameter
    #[serde(skip_serializing, default = "default_api_key")]
    pub api_key: SecretString,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.nasa.gov/insight_weather/".to_string()
}

fn default_api_key() -> SecretString {
    SecretString::from(DEMO_API_KEY.to_string())
}

const fn default_timeout() -> u64 {
    30
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: default_api_key(),
            timeout_secs: default_timeout(),
        }
    }
}

impl InsightConfig {
    /// Check whether the shared demo key is in use
    #[must_use]
    pub fn uses_demo_key(&self) -> bool {
        self.api_key.expose_secret() == DEMO_API_KEY
    }
}

/// Client trait for fetching the Mars weather feed
#[async_trait]
pub trait MarsWeatherClient: Send + Sync {
    /// Fetch the latest weather document
    async fn fetch_weather(&self) -> Result<WeatherDocument, InsightError>;
}

/// InSight HTTP client implementation
#[derive(Debug)]
pub struct InsightClient {
    client: Client,
    config: InsightConfig,
}

impl InsightClient {
    /// Create a new InSight client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: InsightConfig) -> Result<Self, InsightError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| InsightError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Query parameters sent with every feed request
    fn query_params(&self) -> [(&'static str, &str); 3] {
        [
            ("api_key", self.config.api_key.expose_secret()),
            ("feedtype", FEED_TYPE),
            ("ver", FEED_VERSION),
        ]
    }

    /// Map an unsuccessful status to an error
    fn check_status(status: reqwest::StatusCode) -> Result<(), InsightError> {
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(InsightError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(InsightError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(InsightError::RequestFailed(format!("HTTP {status}")));
        }
        Ok(())
    }
}

#[async_trait]
impl MarsWeatherClient for InsightClient {
    #[instrument(skip(self), fields(url = %self.config.base_url))]
    async fn fetch_weather(&self) -> Result<WeatherDocument, InsightError> {
        debug!("Fetching Mars weather feed");

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&self.query_params())
            .send()
            .await
            .map_err(|e| InsightError::RequestFailed(e.without_url().to_string()))?;

        Self::check_status(response.status())?;

        let document: WeatherDocument = response
            .json()
            .await
            .map_err(|e| InsightError::ParseError(e.without_url().to_string()))?;

        debug!(sols = document.sol_keys().len(), "Mars weather feed received");

        Ok(document)
    }
}
