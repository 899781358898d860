//! InSight weather adapter - Implements MarsWeatherPort using integration_insight

use application::{error::ApplicationError, ports::MarsWeatherPort};
use async_trait::async_trait;
use domain::WeatherDocument;
use integration_insight::{InsightClient, InsightConfig, InsightError, MarsWeatherClient};
use tracing::{debug, error, instrument};

/// Adapter for the Mars weather feed using the NASA InSight API
pub struct InsightWeatherAdapter {
    client: Box<dyn MarsWeatherClient>,
}

impl std::fmt::Debug for InsightWeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InsightWeatherAdapter")
            .field("client", &"MarsWeatherClient")
            .finish()
    }
}

impl InsightWeatherAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: InsightConfig) -> Result<Self, ApplicationError> {
        let client = InsightClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::with_client(client))
    }

    /// Wrap an existing client
    pub fn with_client(client: impl MarsWeatherClient + 'static) -> Self {
        Self {
            client: Box::new(client),
        }
    }

    /// Collapse every client error into the opaque upstream failure
    ///
    /// The cause is logged here and dropped.
    fn map_error(err: &InsightError) -> ApplicationError {
        error!(error = %err, "Error fetching Mars weather data");
        ApplicationError::UpstreamFetch
    }
}

#[async_trait]
impl MarsWeatherPort for InsightWeatherAdapter {
    #[instrument(skip(self))]
    async fn fetch_weather(&self) -> Result<WeatherDocument, ApplicationError> {
        let document = self
            .client
            .fetch_weather()
            .await
            .map_err(|e| Self::map_error(&e))?;

        debug!(sols = document.sol_keys().len(), "Retrieved Mars weather document");

        Ok(document)
    }
}
