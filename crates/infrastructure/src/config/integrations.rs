//! Integration configuration: NASA InSight weather feed.

use integration_insight::{DEMO_API_KEY, InsightConfig};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// InSight weather feed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightAppConfig {
    /// InSight weather endpoint
    #[serde(default = "default_insight_base_url")]
    pub base_url: String,

    /// api.nasa.gov key (sensitive - uses `SecretString`)
    ///
    /// Also read from the `NASA_API_KEY` environment variable.
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_insight_timeout")]
    pub timeout_secs: u64,
}

fn default_insight_base_url() -> String {
    "https://api.nasa.gov/insight_weather/".to_string()
}

const fn default_insight_timeout() -> u64 {
    30
}

impl Default for InsightAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_insight_base_url(),
            api_key: None,
            timeout_secs: default_insight_timeout(),
        }
    }
}

impl InsightAppConfig {
    /// Configured API key, ignoring blank values
    fn configured_key(&self) -> Option<&SecretString> {
        self.api_key
            .as_ref()
            .filter(|key| !key.expose_secret().trim().is_empty())
    }

    /// Check whether a usable API key is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.configured_key().is_some()
    }

    /// Build the client configuration, falling back to NASA's `DEMO_KEY`
    #[must_use]
    pub fn to_client_config(&self) -> InsightConfig {
        let api_key = self.configured_key().map_or_else(
            || SecretString::from(DEMO_API_KEY.to_string()),
            Clone::clone,
        );

        InsightConfig {
            base_url: self.base_url.clone(),
            api_key,
            timeout_secs: self.timeout_secs,
        }
    }
}
