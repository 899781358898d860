//! Application configuration
//!
//! Split into focused sub-modules by domain:
//! - `server`: HTTP server settings
//! - `integrations`: NASA InSight weather feed
//!
//! Log settings live in [`crate::telemetry::TelemetryConfig`].

mod integrations;
mod server;

use serde::{Deserialize, Serialize};

use crate::telemetry::TelemetryConfig;

pub use integrations::InsightAppConfig;
pub use server::ServerConfig;

/// Prefix for structured environment overrides, e.g. `MARS_WEATHER__SERVER__PORT`
pub const ENV_PREFIX: &str = "MARS_WEATHER";

/// Plain variable overriding `server.port`
pub const PORT_ENV: &str = "PORT";

/// Plain variable overriding `insight.api_key`
pub const NASA_API_KEY_ENV: &str = "NASA_API_KEY";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// InSight weather feed configuration
    #[serde(default)]
    pub insight: InsightAppConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional `config.toml`
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration using `file` as the optional config file
    ///
    /// Precedence, lowest first: built-in defaults, the file, `MARS_WEATHER__*`
    /// variables, then the plain `PORT` and `NASA_API_KEY` variables.
    ///
    /// A set but unparsable `PORT` is an error rather than being skipped.
    pub fn load_from(file: &str) -> Result<Self, config::ConfigError> {
        let port = env_value(PORT_ENV).map(|raw| parse_port(&raw)).transpose()?;

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 4000)?
            // Load from file if exists
            .add_source(config::File::with_name(file).required(false))
            // Override with environment variables (e.g., MARS_WEATHER__SERVER__PORT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", port.map(i64::from))?
            .set_override_option("insight.api_key", env_value(NASA_API_KEY_ENV))?;

        let config = builder.build()?;
        config.try_deserialize()
    }
}

/// Read a non-empty environment variable
fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_port(raw: &str) -> Result<u16, config::ConfigError> {
    raw.trim().parse().map_err(|_| {
        config::ConfigError::Message(format!("{PORT_ENV} must be a TCP port number, got {raw:?}"))
    })
}

#[cfg(test)]
mod tests {
    use std::{io::Write, sync::Mutex};

    use integration_insight::DEMO_API_KEY;
    use secrecy::ExposeSecret;

    use super::*;
    use crate::telemetry::LogFormat;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const OVERRIDE_VARS: [&str; 4] = [
        PORT_ENV,
        NASA_API_KEY_ENV,
        "MARS_WEATHER__SERVER__PORT",
        "MARS_WEATHER__INSIGHT__API_KEY",
    ];

    /// Sets the override variables for the duration of one test
    ///
    /// Holds `ENV_LOCK` so loads never observe another test's variables, and
    /// clears every override variable again on drop.
    struct ScopedEnv {
        _lock: std::sync::MutexGuard<'static, ()>,
    }

    impl ScopedEnv {
        #[allow(unsafe_code)]
        fn set(vars: &[(&str, &str)]) -> Self {
            let lock = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
            // SAFETY: every test touching these variables holds ENV_LOCK
            unsafe {
                for name in OVERRIDE_VARS {
                    std::env::remove_var(name);
                }
                for (name, value) in vars {
                    std::env::set_var(name, value);
                }
            }
            Self { _lock: lock }
        }
    }

    impl Drop for ScopedEnv {
        #[allow(unsafe_code)]
        fn drop(&mut self) {
            // SAFETY: ENV_LOCK is still held by this guard
            unsafe {
                for name in OVERRIDE_VARS {
                    std::env::remove_var(name);
                }
            }
        }
    }

    fn load_without_file() -> Result<AppConfig, config::ConfigError> {
        let dir = tempfile::tempdir().unwrap();
        AppConfig::load_from(dir.path().join("absent").to_str().unwrap())
    }

    #[test]
    fn app_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 4000);
        assert!(!config.insight.has_api_key());
        assert_eq!(config.telemetry.log_format, LogFormat::Text);
    }

    #[test]
    fn load_from_missing_file_uses_defaults() {
        let _env = ScopedEnv::set(&[]);
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent");

        let config = AppConfig::load_from(missing.to_str().unwrap()).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(
            config.insight.base_url,
            "https://api.nasa.gov/insight_weather/"
        );
    }

    #[test]
    fn load_from_toml_file() {
        let _env = ScopedEnv::set(&[]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("service.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
[server]
host = "127.0.0.1"
allowed_origins = ["https://example.org"]

[insight]
base_url = "http://localhost:9000/insight_weather/"
timeout_secs = 10

[telemetry]
log_format = "json"
"#
        )
        .unwrap();

        let config = AppConfig::load_from(path.to_str().unwrap()).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.allowed_origins, ["https://example.org"]);
        assert_eq!(
            config.insight.base_url,
            "http://localhost:9000/insight_weather/"
        );
        assert_eq!(config.insight.timeout_secs, 10);
        assert_eq!(config.telemetry.log_format, LogFormat::Json);
    }

    #[test]
    fn prefixed_env_overrides_defaults() {
        let _env = ScopedEnv::set(&[("MARS_WEATHER__SERVER__PORT", "6000")]);

        let config = load_without_file().unwrap();

        assert_eq!(config.server.port, 6000);
    }

    #[test]
    fn plain_port_and_api_key_win_over_prefixed_env() {
        let _env = ScopedEnv::set(&[
            (PORT_ENV, "5123"),
            (NASA_API_KEY_ENV, "real-key"),
            ("MARS_WEATHER__SERVER__PORT", "6000"),
            ("MARS_WEATHER__INSIGHT__API_KEY", "other-key"),
        ]);

        let config = load_without_file().unwrap();

        assert_eq!(config.server.port, 5123);
        assert!(config.insight.has_api_key());
        assert_eq!(
            config.insight.to_client_config().api_key.expose_secret(),
            "real-key"
        );
    }

    #[test]
    fn blank_api_key_falls_back_to_demo_key() {
        let _env = ScopedEnv::set(&[(NASA_API_KEY_ENV, "   ")]);

        let config = load_without_file().unwrap();

        assert!(!config.insight.has_api_key());
        assert_eq!(
            config.insight.to_client_config().api_key.expose_secret(),
            DEMO_API_KEY
        );
    }

    #[test]
    fn invalid_port_is_rejected() {
        let _env = ScopedEnv::set(&[(PORT_ENV, "80a"), (NASA_API_KEY_ENV, "real-key")]);

        let err = load_without_file().unwrap_err();

        assert!(err.to_string().contains("PORT"), "{err}");
    }

    #[test]
    fn out_of_range_port_is_rejected() {
        let _env = ScopedEnv::set(&[(PORT_ENV, "70000")]);

        assert!(load_without_file().is_err());
    }

    #[test]
    fn app_config_serialization_omits_secrets() {
        let json = serde_json::to_value(AppConfig::default()).unwrap();
        assert!(json["insight"].get("api_key").is_none());
        assert_eq!(json["server"]["port"], 4000);
    }
}
