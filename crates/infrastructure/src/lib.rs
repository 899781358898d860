//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer and owns process-wide
//! concerns: configuration loading and log subscriber setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, InsightAppConfig, ServerConfig};
pub use telemetry::{LogFormat, TelemetryConfig, TelemetryError, init_telemetry};
