//! NASA InSight weather integration
//!
//! Client for the InSight: Mars Weather Service API
//! (<https://api.nasa.gov/insight_weather/>). Returns the raw per-sol feed;
//! shaping it into summaries happens in the application layer.

pub mod client;

pub use client::{DEMO_API_KEY, InsightClient, InsightConfig, InsightError, MarsWeatherClient};
