//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod insight_weather_adapter;

pub use insight_weather_adapter::InsightWeatherAdapter;
