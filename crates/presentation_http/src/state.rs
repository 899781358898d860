//! Application state shared across handlers

use std::sync::Arc;

use application::MarsWeatherService;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Fetch-and-normalize use case behind `/mars-weather`
    pub weather_service: Arc<MarsWeatherService>,
}

impl AppState {
    /// Create state around a weather service
    pub fn new(weather_service: MarsWeatherService) -> Self {
        Self {
            weather_service: Arc::new(weather_service),
        }
    }
}
