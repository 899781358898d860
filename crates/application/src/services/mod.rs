//! Application services - Use case implementations

mod mars_weather_service;
mod weather_normalizer;

pub use mars_weather_service::MarsWeatherService;
pub use weather_normalizer::normalize;
