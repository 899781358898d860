//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod mars_weather_port;

#[cfg(test)]
pub use mars_weather_port::MockMarsWeatherPort;
pub use mars_weather_port::MarsWeatherPort;
