//! Application layer - Use cases and orchestration
//!
//! Defines the port through which the upstream weather feed is fetched and
//! the use case that turns the raw feed into per-sol summaries.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
