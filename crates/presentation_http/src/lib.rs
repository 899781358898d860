//! InSight Mars weather HTTP presentation layer
//!
//! This crate provides the HTTP API: a welcome route and `/mars-weather`.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::{cors_layer, create_router};
pub use server::{ShutdownOutcome, serve_until};
pub use state::AppState;
