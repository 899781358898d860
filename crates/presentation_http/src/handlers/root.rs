//! Welcome route

/// Plain-text greeting served at `/`
pub const WELCOME_MESSAGE: &str = "Welcome to the InSight Mars Weather Microservice!";

/// Greet callers of the service root
pub async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}
