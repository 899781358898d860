//! Application-level errors

use domain::SolId;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The upstream weather feed could not be retrieved
    ///
    /// The underlying cause is logged where it happens and deliberately not
    /// carried here.
    #[error("Failed to retrieve Mars weather data")]
    UpstreamFetch,

    /// A sol listed in `sol_keys` has no usable entry in the document
    #[error("Malformed weather document: entry for sol {0} is missing or not an object")]
    MalformedDocument(SolId),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}
