//! Domain layer for the InSight Mars weather service
//!
//! Contains the upstream weather document model, per-sol summaries and the
//! value objects they are built from. This layer performs no I/O.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
