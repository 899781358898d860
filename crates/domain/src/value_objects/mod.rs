//! Value Objects - Immutable, identity-less domain primitives

mod reading;
mod sol_id;

pub use reading::{NOT_AVAILABLE, Reading};
pub use sol_id::SolId;
