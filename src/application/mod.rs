//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic; it performs no I/O of its own.

pub mod error;
pub mod input;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use input::{format_parents, parse_parents};
