//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.

mod solve;

pub use solve::{ForestSummary, SolveReport, SolveService};
