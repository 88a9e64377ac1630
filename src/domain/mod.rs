//! Domain layer: forest model and the dominating set algorithm
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod entities;
pub mod error;
pub mod render;
pub mod solver;

pub use arena::{ForestArena, ForestNode};
pub use builder::ForestBuilder;
pub use entities::DominatingSet;
pub use error::{DomainError, DomainResult};
pub use render::ForestRender;
pub use solver::{minimum_dominating_set, DominatingSetSolver};
