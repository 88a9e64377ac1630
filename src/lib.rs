//! Minimum dominating sets of rooted forests.
//!
//! A forest is given as a parent-pointer array: element `i` is `None` for a
//! root or `Some(p)` when node `p` is the parent of node `i`.
//!
//! ```
//! let parents = [None, Some(0), Some(1), Some(2), Some(3), Some(4)];
//! let set = domset::minimum_dominating_set(&parents).unwrap();
//! assert_eq!(set.to_vec(), vec![1, 4]);
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{
    minimum_dominating_set, DominatingSet, DominatingSetSolver, DomainError, DomainResult,
    ForestArena, ForestBuilder, ForestNode,
};
