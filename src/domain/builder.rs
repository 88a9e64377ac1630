//! Forest builder: turns a parent-pointer array into a linked `ForestArena`.

use tracing::{debug, instrument};

use crate::domain::arena::ForestArena;
use crate::domain::error::{DomainError, DomainResult};

/// Walk state per node during cycle detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

/// Constructs forests from parent-pointer encodings.
///
/// Element `i` of the input is `None` for a root or `Some(p)` when node `i`
/// hangs below node `p`.
#[derive(Debug, Default)]
pub struct ForestBuilder;

impl ForestBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Validate the parent array and build the forest.
    ///
    /// Malformed references are rejected before anything is built; cycles are
    /// rejected before the forest is handed out.
    #[instrument(level = "debug", skip(self, parents), fields(len = parents.len()))]
    pub fn build(&self, parents: &[Option<usize>]) -> DomainResult<ForestArena> {
        let children = Self::collect_children(parents)?;
        Self::check_acyclic(parents)?;

        let mut forest = ForestArena::with_capacity(parents.len());
        for (parent, kids) in parents.iter().zip(children) {
            forest.insert_node(*parent, kids);
        }
        debug!(nodes = forest.len(), roots = forest.roots().len(), "forest built");
        Ok(forest)
    }

    /// First pass: validate each reference and group children per parent.
    ///
    /// Children are collected in ascending id order.
    fn collect_children(parents: &[Option<usize>]) -> DomainResult<Vec<Vec<usize>>> {
        let len = parents.len();
        let mut children = vec![Vec::new(); len];
        for (node, parent) in parents.iter().enumerate() {
            let Some(parent) = *parent else {
                continue;
            };
            if parent >= len {
                return Err(DomainError::ParentOutOfRange { node, parent, len });
            }
            if parent == node {
                return Err(DomainError::SelfParent { node });
            }
            children[parent].push(node);
        }
        Ok(children)
    }

    /// Follows parent chains, colouring nodes so each is walked once.
    ///
    /// Reaching a node already on the current chain means the chain loops.
    fn check_acyclic(parents: &[Option<usize>]) -> DomainResult<()> {
        let mut marks = vec![Mark::Unvisited; parents.len()];
        let mut path = Vec::new();

        for start in 0..parents.len() {
            let mut current = Some(start);
            while let Some(node) = current {
                match marks[node] {
                    Mark::Done => break,
                    Mark::OnPath => return Err(DomainError::CycleDetected { node }),
                    Mark::Unvisited => {
                        marks[node] = Mark::OnPath;
                        path.push(node);
                        current = parents[node];
                    }
                }
            }
            for node in path.drain(..) {
                marks[node] = Mark::Done;
            }
        }
        Ok(())
    }
}
