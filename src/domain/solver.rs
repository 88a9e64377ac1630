//! Greedy minimum dominating set for forests.
//!
//! The solver repeatedly takes the lowest-id young parent (a node whose
//! children are all leaves) into the set, marks that node's parent as
//! covered and deletes the young parent together with its leaves. Leaves
//! that are already covered are pruned without joining the set; isolated
//! uncovered roots must join the set since nothing else can dominate them.
//!
//! Without the covered mark, a node already dominated by the chosen young
//! parent can later surface as a young parent itself and be forced in,
//! which inflates e.g. a six-node path from two members to three.

use std::collections::BTreeSet;

use tracing::{debug, instrument, trace, warn};

use crate::domain::arena::ForestArena;
use crate::domain::builder::ForestBuilder;
use crate::domain::entities::DominatingSet;
use crate::domain::error::DomainResult;

/// Build the forest for `parents` and compute its minimum dominating set.
pub fn minimum_dominating_set(parents: &[Option<usize>]) -> DomainResult<DominatingSet> {
    let forest = ForestBuilder::new().build(parents)?;
    Ok(DominatingSetSolver::new(forest).compute())
}

/// Owns a forest and shrinks it until every node is decided.
#[derive(Debug)]
pub struct DominatingSetSolver {
    forest: ForestArena,
    members: DominatingSet,
    /// Active young parents, ordered so the lowest id is picked first
    candidates: BTreeSet<usize>,
}

impl DominatingSetSolver {
    pub fn new(forest: ForestArena) -> Self {
        let candidates = forest
            .ids()
            .filter(|&id| forest.is_young_parent(id))
            .collect();
        Self {
            forest,
            members: DominatingSet::new(),
            candidates,
        }
    }

    /// Runs the reduction to completion and returns the chosen nodes.
    #[instrument(level = "debug", skip(self), fields(nodes = self.forest.len()))]
    pub fn compute(mut self) -> DominatingSet {
        self.eliminate_strangers();

        while self.forest.len() > 1 {
            let Some(young) = self.candidates.first().copied() else {
                // unreachable on a validated forest: every tree with two or
                // more nodes has a deepest non-leaf, which is a young parent
                warn!(remaining = self.forest.len(), "no young parent left");
                break;
            };
            self.take_young_parent(young);
        }

        self.settle_residual();
        debug!(size = self.members.len(), "dominating set computed");
        self.members
    }

    /// Isolated roots dominate only themselves and must be in any solution.
    fn eliminate_strangers(&mut self) {
        let strangers: Vec<usize> = self
            .forest
            .ids()
            .filter(|&id| self.forest.get_node(id).is_some_and(|n| n.is_stranger()))
            .collect();
        for id in strangers {
            trace!(id, "stranger joins set");
            self.members.insert(id);
            self.delete(id);
        }
    }

    #[instrument(level = "trace", skip(self))]
    fn take_young_parent(&mut self, id: usize) {
        let parent = self.forest.get_node(id).and_then(|node| node.parent);
        self.members.insert(id);
        if let Some(parent) = parent {
            self.forest.mark_covered(parent);
        }
        self.delete(id);
        if let Some(parent) = parent {
            self.prune_from(parent);
        }
    }

    /// Covered-leaf pruning, starting at a node whose children just shrank.
    ///
    /// A covered leaf is dropped without joining the set, which may leave its
    /// own parent bare; the walk continues upwards until a node with
    /// remaining children is reached. An uncovered root left bare is a new
    /// stranger and joins the set.
    fn prune_from(&mut self, start: usize) {
        let mut current = Some(start);
        while let Some(id) = current.take() {
            let Some(node) = self.forest.get_node(id) else {
                break;
            };
            if !node.is_leaf() {
                break;
            }
            let parent = node.parent;
            if node.covered {
                trace!(id, "covered leaf pruned");
                self.delete(id);
                current = parent;
            } else if parent.is_none() {
                trace!(id, "stranger joins set");
                self.members.insert(id);
                self.delete(id);
            }
        }
    }

    /// The last node standing joins the set unless something already dominates it.
    fn settle_residual(&mut self) {
        let remaining: Vec<usize> = self.forest.ids().collect();
        for id in remaining {
            let covered = self.forest.get_node(id).is_some_and(|n| n.covered);
            if !covered {
                trace!(id, "residual node joins set");
                self.members.insert(id);
            }
            self.delete(id);
        }
    }

    /// Removes a node and its subtree, then refreshes the young-parent status
    /// of the two ancestors whose shape may have changed.
    fn delete(&mut self, id: usize) {
        let parent = self.forest.get_node(id).and_then(|node| node.parent);
        for removed in self.forest.remove_subtree(id) {
            self.candidates.remove(&removed);
        }
        if let Some(parent) = parent {
            self.refresh(parent);
            if let Some(grandparent) = self.forest.get_node(parent).and_then(|n| n.parent) {
                self.refresh(grandparent);
            }
        }
    }

    fn refresh(&mut self, id: usize) {
        if self.forest.is_young_parent(id) {
            self.candidates.insert(id);
        } else {
            self.candidates.remove(&id);
        }
    }
}
