use generational_arena::{Arena, Index};
use tracing::instrument;

/// Forest node stored in the arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForestNode {
    /// Zero-based node id, stable for the node's lifetime
    pub id: usize,
    /// Id of the parent node, None for forest roots
    pub parent: Option<usize>,
    /// Ids of child nodes in insertion order
    pub children: Vec<usize>,
    /// Set once the node is known to be dominated by a chosen young parent
    pub covered: bool,
}

impl ForestNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// A rootless leaf: an isolated single-node tree.
    pub fn is_stranger(&self) -> bool {
        self.is_root() && self.is_leaf()
    }
}

/// Arena-based forest addressed by node id.
///
/// Nodes live in a generational arena; `slots` maps a node id to its arena
/// index. Removing a node from the arena removes it from the active
/// collection for good: the stale index never resolves again, so a deleted
/// id cannot be revisited.
#[derive(Debug, Clone, Default)]
pub struct ForestArena {
    /// Arena storage for all active nodes
    arena: Arena<ForestNode>,
    /// Arena index per node id, in id order
    slots: Vec<Index>,
}

impl ForestArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Inserts the next node; ids are handed out sequentially from zero.
    ///
    /// The caller wires both directions of the relation: `parent` is stored
    /// as given and `children` must list exactly the nodes pointing here.
    #[instrument(level = "trace", skip(self, children))]
    pub fn insert_node(&mut self, parent: Option<usize>, children: Vec<usize>) -> usize {
        let id = self.slots.len();
        let node = ForestNode {
            id,
            parent,
            children,
            covered: false,
        };
        let idx = self.arena.insert(node);
        self.slots.push(idx);
        id
    }

    pub fn get_node(&self, id: usize) -> Option<&ForestNode> {
        self.slots.get(id).and_then(|&idx| self.arena.get(idx))
    }

    pub fn get_node_mut(&mut self, id: usize) -> Option<&mut ForestNode> {
        let idx = *self.slots.get(id)?;
        self.arena.get_mut(idx)
    }

    pub fn contains(&self, id: usize) -> bool {
        self.get_node(id).is_some()
    }

    /// Number of active nodes.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Number of nodes ever inserted, deleted ones included.
    pub fn node_count(&self) -> usize {
        self.slots.len()
    }

    /// Active node ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.slots.len()).filter(move |&id| self.contains(id))
    }

    /// Active root ids in ascending order.
    pub fn roots(&self) -> Vec<usize> {
        self.ids()
            .filter(|&id| self.get_node(id).is_some_and(ForestNode::is_root))
            .collect()
    }

    /// Not a leaf, and every child is a leaf.
    pub fn is_young_parent(&self, id: usize) -> bool {
        match self.get_node(id) {
            Some(node) if !node.is_leaf() => node
                .children
                .iter()
                .all(|&child| self.get_node(child).is_some_and(ForestNode::is_leaf)),
            _ => false,
        }
    }

    /// Marks a node as dominated. Returns false if the node is not active.
    #[instrument(level = "trace", skip(self))]
    pub fn mark_covered(&mut self, id: usize) -> bool {
        match self.get_node_mut(id) {
            Some(node) => {
                node.covered = true;
                true
            }
            None => false,
        }
    }

    /// Removes a node together with its whole subtree.
    ///
    /// The node is detached from its parent's children first. Deletion walks
    /// an explicit stack, so deep skewed trees cannot exhaust the call stack.
    /// Returns the removed ids in removal order; empty if `id` is not active.
    #[instrument(level = "trace", skip(self))]
    pub fn remove_subtree(&mut self, id: usize) -> Vec<usize> {
        let Some(parent) = self.get_node(id).map(|node| node.parent) else {
            return Vec::new();
        };
        if let Some(parent_node) = parent.and_then(|p| self.get_node_mut(p)) {
            parent_node.children.retain(|&child| child != id);
        }

        let mut removed = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.arena.remove(self.slots[current]) {
                stack.extend(node.children.iter().rev());
                removed.push(current);
            }
        }
        removed
    }

    pub fn iter(&self) -> ForestIterator<'_> {
        ForestIterator::new(self)
    }

    /// Node count of the longest root-to-leaf path over all trees.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(usize, usize)> = self.roots().into_iter().map(|r| (r, 1)).collect();
        while let Some((id, level)) = stack.pop() {
            deepest = deepest.max(level);
            if let Some(node) = self.get_node(id) {
                stack.extend(node.children.iter().map(|&child| (child, level + 1)));
            }
        }
        deepest
    }

    /// Collects the ids of all active leaf nodes in ascending order.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_nodes(&self) -> Vec<usize> {
        self.ids()
            .filter(|&id| self.get_node(id).is_some_and(ForestNode::is_leaf))
            .collect()
    }
}

/// Pre-order traversal over every tree, roots in ascending id order.
pub struct ForestIterator<'a> {
    forest: &'a ForestArena,
    stack: Vec<usize>,
}

impl<'a> ForestIterator<'a> {
    fn new(forest: &'a ForestArena) -> Self {
        let mut stack = forest.roots();
        stack.reverse();
        Self { forest, stack }
    }
}

impl<'a> Iterator for ForestIterator<'a> {
    type Item = &'a ForestNode;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.stack.pop() {
            if let Some(node) = self.forest.get_node(current) {
                // Push children in reverse order for left-to-right traversal
                self.stack.extend(node.children.iter().rev());
                return Some(node);
            }
        }
        None
    }
}
