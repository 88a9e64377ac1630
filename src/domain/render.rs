//! Text rendering of forests via `termtree`.

use termtree::Tree;
use tracing::instrument;

use crate::domain::arena::ForestArena;
use crate::domain::entities::DominatingSet;

pub trait ForestRender {
    /// One tree per root; members of `marked` are suffixed with `*`.
    fn to_trees(&self, marked: Option<&DominatingSet>) -> Vec<Tree<String>>;
}

impl ForestRender for ForestArena {
    #[instrument(level = "debug", skip_all)]
    fn to_trees(&self, marked: Option<&DominatingSet>) -> Vec<Tree<String>> {
        let label = |id: usize| match marked {
            Some(set) if set.contains(id) => format!("{id}*"),
            _ => id.to_string(),
        };

        // Post-order assembly so each subtree is complete before it is attached.
        let mut trees = Vec::new();
        for root in self.roots() {
            let mut finished: Vec<Tree<String>> = Vec::new();
            let mut stack = vec![(root, false)];
            while let Some((id, expanded)) = stack.pop() {
                let Some(node) = self.get_node(id) else {
                    continue;
                };
                if !expanded {
                    stack.push((id, true));
                    for &child in node.children.iter().rev() {
                        stack.push((child, false));
                    }
                } else {
                    let leaves = finished.split_off(finished.len() - node.children.len());
                    finished.push(Tree::new(label(id)).with_leaves(leaves));
                }
            }
            trees.extend(finished);
        }
        trees
    }
}
