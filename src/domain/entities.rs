//! Domain entities: core data structures

use std::collections::BTreeSet;
use std::fmt;

use itertools::Itertools;

/// Node ids forming a dominating set, kept in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DominatingSet {
    members: BTreeSet<usize>,
}

impl DominatingSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: usize) -> bool {
        self.members.insert(id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, id: usize) -> bool {
        self.members.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.members.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }

    /// Nodes of the original forest that are neither members nor adjacent to one.
    ///
    /// Adjacency is taken from `parents` directly, so the check is independent
    /// of how the set was computed. Out-of-range parents are ignored.
    pub fn undominated(&self, parents: &[Option<usize>]) -> Vec<usize> {
        let mut dominated = vec![false; parents.len()];
        for (node, parent) in parents.iter().enumerate() {
            if !self.contains(node) {
                continue;
            }
            dominated[node] = true;
            if let Some(slot) = parent.and_then(|p| dominated.get_mut(p)) {
                *slot = true;
            }
        }
        for (node, parent) in parents.iter().enumerate() {
            if parent.is_some_and(|p| self.contains(p)) {
                dominated[node] = true;
            }
        }
        dominated
            .iter()
            .enumerate()
            .filter_map(|(node, &is_dominated)| (!is_dominated).then_some(node))
            .collect()
    }

    pub fn is_dominating(&self, parents: &[Option<usize>]) -> bool {
        self.undominated(parents).is_empty()
    }
}

impl FromIterator<usize> for DominatingSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for DominatingSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.members.iter().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_member_parent_when_checking_then_child_is_dominated() {
        // 0 - 1 - 2
        let parents = [None, Some(0), Some(1)];
        let set: DominatingSet = [1].into_iter().collect();

        assert!(set.is_dominating(&parents));
    }

    #[test]
    fn given_missing_neighbour_when_checking_then_reports_undominated() {
        // 0 - 1 - 2 - 3
        let parents = [None, Some(0), Some(1), Some(2)];
        let set: DominatingSet = [2].into_iter().collect();

        assert_eq!(set.undominated(&parents), vec![0]);
        assert_eq!(set.to_string(), "2");
    }
}
