//! Physical node membership.

use std::collections::HashSet;
use std::sync::Arc;

/// The set of physical nodes currently on the ring.
///
/// Names are shared (`Arc<str>`) with the vnodes that carry them.
#[derive(Debug, Default, Clone)]
pub(crate) struct Membership {
    nodes: HashSet<Arc<str>>,
}

impl Membership {
    pub(crate) fn contains(&self, node: &str) -> bool {
        self.nodes.contains(node)
    }

    /// Returns `false` if the node was already present.
    pub(crate) fn insert(&mut self, node: Arc<str>) -> bool {
        self.nodes.insert(node)
    }

    /// Returns `false` if the node was absent.
    pub(crate) fn remove(&mut self, node: &str) -> bool {
        self.nodes.remove(node)
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All members, lexicographically sorted.
    pub(crate) fn sorted(&self) -> Vec<String> {
        let mut nodes: Vec<String> = self.nodes.iter().map(|n| n.to_string()).collect();
        nodes.sort_unstable();
        nodes
    }
}
