//! The result of placing a key's replicas.

/// Nodes chosen to hold one key, primary first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplicaPlacement {
    /// Owner of the key (first node clockwise).
    pub primary: String,
    /// Further distinct nodes, in clockwise order.
    pub replicas: Vec<String>,
    /// Number of copies the strategy asked for.
    pub requested: usize,
}

impl ReplicaPlacement {
    /// Split a clockwise owner list into primary and replicas.
    ///
    /// Returns `None` for an empty list.
    pub fn from_owners(mut owners: Vec<String>, requested: usize) -> Option<Self> {
        if owners.is_empty() {
            return None;
        }
        let replicas = owners.split_off(1);
        let primary = owners.pop()?;
        Some(Self {
            primary,
            replicas,
            requested,
        })
    }

    /// All nodes, primary first.
    pub fn all(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary.as_str()).chain(self.replicas.iter().map(String::as_str))
    }

    /// Number of nodes actually placed, primary included.
    pub fn node_count(&self) -> usize {
        1 + self.replicas.len()
    }

    /// True when the ring had fewer members than the requested copy count.
    pub fn is_degraded(&self) -> bool {
        self.node_count() < self.requested
    }

    pub fn contains(&self, node: &str) -> bool {
        self.all().any(|n| n == node)
    }
}
