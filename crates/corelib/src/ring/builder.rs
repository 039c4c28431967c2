//! Fluent construction of a [`HashRing`].

use std::sync::Arc;

use crate::config::DEFAULT_REPLICAS;
use crate::partitioner::{Partitioner, PartitionerKind};
use crate::ring::ring::{HashRing, InitError};

/// Builder for [`HashRing`].
///
/// ```rust
/// use corelib::partitioner::PartitionerKind;
/// use corelib::RingBuilder;
///
/// let ring = RingBuilder::new()
///     .with_replicas(64)
///     .with_partitioner_kind(PartitionerKind::Xxh3)
///     .add_node("shard-a")
///     .add_node("shard-b")
///     .build()
///     .unwrap();
///
/// assert_eq!(ring.virtual_node_count(), 128);
/// ```
pub struct RingBuilder {
    replicas: usize,
    partitioner: Arc<dyn Partitioner>,
    nodes: Vec<String>,
}

impl RingBuilder {
    pub fn new() -> Self {
        Self {
            replicas: DEFAULT_REPLICAS,
            partitioner: PartitionerKind::default().build(),
            nodes: Vec::new(),
        }
    }

    /// Virtual nodes per physical node. Zero means the default.
    pub fn with_replicas(mut self, replicas: usize) -> Self {
        self.replicas = replicas;
        self
    }

    pub fn with_partitioner<P: Partitioner>(mut self, partitioner: P) -> Self {
        self.partitioner = Arc::new(partitioner);
        self
    }

    pub fn with_partitioner_kind(mut self, kind: PartitionerKind) -> Self {
        self.partitioner = kind.build();
        self
    }

    pub fn add_node(mut self, node: impl Into<String>) -> Self {
        self.nodes.push(node.into());
        self
    }

    pub fn add_nodes<I, S>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nodes.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Build the ring, adding the queued nodes in order.
    ///
    /// On the first rejected node (empty or duplicate name) the error
    /// carries the ring with the nodes queued before it.
    pub fn build(self) -> Result<HashRing, InitError> {
        HashRing::with_partitioner(self.replicas, self.partitioner).populated(&self.nodes)
    }
}

impl Default for RingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_builder_default() {
        let ring = RingBuilder::new()
            .add_node("node1")
            .add_node("node2")
            .build()
            .unwrap();

        assert_eq!(ring.node_count(), 2);
        assert_eq!(ring.virtual_node_count(), 300);
    }

    #[test]
    fn test_builder_duplicate_keeps_earlier_nodes() {
        let result = RingBuilder::new()
            .with_replicas(4)
            .add_nodes(["a", "b", "a"])
            .build();
        let (ring, error) = result.unwrap_err().into_parts();
        assert_eq!(error, Error::NodeAlreadyExists("a".into()));
        assert_eq!(ring.nodes(), vec!["a", "b"]);
        assert_eq!(ring.virtual_node_count(), 8);
    }

    #[test]
    fn test_builder_partitioner_kind() {
        let ring = RingBuilder::new()
            .with_partitioner_kind(PartitionerKind::Blake3)
            .build()
            .unwrap();
        assert_eq!(ring.partitioner_name(), "Blake3Partitioner");
    }
}
