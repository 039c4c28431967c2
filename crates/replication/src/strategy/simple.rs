//! Simple replication strategy.
//!
//! Places N replicas on consecutive distinct nodes around the ring
//! (clockwise from the primary). This works well for:
//!
//! - Small clusters
//! - Single data center deployments
//! - When network topology doesn't matter
//!
//! # Algorithm
//!
//! 1. Find the key's position and the first vnode at or after it (the primary)
//! 2. Continue clockwise, skipping vnodes of nodes already chosen
//! 3. Stop at N distinct nodes or after one full lap
//!
//! The walk is done by [`HashRing::get_nodes`] under a single read lock, so
//! the placement always reflects one consistent ring state.
//!
//! # Limitations
//!
//! - Doesn't consider data center/rack placement
//! - May place replicas on nodes in the same failure domain

use corelib::HashRing;
use tracing::trace;

use crate::error::{ReplicationError, Result};
use crate::placement::ReplicaPlacement;
use crate::strategy::ReplicationStrategy;

/// Simple replication strategy: N copies on consecutive distinct nodes.
///
/// # Example
///
/// ```rust
/// use corelib::HashRing;
/// use replication::{ReplicationStrategy, SimpleStrategy};
///
/// let ring = HashRing::new();
/// for node in ["node1", "node2", "node3"] {
///     ring.add_node(node).unwrap();
/// }
///
/// let strategy = SimpleStrategy::new(3).unwrap();
/// let placement = strategy.replicas_for_key(&ring, "my-key").unwrap();
/// assert_eq!(placement.node_count(), 3);
/// assert_eq!(placement.primary, ring.get_node("my-key").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct SimpleStrategy {
    /// Number of copies to create (including primary).
    replication_factor: usize,
}

impl SimpleStrategy {
    /// Create a new simple strategy with the given replication factor.
    ///
    /// # Arguments
    /// * `replication_factor` - Number of copies (typically 1-5)
    ///   - 1: No replication (single copy)
    ///   - 3: Standard (primary + 2 replicas)
    ///   - 5: High availability (primary + 4 replicas)
    ///
    /// # Errors
    /// [`ReplicationError::InvalidFactor`] when `replication_factor` is zero.
    pub fn new(replication_factor: usize) -> Result<Self> {
        if replication_factor == 0 {
            return Err(ReplicationError::InvalidFactor);
        }
        Ok(Self { replication_factor })
    }
}

impl Default for SimpleStrategy {
    /// Three copies: primary plus two replicas.
    fn default() -> Self {
        Self {
            replication_factor: 3,
        }
    }
}

impl ReplicationStrategy for SimpleStrategy {
    fn replication_factor(&self) -> usize {
        self.replication_factor
    }

    fn replicas_for_key(&self, ring: &HashRing, key: &str) -> Result<ReplicaPlacement> {
        let owners = ring.get_nodes(key, self.replication_factor)?;
        trace!(key, owners = ?owners, strategy = self.name(), "placed replicas");

        // get_nodes never returns an empty list on success.
        ReplicaPlacement::from_owners(owners, self.replication_factor)
            .ok_or(ReplicationError::Ring(corelib::Error::NoNodesAvailable))
    }

    fn name(&self) -> &'static str {
        "SimpleStrategy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corelib::RingConfig;

    fn ring(nodes: &[&str]) -> HashRing {
        HashRing::with_nodes(RingConfig::new(4), nodes).unwrap()
    }

    #[test]
    fn test_simple_strategy_replication_factor() {
        let strategy = SimpleStrategy::new(3).unwrap();
        assert_eq!(strategy.replication_factor(), 3);
        assert_eq!(SimpleStrategy::default().replication_factor(), 3);
        assert_eq!(
            SimpleStrategy::new(0).unwrap_err(),
            ReplicationError::InvalidFactor
        );
    }

    #[test]
    fn test_simple_strategy_replicas() {
        let ring = ring(&["node1", "node2", "node3"]);
        let strategy = SimpleStrategy::new(3).unwrap();
        let placement = strategy.replicas_for_key(&ring, "test-key").unwrap();

        assert_eq!(placement.node_count(), 3);
        assert_eq!(placement.primary, ring.get_node("test-key").unwrap());
        // Should have unique nodes
        let unique: std::collections::HashSet<_> = placement.all().collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn test_matches_ring_order() {
        let ring = ring(&["a", "b", "c", "d", "e"]);
        let strategy = SimpleStrategy::new(2).unwrap();
        for key in ["k1", "k2", "k3"] {
            let placement = strategy.replicas_for_key(&ring, key).unwrap();
            let expected = ring.get_nodes(key, 2).unwrap();
            assert_eq!(placement.all().collect::<Vec<_>>(), expected);
        }
    }

    #[test]
    fn test_degraded_on_small_ring() {
        let ring = ring(&["only"]);
        let placement = SimpleStrategy::default()
            .replicas_for_key(&ring, "key")
            .unwrap();
        assert_eq!(placement.primary, "only");
        assert!(placement.is_degraded());
    }

    #[test]
    fn test_ring_errors_propagate() {
        let ring = HashRing::new();
        let strategy = SimpleStrategy::default();
        assert_eq!(
            strategy.replicas_for_key(&ring, "key").unwrap_err(),
            ReplicationError::Ring(corelib::Error::NoNodesAvailable)
        );
        ring.add_node("n").unwrap();
        assert_eq!(
            strategy.replicas_for_key(&ring, "").unwrap_err(),
            ReplicationError::Ring(corelib::Error::EmptyKey)
        );
    }
}
