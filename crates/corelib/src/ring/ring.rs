//! Thread-safe consistent hash ring.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace, warn};

use crate::config::RingConfig;
use crate::error::{Error, Result};
use crate::partitioner::Partitioner;
use crate::ring::builder::RingBuilder;
use crate::ring::index::VirtualNodeIndex;
use crate::ring::membership::Membership;
use crate::ring::stats::RingStats;
use crate::vnode::VirtualNode;

/// An initial node list was rejected part way through.
///
/// `ring` holds every node added before the rejected one.
#[derive(Debug, thiserror::Error)]
#[error("initial node rejected: {error}")]
pub struct InitError {
    pub ring: HashRing,
    pub error: Error,
}

impl InitError {
    pub fn into_parts(self) -> (HashRing, Error) {
        (self.ring, self.error)
    }
}

/// Everything a writer must update together.
#[derive(Debug, Default)]
struct RingState {
    index: VirtualNodeIndex,
    members: Membership,
}

/// A consistent hash ring with virtual nodes.
///
/// Maps string keys to physical node names. Each physical node owns
/// `replicas` positions on a `u64` circle; a key belongs to the first
/// position at or after its hash, wrapping around at the end.
///
/// # Concurrency
///
/// The ring is `Send + Sync` and meant to be shared behind an `Arc`. One
/// reader/writer lock covers the whole index: lookups take the shared side
/// and run in parallel, `add_node`/`remove_node` take the exclusive side and
/// publish a fully sorted, consistent index before releasing it.
///
/// # Example
///
/// ```rust
/// use corelib::HashRing;
///
/// let ring = HashRing::new();
/// ring.add_node("cache-1:11211").unwrap();
/// ring.add_node("cache-2:11211").unwrap();
///
/// let owner = ring.get_node("user:alice").unwrap();
/// assert_eq!(owner, ring.get_node("user:alice").unwrap());
///
/// let replicas = ring.get_nodes("user:alice", 2).unwrap();
/// assert_eq!(replicas[0], owner);
/// assert_eq!(replicas.len(), 2);
/// ```
pub struct HashRing {
    partitioner: Arc<dyn Partitioner>,
    replicas: usize,
    state: RwLock<RingState>,
}

impl HashRing {
    /// Create an empty ring with 150 vnodes per node and the SHA-256 partitioner.
    pub fn new() -> Self {
        Self::with_config(RingConfig::default())
    }

    /// Create an empty ring from configuration.
    pub fn with_config(config: RingConfig) -> Self {
        Self::with_partitioner(config.effective_replicas(), config.partitioner.build())
    }

    /// Create an empty ring with an explicit partitioner.
    ///
    /// A `replicas` of zero falls back to [`DEFAULT_REPLICAS`](crate::DEFAULT_REPLICAS).
    pub fn with_partitioner(replicas: usize, partitioner: Arc<dyn Partitioner>) -> Self {
        let replicas = RingConfig::new(replicas).effective_replicas();
        Self {
            partitioner,
            replicas,
            state: RwLock::new(RingState::default()),
        }
    }

    /// Create a ring and add `nodes` in order.
    ///
    /// Stops at the first rejected node. The error carries the ring with
    /// every node added before it; nothing is rolled back.
    ///
    /// ```rust
    /// use corelib::{Error, HashRing, RingConfig};
    ///
    /// let err = HashRing::with_nodes(RingConfig::new(8), ["a", "b", "a", "c"]).unwrap_err();
    /// assert_eq!(err.error, Error::NodeAlreadyExists("a".into()));
    /// assert_eq!(err.ring.nodes(), vec!["a", "b"]);
    /// ```
    pub fn with_nodes<I, S>(config: RingConfig, nodes: I) -> std::result::Result<Self, InitError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(config).populated(nodes)
    }

    /// Add `nodes` to a freshly built ring, handing the ring back either way.
    pub(crate) fn populated<I, S>(self, nodes: I) -> std::result::Result<Self, InitError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match self.add_nodes(nodes) {
            Ok(()) => Ok(self),
            Err(error) => Err(InitError { ring: self, error }),
        }
    }

    /// Start a [`RingBuilder`].
    pub fn builder() -> RingBuilder {
        RingBuilder::new()
    }

    /// Add a physical node and its virtual nodes.
    ///
    /// # Errors
    /// - [`Error::EmptyKey`] if `node` is empty
    /// - [`Error::NodeAlreadyExists`] if `node` is already a member
    ///
    /// On error the ring is unchanged.
    pub fn add_node(&self, node: &str) -> Result<()> {
        if node.is_empty() {
            return Err(Error::EmptyKey);
        }

        let mut state = self.state.write();
        if state.members.contains(node) {
            return Err(Error::NodeAlreadyExists(node.to_string()));
        }

        let name: Arc<str> = Arc::from(node);
        let shifts = state
            .index
            .insert(&name, self.replicas, self.partitioner.as_ref());
        state.members.insert(name);

        if shifts > 0 {
            warn!(node, shifts, "virtual node positions collided and were shifted forward");
        }
        debug!(
            node,
            replicas = self.replicas,
            vnodes = state.index.len(),
            "added node to ring"
        );
        Ok(())
    }

    /// Add several nodes in order, stopping at the first error.
    ///
    /// Nodes added before the failing one stay on the ring.
    pub fn add_nodes<I, S>(&self, nodes: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for node in nodes {
            self.add_node(node.as_ref())?;
        }
        Ok(())
    }

    /// Remove a physical node and all of its virtual nodes.
    ///
    /// Keys it owned move to the next surviving node clockwise; all other
    /// keys keep their owner.
    ///
    /// # Errors
    /// - [`Error::EmptyKey`] if `node` is empty
    /// - [`Error::NodeNotFound`] if `node` is not a member
    pub fn remove_node(&self, node: &str) -> Result<()> {
        if node.is_empty() {
            return Err(Error::EmptyKey);
        }

        let mut state = self.state.write();
        if !state.members.remove(node) {
            return Err(Error::NodeNotFound(node.to_string()));
        }
        let removed = state.index.remove(node);

        debug!(node, removed, vnodes = state.index.len(), "removed node from ring");
        Ok(())
    }

    /// Find the node responsible for `key`.
    ///
    /// # Errors
    /// - [`Error::EmptyKey`] if `key` is empty
    /// - [`Error::NoNodesAvailable`] if the ring has no members
    ///
    /// # Performance
    /// O(log n) in the number of virtual nodes.
    pub fn get_node(&self, key: &str) -> Result<String> {
        if key.is_empty() {
            return Err(Error::EmptyKey);
        }

        let position = self.partitioner.partition(key);
        let state = self.state.read();
        let vnode = state
            .index
            .owner_of(position)
            .ok_or(Error::NoNodesAvailable)?;

        trace!(key, position, token = vnode.token, node = vnode.node(), "resolved key");
        Ok(vnode.node().to_string())
    }

    /// Find up to `count` distinct nodes for `key`, in clockwise order.
    ///
    /// The first element is always [`get_node`](Self::get_node)'s answer, so
    /// callers can treat the result as a primary-then-replicas priority list.
    /// `count` is clamped to the number of members.
    ///
    /// # Errors
    /// - [`Error::EmptyKey`] if `key` is empty
    /// - [`Error::InvalidCount`] if `count` is zero
    /// - [`Error::NoNodesAvailable`] if the ring has no members
    pub fn get_nodes(&self, key: &str, count: usize) -> Result<Vec<String>> {
        if key.is_empty() {
            return Err(Error::EmptyKey);
        }
        if count == 0 {
            return Err(Error::InvalidCount);
        }

        let position = self.partitioner.partition(key);
        let state = self.state.read();
        if state.index.is_empty() {
            return Err(Error::NoNodesAvailable);
        }

        let count = count.min(state.members.len());
        Ok(state.index.distinct_owners(position, count))
    }

    /// All physical nodes, lexicographically sorted.
    pub fn nodes(&self) -> Vec<String> {
        self.state.read().members.sorted()
    }

    pub fn contains_node(&self, node: &str) -> bool {
        self.state.read().members.contains(node)
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().members.is_empty()
    }

    /// Number of physical nodes.
    pub fn node_count(&self) -> usize {
        self.state.read().members.len()
    }

    /// Number of positions on the ring.
    pub fn virtual_node_count(&self) -> usize {
        self.state.read().index.len()
    }

    /// Configured vnodes per physical node.
    pub fn replicas(&self) -> usize {
        self.replicas
    }

    pub fn partitioner_name(&self) -> &'static str {
        self.partitioner.name()
    }

    /// Consistent snapshot of the ring's counters.
    pub fn stats(&self) -> RingStats {
        let state = self.state.read();
        RingStats::new(state.members.len(), state.index.len(), self.replicas)
    }

    /// Sorted copy of every virtual node (for debugging and analysis).
    pub fn vnodes(&self) -> Vec<VirtualNode> {
        self.state.read().index.vnodes().to_vec()
    }

    /// Fraction of the hash space owned by each physical node.
    ///
    /// With enough vnodes every share approaches `1 / node_count()`.
    pub fn ownership(&self) -> BTreeMap<String, f64> {
        self.state.read().index.ownership()
    }
}

impl Default for HashRing {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HashRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("HashRing")
            .field("partitioner", &self.partitioner.name())
            .field("replicas", &self.replicas)
            .field("nodes", &state.members.len())
            .field("vnodes", &state.index.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partitioner::FnPartitioner;

    #[test]
    fn test_defaults() {
        let ring = HashRing::new();
        assert_eq!(ring.replicas(), 150);
        assert_eq!(ring.partitioner_name(), "Sha256Partitioner");
        assert!(ring.is_empty());
    }

    #[test]
    fn test_zero_replicas_falls_back() {
        let ring = HashRing::with_config(RingConfig::new(0));
        assert_eq!(ring.replicas(), 150);
    }

    #[test]
    fn test_validation_precedes_lookup() {
        let ring = HashRing::new();
        assert_eq!(ring.get_node(""), Err(Error::EmptyKey));
        assert_eq!(ring.get_nodes("", 1), Err(Error::EmptyKey));
        assert_eq!(ring.get_nodes("k", 0), Err(Error::InvalidCount));
        assert_eq!(ring.get_node("k"), Err(Error::NoNodesAvailable));
        assert_eq!(ring.get_nodes("k", 1), Err(Error::NoNodesAvailable));
    }

    #[test]
    fn test_collision_keeps_replica_counts() {
        let ring = HashRing::with_partitioner(4, Arc::new(FnPartitioner::new(|_: &str| 7)));
        ring.add_node("a").unwrap();
        ring.add_node("b").unwrap();

        let vnodes = ring.vnodes();
        assert_eq!(vnodes.len(), 8);
        assert!(vnodes.windows(2).all(|w| w[0].token < w[1].token));
        assert_eq!(vnodes.iter().filter(|v| v.node() == "a").count(), 4);
        assert_eq!(vnodes.iter().filter(|v| v.node() == "b").count(), 4);

        // Every key hashes to 7, which "a" claimed first.
        assert_eq!(ring.get_node("anything").unwrap(), "a");
        ring.remove_node("a").unwrap();
        assert_eq!(ring.get_node("anything").unwrap(), "b");
    }

    #[test]
    fn test_debug_output() {
        let ring = HashRing::builder().with_replicas(2).add_node("x").build().unwrap();
        let debug = format!("{:?}", ring);
        assert!(debug.contains("Sha256Partitioner"));
        assert!(debug.contains("vnodes: 2"));
    }
}
