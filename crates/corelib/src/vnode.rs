//! Virtual node abstractions.
//!
//! # Virtual Nodes (VNodes) Concept
//!
//! Virtual nodes are a technique to improve load distribution in consistent hashing.
//! Instead of each physical node having a single position on the ring, each node has
//! multiple positions (virtual nodes). This provides:
//!
//! 1. **Better Load Distribution**: More positions = smoother distribution of keys
//! 2. **Gradual Rebalancing**: When nodes join/leave, only a fraction of keys move
//! 3. **Fault Tolerance**: Failure of one node spreads its keys over many survivors
//!
//! # Performance Characteristics
//!
//! - **Memory**: O(R) per physical node, where R = replica count
//! - **Lookup**: O(log n) where n = total vnodes
//! - **Rebalancing**: roughly k/N keys move when one of N nodes joins/leaves
//!
//! The ring defaults to 150 vnodes per node, which keeps per-node load within
//! a few tens of percent of the even split for small clusters.

use std::fmt;
use std::sync::Arc;

use crate::partitioner::Partitioner;

/// Separator between the node name and the replica index in derived vnode keys.
pub const VNODE_SEPARATOR: char = '#';

/// Build the key that is hashed to place replica `index` of `node`.
///
/// Format: `"{node}#{index}"`.
pub fn vnode_key(node: &str, index: usize) -> String {
    format!("{}{}{}", node, VNODE_SEPARATOR, index)
}

/// A virtual node on the hash ring.
///
/// Represents a single position owned by a physical node. Each physical
/// node has `replicas` virtual nodes distributed around the ring.
///
/// # Invariants
///
/// - Within one ring, no two vnodes share a token (collisions are shifted
///   away at insertion time)
/// - Every `VirtualNode` belongs to exactly one physical node
/// - Ordering is by token first, so a sorted `Vec<VirtualNode>` is the ring
///
/// # Example
///
/// ```rust
/// use corelib::partitioner::Sha256Partitioner;
/// use corelib::VirtualNode;
///
/// let vnode = VirtualNode::from_index("cache-1", 0, &Sha256Partitioner);
/// assert_eq!(vnode.node(), "cache-1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VirtualNode {
    /// Position on the ring.
    pub token: u64,

    /// The physical node that owns this virtual node.
    ///
    /// Shared between all vnodes of the same physical node and with the
    /// membership set, so adding a node allocates its name once.
    pub node: Arc<str>,
}

impl VirtualNode {
    /// Create a new virtual node.
    #[inline]
    pub fn new(token: u64, node: Arc<str>) -> Self {
        Self { token, node }
    }

    /// Create a virtual node from a node name and vnode index.
    ///
    /// The token is the partitioner's hash of `"node#index"`.
    ///
    /// # Performance
    /// - **Time**: O(k) where k = length of the formatted key, plus hashing
    /// - **Space**: O(k) temporary for the formatted key
    pub fn from_index(
        node: impl Into<Arc<str>>,
        index: usize,
        partitioner: &dyn Partitioner,
    ) -> Self {
        let node: Arc<str> = node.into();
        let token = partitioner.partition(&vnode_key(&node, index));
        Self::new(token, node)
    }

    /// Get the token position.
    #[inline]
    pub fn token(&self) -> u64 {
        self.token
    }

    /// Get the owning node name.
    #[inline]
    pub fn node(&self) -> &str {
        &self.node
    }

    /// Calculate the clockwise distance to another virtual node.
    ///
    /// Wraps past `u64::MAX` back to zero, so the distance from a vnode to
    /// one with a smaller token goes "the long way round".
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use corelib::VirtualNode;
    ///
    /// let a = VirtualNode::new(u64::MAX - 1, Arc::from("a"));
    /// let b = VirtualNode::new(3, Arc::from("b"));
    /// assert_eq!(a.distance_to(&b), 5);
    /// ```
    #[inline]
    pub fn distance_to(&self, other: &Self) -> u64 {
        other.token.wrapping_sub(self.token)
    }
}

impl fmt::Display for VirtualNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VNode(token={:016x}, node={})", self.token, self.node)
    }
}
