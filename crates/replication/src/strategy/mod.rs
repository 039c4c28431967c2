//! Replication strategy abstractions.
//!
//! Replication strategies determine how many replicas to create and where
//! to place them on the ring.
//!
//! - **SimpleStrategy**: N replicas placed on consecutive distinct nodes clockwise

pub mod simple;

pub use simple::SimpleStrategy;

use corelib::HashRing;

use crate::error::Result;
use crate::placement::ReplicaPlacement;

/// Trait for replication strategies.
///
/// A replication strategy determines:
/// 1. How many replicas to create for a key
/// 2. Which nodes should hold those replicas, primary first
///
/// # Thread Safety
///
/// Implementations must be thread-safe (Send + Sync) as they may be
/// shared across threads.
pub trait ReplicationStrategy: Send + Sync + 'static {
    /// Get the number of copies this strategy creates (including the primary).
    fn replication_factor(&self) -> usize;

    /// Find replica nodes for a given key.
    ///
    /// # Errors
    /// Propagates ring lookup failures (empty key, empty ring).
    fn replicas_for_key(&self, ring: &HashRing, key: &str) -> Result<ReplicaPlacement>;

    /// Get the strategy name (for logging/debugging).
    fn name(&self) -> &'static str;
}
