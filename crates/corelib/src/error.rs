//! Error types for the core library.

use thiserror::Error;

/// Result type alias for the core library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the core library.
///
/// Every variant is detected before the ring is mutated, so an operation
/// that returns one of these leaves the ring exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An empty string was supplied as a key or node name.
    #[error("key cannot be empty")]
    EmptyKey,
    /// A lookup was attempted against a ring with zero members.
    #[error("no nodes available in the hash ring")]
    NoNodesAvailable,
    /// The node is already a member of the ring.
    #[error("node {0} already exists")]
    NodeAlreadyExists(String),
    /// The node is not a member of the ring.
    #[error("node {0} not found in the hash ring")]
    NodeNotFound(String),
    /// `get_nodes` was called with a count of zero.
    #[error("count must be positive")]
    InvalidCount,
}
