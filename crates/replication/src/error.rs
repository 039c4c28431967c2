//! Errors raised while placing replicas.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplicationError {
    /// A strategy was configured to place zero replicas.
    #[error("replication factor must be at least 1")]
    InvalidFactor,
    /// The underlying ring lookup failed.
    #[error(transparent)]
    Ring(#[from] corelib::Error),
}

pub type Result<T> = std::result::Result<T, ReplicationError>;
