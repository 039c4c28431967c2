//! Ring configuration.
//!
//! `RingConfig` is plain data so it can be embedded in an application's own
//! configuration file:
//!
//! ```rust
//! use corelib::config::RingConfig;
//! use corelib::partitioner::PartitionerKind;
//!
//! let config: RingConfig = serde_json::from_str(r#"{ "replicas": 64 }"#).unwrap();
//! assert_eq!(config.replicas, 64);
//! assert_eq!(config.partitioner, PartitionerKind::Sha256);
//! ```

use serde::{Deserialize, Serialize};

use crate::partitioner::PartitionerKind;

/// Virtual nodes per physical node when none (or zero) is configured.
pub const DEFAULT_REPLICAS: usize = 150;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingConfig {
    /// Virtual nodes per physical node. Zero means [`DEFAULT_REPLICAS`].
    pub replicas: usize,
    /// Which built-in partitioner places keys and vnodes.
    pub partitioner: PartitionerKind,
}

impl RingConfig {
    pub fn new(replicas: usize) -> Self {
        Self {
            replicas,
            ..Self::default()
        }
    }

    pub fn with_partitioner(mut self, partitioner: PartitionerKind) -> Self {
        self.partitioner = partitioner;
        self
    }

    /// The replica count the ring will actually use.
    pub fn effective_replicas(&self) -> usize {
        if self.replicas == 0 {
            DEFAULT_REPLICAS
        } else {
            self.replicas
        }
    }
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            replicas: DEFAULT_REPLICAS,
            partitioner: PartitionerKind::default(),
        }
    }
}
