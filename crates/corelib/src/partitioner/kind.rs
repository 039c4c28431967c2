//! Config-selectable partitioner kinds.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::partitioner::{
    Blake3Partitioner, Partitioner, Sha256Partitioner, SipPartitioner, Xxh3Partitioner,
};

/// Names the built-in partitioners so they can be chosen from configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartitionerKind {
    #[default]
    Sha256,
    Sip,
    Xxh3,
    Blake3,
}

impl PartitionerKind {
    /// Instantiate the partitioner this kind names.
    pub fn build(self) -> Arc<dyn Partitioner> {
        match self {
            PartitionerKind::Sha256 => Arc::new(Sha256Partitioner),
            PartitionerKind::Sip => Arc::new(SipPartitioner),
            PartitionerKind::Xxh3 => Arc::new(Xxh3Partitioner),
            PartitionerKind::Blake3 => Arc::new(Blake3Partitioner),
        }
    }
}

impl fmt::Display for PartitionerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PartitionerKind::Sha256 => "sha256",
            PartitionerKind::Sip => "sip",
            PartitionerKind::Xxh3 => "xxh3",
            PartitionerKind::Blake3 => "blake3",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_names() {
        assert_eq!(PartitionerKind::Sha256.build().name(), "Sha256Partitioner");
        assert_eq!(PartitionerKind::Sip.build().name(), "SipPartitioner");
        assert_eq!(PartitionerKind::Xxh3.build().name(), "Xxh3Partitioner");
        assert_eq!(PartitionerKind::Blake3.build().name(), "Blake3Partitioner");
    }

    #[test]
    fn test_kinds_disagree() {
        let key = "session:abc123";
        let sha = PartitionerKind::Sha256.build().partition(key);
        let sip = PartitionerKind::Sip.build().partition(key);
        let xxh = PartitionerKind::Xxh3.build().partition(key);
        assert_ne!(sha, sip);
        assert_ne!(sip, xxh);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&PartitionerKind::Xxh3).unwrap(), "\"xxh3\"");
        let kind: PartitionerKind = serde_json::from_str("\"blake3\"").unwrap();
        assert_eq!(kind, PartitionerKind::Blake3);
    }
}
