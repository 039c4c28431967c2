//! SHA-256 partitioner, the ring's default.

use sha2::{Digest, Sha256};

use crate::partitioner::be_prefix_u64;
use crate::partitioner::traits::Partitioner;

/// Positions keys at the first 8 bytes of their SHA-256 digest, read as a
/// big-endian integer.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256Partitioner;

impl Partitioner for Sha256Partitioner {
    fn partition(&self, key: &str) -> u64 {
        be_prefix_u64(&Sha256::digest(key.as_bytes()))
    }

    fn name(&self) -> &'static str {
        "Sha256Partitioner"
    }
}
