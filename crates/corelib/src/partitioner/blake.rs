//! BLAKE3 partitioner.

use crate::partitioner::be_prefix_u64;
use crate::partitioner::traits::Partitioner;

/// First 8 bytes of the BLAKE3 digest, big-endian.
#[derive(Clone, Copy, Debug, Default)]
pub struct Blake3Partitioner;

impl Partitioner for Blake3Partitioner {
    fn partition(&self, key: &str) -> u64 {
        be_prefix_u64(blake3::hash(key.as_bytes()).as_bytes())
    }

    fn name(&self) -> &'static str {
        "Blake3Partitioner"
    }
}
