//! XXH3 partitioner.

use xxhash_rust::xxh3::xxh3_64;

use crate::partitioner::traits::Partitioner;

/// XXH3-64, the fastest of the built-in partitioners.
#[derive(Clone, Copy, Debug, Default)]
pub struct Xxh3Partitioner;

impl Partitioner for Xxh3Partitioner {
    fn partition(&self, key: &str) -> u64 {
        xxh3_64(key.as_bytes())
    }

    fn name(&self) -> &'static str {
        "Xxh3Partitioner"
    }
}
