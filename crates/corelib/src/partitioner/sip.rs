//! SipHash partitioner.

use std::hash::Hasher;

use siphasher::sip::SipHasher13;

use crate::partitioner::traits::Partitioner;

/// SipHash-1-3 with fixed zero keys.
///
/// Much cheaper than a cryptographic digest and stable across processes
/// because the keys never change.
#[derive(Clone, Copy, Debug, Default)]
pub struct SipPartitioner;

impl Partitioner for SipPartitioner {
    fn partition(&self, key: &str) -> u64 {
        let mut hasher = SipHasher13::new();
        hasher.write(key.as_bytes());
        hasher.finish()
    }

    fn name(&self) -> &'static str {
        "SipPartitioner"
    }
}
