//! Partitioner abstraction for consistent hashing.
//!
//! Partitioners are responsible for converting keys into ring positions.
//! The ring only relies on the contract documented on [`Partitioner`], so
//! any of the built-in implementations (or a caller-supplied closure via
//! [`FnPartitioner`]) can be injected at construction time.

pub mod blake;
pub mod func;
pub mod kind;
pub mod sha256;
pub mod sip;
pub mod traits;
pub mod xxh3;

pub use blake::Blake3Partitioner;
pub use func::FnPartitioner;
pub use kind::PartitionerKind;
pub use sha256::Sha256Partitioner;
pub use sip::SipPartitioner;
pub use traits::Partitioner;
pub use xxh3::Xxh3Partitioner;

/// Interpret the first 8 bytes of a digest as a big-endian `u64`.
///
/// Digests shorter than 8 bytes are zero-padded on the right.
pub(crate) fn be_prefix_u64(digest: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    let len = digest.len().min(8);
    buf[..len].copy_from_slice(&digest[..len]);
    u64::from_be_bytes(buf)
}
