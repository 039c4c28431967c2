//! Core partitioner trait definitions.

/// A partitioner converts keys into positions on the hash ring.
///
/// # Contract
///
/// - **Deterministic**: the same key must produce the same position for the
///   lifetime of the process.
/// - **Uniform**: outputs should spread approximately evenly over the full
///   `u64` space. Poor uniformity skews load but never breaks the ring.
///
/// Partitioners are stateless and thread-safe, allowing concurrent
/// lookups without synchronization overhead.
pub trait Partitioner: Send + Sync + 'static {
    /// Converts a key into a ring position.
    fn partition(&self, key: &str) -> u64;

    /// Returns the name of this partitioner.
    fn name(&self) -> &'static str;
}
