//! Closure-backed partitioner.

use std::fmt;

use crate::partitioner::traits::Partitioner;

/// Adapts a plain function or closure into a [`Partitioner`].
///
/// ```rust
/// use corelib::partitioner::{FnPartitioner, Partitioner};
///
/// let p = FnPartitioner::new(|key: &str| key.len() as u64);
/// assert_eq!(p.partition("abc"), 3);
/// ```
pub struct FnPartitioner<F> {
    func: F,
}

impl<F> FnPartitioner<F>
where
    F: Fn(&str) -> u64 + Send + Sync + 'static,
{
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> Partitioner for FnPartitioner<F>
where
    F: Fn(&str) -> u64 + Send + Sync + 'static,
{
    fn partition(&self, key: &str) -> u64 {
        (self.func)(key)
    }

    fn name(&self) -> &'static str {
        "FnPartitioner"
    }
}

impl<F> fmt::Debug for FnPartitioner<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnPartitioner").finish_non_exhaustive()
    }
}
