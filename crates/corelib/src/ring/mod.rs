//! Consistent hash ring implementation.
//!
//! The ring manages virtual node positions and provides efficient lookup
//! operations for finding nodes responsible for keys.

mod builder;
mod index;
mod membership;
#[allow(clippy::module_inception)]
mod ring;
mod stats;

pub use builder::RingBuilder;
pub use ring::{HashRing, InitError};
pub use stats::RingStats;
