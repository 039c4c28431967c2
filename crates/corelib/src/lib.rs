//! Core library for consistent hashing implementation.
//!
//! This crate provides the fundamental abstractions for consistent hashing:
//! - Partitioners that turn keys into `u64` ring positions
//! - Virtual node placement and the sorted position index
//! - A thread-safe ring with single-owner and top-N-distinct-owner lookups
//! - Configuration and point-in-time statistics

pub mod config;
pub mod error;
pub mod partitioner;
pub mod ring;
pub mod vnode;

pub use config::{RingConfig, DEFAULT_REPLICAS};
pub use error::{Error, Result};
pub use partitioner::Partitioner;
pub use ring::{HashRing, InitError, RingBuilder, RingStats};
pub use vnode::VirtualNode;
