//! Point-in-time ring statistics.

use serde::Serialize;

/// Counters describing the ring, all read under a single lock acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RingStats {
    /// Number of physical nodes.
    pub physical_nodes: usize,
    /// Number of positions on the ring.
    pub virtual_nodes: usize,
    /// Configured vnodes per physical node.
    pub replicas: usize,
    /// Average vnodes per physical node, 0.0 on an empty ring.
    pub load_factor: f64,
}

impl RingStats {
    pub(crate) fn new(physical_nodes: usize, virtual_nodes: usize, replicas: usize) -> Self {
        let load_factor = if physical_nodes == 0 {
            0.0
        } else {
            virtual_nodes as f64 / physical_nodes as f64
        };
        Self {
            physical_nodes,
            virtual_nodes,
            replicas,
            load_factor,
        }
    }
}
