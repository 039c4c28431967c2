//! Sorted virtual node index.
//!
//! The index is the ring itself: a `Vec<VirtualNode>` kept sorted by token.
//! It carries no locking of its own; [`HashRing`](super::HashRing) guards it.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use crate::partitioner::Partitioner;
use crate::vnode::{vnode_key, VirtualNode};

/// Size of the position space, as a float, for ownership fractions.
const RING_SIZE: f64 = 18_446_744_073_709_551_616.0;

#[derive(Debug, Default, Clone)]
pub(crate) struct VirtualNodeIndex {
    /// Strictly ascending by token.
    vnodes: Vec<VirtualNode>,
}

impl VirtualNodeIndex {
    pub(crate) fn len(&self) -> usize {
        self.vnodes.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.vnodes.is_empty()
    }

    pub(crate) fn vnodes(&self) -> &[VirtualNode] {
        &self.vnodes
    }

    fn is_occupied(&self, token: u64) -> bool {
        self.vnodes
            .binary_search_by_key(&token, VirtualNode::token)
            .is_ok()
    }

    /// Place `replicas` vnodes for `node` and restore sort order.
    ///
    /// A position that is already taken (by any node, or by an earlier
    /// replica of this one) is shifted forward one step at a time, wrapping
    /// at `u64::MAX`, until a free slot is found. Returns the number of
    /// steps taken, which is zero unless the partitioner collided.
    pub(crate) fn insert(
        &mut self,
        node: &Arc<str>,
        replicas: usize,
        partitioner: &dyn Partitioner,
    ) -> usize {
        let mut fresh = Vec::with_capacity(replicas);
        let mut claimed = HashSet::with_capacity(replicas);
        let mut shifts = 0;

        for i in 0..replicas {
            let mut token = partitioner.partition(&vnode_key(node, i));
            while self.is_occupied(token) || claimed.contains(&token) {
                token = token.wrapping_add(1);
                shifts += 1;
            }
            claimed.insert(token);
            fresh.push(VirtualNode::new(token, Arc::clone(node)));
        }

        self.vnodes.extend(fresh);
        self.vnodes.sort_unstable();
        shifts
    }

    /// Drop every vnode owned by `node`. Survivors keep their relative order.
    pub(crate) fn remove(&mut self, node: &str) -> usize {
        let before = self.vnodes.len();
        self.vnodes.retain(|vnode| vnode.node() != node);
        before - self.vnodes.len()
    }

    /// Index of the first vnode with `token >= position`, wrapping to 0 when
    /// `position` is past the last vnode. `None` on an empty index.
    pub(crate) fn successor(&self, position: u64) -> Option<usize> {
        if self.vnodes.is_empty() {
            return None;
        }
        let idx = self.vnodes.partition_point(|vnode| vnode.token < position);
        Some(if idx == self.vnodes.len() { 0 } else { idx })
    }

    /// The vnode responsible for `position`.
    pub(crate) fn owner_of(&self, position: u64) -> Option<&VirtualNode> {
        self.successor(position).map(|idx| &self.vnodes[idx])
    }

    /// Every vnode exactly once, clockwise, starting at the successor of
    /// `position`.
    pub(crate) fn walk_from(&self, position: u64) -> impl Iterator<Item = &VirtualNode> {
        let start = self.successor(position).unwrap_or(0);
        let (head, tail) = self.vnodes.split_at(start);
        tail.iter().chain(head.iter())
    }

    /// Up to `count` distinct owners in clockwise order from `position`.
    pub(crate) fn distinct_owners(&self, position: u64, count: usize) -> Vec<String> {
        let mut owners = Vec::with_capacity(count);
        let mut seen = HashSet::with_capacity(count);

        for vnode in self.walk_from(position) {
            if owners.len() == count {
                break;
            }
            if seen.insert(vnode.node()) {
                owners.push(vnode.node().to_string());
            }
        }

        owners
    }

    /// Fraction of the position space owned by each physical node.
    ///
    /// A vnode owns the arc from its predecessor (exclusive) to itself
    /// (inclusive). Fractions sum to 1.0 on a non-empty ring.
    pub(crate) fn ownership(&self) -> BTreeMap<String, f64> {
        let n = self.vnodes.len();
        if n == 1 {
            return BTreeMap::from([(self.vnodes[0].node().to_string(), 1.0)]);
        }

        let mut shares: HashMap<&str, f64> = HashMap::new();
        for (i, vnode) in self.vnodes.iter().enumerate() {
            let prev = &self.vnodes[(i + n - 1) % n];
            let arc = prev.distance_to(vnode) as f64 / RING_SIZE;
            *shares.entry(vnode.node()).or_insert(0.0) += arc;
        }

        shares
            .into_iter()
            .map(|(node, share)| (node.to_string(), share))
            .collect()
    }
}
