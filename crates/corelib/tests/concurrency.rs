//! Concurrent readers and writers sharing one ring.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use corelib::{Error, HashRing, RingConfig};

const STABLE: [&str; 4] = ["stable-a", "stable-b", "stable-c", "stable-d"];
const WRITERS: usize = 2;
const CHURN: usize = 200;

/// A stable node, or a temporary name one of the writers adds.
fn is_possible_member(node: &str) -> bool {
    if STABLE.contains(&node) {
        return true;
    }
    let Some(rest) = node.strip_prefix("temp-") else {
        return false;
    };
    match rest.split_once('-') {
        Some((w, i)) => matches!(
            (w.parse::<usize>(), i.parse::<usize>()),
            (Ok(w), Ok(i)) if w < WRITERS && i < CHURN
        ),
        None => false,
    }
}

#[test]
fn test_readers_never_see_unknown_or_partial_state() {
    let ring = Arc::new(HashRing::with_nodes(RingConfig::new(64), STABLE).unwrap());
    let done = AtomicBool::new(false);

    crossbeam::thread::scope(|s| {
        for w in 0..WRITERS {
            let ring = Arc::clone(&ring);
            s.spawn(move |_| {
                for i in 0..CHURN {
                    let name = format!("temp-{w}-{i}");
                    ring.add_node(&name).unwrap();
                    ring.remove_node(&name).unwrap();
                }
            });
        }

        for r in 0..4 {
            let ring = Arc::clone(&ring);
            let done = &done;
            s.spawn(move |_| {
                let mut i = 0u64;
                while !done.load(Ordering::Relaxed) || i < 500 {
                    let key = format!("reader-{r}-key-{i}");
                    let owner = ring.get_node(&key).unwrap();
                    assert!(
                        is_possible_member(&owner),
                        "owner {owner} was never a member"
                    );
                    // Stable nodes are never removed, so they must still be listed.
                    if STABLE.contains(&owner.as_str()) {
                        assert!(ring.nodes().contains(&owner));
                    }

                    // Each writer has at most one temporary node on the ring.
                    let stats = ring.stats();
                    assert!(
                        (STABLE.len()..=STABLE.len() + WRITERS).contains(&stats.physical_nodes),
                        "member count {} out of range",
                        stats.physical_nodes
                    );
                    assert_eq!(stats.virtual_nodes, stats.physical_nodes * 64);

                    let members = ring.nodes();
                    assert!(STABLE.iter().all(|n| members.iter().any(|m| m == n)));
                    assert!(members.iter().all(|m| is_possible_member(m)));

                    let owners = ring.get_nodes(&key, 3).unwrap();
                    let unique: HashSet<_> = owners.iter().collect();
                    assert_eq!(unique.len(), owners.len());
                    i += 1;
                }
            });
        }

        // Readers keep going for at least this long so they overlap the writers.
        s.spawn(|_| {
            std::thread::sleep(std::time::Duration::from_millis(50));
            done.store(true, Ordering::Relaxed);
        });
    })
    .unwrap();

    assert_eq!(ring.nodes(), STABLE.to_vec());
    assert_eq!(ring.virtual_node_count(), STABLE.len() * 64);
}

#[test]
fn test_concurrent_duplicate_adds_admit_exactly_one() {
    let ring = HashRing::with_config(RingConfig::new(16));

    let results: Vec<Result<(), Error>> = crossbeam::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|_| ring.add_node("contended")))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    })
    .unwrap();

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|e| *e == Error::NodeAlreadyExists("contended".into())));
    assert_eq!(ring.virtual_node_count(), 16);
}
