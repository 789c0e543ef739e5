//! Storage for information set nodes.
//!
//! The store is a lazy table: nodes are created on the first visit to
//! their key and live for the whole training run. It grows monotonically
//! to at most (distinct cards) x (distinct reachable histories) entries,
//! which is small and bounded for this game, so there is no eviction.

use rustc_hash::FxHashMap;

use crate::cfr::node::Node;

/// Table of all information set nodes discovered during training.
///
/// The single piece of mutable shared state in the system; the solver
/// borrows it mutably for the duration of each traversal.
#[derive(Debug, Clone, Default)]
pub struct NodeStore {
    nodes: FxHashMap<String, Node>,
}

impl NodeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with pre-allocated capacity.
    ///
    /// Kuhn poker has 12 information sets, so reallocation never matters
    /// here, but callers that know the count can skip the growth steps.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Fetch the node for `key`, creating it zeroed on first visit.
    ///
    /// Idempotent: later calls with the same key return the same entry.
    pub fn get_or_create(&mut self, key: &str) -> &mut Node {
        self.nodes.entry(key.to_string()).or_default()
    }

    /// Look up a node without creating it.
    pub fn lookup(&self, key: &str) -> Option<&Node> {
        self.nodes.get(key)
    }

    /// Number of information sets discovered so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True before the first traversal.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all discovered information set keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Iterate over all keys and nodes.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.nodes.iter().map(|(key, node)| (key.as_str(), node))
    }
}
