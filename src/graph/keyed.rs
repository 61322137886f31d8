//! Adjacency-list graph keyed by arbitrary hashable values.
//!
//! [`KeyedGraph`] is the convenience implementation of the [`Graph`] capability contract.
//! It stores nodes under domain keys (strings, integers, identities of any hashable kind)
//! and edges as adjacency lists, and exposes the computed dominators through a simple
//! lookup. It is well suited for tests, tools, and callers whose graphs fit naturally
//! into a map; callers with their own object model implement [`Graph`] directly instead.

use std::fmt;
use std::hash::Hash;

use ahash::{HashMap, HashMapExt};

use crate::{
    graph::{Graph, NodeState},
    Error, Result,
};

/// A directed graph keyed by hashable domain values, ready for dominator computation.
///
/// Nodes are declared with [`node`](Self::node), which records a key together with all of
/// its outgoing edges. Edge targets do not have to be declared themselves; an undeclared
/// target behaves as a leaf node with no outgoing edges.
///
/// # Examples
///
/// ```rust
/// use heapdom::KeyedGraph;
///
/// let mut graph = KeyedGraph::new();
/// graph.node("parent", ["middle"]);
/// graph.node("middle", ["child"]);
///
/// graph.compute_dominators(&"parent")?;
///
/// assert_eq!(graph.dominator(&"middle"), Some(&"parent"));
/// assert_eq!(graph.dominator(&"child"), Some(&"middle"));
/// assert_eq!(graph.dominator(&"parent"), None);
/// # Ok::<(), heapdom::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct KeyedGraph<K>
where
    K: Hash + Eq + Clone,
{
    /// Outgoing edges per declared key
    edges: HashMap<K, Vec<K>>,
    /// Engine state attached to nodes during a computation
    states: HashMap<K, NodeState>,
    /// Computed dominator per non-root reachable key
    dominators: HashMap<K, K>,
}

impl<K> Default for KeyedGraph<K>
where
    K: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> KeyedGraph<K>
where
    K: Hash + Eq + Clone,
{
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            edges: HashMap::new(),
            states: HashMap::new(),
            dominators: HashMap::new(),
        }
    }

    /// Creates a new graph with pre-allocated capacity for `nodes` declarations.
    #[must_use]
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            edges: HashMap::with_capacity(nodes),
            states: HashMap::new(),
            dominators: HashMap::new(),
        }
    }

    /// Declares a node and all of its outgoing edges.
    ///
    /// Re-declaring a key replaces its previous edge list. Targets that are never
    /// declared themselves act as leaf nodes.
    pub fn node(&mut self, key: K, targets: impl IntoIterator<Item = K>) {
        self.edges.insert(key, targets.into_iter().collect());
    }

    /// Returns `true` if `key` has been declared with [`node`](Self::node).
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.edges.contains_key(key)
    }

    /// Returns the number of declared nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no declared nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Computes immediate dominators for every node reachable from `root`.
    ///
    /// Results from any previous computation are discarded first. On return, the
    /// dominator of every reachable key except the root is available through
    /// [`dominator`](Self::dominator).
    ///
    /// The root must have no incoming edges from nodes reachable from it; this
    /// precondition is not checked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if `root` was never declared.
    pub fn compute_dominators(&mut self, root: &K) -> Result<()>
    where
        K: fmt::Display,
    {
        if !self.edges.contains_key(root) {
            return Err(Error::UnknownNode(root.to_string()));
        }

        self.dominators.clear();
        let root = root.clone();
        crate::dominators::compute_dominators(self, &root);
        Ok(())
    }

    /// Returns the computed dominator of `key`, if any.
    ///
    /// `None` for the root of the computation, for keys not reachable from the root, and
    /// before any computation has run.
    #[must_use]
    pub fn dominator(&self, key: &K) -> Option<&K> {
        self.dominators.get(key)
    }

    /// Returns an iterator over all `(node, dominator)` pairs of the last computation.
    pub fn dominators(&self) -> impl Iterator<Item = (&K, &K)> {
        self.dominators.iter()
    }
}

impl<K> Graph for KeyedGraph<K>
where
    K: Hash + Eq + Clone,
{
    type Node = K;

    fn state(&self, node: &K) -> Option<NodeState> {
        self.states.get(node).copied()
    }

    fn set_state(&mut self, node: &K, state: Option<NodeState>) {
        match state {
            Some(state) => {
                self.states.insert(node.clone(), state);
            }
            None => {
                self.states.remove(node);
            }
        }
    }

    fn references(&mut self, node: &K) -> impl Iterator<Item = K> {
        self.edges.get(node).into_iter().flatten().cloned()
    }

    fn set_dominator(&mut self, node: &K, dominator: &K) {
        self.dominators.insert(node.clone(), dominator.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyed_graph_declarations() {
        let mut graph: KeyedGraph<&str> = KeyedGraph::new();
        assert!(graph.is_empty());

        graph.node("a", ["b", "c"]);
        graph.node("b", []);

        assert_eq!(graph.node_count(), 2);
        assert!(graph.contains(&"a"));
        assert!(graph.contains(&"b"));
        // "c" is only an edge target, not a declaration
        assert!(!graph.contains(&"c"));
    }

    #[test]
    fn test_keyed_graph_redeclare_replaces_edges() {
        let mut graph: KeyedGraph<&str> = KeyedGraph::new();
        graph.node("a", ["b"]);
        graph.node("a", ["c"]);

        let targets: Vec<&str> = graph.references(&"a").collect();
        assert_eq!(targets, vec!["c"]);
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_keyed_graph_undeclared_target_is_leaf() {
        let mut graph: KeyedGraph<&str> = KeyedGraph::new();
        graph.node("a", ["b"]);

        let targets: Vec<&str> = graph.references(&"b").collect();
        assert!(targets.is_empty());
    }

    #[test]
    fn test_keyed_graph_unknown_root() {
        let mut graph: KeyedGraph<&str> = KeyedGraph::new();
        graph.node("a", []);

        let err = graph.compute_dominators(&"missing").unwrap_err();
        assert!(matches!(err, Error::UnknownNode(name) if name == "missing"));
    }

    #[test]
    fn test_keyed_graph_state_round_trip() {
        let mut graph: KeyedGraph<&str> = KeyedGraph::new();
        graph.node("a", []);

        assert_eq!(Graph::state(&graph, &"a"), None);
        graph.set_state(&"a", Some(NodeState(5)));
        assert_eq!(Graph::state(&graph, &"a"), Some(NodeState(5)));
        graph.set_state(&"a", None);
        assert_eq!(Graph::state(&graph, &"a"), None);
    }

    #[test]
    fn test_keyed_graph_compute_clears_previous_results() {
        let mut graph: KeyedGraph<&str> = KeyedGraph::new();
        graph.node("a", ["b"]);
        graph.node("b", []);
        graph.compute_dominators(&"a").unwrap();
        assert_eq!(graph.dominator(&"b"), Some(&"a"));

        // Recompute from "b"; the stale "b" entry must be gone.
        graph.node("b", ["c"]);
        graph.compute_dominators(&"b").unwrap();
        assert_eq!(graph.dominator(&"b"), None);
        assert_eq!(graph.dominator(&"c"), Some(&"b"));
    }

    #[test]
    fn test_keyed_graph_integer_keys() {
        let mut graph: KeyedGraph<u32> = KeyedGraph::new();
        graph.node(1, [2, 3]);
        graph.node(2, [4]);
        graph.node(3, [4]);

        graph.compute_dominators(&1).unwrap();

        assert_eq!(graph.dominator(&2), Some(&1));
        assert_eq!(graph.dominator(&3), Some(&1));
        assert_eq!(graph.dominator(&4), Some(&1));
    }

    #[test]
    fn test_keyed_graph_dominators_iterator() {
        let mut graph: KeyedGraph<&str> = KeyedGraph::new();
        graph.node("a", ["b"]);
        graph.node("b", ["c"]);
        graph.compute_dominators(&"a").unwrap();

        let mut pairs: Vec<(&str, &str)> = graph.dominators().map(|(n, d)| (*n, *d)).collect();
        pairs.sort_unstable();
        assert_eq!(pairs, vec![("b", "a"), ("c", "b")]);
    }
}
