//! Immediate dominator computation over single-rooted directed graphs.
//!
//! # Theory
//!
//! A node `d` **dominates** a node `n` if every path from the root to `n` must pass
//! through `d`. The **immediate dominator** of `n` is the unique node that strictly
//! dominates `n` but does not strictly dominate any other strict dominator of `n`. In
//! heap terms: the immediate dominator of an object is the single object that retains
//! it; freeing the dominator frees the object.
//!
//! # Algorithm
//!
//! The computation runs in three phases over a record arena, one record per reachable
//! node:
//!
//! 1. **Discovery** - An explicit-stack depth-first traversal labels every reachable
//!    node with a sequential discovery id and an initial candidate dominator (the first
//!    source it was reached from). Later nodes can never dominate earlier ones, which
//!    every subsequent step exploits. When an edge reaches an already-labeled node, the
//!    candidate is tightened towards the meeting point of the old and new source chains.
//! 2. **Correction** - Tightening one candidate can invalidate candidates of nodes
//!    reachable from it. Affected records are queued on a worklist and reprocessed until
//!    every candidate has stabilized. Each correction strictly decreases some candidate's
//!    discovery id, so the fixpoint is reached in bounded work without iterating dataflow
//!    over the whole graph.
//! 3. **Reporting** - A final walk over the stabilized dominator tree reports each
//!    node's dominator through the graph and detaches all engine state.
//!
//! Unlike the classic almost-linear dominator algorithms, this scheme never needs the
//! full predecessor relation up front; it discovers everything from outgoing references
//! alone, which is the only direction a heap dump offers cheaply.
//!
//! # Examples
//!
//! ```rust,ignore
//! use heapdom::{Dominators, KeyedGraph};
//!
//! let mut graph = KeyedGraph::new();
//! graph.node("root", ["a"]);
//! graph.node("a", ["b"]);
//!
//! // Equivalent to compute_dominators, with a progress hook attached.
//! Dominators::new()
//!     .with_progress(my_progress, 3)
//!     .compute(&mut graph, &"root");
//! ```

mod engine;
mod sets;

use crate::{
    graph::Graph,
    progress::{NullProgress, Progress},
};

use engine::Engine;

/// Computes the immediate dominators of all nodes reachable from `root`.
///
/// There must not be any incoming references to `root` from nodes reachable from it.
/// The result of this function is to call [`Graph::set_dominator`] on every node
/// reachable from `root` except `root` itself, after which all computation state has
/// been detached from the graph again.
///
/// This is the plain entry point without progress reporting; use [`Dominators`] to
/// attach a [`Progress`] sink.
///
/// # Examples
///
/// ```rust
/// use heapdom::KeyedGraph;
///
/// let mut graph = KeyedGraph::new();
/// graph.node("parent", ["child"]);
///
/// heapdom::compute_dominators(&mut graph, &"parent");
/// assert_eq!(graph.dominator(&"child"), Some(&"parent"));
/// ```
pub fn compute_dominators<G: Graph>(graph: &mut G, root: &G::Node) {
    Dominators::new().compute(graph, root);
}

/// Configurable immediate dominators computation.
///
/// A thin builder over the engine. The only configuration today is progress reporting:
/// attach a [`Progress`] implementation together with an upper-bound estimate of the
/// reachable node count, then run [`compute`](Self::compute).
///
/// # Examples
///
/// ```rust
/// use heapdom::{Dominators, KeyedGraph};
///
/// let mut graph = KeyedGraph::new();
/// graph.node("root", ["leaf"]);
///
/// Dominators::new().compute(&mut graph, &"root");
/// assert_eq!(graph.dominator(&"leaf"), Some(&"root"));
/// ```
#[derive(Debug)]
pub struct Dominators<P = NullProgress> {
    progress: P,
    num_nodes: usize,
}

impl Dominators<NullProgress> {
    /// Creates a computation with no progress reporting.
    #[must_use]
    pub fn new() -> Self {
        Self {
            progress: NullProgress,
            num_nodes: 0,
        }
    }
}

impl Default for Dominators<NullProgress> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Progress> Dominators<P> {
    /// Attaches a progress sink.
    ///
    /// `num_nodes` is an upper bound on the number of reachable nodes, used only to
    /// size the progress phases; it has no effect on the computation itself.
    #[must_use]
    pub fn with_progress<Q: Progress>(self, progress: Q, num_nodes: usize) -> Dominators<Q> {
        Dominators {
            progress,
            num_nodes,
        }
    }

    /// Computes the immediate dominators of all nodes reachable from `root`.
    ///
    /// Semantics are identical to [`compute_dominators`]; see there for the caller
    /// contract.
    pub fn compute<G: Graph>(&mut self, graph: &mut G, root: &G::Node) {
        let mut engine = Engine::new();

        self.progress.start("Traversing graph", self.num_nodes);
        engine.traverse(graph, &mut self.progress, root);
        self.progress.done();

        engine.resolve();

        self.progress.start("Recording dominators", engine.node_count());
        engine.report(graph, &mut self.progress, root);
        self.progress.done();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::KeyedGraph;

    fn doms_of(
        graph: &KeyedGraph<&'static str>,
        keys: &[&'static str],
    ) -> Vec<Option<&'static str>> {
        keys.iter()
            .map(|key| graph.dominator(key).copied())
            .collect()
    }

    #[test]
    fn test_single_node() {
        let mut graph = KeyedGraph::new();
        graph.node("n", []);

        compute_dominators(&mut graph, &"n");

        assert_eq!(graph.dominator(&"n"), None);
    }

    #[test]
    fn test_parent_with_child() {
        let mut graph = KeyedGraph::new();
        graph.node("parent", ["child"]);
        graph.node("child", []);

        compute_dominators(&mut graph, &"parent");

        assert_eq!(graph.dominator(&"child"), Some(&"parent"));
    }

    #[test]
    fn test_diamond() {
        let mut graph = KeyedGraph::new();
        graph.node("parent", ["left", "right"]);
        graph.node("left", ["child"]);
        graph.node("right", ["child"]);
        graph.node("child", []);

        compute_dominators(&mut graph, &"parent");

        assert_eq!(
            doms_of(&graph, &["left", "right", "child"]),
            vec![Some("parent"), Some("parent"), Some("parent")]
        );
    }

    #[test]
    fn test_chain_through_internal_node() {
        let mut graph = KeyedGraph::new();
        graph.node("parent", ["middle"]);
        graph.node("middle", ["child"]);
        graph.node("child", []);

        compute_dominators(&mut graph, &"parent");

        assert_eq!(graph.dominator(&"middle"), Some(&"parent"));
        assert_eq!(graph.dominator(&"child"), Some(&"middle"));
    }

    #[test]
    fn test_duplicate_edges_are_harmless() {
        let mut graph = KeyedGraph::new();
        graph.node("parent", ["child", "child", "child"]);
        graph.node("child", []);

        compute_dominators(&mut graph, &"parent");

        assert_eq!(graph.dominator(&"child"), Some(&"parent"));
    }

    #[test]
    fn test_builder_with_progress_reports_phases() {
        use crate::progress::Progress;

        #[derive(Default)]
        struct Phases {
            started: Vec<(String, usize)>,
            advanced: usize,
            finished: usize,
        }

        impl Progress for Phases {
            fn start(&mut self, description: &str, duration: usize) {
                self.started.push((description.to_string(), duration));
            }

            fn advance_by(&mut self, n: usize) {
                self.advanced += n;
            }

            fn update(&mut self, _current: usize) {}

            fn done(&mut self) {
                self.finished += 1;
            }
        }

        let mut graph = KeyedGraph::new();
        graph.node("a", ["b", "c"]);
        graph.node("b", ["c"]);
        graph.node("c", []);

        let mut computation = Dominators::new().with_progress(Phases::default(), 3);
        computation.compute(&mut graph, &"a");

        let phases = &computation.progress;
        assert_eq!(phases.started.len(), 2);
        assert_eq!(phases.started[0], ("Traversing graph".to_string(), 3));
        assert_eq!(phases.started[1], ("Recording dominators".to_string(), 3));
        // Each of the three nodes advances once per reported phase.
        assert_eq!(phases.advanced, 6);
        assert_eq!(phases.finished, 2);

        assert_eq!(graph.dominator(&"b"), Some(&"a"));
        assert_eq!(graph.dominator(&"c"), Some(&"a"));
    }

    #[test]
    fn test_unreachable_nodes_get_no_dominator() {
        let mut graph = KeyedGraph::new();
        graph.node("root", ["a"]);
        graph.node("a", []);
        graph.node("island", ["a"]);

        // "island" points into the reachable region but is not itself reachable.
        // It must neither receive a dominator nor disturb the rest.
        compute_dominators(&mut graph, &"root");

        assert_eq!(graph.dominator(&"a"), Some(&"root"));
        assert_eq!(graph.dominator(&"island"), None);
    }
}
