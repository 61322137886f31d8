//! Graph abstraction for the dominators computation.
//!
//! This module defines the capability contract between the engine and the caller's graph
//! representation. The engine never inspects node contents; it interacts with the graph
//! exclusively through the four operations of the [`Graph`] trait:
//!
//! 1. Attaching and detaching opaque per-node state ([`Graph::set_state`])
//! 2. Reading that state back ([`Graph::state`])
//! 3. Enumerating a node's outgoing references ([`Graph::references`])
//! 4. Receiving the final dominator of a node ([`Graph::set_dominator`])
//!
//! This keeps the engine decoupled from the concrete graph: nodes can be integer handles
//! into caller-owned storage, interned strings, reference-counted objects, or anything
//! else that is cheap to clone. The [`KeyedGraph`] type in this module is a ready-made
//! implementation for callers who do not already have a graph structure of their own.
//!
//! # Caller contract
//!
//! The root node passed to a computation must have no incoming references from any node
//! reachable from it. This is the precondition for a dominator tree to exist; it is not
//! checked, and the result of violating it is unspecified.
//!
//! State storage must be exact: [`Graph::state`] must return the value most recently
//! passed to [`Graph::set_state`] for that node, and `None` for a node that never had
//! state attached. Both operations should be O(1); they are called a small constant
//! number of times per reachable node. At the end of a computation every reachable node
//! has had its state detached again.

use std::fmt;

mod keyed;

pub use keyed::KeyedGraph;

/// Opaque per-node state attached to graph nodes during a dominators computation.
///
/// The engine hands these tokens to the graph through [`Graph::set_state`] and expects
/// them back, unchanged, from [`Graph::state`]. The contents are meaningless to the
/// caller; the only obligation is faithful storage. Tokens are [`Copy`], so a graph can
/// keep them in a side table, a per-node field, or any other O(1) slot.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeState(pub(crate) usize);

impl fmt::Debug for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeState({})", self.0)
    }
}

/// Capability contract for a directed graph to perform immediate dominators computation on.
///
/// The dominators computation can be used with any directed graph data structure that
/// implements this trait and has some root node with no incoming edges. Implementations
/// decide for themselves what a node handle is; the engine only requires that handles be
/// cheaply cloneable, because it stores one handle per reachable node for the duration of
/// a computation.
///
/// # Examples
///
/// ```rust,ignore
/// use heapdom::{compute_dominators, Graph, NodeState};
///
/// // Nodes are indices into caller-owned storage.
/// struct Heap {
///     objects: Vec<Object>,
/// }
///
/// struct Object {
///     references: Vec<usize>,
///     state: Option<NodeState>,
///     retained_by: Option<usize>,
/// }
///
/// impl Graph for Heap {
///     type Node = usize;
///
///     fn state(&self, node: &usize) -> Option<NodeState> {
///         self.objects[*node].state
///     }
///
///     fn set_state(&mut self, node: &usize, state: Option<NodeState>) {
///         self.objects[*node].state = state;
///     }
///
///     fn references(&mut self, node: &usize) -> impl Iterator<Item = usize> {
///         self.objects[*node].references.clone().into_iter()
///     }
///
///     fn set_dominator(&mut self, node: &usize, dominator: &usize) {
///         self.objects[*node].retained_by = Some(*dominator);
///     }
/// }
///
/// let mut heap = Heap { objects: build_heap() };
/// compute_dominators(&mut heap, &0);
/// ```
pub trait Graph {
    /// Handle identifying a node of the graph.
    ///
    /// Handles must be cheap to clone; the engine keeps one clone per reachable node.
    /// Equality or hashing is not required, because node identity is carried by the
    /// attached [`NodeState`], not by comparing handles.
    type Node: Clone;

    /// Returns the state most recently attached to `node`.
    ///
    /// Must return `None` if no state has been attached to this node during the current
    /// computation, and the exact token from the latest [`set_state`](Self::set_state)
    /// call otherwise.
    fn state(&self, node: &Self::Node) -> Option<NodeState>;

    /// Attaches state to `node`, or detaches it when `state` is `None`.
    ///
    /// At the conclusion of a computation this is called with `None` for every reachable
    /// node, so the graph ends up with no auxiliary state attached.
    fn set_state(&mut self, node: &Self::Node, state: Option<NodeState>);

    /// Returns the nodes referenced from `node`.
    ///
    /// Called at most once per node during an entire computation, so the enumeration may
    /// be expensive or lazily produced. Duplicate targets and self references are
    /// permitted.
    fn references(&mut self, node: &Self::Node) -> impl Iterator<Item = Self::Node>;

    /// Records the computed immediate dominator of `node`.
    ///
    /// Called exactly once per reachable node except the root, after the computation has
    /// reached its fixpoint. The root receives no call, as it has no dominator.
    fn set_dominator(&mut self, node: &Self::Node, dominator: &Self::Node);
}
