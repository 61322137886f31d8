use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can
/// potentially return.
///
/// The dominators engine itself is infallible: it either runs to completion or panics on a
/// broken caller contract (see the [`crate::graph`] module documentation). The variants
/// here belong to the convenience layer built on top of the engine.
#[derive(Error, Debug)]
pub enum Error {
    /// A computation was started from a key that was never declared in the graph.
    ///
    /// Returned by [`KeyedGraph::compute_dominators`](crate::KeyedGraph::compute_dominators)
    /// when the root key has no node declaration. Undeclared keys are permitted as edge
    /// targets, where they act as leaf nodes, but the root of a computation must have been
    /// declared so that its outgoing edges are known.
    #[error("Unknown node: {0}")]
    UnknownNode(String),
}

/// Shorthand result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
