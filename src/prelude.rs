//! # heapdom Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the heapdom library. Import this module to get quick access to the essential
//! types for dominator computation.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all heapdom operations
pub use crate::Error;

/// The result type used throughout heapdom
pub use crate::Result;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// One-call dominator computation over any [`Graph`]
pub use crate::dominators::compute_dominators;

/// Configurable dominator computation with progress reporting
pub use crate::dominators::Dominators;

// ================================================================================================
// Graph Abstraction
// ================================================================================================

/// The capability contract a graph must satisfy
pub use crate::graph::Graph;

/// Ready-made adjacency-list graph keyed by hashable values
pub use crate::graph::KeyedGraph;

/// Opaque per-node computation state token
pub use crate::graph::NodeState;

// ================================================================================================
// Progress Reporting
// ================================================================================================

/// Progress notification interface for long computations
pub use crate::progress::Progress;

/// The default no-op progress sink
pub use crate::progress::NullProgress;
