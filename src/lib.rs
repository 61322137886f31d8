// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # heapdom
//!
//! [![Crates.io](https://img.shields.io/crates/v/heapdom.svg)](https://crates.io/crates/heapdom)
//! [![Documentation](https://docs.rs/heapdom/badge.svg)](https://docs.rs/heapdom)
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](https://github.com/BinFlip/heapdom/blob/main/LICENSE-APACHE)
//!
//! Immediate dominator computation for large, cyclic object graphs. Built for heap-dump
//! analysis, where the graph of objects and references routinely reaches millions of nodes
//! and tens of thousands of links in a single reference chain, `heapdom` computes for every
//! object reachable from a root the unique object that retains it.
//!
//! ## Features
//!
//! - **🧮 Scales to huge graphs** - Explicit-stack traversal with no call-stack recursion,
//!   so arbitrarily deep reference chains cannot overflow the stack
//! - **🔁 Handles arbitrary cycles** - Multi-entry loops, self-loops, and dense sharing are
//!   all resolved to the correct immediate dominators
//! - **🧩 Works with your graph** - A four-operation [`Graph`] trait decouples the engine
//!   from the concrete node representation; no base type to inherit from
//! - **📦 Batteries included** - [`KeyedGraph`] provides a ready-made adjacency-list graph
//!   keyed by arbitrary hashable values
//! - **📈 Progress reporting** - Hook a [`Progress`] implementation to surface phase and
//!   per-node progress during long computations
//!
//! ## Quick Start
//!
//! Add `heapdom` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! heapdom = "0.2"
//! ```
//!
//! ### Using `KeyedGraph`
//!
//! ```rust
//! use heapdom::KeyedGraph;
//!
//! let mut graph = KeyedGraph::new();
//! graph.node("parent", ["left", "right"]);
//! graph.node("left", ["child"]);
//! graph.node("right", ["child"]);
//!
//! graph.compute_dominators(&"parent")?;
//!
//! // The child is reachable two ways, so only the parent retains it.
//! assert_eq!(graph.dominator(&"child"), Some(&"parent"));
//! assert_eq!(graph.dominator(&"left"), Some(&"parent"));
//! # Ok::<(), heapdom::Error>(())
//! ```
//!
//! ### Using your own graph type
//!
//! Implement the [`Graph`] trait for your graph representation and call
//! [`compute_dominators`]. The engine attaches opaque [`NodeState`] tokens to nodes while
//! it runs, enumerates each node's outgoing references exactly once, and reports the final
//! dominator of every reachable node through [`Graph::set_dominator`]. See the [`graph`]
//! module documentation for the full contract.
//!
//! ## Architecture
//!
//! - [`graph`] - The [`Graph`] capability trait and the [`KeyedGraph`] convenience type
//! - [`dominators`] - The computation itself: [`compute_dominators`] and the
//!   [`Dominators`] builder
//! - [`progress`] - The [`Progress`] trait and the default [`NullProgress`]
//! - [`Error`] and [`Result`] - Error handling for the convenience layer
//!
//! The algorithm runs in three phases: a depth-first traversal that labels every reachable
//! node in discovery order and records a first candidate dominator, an iterative correction
//! pass that refines candidates until a fixpoint, and a final walk that reports results and
//! detaches all engine state. The whole computation is synchronous and single-threaded; a
//! call to [`compute_dominators`] returns once every reachable node other than the root has
//! received its dominator.

mod error;

pub mod dominators;
pub mod graph;
pub mod prelude;
pub mod progress;

pub use error::{Error, Result};

pub use dominators::{compute_dominators, Dominators};
pub use graph::{Graph, KeyedGraph, NodeState};
pub use progress::{NullProgress, Progress};
