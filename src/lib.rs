//! # `shortcut` - Shortest Paths in Directed Acyclic Graphs
//!
//! A reusable algorithmic core for computing shortest paths in DAGs whose
//! vertex set is either an explicit integer range or an unbounded,
//! lazily-discovered ordered set. Callers supply a graph by implementing a
//! small traversal contract; the engines return the minimum-length path as
//! an ordered sequence of edges, or report that none exists.
//!
//! ## Engines
//!
//! All three engines share one skeleton (single-pass dynamic programming
//! over a topological order, exploiting acyclicity) and differ only in
//! how the frontier is represented and what is threaded through each
//! relaxation:
//!
//! 1. **Index-bounded** ([`shortest_path`]): vertices are the integers
//!    `0..=n`, already topologically ordered by magnitude. O(V + E).
//! 2. **Dynamically ordered** ([`shortest_path_dynamic`]): vertices are
//!    values of an arbitrary totally pre-ordered type discovered on the
//!    fly; the frontier stays sorted and pruned as the search proceeds
//!    (best-first branch and bound), and the search completes on the
//!    first vertex at or past `end`.
//! 3. **History-augmented** ([`shortest_path_with_history`]): the index
//!    sweep, additionally carrying a caller-defined accumulator along
//!    each relaxed edge so that edge lengths may depend on the path taken
//!    so far.
//!
//! ## Contracts
//!
//! The graph side of the seam is three capability traits, [`Graph`],
//! [`DynamicGraph`], and [`HistoryGraph`], plus [`Before`] (the vertex
//! pre-order of the dynamic engine) and [`Measure`] (the length type:
//! add and compare, nothing else). Every edge must lead strictly
//! forward in the relevant order; that rule is the acyclicity guarantee
//! the sweeps rely on, and edges violating it are silently discarded.
//!
//! ## Example
//!
//! ```
//! use shortcut::{Graph, shortest_path};
//!
//! /// A chain 0 -> 1 -> ... with a unit-cost edge per vertex.
//! struct Chain;
//!
//! impl Graph for Chain {
//!     type Edge = usize;
//!     type Length = u32;
//!
//!     fn append_edges(&self, edges: &mut Vec<usize>, v: usize) {
//!         edges.push(v + 1);
//!     }
//!
//!     fn length(&self, _v: usize, _e: &usize) -> u32 {
//!         1
//!     }
//!
//!     fn to(&self, _v: usize, e: &usize) -> usize {
//!         *e
//!     }
//! }
//!
//! let path = shortest_path(&Chain, 5).unwrap();
//! assert_eq!(path, vec![1, 2, 3, 4, 5]);
//! ```
//!
//! ## Feature Flags
//!
//! - `tracing`: emit one `trace!` event per finished search with a small
//!   run summary. Off by default; the crate never installs a subscriber.
//!
//! ## Guarantees
//!
//! - Each invocation owns its working state exclusively and releases it
//!   on return; nothing is shared across calls, so concurrent searches
//!   over a `Sync` graph need no coordination.
//! - Deterministic: equal inputs produce identical paths, including
//!   tie-breaks (first-discovered predecessor wins on equal length).
//! - The engines never validate global acyclicity; the caller's
//!   forward-edge contract is trusted, and only locally backward edges
//!   are filtered out.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod contract;
pub mod search;

pub use contract::{Before, DynamicGraph, Graph, HistoryGraph, Measure};
pub use search::{
    shortest_path, shortest_path_dynamic, shortest_path_with_history, NoPath,
};
