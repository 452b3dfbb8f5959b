//! Graph capability traits consumed by the search engines.
//!
//! A graph is never stored or mutated by this crate; the engines only ask
//! it three questions per vertex: which edges leave here, where does each
//! edge go, and how long is it. Implementations can be backed by anything
//! (adjacency lists, procedural generation, an on-disk structure) as
//! long as every reported edge leads strictly forward in the relevant
//! order. That forward-edge rule is the acyclicity guarantee the sweeps
//! rely on; edges that break it are discarded without being reported.

use super::{Before, Measure};

/// A directed acyclic graph over the integer vertices `0..=n`.
///
/// The vertex indices are their own topological order: every edge leaving
/// `v` must satisfy `to(v, e) > v`.
pub trait Graph {
    /// Opaque edge value. Enumerated, measured, and followed, but never
    /// compared or hashed.
    type Edge: Clone;
    /// Length type used as the path cost.
    type Length: Measure;

    /// Appends the outgoing edges of `v` to `edges`.
    ///
    /// The buffer is owned by the engine and reused across vertices; it
    /// is cleared before each call.
    fn append_edges(&self, edges: &mut Vec<Self::Edge>, v: usize);

    /// Returns the length of edge `e` leaving vertex `v`.
    ///
    /// Negative lengths are permitted: on an acyclic graph no negative
    /// cycle can exist, and the engines only add and compare.
    fn length(&self, v: usize, e: &Self::Edge) -> Self::Length;

    /// Returns the endpoint of edge `e` leaving vertex `v`.
    fn to(&self, v: usize, e: &Self::Edge) -> usize;
}

/// A directed acyclic graph whose vertices are discovered on the fly.
///
/// There is no a-priori vertex range; the vertex type carries the
/// topological order through [`Before`]. Every edge leaving `v` must lead
/// to a vertex `w` with `v.before(w)`.
pub trait DynamicGraph {
    /// Vertex value, ordered by [`Before`].
    type Vertex: Before;
    /// Opaque edge value.
    type Edge: Clone;
    /// Length type used as the path cost.
    type Length: Measure;

    /// Appends the outgoing edges of `v` to `edges`.
    ///
    /// The buffer is owned by the engine and reused across vertices; it
    /// is cleared before each call.
    fn append_edges(&self, edges: &mut Vec<Self::Edge>, v: &Self::Vertex);

    /// Returns the length of edge `e` leaving vertex `v`.
    fn length(&self, v: &Self::Vertex, e: &Self::Edge) -> Self::Length;

    /// Returns the endpoint of edge `e` leaving vertex `v`.
    fn to(&self, v: &Self::Vertex, e: &Self::Edge) -> Self::Vertex;
}

/// A directed acyclic graph whose edge lengths may depend on the path
/// taken so far.
///
/// Identical vertex model to [`Graph`], with an extra accumulator: each
/// relaxed edge updates a caller-defined history value, and the length of
/// an edge may consult the history carried to its source vertex. The
/// engine never inspects the history; it only threads the current best
/// value forward.
pub trait HistoryGraph {
    /// Opaque edge value.
    type Edge: Clone;
    /// Path accumulator. `Default` is the history of the empty path at
    /// the start vertex.
    type History: Default + Clone;
    /// Length type used as the path cost.
    type Length: Measure;

    /// Appends the outgoing edges of `v` to `edges`.
    ///
    /// The buffer is owned by the engine and reused across vertices; it
    /// is cleared before each call.
    fn append_edges(&self, edges: &mut Vec<Self::Edge>, v: usize);

    /// Returns the length of edge `e` leaving vertex `v`, given the
    /// history `h` of the best path currently known to reach `v`.
    fn length(&self, v: usize, h: &Self::History, e: &Self::Edge) -> Self::Length;

    /// Returns the endpoint of edge `e` leaving vertex `v`.
    fn to(&self, v: usize, e: &Self::Edge) -> usize;

    /// Returns the history after traversing `e` from `v` carrying `h`.
    fn update_history(&self, h: &Self::History, v: usize, e: &Self::Edge) -> Self::History;
}
