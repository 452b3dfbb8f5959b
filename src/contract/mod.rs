//! Capability contracts supplied by callers.
//!
//! The engines in [`crate::search`] never store a graph; they consume one
//! through the traits defined here:
//! - [`Graph`] / [`DynamicGraph`] / [`HistoryGraph`]: edge enumeration,
//!   edge lengths, and edge endpoints for each engine flavor
//! - [`Before`]: the total pre-order that stands in for integer indices
//!   when vertices are discovered lazily
//! - [`Measure`]: the additive, totally ordered length type

pub mod graph;
pub mod measure;
pub mod order;

pub use graph::{DynamicGraph, Graph, HistoryGraph};
pub use measure::Measure;
pub use order::Before;
