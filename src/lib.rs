//! Minimum cut estimation with Karger's randomized contraction algorithm.
//!
//! The graph lives in [`graph::Graph`], an arena-backed undirected multigraph.
//! [`graph::karger_min_cut`] runs the contraction trials and keeps the best
//! cut found.

pub mod cs;
pub mod error;

pub use cs::graph;
pub use error::{Error, Result};
