//! Directed graph and path search
//!
//! Provides a generic directed graph keyed by vertex id:
//! - Vertex and edge management with at most one edge per ordered pair
//! - Depth-first and breadth-first path search
//! - Dijkstra shortest path with caller-supplied edge weights

pub mod algos;
pub mod directed;
pub mod path;
pub mod types;

pub use directed::DirectedGraph;
pub use path::Path;
pub use types::{Identifiable, Weight};
