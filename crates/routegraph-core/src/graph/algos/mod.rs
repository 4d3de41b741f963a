//! Path search implementations
//!
//! Each module adds one search method to [`DirectedGraph`](crate::graph::DirectedGraph):
//! - `dfs`: Depth-first search, first path found
//! - `bfs`: Breadth-first search, fewest edges
//! - `dijkstra`: Least total edge weight

pub mod bfs;
pub mod dfs;
pub mod dijkstra;

pub use dijkstra::HeapEntry;
