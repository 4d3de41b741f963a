//! Routegraph Core Library
//!
//! Generic directed graph with depth-first, breadth-first and Dijkstra path
//! search, plus a small road network planner built on top of it.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod route_planner;
