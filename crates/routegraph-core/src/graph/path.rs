//! Search results and path reconstruction

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Serialize, Serializer};

use crate::graph::directed::DirectedGraph;
use crate::graph::types::{Identifiable, Weight};

/// Route found by a search.
///
/// `vertices` runs from start to target inclusive, each consecutive pair
/// joined by a directed edge. `visited` holds every vertex the search
/// examined, in discovery order and without duplicates; it is a superset of
/// `vertices`. `total_weight` is only filled in by Dijkstra.
#[derive(Debug, Clone)]
pub struct Path<'g, V> {
    vertices: Vec<&'g V>,
    total_weight: Weight,
    visited: Vec<&'g V>,
}

impl<'g, V: Identifiable> Path<'g, V> {
    pub fn vertices(&self) -> &[&'g V] {
        &self.vertices
    }

    /// Ids of the path's vertices, start first
    pub fn ids(&self) -> Vec<&str> {
        self.vertices.iter().map(|v| v.id()).collect()
    }

    pub fn start(&self) -> Option<&'g V> {
        self.vertices.first().copied()
    }

    pub fn target(&self) -> Option<&'g V> {
        self.vertices.last().copied()
    }

    /// Number of vertices on the path
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight.value()
    }

    pub fn visited(&self) -> &[&'g V] {
        &self.visited
    }

    pub fn visited_contains(&self, id: &str) -> bool {
        self.visited.iter().any(|v| v.id() == id)
    }
}

impl<V: Identifiable> fmt::Display for Path<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Weight={} Length={} visited={} ({})",
            self.total_weight,
            self.vertices.len(),
            self.visited.len(),
            self.ids().join(", ")
        )
    }
}

#[derive(Serialize)]
struct PathRecord<'a> {
    vertices: Vec<&'a str>,
    length: usize,
    total_weight: Weight,
    visited: Vec<&'a str>,
}

impl<V: Identifiable> Serialize for Path<'_, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        PathRecord {
            vertices: self.ids(),
            length: self.vertices.len(),
            total_weight: self.total_weight,
            visited: self.visited.iter().map(|v| v.id()).collect(),
        }
        .serialize(serializer)
    }
}

/// Vertices examined by a search, remembered in discovery order
#[derive(Debug, Default)]
pub(crate) struct VisitedSet<'g> {
    order: Vec<&'g str>,
    seen: HashSet<&'g str>,
}

impl<'g> VisitedSet<'g> {
    /// Mark `id` as visited; false if it already was
    pub(crate) fn insert(&mut self, id: &'g str) -> bool {
        if self.seen.insert(id) {
            self.order.push(id);
            true
        } else {
            false
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }
}

/// Walk predecessors back from `target` to the vertex that has none.
///
/// Returns the ids from start to target.
pub(crate) fn reconstruct_route<'g>(
    target: &'g str,
    predecessors: &HashMap<&'g str, &'g str>,
) -> Vec<&'g str> {
    let mut route = vec![target];
    let mut current = target;
    while let Some(&pred) = predecessors.get(current) {
        route.push(pred);
        current = pred;
    }
    route.reverse();
    route
}

impl<V: Identifiable, E> DirectedGraph<V, E> {
    /// Resolve a route of ids into a [`Path`] borrowing this graph's vertices
    pub(crate) fn build_path<'g>(
        &'g self,
        route: &[&'g str],
        total_weight: Weight,
        visited: VisitedSet<'g>,
    ) -> Path<'g, V> {
        let resolve = move |id: &&'g str| self.get_vertex_by_id(id);
        Path {
            vertices: route.iter().filter_map(resolve).collect(),
            total_weight,
            visited: visited.order.iter().filter_map(resolve).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_graph() -> DirectedGraph<String, u32> {
        let mut graph = DirectedGraph::new();
        graph.add_edge("A".to_string(), "B".to_string(), 1);
        graph.add_edge("B".to_string(), "C".to_string(), 1);
        graph
    }

    #[test]
    fn test_reconstruct_route_walks_back_to_start() {
        let predecessors: HashMap<&str, &str> = [("B", "A"), ("C", "B")].into_iter().collect();
        assert_eq!(reconstruct_route("C", &predecessors), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_reconstruct_route_single_vertex() {
        let predecessors: HashMap<&str, &str> = HashMap::new();
        assert_eq!(reconstruct_route("A", &predecessors), vec!["A"]);
    }

    #[test]
    fn test_visited_set_deduplicates_in_order() {
        let mut visited = VisitedSet::default();
        assert!(visited.insert("B"));
        assert!(visited.insert("A"));
        assert!(!visited.insert("B"));
        assert_eq!(visited.len(), 2);
        assert_eq!(visited.order, vec!["B", "A"]);
    }

    #[test]
    fn test_build_path_accessors() {
        let graph = chain_graph();
        let mut visited = VisitedSet::default();
        for id in ["A", "B", "C"] {
            visited.insert(id);
        }
        let path = graph.build_path(&["A", "B", "C"], Weight::new(2.5), visited);

        assert_eq!(path.ids(), vec!["A", "B", "C"]);
        assert_eq!(path.len(), 3);
        assert_eq!(path.hops(), 2);
        assert!(!path.is_empty());
        assert_eq!(path.start().map(|v| v.as_str()), Some("A"));
        assert_eq!(path.target().map(|v| v.as_str()), Some("C"));
        assert_eq!(path.total_weight(), 2.5);
        assert!(path.visited_contains("B"));
        assert!(!path.visited_contains("Z"));
    }

    #[test]
    fn test_display_format() {
        let graph = chain_graph();
        let mut visited = VisitedSet::default();
        for id in ["A", "B", "C"] {
            visited.insert(id);
        }
        let path = graph.build_path(&["A", "B", "C"], Weight::new(4.0), visited);
        assert_eq!(
            path.to_string(),
            "Weight=4.000000 Length=3 visited=3 (A, B, C)"
        );
    }

    #[test]
    fn test_serialize_path() {
        let graph = chain_graph();
        let mut visited = VisitedSet::default();
        visited.insert("A");
        visited.insert("B");
        let path = graph.build_path(&["A", "B"], Weight::ZERO, visited);

        let json = serde_json::to_value(&path).unwrap();
        assert_eq!(json["vertices"], serde_json::json!(["A", "B"]));
        assert_eq!(json["length"], 2);
        assert_eq!(json["total_weight"], 0.0);
        assert_eq!(json["visited"], serde_json::json!(["A", "B"]));
    }
}
