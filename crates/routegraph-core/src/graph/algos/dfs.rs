use std::time::Instant;

use crate::graph::directed::DirectedGraph;
use crate::graph::path::{Path, VisitedSet};
use crate::graph::types::{Identifiable, Weight};
use crate::trace_time;

/// One level of the depth-first descent: a vertex and the neighbours still
/// to be tried from it
struct Frame<'g> {
    id: &'g str,
    neighbours: Vec<&'g str>,
    next: usize,
}

impl<'g> Frame<'g> {
    fn new<V: Identifiable, E>(graph: &'g DirectedGraph<V, E>, id: &'g str) -> Self {
        Self {
            id,
            neighbours: graph.outgoing(id).map(|(to, _)| to).collect(),
            next: 0,
        }
    }
}

/// Descend from `start` until `target` is entered.
///
/// A vertex is marked visited when it is entered; entering a visited vertex
/// is a dead end. The first neighbour that leads to the target wins, so the
/// route is whatever the stack holds at that moment.
fn descend<'g, V: Identifiable, E>(
    graph: &'g DirectedGraph<V, E>,
    start: &'g str,
    target: &'g str,
    visited: &mut VisitedSet<'g>,
) -> Option<Vec<&'g str>> {
    visited.insert(start);
    if start == target {
        return Some(vec![start]);
    }

    let mut stack = vec![Frame::new(graph, start)];
    while let Some(frame) = stack.last_mut() {
        let Some(&neighbour) = frame.neighbours.get(frame.next) else {
            stack.pop();
            continue;
        };
        frame.next += 1;

        if !visited.insert(neighbour) {
            continue;
        }

        if neighbour == target {
            let mut route: Vec<&str> = stack.iter().map(|f| f.id).collect();
            route.push(neighbour);
            return Some(route);
        }

        tracing::trace!(vertex = neighbour, depth = stack.len(), "dfs enter");
        stack.push(Frame::new(graph, neighbour));
    }

    None
}

impl<V: Identifiable, E> DirectedGraph<V, E> {
    /// Find a path from `start_id` to `target_id` by depth-first search.
    ///
    /// Returns `None` if either id is unknown or the target is unreachable.
    /// The path is the first one found, not necessarily the shortest;
    /// neighbours are tried in adjacency order, which callers should not
    /// rely on. Every vertex entered during the search is in
    /// [`Path::visited`].
    #[tracing::instrument(skip(self))]
    pub fn depth_first_search(&self, start_id: &str, target_id: &str) -> Option<Path<'_, V>> {
        let start_time = Instant::now();
        let (Some(start), Some(target)) = (self.vertex_key(start_id), self.vertex_key(target_id))
        else {
            tracing::debug!("dfs skipped: unknown vertex");
            return None;
        };

        let mut visited = VisitedSet::default();
        let route = descend(self, start, target, &mut visited);
        trace_time!(start_time, "depth_first_search", visited = visited.len());

        let route = route?;
        Some(self.build_path(&route, Weight::ZERO, visited))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(id: &str) -> String {
        id.to_string()
    }

    /// A -> B -> D, A -> C -> D, E isolated
    fn diamond() -> DirectedGraph<String, u32> {
        let mut graph = DirectedGraph::new();
        graph.add_edge(v("A"), v("B"), 1);
        graph.add_edge(v("A"), v("C"), 1);
        graph.add_edge(v("B"), v("D"), 1);
        graph.add_edge(v("C"), v("D"), 1);
        graph.add_or_get_vertex(v("E"));
        graph
    }

    #[test]
    fn test_dfs_finds_path() {
        let graph = diamond();
        let path = graph.depth_first_search("A", "D").unwrap();
        assert_eq!(path.start().map(String::as_str), Some("A"));
        assert_eq!(path.target().map(String::as_str), Some("D"));
        assert_eq!(path.len(), 3);
        assert_eq!(path.total_weight(), 0.0);
        assert!(path.visited().len() >= path.len());
    }

    #[test]
    fn test_dfs_path_edges_exist() {
        let graph = diamond();
        let path = graph.depth_first_search("A", "D").unwrap();
        for pair in path.ids().windows(2) {
            assert!(graph.get_edge(pair[0], pair[1]).is_some());
        }
    }

    #[test]
    fn test_dfs_start_is_target() {
        let graph = diamond();
        let path = graph.depth_first_search("E", "E").unwrap();
        assert_eq!(path.ids(), vec!["E"]);
        assert_eq!(path.visited().len(), 1);
    }

    #[test]
    fn test_dfs_unreachable() {
        let graph = diamond();
        assert!(graph.depth_first_search("A", "E").is_none());
        // Edges are directed: D has no way back to A
        assert!(graph.depth_first_search("D", "A").is_none());
    }

    #[test]
    fn test_dfs_unknown_ids() {
        let graph = diamond();
        assert!(graph.depth_first_search("XX", "A").is_none());
        assert!(graph.depth_first_search("A", "XX").is_none());
    }

    #[test]
    fn test_dfs_records_dead_ends_in_visited() {
        // A -> B (dead end), A -> C -> T
        let mut graph: DirectedGraph<String, u32> = DirectedGraph::new();
        graph.add_edge(v("A"), v("B"), 1);
        graph.add_edge(v("A"), v("C"), 1);
        graph.add_edge(v("C"), v("T"), 1);

        let path = graph.depth_first_search("A", "T").unwrap();
        assert_eq!(path.ids(), vec!["A", "C", "T"]);
        assert!(path.visited_contains("B"));
        assert_eq!(path.visited().len(), 4);
    }

    #[test]
    fn test_dfs_survives_cycles() {
        let mut graph: DirectedGraph<String, u32> = DirectedGraph::new();
        graph.add_connection(v("A"), v("B"), 1);
        graph.add_connection(v("B"), v("C"), 1);
        graph.add_connection(v("C"), v("A"), 1);
        graph.add_or_get_vertex(v("Z"));

        assert!(graph.depth_first_search("A", "Z").is_none());
        let path = graph.depth_first_search("A", "C").unwrap();
        assert_eq!(path.target().map(String::as_str), Some("C"));
    }
}
