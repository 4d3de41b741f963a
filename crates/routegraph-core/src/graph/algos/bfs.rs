use std::collections::{HashMap, VecDeque};
use std::time::Instant;

use crate::graph::directed::DirectedGraph;
use crate::graph::path::{reconstruct_route, Path, VisitedSet};
use crate::graph::types::{Identifiable, Weight};
use crate::trace_time;

/// Expand level by level from `start` until `target` is discovered.
///
/// Vertices are marked visited when they are enqueued, never when they are
/// dequeued, so each vertex enters the queue at most once.
fn bfs_search<'g, V: Identifiable, E>(
    graph: &'g DirectedGraph<V, E>,
    start: &'g str,
    target: &'g str,
    visited: &mut VisitedSet<'g>,
) -> Option<Vec<&'g str>> {
    let mut predecessors: HashMap<&'g str, &'g str> = HashMap::new();
    let mut queue: VecDeque<&'g str> = VecDeque::new();
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for (neighbour, _) in graph.outgoing(current) {
            if !visited.insert(neighbour) {
                continue;
            }
            predecessors.insert(neighbour, current);

            if neighbour == target {
                return Some(reconstruct_route(target, &predecessors));
            }
            queue.push_back(neighbour);
        }
        tracing::trace!(vertex = current, queued = queue.len(), "bfs expanded");
    }

    None
}

impl<V: Identifiable, E> DirectedGraph<V, E> {
    /// Find a path with the fewest edges from `start_id` to `target_id`.
    ///
    /// Returns `None` if either id is unknown or the target is unreachable.
    /// The search stops as soon as the target is discovered; every vertex
    /// discovered up to then is in [`Path::visited`].
    #[tracing::instrument(skip(self))]
    pub fn breadth_first_search(&self, start_id: &str, target_id: &str) -> Option<Path<'_, V>> {
        let start_time = Instant::now();
        let (Some(start), Some(target)) = (self.vertex_key(start_id), self.vertex_key(target_id))
        else {
            tracing::debug!("bfs skipped: unknown vertex");
            return None;
        };

        let mut visited = VisitedSet::default();
        visited.insert(start);

        if start == target {
            return Some(self.build_path(&[start], Weight::ZERO, visited));
        }

        let route = bfs_search(self, start, target, &mut visited);
        trace_time!(start_time, "breadth_first_search", visited = visited.len());

        let route = route?;
        Some(self.build_path(&route, Weight::ZERO, visited))
    }
}
