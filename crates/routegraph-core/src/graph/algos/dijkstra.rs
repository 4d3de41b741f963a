use crate::graph::directed::DirectedGraph;
use crate::graph::path::{reconstruct_route, Path, VisitedSet};
use crate::graph::types::{Identifiable, Weight};
use crate::trace_time;
use std::cmp::Reverse;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap};
use std::time::Instant;

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated weight)
#[derive(Debug, Clone)]
pub struct HeapEntry<'g> {
    pub vertex_id: &'g str,
    pub accumulated_weight: Weight,
}

impl PartialEq for HeapEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for HeapEntry<'_> {}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Ties broken by id so equal-weight pops are reproducible
        self.accumulated_weight
            .cmp(&other.accumulated_weight)
            .then_with(|| self.vertex_id.cmp(other.vertex_id))
    }
}

/// Progress of a discovered vertex
#[derive(Debug, Clone, Copy)]
struct Progress<'g> {
    weight_to: Weight,
    predecessor: Option<&'g str>,
    finalized: bool,
}

/// State tracked during a shortest-path search
struct DijkstraState<'g> {
    progress: HashMap<&'g str, Progress<'g>>,
    heap: BinaryHeap<Reverse<HeapEntry<'g>>>,
    visited: VisitedSet<'g>,
}

impl<'g> DijkstraState<'g> {
    fn new(start: &'g str) -> Self {
        let mut state = Self {
            progress: HashMap::new(),
            heap: BinaryHeap::new(),
            visited: VisitedSet::default(),
        };
        state.visited.insert(start);
        state.progress.insert(
            start,
            Progress {
                weight_to: Weight::ZERO,
                predecessor: None,
                finalized: false,
            },
        );
        state.heap.push(Reverse(HeapEntry {
            vertex_id: start,
            accumulated_weight: Weight::ZERO,
        }));
        state
    }

    /// Pop the cheapest vertex that is not finalized yet and finalize it.
    ///
    /// Entries superseded by a later improvement are skipped here instead of
    /// being removed from the heap when the improvement happens.
    fn pop_next(&mut self) -> Option<(&'g str, Weight)> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            let Some(record) = self.progress.get_mut(entry.vertex_id) else {
                continue;
            };
            if record.finalized {
                continue;
            }
            record.finalized = true;
            return Some((entry.vertex_id, record.weight_to));
        }
        None
    }

    /// Record a candidate route to `neighbour` through `current`
    fn relax(&mut self, current: &'g str, neighbour: &'g str, candidate: Weight) {
        match self.progress.entry(neighbour) {
            Entry::Occupied(mut occupied) => {
                let record = occupied.get_mut();
                if record.finalized || candidate >= record.weight_to {
                    return;
                }
                record.weight_to = candidate;
                record.predecessor = Some(current);
            }
            Entry::Vacant(vacant) => {
                self.visited.insert(neighbour);
                vacant.insert(Progress {
                    weight_to: candidate,
                    predecessor: Some(current),
                    finalized: false,
                });
            }
        }
        self.heap.push(Reverse(HeapEntry {
            vertex_id: neighbour,
            accumulated_weight: candidate,
        }));
    }

    fn route_to(&self, target: &'g str) -> Vec<&'g str> {
        let predecessors: HashMap<&'g str, &'g str> = self
            .progress
            .iter()
            .filter_map(|(&id, record)| record.predecessor.map(|pred| (id, pred)))
            .collect();
        reconstruct_route(target, &predecessors)
    }
}

impl<V: Identifiable, E> DirectedGraph<V, E> {
    /// Find the path of least total weight from `start_id` to `target_id`.
    ///
    /// `weight_fn` maps an edge to its non-negative weight. Returns `None` if
    /// either id is unknown or the target is unreachable. The search stops
    /// when the target is finalized; every vertex discovered up to then is in
    /// [`Path::visited`]. The path's total weight is the sum of `weight_fn`
    /// over its edges.
    #[tracing::instrument(skip(self, weight_fn))]
    pub fn dijkstra_shortest_path<F>(
        &self,
        start_id: &str,
        target_id: &str,
        weight_fn: F,
    ) -> Option<Path<'_, V>>
    where
        F: Fn(&E) -> f64,
    {
        let start_time = Instant::now();
        let (Some(start), Some(target)) = (self.vertex_key(start_id), self.vertex_key(target_id))
        else {
            tracing::debug!("dijkstra skipped: unknown vertex");
            return None;
        };

        let mut state = DijkstraState::new(start);
        if start == target {
            return Some(self.build_path(&[start], Weight::ZERO, state.visited));
        }

        while let Some((current, weight_to)) = state.pop_next() {
            if current == target {
                let route = state.route_to(target);
                let total_weight = self.route_weight(&route, &weight_fn);
                trace_time!(
                    start_time,
                    "dijkstra_shortest_path",
                    visited = state.visited.len()
                );
                return Some(self.build_path(&route, total_weight, state.visited));
            }

            for (neighbour, edge) in self.outgoing(current) {
                let candidate = weight_to + Weight::new(weight_fn(edge));
                state.relax(current, neighbour, candidate);
            }
        }

        trace_time!(
            start_time,
            "dijkstra_shortest_path",
            visited = state.visited.len()
        );
        tracing::debug!("dijkstra exhausted without reaching target");
        None
    }

    /// Sum of `weight_fn` over the edges joining consecutive route vertices
    fn route_weight<F>(&self, route: &[&str], weight_fn: &F) -> Weight
    where
        F: Fn(&E) -> f64,
    {
        route
            .windows(2)
            .filter_map(|pair| self.get_edge(pair[0], pair[1]))
            .map(|edge| Weight::new(weight_fn(edge)))
            .sum()
    }
}
