//! Vertex registry and adjacency table
//!
//! Representation invariants:
//! 1. `vertices` stores every vertex under its own id, so ids are unique.
//! 2. `edges` stores every directed edge under its (from-id, to-id) pair, so
//!    there is at most one edge per ordered pair.
//! 3. Both ids of every key in `edges` are registered in `vertices`.
//!
//! Outgoing edges of a vertex are a contiguous range of `edges`, ordered by
//! target id.

use std::collections::btree_map::Entry as EdgeEntry;
use std::collections::hash_map::Entry as VertexEntry;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::ops::Bound;

use crate::bail_invariant;
use crate::error::Result;
use crate::graph::types::Identifiable;

/// Directed graph over identifiable vertices with opaque edge payloads.
///
/// Mutation needs `&mut self` and searches borrow `&self`, so the structure
/// cannot change while a search or a returned [`Path`](crate::graph::Path)
/// is alive. Sharing across threads requires external synchronization.
#[derive(Debug, Clone)]
pub struct DirectedGraph<V, E> {
    vertices: HashMap<String, V>,
    edges: BTreeMap<(String, String), E>,
}

impl<V, E> Default for DirectedGraph<V, E> {
    fn default() -> Self {
        Self {
            vertices: HashMap::new(),
            edges: BTreeMap::new(),
        }
    }
}

impl<V: Identifiable, E> DirectedGraph<V, E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// All vertices, in no particular order
    pub fn get_vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.values()
    }

    /// Find the vertex identified by `id`
    pub fn get_vertex_by_id(&self, id: &str) -> Option<&V> {
        self.vertices.get(id)
    }

    pub fn contains_vertex(&self, id: &str) -> bool {
        self.vertices.contains_key(id)
    }

    /// Register `vertex` unless a vertex with the same id exists.
    ///
    /// Returns the registered instance: the existing duplicate (the supplied
    /// value is dropped) or `vertex` itself.
    pub fn add_or_get_vertex(&mut self, vertex: V) -> &V {
        match self.vertices.entry(vertex.id().to_string()) {
            VertexEntry::Occupied(existing) => {
                tracing::trace!(id = %existing.key(), "vertex already registered");
                existing.into_mut()
            }
            VertexEntry::Vacant(slot) => slot.insert(vertex),
        }
    }

    /// Add a directed edge, registering both endpoints when they are new.
    ///
    /// Returns false, leaving the existing edge untouched, if `from` already
    /// has an edge to `to`.
    pub fn add_edge(&mut self, from: V, to: V, edge: E) -> bool {
        let from_id = self.add_or_get_vertex(from).id().to_string();
        let to_id = self.add_or_get_vertex(to).id().to_string();
        self.insert_edge(from_id, to_id, edge)
    }

    /// Add a directed edge between two registered vertices.
    ///
    /// Returns false if either id is unknown or the edge already exists.
    pub fn add_edge_by_id(&mut self, from_id: &str, to_id: &str, edge: E) -> bool {
        if !self.contains_vertex(from_id) || !self.contains_vertex(to_id) {
            tracing::debug!(from = from_id, to = to_id, "edge rejected: unknown vertex");
            return false;
        }
        self.insert_edge(from_id.to_string(), to_id.to_string(), edge)
    }

    /// Add the edges `a -> b` and `b -> a` with the same payload.
    ///
    /// Returns true only if both were added. The reverse edge is not attempted
    /// when the forward edge fails, and a forward edge that succeeded stays in
    /// place when the reverse fails: a false result may be partially applied.
    pub fn add_connection(&mut self, a: V, b: V, edge: E) -> bool
    where
        E: Clone,
    {
        let a_id = self.add_or_get_vertex(a).id().to_string();
        let b_id = self.add_or_get_vertex(b).id().to_string();
        self.insert_edge(a_id.clone(), b_id.clone(), edge.clone())
            && self.insert_edge(b_id, a_id, edge)
    }

    /// Id-based [`add_connection`](Self::add_connection); both ids must be registered.
    pub fn add_connection_by_id(&mut self, a_id: &str, b_id: &str, edge: E) -> bool
    where
        E: Clone,
    {
        self.add_edge_by_id(a_id, b_id, edge.clone()) && self.add_edge_by_id(b_id, a_id, edge)
    }

    fn insert_edge(&mut self, from_id: String, to_id: String, edge: E) -> bool {
        match self.edges.entry((from_id, to_id)) {
            EdgeEntry::Occupied(existing) => {
                let (from, to) = existing.key();
                tracing::debug!(from = %from, to = %to, "edge rejected: already exists");
                false
            }
            EdgeEntry::Vacant(slot) => {
                slot.insert(edge);
                true
            }
        }
    }

    /// The edge from `from_id` to `to_id`, if any
    pub fn get_edge(&self, from_id: &str, to_id: &str) -> Option<&E> {
        self.edges.get(&(from_id.to_string(), to_id.to_string()))
    }

    /// Mutable access to the edge from `from_id` to `to_id`, if any
    pub fn get_edge_mut(&mut self, from_id: &str, to_id: &str) -> Option<&mut E> {
        self.edges.get_mut(&(from_id.to_string(), to_id.to_string()))
    }

    /// Vertices reachable over one outgoing edge of `id`.
    ///
    /// `None` if `id` is unknown; empty if it has no outgoing edges.
    pub fn get_neighbours(&self, id: &str) -> Option<Vec<&V>> {
        if !self.contains_vertex(id) {
            return None;
        }
        Some(
            self.outgoing(id)
                .filter_map(|(to, _)| self.vertices.get(to))
                .collect(),
        )
    }

    /// Payloads of the outgoing edges of `id`, in the same order as
    /// [`get_neighbours`](Self::get_neighbours).
    ///
    /// `None` if `id` is unknown; empty if it has no outgoing edges.
    pub fn get_edges(&self, id: &str) -> Option<Vec<&E>> {
        if !self.contains_vertex(id) {
            return None;
        }
        Some(self.outgoing(id).map(|(_, edge)| edge).collect())
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Total number of directed edges
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Remove every vertex that has no outgoing and no incoming edge.
    ///
    /// A vertex with only incoming edges stays registered. Returns the number
    /// of vertices removed.
    pub fn remove_unconnected_vertices(&mut self) -> usize {
        let connected: HashSet<&str> = self
            .edges
            .keys()
            .flat_map(|(from, to)| [from.as_str(), to.as_str()])
            .collect();

        let before = self.vertices.len();
        self.vertices.retain(|id, _| connected.contains(id.as_str()));
        let removed = before - self.vertices.len();

        tracing::debug!(
            removed,
            remaining = self.vertices.len(),
            "removed unconnected vertices"
        );
        removed
    }

    /// Verify the representation invariants
    pub fn check_invariants(&self) -> Result<()> {
        for (key, vertex) in &self.vertices {
            if key != vertex.id() {
                bail_invariant!("vertex {} registered under id {}", vertex.id(), key);
            }
        }
        for (from, to) in self.edges.keys() {
            if !self.vertices.contains_key(from) {
                bail_invariant!("edge {}->{} starts at unknown vertex", from, to);
            }
            if !self.vertices.contains_key(to) {
                bail_invariant!("edge {}->{} ends at unknown vertex", from, to);
            }
        }
        Ok(())
    }

    /// Registry key for `id`, borrowed from the graph
    pub(crate) fn vertex_key(&self, id: &str) -> Option<&str> {
        self.vertices.get_key_value(id).map(|(key, _)| key.as_str())
    }

    /// Outgoing edges of `from` as (target id, payload), ordered by target id
    pub(crate) fn outgoing(&self, from: &str) -> impl Iterator<Item = (&str, &E)> + '_ {
        let from = from.to_string();
        self.edges
            .range((Bound::Included((from.clone(), String::new())), Bound::Unbounded))
            .take_while(move |((edge_from, _), _)| *edge_from == from)
            .map(|((_, to), edge)| (to.as_str(), edge))
    }
}

impl<V, E> fmt::Display for DirectedGraph<V, E>
where
    V: Identifiable + fmt::Display,
    E: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<&String> = self.vertices.keys().collect();
        ids.sort();

        f.write_str("{ ")?;
        for (i, id) in ids.into_iter().enumerate() {
            if i > 0 {
                f.write_str(",\n  ")?;
            }
            write!(f, "{}: [", self.vertices[id])?;
            for (j, (to, edge)) in self.outgoing(id).enumerate() {
                if j > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{}({})", self.vertices[to], edge)?;
            }
            f.write_str("]")?;
        }
        f.write_str("\n}")
    }
}
