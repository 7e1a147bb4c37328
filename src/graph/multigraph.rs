//! Directed multigraph keyed by opaque edge identifiers

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};

/// Opaque identifier of an edge inside one graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub u64);

/// Edge payload stored by a [`Graph`]
pub trait GraphEdge: Clone {
    /// Vertex type the edge connects
    type Vertex: Copy + Debug + Eq + Hash + Ord;

    /// Vertex the edge leaves
    fn source(&self) -> Self::Vertex;

    /// Vertex the edge enters
    fn destination(&self) -> Self::Vertex;

    /// Whether `other` is this edge travelled backwards
    fn is_reverse_of(&self, other: &Self) -> bool {
        self.source() == other.destination() && self.destination() == other.source()
    }

    /// Cost of travelling the edge
    fn weight(&self) -> usize {
        1
    }
}

/// Directed multigraph with adjacency indexes in both directions
///
/// Iteration follows insertion order. With pruning enabled, a vertex is
/// dropped as soon as its last edge is removed.
#[derive(Debug, Clone)]
pub struct Graph<E: GraphEdge> {
    vertices: IndexSet<E::Vertex>,
    edges: IndexMap<EdgeId, E>,
    outgoing: HashMap<E::Vertex, IndexSet<EdgeId>>,
    incoming: HashMap<E::Vertex, IndexSet<EdgeId>>,
    next_edge: u64,
    prune_orphans: bool,
}

impl<E: GraphEdge> Default for Graph<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: GraphEdge> Graph<E> {
    /// Empty graph dropping vertices that lose their last edge
    pub fn new() -> Self {
        Self {
            vertices: IndexSet::new(),
            edges: IndexMap::new(),
            outgoing: HashMap::new(),
            incoming: HashMap::new(),
            next_edge: 0,
            prune_orphans: true,
        }
    }

    /// Empty graph keeping isolated vertices
    pub fn without_pruning() -> Self {
        Self {
            prune_orphans: false,
            ..Self::new()
        }
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no vertex
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = E::Vertex> + '_ {
        self.vertices.iter().copied()
    }

    /// Edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &E)> + '_ {
        self.edges.iter().map(|(&id, edge)| (id, edge))
    }

    /// Whether a vertex is present
    pub fn contains_vertex(&self, vertex: E::Vertex) -> bool {
        self.vertices.contains(&vertex)
    }

    /// Edge payload by identifier
    pub fn edge(&self, id: EdgeId) -> Option<&E> {
        self.edges.get(&id)
    }

    /// Add an isolated vertex; no-op when already present
    pub fn append_vertex(&mut self, vertex: E::Vertex) {
        self.vertices.insert(vertex);
    }

    /// Remove a vertex with every incident edge, returning those edges
    pub fn remove_vertex(&mut self, vertex: E::Vertex) -> Vec<(EdgeId, E)> {
        let mut incident: IndexSet<EdgeId> = IndexSet::new();
        incident.extend(self.outgoing_ids(vertex));
        incident.extend(self.incoming_ids(vertex));
        let removed = incident
            .into_iter()
            .filter_map(|id| self.remove_edge(id).map(|edge| (id, edge)))
            .collect();
        self.vertices.shift_remove(&vertex);
        self.outgoing.remove(&vertex);
        self.incoming.remove(&vertex);
        removed
    }

    /// Add an edge, registering its endpoints as vertices
    pub fn append_edge(&mut self, edge: E) -> EdgeId {
        let id = EdgeId(self.next_edge);
        self.next_edge += 1;
        let (source, destination) = (edge.source(), edge.destination());
        self.vertices.insert(source);
        self.vertices.insert(destination);
        self.outgoing.entry(source).or_default().insert(id);
        self.incoming.entry(destination).or_default().insert(id);
        self.edges.insert(id, edge);
        id
    }

    /// Remove an edge, pruning endpoints left without edges if enabled
    pub fn remove_edge(&mut self, id: EdgeId) -> Option<E> {
        let edge = self.edges.shift_remove(&id)?;
        let (source, destination) = (edge.source(), edge.destination());
        if let Some(ids) = self.outgoing.get_mut(&source) {
            ids.shift_remove(&id);
        }
        if let Some(ids) = self.incoming.get_mut(&destination) {
            ids.shift_remove(&id);
        }
        if self.prune_orphans {
            self.prune(source);
            self.prune(destination);
        }
        Some(edge)
    }

    fn prune(&mut self, vertex: E::Vertex) {
        if self.degree(vertex) == 0 {
            self.vertices.shift_remove(&vertex);
            self.outgoing.remove(&vertex);
            self.incoming.remove(&vertex);
        }
    }

    /// Number of incident edges, counting self-loops twice
    pub fn degree(&self, vertex: E::Vertex) -> usize {
        self.outgoing.get(&vertex).map_or(0, IndexSet::len)
            + self.incoming.get(&vertex).map_or(0, IndexSet::len)
    }

    /// Identifiers of edges leaving a vertex
    pub fn outgoing_ids(&self, vertex: E::Vertex) -> Vec<EdgeId> {
        self.outgoing
            .get(&vertex)
            .map(|ids| ids.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Identifiers of edges entering a vertex
    pub fn incoming_ids(&self, vertex: E::Vertex) -> Vec<EdgeId> {
        self.incoming
            .get(&vertex)
            .map(|ids| ids.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Edges leaving a vertex
    pub fn outgoing(&self, vertex: E::Vertex) -> impl Iterator<Item = (EdgeId, &E)> + '_ {
        self.outgoing
            .get(&vertex)
            .into_iter()
            .flatten()
            .filter_map(|id| self.edges.get(id).map(|edge| (*id, edge)))
    }

    /// Edges entering a vertex
    pub fn incoming(&self, vertex: E::Vertex) -> impl Iterator<Item = (EdgeId, &E)> + '_ {
        self.incoming
            .get(&vertex)
            .into_iter()
            .flatten()
            .filter_map(|id| self.edges.get(id).map(|edge| (*id, edge)))
    }

    /// Distinct vertices reachable over one outgoing edge
    pub fn successors(&self, vertex: E::Vertex) -> IndexSet<E::Vertex> {
        self.outgoing(vertex)
            .map(|(_, edge)| edge.destination())
            .collect()
    }

    /// Distinct vertices linked to `vertex` in either direction
    pub fn neighbors(&self, vertex: E::Vertex) -> IndexSet<E::Vertex> {
        self.outgoing(vertex)
            .map(|(_, edge)| edge.destination())
            .chain(self.incoming(vertex).map(|(_, edge)| edge.source()))
            .collect()
    }

    /// An edge travelling `id` backwards, if one exists
    pub fn find_reverse(&self, id: EdgeId) -> Option<EdgeId> {
        let edge = self.edges.get(&id)?;
        self.outgoing(edge.destination())
            .find(|(candidate, reverse)| *candidate != id && reverse.is_reverse_of(edge))
            .map(|(candidate, _)| candidate)
    }
}
