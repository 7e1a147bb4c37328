//! Areas: groups of paths-graph vertices treated as one unit

use std::fmt;
use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexSet;

use crate::graph::{EdgeId, Graph, GraphEdge};
use crate::paths::paths_graph::{PathsGraphEdge, PathsGraphVertex};

/// Identifier of an area, stable while the area survives patches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AreaId(pub usize);

impl fmt::Display for AreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "area#{}", self.0)
    }
}

/// Subgraph of the paths graph forming one area
#[derive(Debug, Clone)]
pub struct PathsGraphArea<P: Copy + Debug + Eq + Hash + Ord> {
    id: AreaId,
    graph: Graph<PathsGraphEdge<P>>,
}

impl<P: Copy + Debug + Eq + Hash + Ord> PathsGraphArea<P> {
    /// Empty area
    pub fn new(id: AreaId) -> Self {
        Self {
            id,
            graph: Graph::without_pruning(),
        }
    }

    /// Identifier of the area
    pub const fn id(&self) -> AreaId {
        self.id
    }

    /// Vertices and internal edges
    pub const fn graph(&self) -> &Graph<PathsGraphEdge<P>> {
        &self.graph
    }

    /// Vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = PathsGraphVertex<P>> + '_ {
        self.graph.vertices()
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Whether the area holds a vertex
    pub fn contains_vertex(&self, vertex: PathsGraphVertex<P>) -> bool {
        self.graph.contains_vertex(vertex)
    }

    /// Every point the area covers, including edge intermediates
    pub fn points(&self) -> IndexSet<P> {
        let mut points: IndexSet<P> = self.graph.vertices().map(|vertex| vertex.point).collect();
        for (_, edge) in self.graph.edges() {
            points.extend(edge.intermediate.iter().map(|vertex| vertex.point));
        }
        points
    }

    /// Add a vertex
    pub fn insert_vertex(&mut self, vertex: PathsGraphVertex<P>) {
        self.graph.append_vertex(vertex);
    }

    /// Add an internal edge
    pub fn insert_edge(&mut self, edge: PathsGraphEdge<P>) -> EdgeId {
        self.graph.append_edge(edge)
    }

    /// Move every vertex and edge of `other` into this area
    pub fn absorb(&mut self, other: &Self) {
        for vertex in other.vertices() {
            self.insert_vertex(vertex);
        }
        for (_, edge) in other.graph.edges() {
            self.insert_edge(edge.clone());
        }
    }
}

/// Paths-graph edge linking two different areas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaEdge<P> {
    /// Area the paths edge leaves
    pub source: AreaId,
    /// Area the paths edge enters
    pub destination: AreaId,
    /// Identifier of the paths edge
    pub paths_edge: EdgeId,
    /// Copy of the paths edge
    pub edge: PathsGraphEdge<P>,
}

impl<P: Clone> GraphEdge for AreaEdge<P> {
    type Vertex = AreaId;

    fn source(&self) -> AreaId {
        self.source
    }

    fn destination(&self) -> AreaId {
        self.destination
    }
}
