//! Movement graph derived from the determined elements of a field

use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexSet;
use tracing::debug;

use crate::element::{Connection, ConnectionGroup, ConnectionKind, TeleporterDirection, VertexKind};
use crate::graph::{CompactableEdge, EdgeId, Graph, GraphEdge, compact_vertices};
use crate::topology::{Field, Topology};

/// Vertex of the paths graph: a cell or one level of a bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathsGraphVertex<P> {
    /// Cell position
    pub point: P,
    /// Which vertex of the cell
    pub kind: VertexKind,
}

impl<P> PathsGraphVertex<P> {
    /// Whole-cell vertex at a point
    pub const fn cell(point: P) -> Self {
        Self {
            point,
            kind: VertexKind::Cell,
        }
    }
}

/// Movement an edge allows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathsEdgeKind {
    /// Two-way passage step
    Passage,
    /// Directed step
    OneWay,
    /// Teleporter jump
    Teleport {
        /// Whether the reverse jump exists as well
        bidirectional: bool,
    },
}

impl PathsEdgeKind {
    /// Edge kind for leaving through `leaving` and entering through `entering`
    pub const fn between(leaving: ConnectionKind, entering: ConnectionKind) -> Self {
        match (leaving, entering) {
            (ConnectionKind::Teleport(direction), _) => Self::Teleport {
                bidirectional: matches!(direction, TeleporterDirection::Bidirectional),
            },
            (ConnectionKind::Passage, ConnectionKind::Passage) => Self::Passage,
            _ => Self::OneWay,
        }
    }

    /// Whether a reverse edge of the same kind always accompanies this one
    pub const fn is_bidirectional(self) -> bool {
        match self {
            Self::Passage => true,
            Self::OneWay => false,
            Self::Teleport { bidirectional } => bidirectional,
        }
    }
}

/// Directed edge between two paths-graph vertices
///
/// After compaction an edge may stand for a whole corridor; the vertices it
/// swallowed are kept as intermediates in travel order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathsGraphEdge<P> {
    /// Vertex the edge leaves
    pub source: PathsGraphVertex<P>,
    /// Vertex the edge enters
    pub destination: PathsGraphVertex<P>,
    /// Swallowed vertices, in travel order
    pub intermediate: Vec<PathsGraphVertex<P>>,
    /// Movement allowed
    pub kind: PathsEdgeKind,
}

impl<P: Copy + Eq> PathsGraphEdge<P> {
    /// Single-step edge
    pub const fn new(
        source: PathsGraphVertex<P>,
        destination: PathsGraphVertex<P>,
        kind: PathsEdgeKind,
    ) -> Self {
        Self {
            source,
            destination,
            intermediate: Vec::new(),
            kind,
        }
    }

    /// Number of steps the edge stands for
    pub fn length(&self) -> usize {
        self.intermediate.len() + 1
    }

    /// Every vertex along the edge, endpoints included
    pub fn vertices(&self) -> Vec<PathsGraphVertex<P>> {
        let mut vertices = Vec::with_capacity(self.intermediate.len() + 2);
        vertices.push(self.source);
        vertices.extend(self.intermediate.iter().copied());
        vertices.push(self.destination);
        vertices
    }

    /// Every point along the edge, endpoints included
    pub fn points(&self) -> Vec<P> {
        self.vertices().into_iter().map(|vertex| vertex.point).collect()
    }

    /// Whether the edge starts, ends or passes through a point
    pub fn touches(&self, point: P) -> bool {
        self.source.point == point
            || self.destination.point == point
            || self.intermediate.iter().any(|vertex| vertex.point == point)
    }
}

impl<P> GraphEdge for PathsGraphEdge<P>
where
    P: Copy + Debug + Eq + Hash + Ord,
{
    type Vertex = PathsGraphVertex<P>;

    fn source(&self) -> Self::Vertex {
        self.source
    }

    fn destination(&self) -> Self::Vertex {
        self.destination
    }

    fn is_reverse_of(&self, other: &Self) -> bool {
        self.source == other.destination
            && self.destination == other.source
            && self.kind == other.kind
            && self.intermediate.len() == other.intermediate.len()
            && self.intermediate.iter().eq(other.intermediate.iter().rev())
    }

    fn weight(&self) -> usize {
        self.length()
    }
}

impl<P> CompactableEdge for PathsGraphEdge<P>
where
    P: Copy + Debug + Eq + Hash + Ord,
{
    fn is_plain_passage(&self) -> bool {
        self.kind == PathsEdgeKind::Passage
    }

    fn join(&self, next: &Self) -> Self {
        let mut intermediate = self.intermediate.clone();
        intermediate.push(self.destination);
        intermediate.extend(next.intermediate.iter().copied());
        Self {
            source: self.source,
            destination: next.destination,
            intermediate,
            kind: PathsEdgeKind::Passage,
        }
    }
}

/// Vertices whose edges changed while patching a [`PathsGraph`]
#[derive(Debug, Clone)]
pub struct PathsPatch<P> {
    /// Vertices that gained, lost or changed edges, including removed ones
    pub affected: IndexSet<PathsGraphVertex<P>>,
    /// Number of edges removed
    pub removed_edges: usize,
    /// Number of edges created before compaction
    pub added_edges: usize,
}

/// Compacted movement graph of a field
#[derive(Debug, Clone)]
pub struct PathsGraph<T: Topology> {
    graph: Graph<PathsGraphEdge<T::Point>>,
}

impl<T: Topology> PathsGraph<T> {
    /// Derive the graph of every determined element, then compact it
    pub fn derive(field: &Field<T>) -> Self {
        let mut graph = Graph::new();
        for (point, element) in field.elements() {
            for group in element.connection_groups(point) {
                let from = PathsGraphVertex {
                    point,
                    kind: group.vertex,
                };
                for connection in &group.connections {
                    Self::append_connection(&mut graph, field, from, connection);
                }
            }
        }
        let compacted = compact_vertices(&mut graph).len();
        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            compacted,
            "derived paths graph"
        );
        Self { graph }
    }

    /// Underlying directed multigraph
    pub const fn graph(&self) -> &Graph<PathsGraphEdge<T::Point>> {
        &self.graph
    }

    /// Edge payload by identifier
    pub fn edge(&self, id: EdgeId) -> Option<&PathsGraphEdge<T::Point>> {
        self.graph.edge(id)
    }

    /// Identifiers of every edge starting, ending or passing through a point
    pub fn edges_through(&self, point: T::Point) -> Vec<EdgeId> {
        self.graph
            .edges()
            .filter(|(_, edge)| edge.touches(point))
            .map(|(id, _)| id)
            .collect()
    }

    /// Points covered by vertices or edge intermediates
    pub fn covered_points(&self) -> IndexSet<T::Point> {
        let mut points: IndexSet<T::Point> = self.graph.vertices().map(|vertex| vertex.point).collect();
        for (_, edge) in self.graph.edges() {
            points.extend(edge.intermediate.iter().map(|vertex| vertex.point));
        }
        points
    }

    fn group_at(field: &Field<T>, vertex: PathsGraphVertex<T::Point>) -> Option<ConnectionGroup<T>> {
        field
            .get(vertex.point)?
            .connection_groups(vertex.point)
            .into_iter()
            .find(|group| group.vertex == vertex.kind)
    }

    /// Vertex and connection at the far end answering `connection`
    fn answer(
        field: &Field<T>,
        origin: T::Point,
        connection: &Connection<T>,
    ) -> Option<(PathsGraphVertex<T::Point>, Connection<T>)> {
        let element = field.get(connection.target)?;
        element
            .connection_groups(connection.target)
            .into_iter()
            .find_map(|group| {
                group
                    .connections
                    .into_iter()
                    .find(|other| connection.is_answered_by(origin, other))
                    .map(|other| {
                        let vertex = PathsGraphVertex {
                            point: connection.target,
                            kind: group.vertex,
                        };
                        (vertex, other)
                    })
            })
    }

    /// Add the edge a connection produces, if its target answers and allows entry
    fn append_connection(
        graph: &mut Graph<PathsGraphEdge<T::Point>>,
        field: &Field<T>,
        from: PathsGraphVertex<T::Point>,
        connection: &Connection<T>,
    ) -> Option<EdgeId> {
        if !connection.kind.can_leave() {
            return None;
        }
        let (to, answer) = Self::answer(field, from.point, connection)?;
        if !answer.kind.can_enter() {
            return None;
        }
        let kind = PathsEdgeKind::between(connection.kind, answer.kind);
        Some(graph.append_edge(PathsGraphEdge::new(from, to, kind)))
    }

    /// Bring the graph up to date after the elements at `targets` changed
    ///
    /// Every edge touching a target is dropped. The vertices of the targets
    /// and the intermediates the dropped edges had swallowed are derived
    /// again, together with the edges leading back to them from vertices
    /// that kept their other edges. The graph is compacted afterwards.
    pub fn patch(&mut self, field: &Field<T>, targets: &[T::Point]) -> PathsPatch<T::Point> {
        let target_set: IndexSet<T::Point> = targets.iter().copied().collect();
        let stale: Vec<EdgeId> = self
            .graph
            .edges()
            .filter(|(_, edge)| target_set.iter().any(|&point| edge.touches(point)))
            .map(|(id, _)| id)
            .collect();

        let mut affected = IndexSet::new();
        let mut rederive: IndexSet<PathsGraphVertex<T::Point>> = IndexSet::new();
        for &id in &stale {
            if let Some(edge) = self.graph.remove_edge(id) {
                affected.insert(edge.source);
                affected.insert(edge.destination);
                rederive.extend(
                    edge.intermediate
                        .iter()
                        .copied()
                        .filter(|vertex| !target_set.contains(&vertex.point)),
                );
            }
        }
        for &point in &target_set {
            if let Some(element) = field.get(point) {
                rederive.extend(element.connection_groups(point).into_iter().map(|group| {
                    PathsGraphVertex {
                        point,
                        kind: group.vertex,
                    }
                }));
            }
        }

        let mut added = 0;
        for &vertex in &rederive {
            affected.insert(vertex);
            let Some(group) = Self::group_at(field, vertex) else {
                continue;
            };
            for connection in &group.connections {
                if Self::append_connection(&mut self.graph, field, vertex, connection).is_some() {
                    added += 1;
                }
                let Some((neighbor, back)) = Self::answer(field, vertex.point, connection) else {
                    continue;
                };
                if rederive.contains(&neighbor) {
                    continue;
                }
                if Self::append_connection(&mut self.graph, field, neighbor, &back).is_some() {
                    added += 1;
                    affected.insert(neighbor);
                }
            }
        }

        for compaction in compact_vertices(&mut self.graph) {
            affected.insert(compaction.removed);
            affected.insert(compaction.neighbors.0);
            affected.insert(compaction.neighbors.1);
        }
        debug!(
            targets = target_set.len(),
            removed = stale.len(),
            added,
            affected = affected.len(),
            "patched paths graph"
        );
        PathsPatch {
            affected,
            removed_edges: stale.len(),
            added_edges: added,
        }
    }
}
