//! Path search over a [`Graph`]

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use indexmap::IndexSet;

use crate::graph::multigraph::{EdgeId, Graph, GraphEdge};

/// A walk through the graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphPath<V> {
    /// Visited vertices, starting vertex first
    pub vertices: Vec<V>,
    /// Traversed edges, one fewer than vertices
    pub edges: Vec<EdgeId>,
    /// Sum of the traversed edge weights
    pub weight: usize,
}

impl<V: Copy> GraphPath<V> {
    fn start(vertex: V) -> Self {
        Self {
            vertices: vec![vertex],
            edges: Vec::new(),
            weight: 0,
        }
    }

    /// Vertex the path ends at
    pub fn last_vertex(&self) -> Option<V> {
        self.vertices.last().copied()
    }

    /// Vertex the path starts at
    pub fn first_vertex(&self) -> Option<V> {
        self.vertices.first().copied()
    }

    /// Whether no edge was traversed yet
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    fn extended(&self, id: EdgeId, vertex: V, weight: usize) -> Self {
        let mut next = self.clone();
        next.vertices.push(vertex);
        next.edges.push(id);
        next.weight += weight;
        next
    }
}

/// Constraints applied while expanding paths
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Never traverse the reverse of the edge just taken
    pub forbid_reversal: bool,
    /// Edges the search must not use
    pub excluded: HashSet<EdgeId>,
}

impl SearchOptions {
    /// Options forbidding immediate reversal
    pub fn undirected() -> Self {
        Self {
            forbid_reversal: true,
            excluded: HashSet::new(),
        }
    }

    /// Options allowing any edge
    pub fn directed() -> Self {
        Self::default()
    }

    /// Also exclude the given edges
    #[must_use]
    pub fn excluding(mut self, edges: impl IntoIterator<Item = EdgeId>) -> Self {
        self.excluded.extend(edges);
        self
    }
}

/// Breadth-first search for the first path accepted by `is_target`
///
/// Paths start with no edge from every start vertex. Each expanded path is
/// tested against `is_target` before its last vertex is checked against the
/// visited set, so a path may return to a vertex already seen, including
/// its own start. `should_stop` aborts the whole search.
pub fn first_path<E, F, S>(
    graph: &Graph<E>,
    starts: impl IntoIterator<Item = E::Vertex>,
    options: &SearchOptions,
    mut is_target: F,
    mut should_stop: S,
) -> Option<GraphPath<E::Vertex>>
where
    E: GraphEdge,
    F: FnMut(&GraphPath<E::Vertex>) -> bool,
    S: FnMut(&GraphPath<E::Vertex>) -> bool,
{
    let mut visited: IndexSet<E::Vertex> = IndexSet::new();
    let mut queue: VecDeque<GraphPath<E::Vertex>> = VecDeque::new();
    for start in starts {
        if visited.insert(start) {
            queue.push_back(GraphPath::start(start));
        }
    }

    while let Some(path) = queue.pop_front() {
        if should_stop(&path) {
            return None;
        }
        let Some(current) = path.last_vertex() else {
            continue;
        };
        let previous = path.edges.last().and_then(|&id| graph.edge(id));

        for (id, edge) in graph.outgoing(current) {
            if options.excluded.contains(&id) {
                continue;
            }
            if options.forbid_reversal && previous.is_some_and(|previous| edge.is_reverse_of(previous)) {
                continue;
            }
            let next = path.extended(id, edge.destination(), edge.weight());
            if is_target(&next) {
                return Some(next);
            }
            if visited.insert(edge.destination()) {
                queue.push_back(next);
            }
        }
    }
    None
}

/// Minimum-weight path from `from` to `to` over admitted edges
///
/// Returns an empty path when both vertices coincide.
pub fn shortest_path<E, A>(
    graph: &Graph<E>,
    from: E::Vertex,
    to: E::Vertex,
    excluded: &HashSet<EdgeId>,
    mut admit: A,
) -> Option<GraphPath<E::Vertex>>
where
    E: GraphEdge,
    A: FnMut(&E) -> bool,
{
    if from == to {
        return Some(GraphPath::start(from));
    }

    let mut distances: HashMap<E::Vertex, usize> = HashMap::new();
    let mut arrivals: HashMap<E::Vertex, (EdgeId, E::Vertex)> = HashMap::new();
    let mut heap = BinaryHeap::new();
    distances.insert(from, 0);
    heap.push(Reverse((0_usize, from)));

    while let Some(Reverse((distance, vertex))) = heap.pop() {
        if vertex == to {
            break;
        }
        if distances.get(&vertex).is_some_and(|&best| distance > best) {
            continue;
        }
        for (id, edge) in graph.outgoing(vertex) {
            if excluded.contains(&id) || !admit(edge) {
                continue;
            }
            let destination = edge.destination();
            let candidate = distance + edge.weight();
            if distances.get(&destination).is_none_or(|&best| candidate < best) {
                distances.insert(destination, candidate);
                arrivals.insert(destination, (id, vertex));
                heap.push(Reverse((candidate, destination)));
            }
        }
    }

    let weight = *distances.get(&to)?;
    let mut vertices = vec![to];
    let mut edges = Vec::new();
    let mut current = to;
    while current != from {
        let &(id, previous) = arrivals.get(&current)?;
        edges.push(id);
        vertices.push(previous);
        current = previous;
    }
    vertices.reverse();
    edges.reverse();
    Some(GraphPath {
        vertices,
        edges,
        weight,
    })
}
