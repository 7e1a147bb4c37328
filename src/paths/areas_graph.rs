//! Graph of areas linked by the paths edges running between them

use std::collections::HashMap;

use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::graph::{EdgeId, Graph, SearchOptions, first_path};
use crate::paths::area::{AreaEdge, AreaId, PathsGraphArea};
use crate::paths::paths_graph::{PathsGraph, PathsGraphVertex, PathsPatch};
use crate::topology::Topology;

type Vertex<T> = PathsGraphVertex<<T as Topology>::Point>;

/// Partition of the paths graph into areas plus the edges between areas
///
/// Initially every area is a maximal set of vertices connected by
/// bidirectional edges. Grouping later merges areas that reach each other
/// through one-way edges.
#[derive(Debug, Clone)]
pub struct AreasGraph<T: Topology> {
    areas: IndexMap<AreaId, PathsGraphArea<T::Point>>,
    graph: Graph<AreaEdge<T::Point>>,
    vertex_area: HashMap<Vertex<T>, AreaId>,
    next_id: usize,
}

impl<T: Topology> AreasGraph<T> {
    /// Split a paths graph into its bidirectional components
    pub fn derive(paths: &PathsGraph<T>) -> Self {
        let mut areas = Self {
            areas: IndexMap::new(),
            graph: Graph::without_pruning(),
            vertex_area: HashMap::new(),
            next_id: 0,
        };
        let seeds: IndexSet<Vertex<T>> = paths.graph().vertices().collect();
        let mut created = Vec::new();
        for component in Self::components(paths, &seeds) {
            let id = areas.fresh_id();
            areas.insert_area(paths, id, &component);
            created.push(id);
        }
        areas.link(paths, &created);
        debug!(
            areas = areas.len(),
            links = areas.graph.edge_count(),
            "derived areas graph"
        );
        areas
    }

    /// Number of areas
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Whether there is no area at all
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// Area identifiers in insertion order
    pub fn ids(&self) -> Vec<AreaId> {
        self.areas.keys().copied().collect()
    }

    /// Area identifiers ordered by ascending vertex count
    pub fn ids_by_size(&self) -> Vec<AreaId> {
        let mut ids = self.ids();
        ids.sort_by_key(|id| self.areas.get(id).map_or(0, PathsGraphArea::vertex_count));
        ids
    }

    /// Whether an area exists
    pub fn contains(&self, id: AreaId) -> bool {
        self.areas.contains_key(&id)
    }

    /// Area by identifier
    pub fn area(&self, id: AreaId) -> Option<&PathsGraphArea<T::Point>> {
        self.areas.get(&id)
    }

    /// Every area in insertion order
    pub fn areas(&self) -> impl Iterator<Item = &PathsGraphArea<T::Point>> + '_ {
        self.areas.values()
    }

    /// Graph whose vertices are area identifiers
    pub const fn graph(&self) -> &Graph<AreaEdge<T::Point>> {
        &self.graph
    }

    /// Area holding a paths-graph vertex
    pub fn area_of_vertex(&self, vertex: Vertex<T>) -> Option<AreaId> {
        self.vertex_area.get(&vertex).copied()
    }

    /// Area covering each point
    ///
    /// Points whose bridge levels belong to different areas map to the area
    /// of whichever level comes first.
    pub fn point_areas(&self) -> HashMap<T::Point, AreaId> {
        let mut map = HashMap::new();
        for area in self.areas.values() {
            for point in area.points() {
                map.entry(point).or_insert(area.id());
            }
        }
        map
    }

    /// Area-level link carrying a paths edge
    pub fn link_of(&self, paths_edge: EdgeId) -> Option<&AreaEdge<T::Point>> {
        self.graph
            .edges()
            .map(|(_, edge)| edge)
            .find(|edge| edge.paths_edge == paths_edge)
    }

    /// Whether `to` can be reached from `from` following area links
    pub fn reaches(&self, from: AreaId, to: AreaId) -> bool {
        from == to
            || first_path(
                &self.graph,
                [from],
                &SearchOptions::directed(),
                |path| path.last_vertex() == Some(to),
                |_| false,
            )
            .is_some()
    }

    fn fresh_id(&mut self) -> AreaId {
        let id = AreaId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Bidirectional components containing the seeds
    fn components(paths: &PathsGraph<T>, seeds: &IndexSet<Vertex<T>>) -> Vec<IndexSet<Vertex<T>>> {
        let graph = paths.graph();
        let mut assigned: IndexSet<Vertex<T>> = IndexSet::new();
        let mut components = Vec::new();
        for &seed in seeds {
            if assigned.contains(&seed) || !graph.contains_vertex(seed) {
                continue;
            }
            let mut component = IndexSet::new();
            let mut stack = vec![seed];
            component.insert(seed);
            while let Some(vertex) = stack.pop() {
                let neighbors = graph
                    .outgoing(vertex)
                    .filter(|(_, edge)| edge.kind.is_bidirectional())
                    .map(|(_, edge)| edge.destination)
                    .chain(
                        graph
                            .incoming(vertex)
                            .filter(|(_, edge)| edge.kind.is_bidirectional())
                            .map(|(_, edge)| edge.source),
                    );
                for neighbor in neighbors {
                    if component.insert(neighbor) {
                        stack.push(neighbor);
                    }
                }
            }
            assigned.extend(component.iter().copied());
            components.push(component);
        }
        components
    }

    fn insert_area(&mut self, paths: &PathsGraph<T>, id: AreaId, vertices: &IndexSet<Vertex<T>>) {
        let mut area = PathsGraphArea::new(id);
        for &vertex in vertices {
            area.insert_vertex(vertex);
            self.vertex_area.insert(vertex, id);
        }
        for &vertex in vertices {
            for (_, edge) in paths.graph().outgoing(vertex) {
                if vertices.contains(&edge.destination) {
                    area.insert_edge(edge.clone());
                }
            }
        }
        self.graph.append_vertex(id);
        self.areas.insert(id, area);
    }

    /// Create the area links of paths edges leaving or entering the given areas
    fn link(&mut self, paths: &PathsGraph<T>, ids: &[AreaId]) {
        for &id in ids {
            let Some(vertices) = self.areas.get(&id).map(|area| area.vertices().collect::<Vec<_>>()) else {
                continue;
            };
            for vertex in vertices {
                let crossing = paths
                    .graph()
                    .outgoing(vertex)
                    .chain(paths.graph().incoming(vertex));
                for (paths_edge, edge) in crossing {
                    let source = self.vertex_area.get(&edge.source).copied();
                    let destination = self.vertex_area.get(&edge.destination).copied();
                    let (Some(source), Some(destination)) = (source, destination) else {
                        continue;
                    };
                    let linked = self
                        .graph
                        .outgoing(source)
                        .any(|(_, link)| link.paths_edge == paths_edge);
                    if source != destination && !linked {
                        self.graph.append_edge(AreaEdge {
                            source,
                            destination,
                            paths_edge,
                            edge: edge.clone(),
                        });
                    }
                }
            }
        }
    }

    /// Merge areas into the first existing one, returning the merged identifier
    ///
    /// Links between merged areas become internal edges; links towards other
    /// areas are re-attached to the merged area.
    pub fn merge_areas(&mut self, ids: &[AreaId]) -> Option<AreaId> {
        let mut members: IndexSet<AreaId> = IndexSet::new();
        members.extend(ids.iter().copied().filter(|id| self.areas.contains_key(id)));
        let target = *members.first()?;

        for &member in members.iter().skip(1) {
            let Some(area) = self.areas.shift_remove(&member) else {
                continue;
            };
            for vertex in area.vertices() {
                self.vertex_area.insert(vertex, target);
            }
            if let Some(merged) = self.areas.get_mut(&target) {
                merged.absorb(&area);
            }
            for (_, link) in self.graph.remove_vertex(member) {
                let source = if members.contains(&link.source) { target } else { link.source };
                let destination = if members.contains(&link.destination) {
                    target
                } else {
                    link.destination
                };
                if source == destination {
                    if let Some(merged) = self.areas.get_mut(&target) {
                        merged.insert_edge(link.edge);
                    }
                } else {
                    self.graph.append_edge(AreaEdge {
                        source,
                        destination,
                        ..link
                    });
                }
            }
        }
        if members.len() > 1 {
            debug!(target_area = %target, merged = members.len(), "merged areas");
        }
        Some(target)
    }

    /// Bring the areas up to date with a patched paths graph
    ///
    /// Every area holding an affected vertex is dissolved and its vertices
    /// regrouped. Dissolving spreads until the new components only contain
    /// vertices of dissolved areas. A new component keeps the identifier of
    /// the first dissolved area it overlaps. Returns the identifiers of the
    /// rebuilt areas.
    pub fn patch(&mut self, paths: &PathsGraph<T>, patch: &PathsPatch<T::Point>) -> Vec<AreaId> {
        let mut dissolved: IndexMap<AreaId, IndexSet<Vertex<T>>> = IndexMap::new();
        let mut seeds: IndexSet<Vertex<T>> = patch
            .affected
            .iter()
            .copied()
            .filter(|&vertex| paths.graph().contains_vertex(vertex))
            .collect();
        let mut pending: Vec<AreaId> = patch
            .affected
            .iter()
            .filter_map(|vertex| self.vertex_area.get(vertex).copied())
            .collect();

        let components = loop {
            for id in pending.drain(..) {
                if dissolved.contains_key(&id) {
                    continue;
                }
                let Some(area) = self.areas.shift_remove(&id) else {
                    continue;
                };
                self.graph.remove_vertex(id);
                let vertices: IndexSet<Vertex<T>> = area.vertices().collect();
                for vertex in &vertices {
                    self.vertex_area.remove(vertex);
                    if paths.graph().contains_vertex(*vertex) {
                        seeds.insert(*vertex);
                    }
                }
                dissolved.insert(id, vertices);
            }
            let components = Self::components(paths, &seeds);
            pending = components
                .iter()
                .flatten()
                .filter_map(|vertex| self.vertex_area.get(vertex).copied())
                .collect();
            if pending.is_empty() {
                break components;
            }
        };

        let mut rebuilt = Vec::with_capacity(components.len());
        for component in &components {
            let reused = dissolved
                .iter()
                .find(|(_, old)| component.iter().any(|vertex| old.contains(vertex)))
                .map(|(&id, _)| id);
            let id = match reused {
                Some(id) => {
                    dissolved.shift_remove(&id);
                    id
                }
                None => self.fresh_id(),
            };
            self.insert_area(paths, id, component);
            rebuilt.push(id);
        }
        self.link(paths, &rebuilt);
        debug!(
            rebuilt = rebuilt.len(),
            areas = self.len(),
            "patched areas graph"
        );
        rebuilt
    }
}
