//! Randomly remove two-way edges that have an alternative route

use indexmap::IndexSet;
use tracing::trace;

use crate::generation::{Generator, RepairStrategy};
use crate::graph::{EdgeId, Graph, GraphEdge, SearchOptions, first_path};
use crate::io::configuration::{EDGE_CUTTING_PROVIDER, MAX_CUTS_PER_AREA};
use crate::io::error::{Result, invalid_parameter};
use crate::paths::{AreaId, PathsGraphEdge};
use crate::restriction::ProviderId;
use crate::strategies::support::{cut_first, edge_steps};
use crate::topology::Topology;

/// Cuts each redundant two-way edge with a fixed probability
///
/// An edge is redundant when its endpoints stay connected without it, so a
/// cut never splits an area. Every edge is decided once.
#[derive(Debug, Clone)]
pub struct RedundantEdgeCutting<T: Topology> {
    probability: f64,
    decided: IndexSet<Vec<T::Point>>,
}

impl<T: Topology> RedundantEdgeCutting<T> {
    /// Strategy cutting each redundant edge with `probability`
    ///
    /// # Errors
    ///
    /// Returns an error when `probability` lies outside `0.0..=1.0`
    pub fn new(probability: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(invalid_parameter(
                "cut_probability",
                &probability,
                &"must lie within 0.0..=1.0",
            ));
        }
        Ok(Self {
            probability,
            decided: IndexSet::new(),
        })
    }

    /// Probability of cutting a redundant edge
    pub const fn probability(&self) -> f64 {
        self.probability
    }

    /// Number of edges decided so far
    pub fn decided_count(&self) -> usize {
        self.decided.len()
    }

    fn edge_key(edge: &PathsGraphEdge<T::Point>) -> Vec<T::Point> {
        let mut key = edge.points();
        key.sort();
        key.dedup();
        key
    }

    /// First undecided two-way edge whose endpoints stay two-way connected
    /// without it
    fn next_redundant(
        &self,
        graph: &Graph<PathsGraphEdge<T::Point>>,
    ) -> Option<(EdgeId, Vec<T::Point>)> {
        let directed: Vec<EdgeId> = graph
            .edges()
            .filter(|(_, edge)| !edge.kind.is_bidirectional())
            .map(|(id, _)| id)
            .collect();
        for (id, edge) in graph.edges() {
            if !edge.kind.is_bidirectional() || edge_steps(edge).is_empty() {
                continue;
            }
            let key = Self::edge_key(edge);
            if self.decided.contains(&key) {
                continue;
            }
            let options = SearchOptions::undirected()
                .excluding(directed.iter().copied())
                .excluding([id].into_iter().chain(graph.find_reverse(id)));
            let target = edge.destination();
            let alternate = first_path(
                graph,
                [edge.source()],
                &options,
                |path| path.last_vertex() == Some(target),
                |_| false,
            );
            if alternate.is_some() {
                return Some((id, key));
            }
        }
        None
    }
}

impl<T: Topology> RepairStrategy<T> for RedundantEdgeCutting<T> {
    fn name(&self) -> &'static str {
        "edge-cutting"
    }

    fn handle(&mut self, area: AreaId, generator: &mut Generator<T>) -> Result<bool> {
        for _ in 0..MAX_CUTS_PER_AREA {
            let (_, areas) = generator.graphs("edge cutting")?;
            let Some(current) = areas.area(area) else {
                break;
            };
            let Some((id, key)) = self.next_redundant(current.graph()) else {
                break;
            };
            let mut steps = current.graph().edge(id).map(edge_steps).unwrap_or_default();
            self.decided.insert(key);

            if !generator.selector().chance(self.probability) {
                continue;
            }
            generator.selector().shuffle(&mut steps);
            let cut = cut_first(generator, &steps, ProviderId::Strategy(EDGE_CUTTING_PROVIDER))?;
            trace!(%area, cut, "redundant edge decided");
        }
        Ok(true)
    }
}
