//! Break every cycle shorter than a minimum length

use std::collections::HashSet;

use indexmap::IndexSet;
use tracing::{debug, trace};

use crate::generation::{Generator, RepairStrategy};
use crate::graph::{EdgeId, Graph, GraphEdge, shortest_path};
use crate::io::configuration::{DEFAULT_MIN_CYCLE_LENGTH, MAX_CUTS_PER_AREA, MIN_CYCLE_PROVIDER};
use crate::io::error::Result;
use crate::paths::{AreaId, PathsGraphEdge};
use crate::restriction::ProviderId;
use crate::strategies::support::{cut_first, cut_steps};
use crate::topology::Topology;

/// Cycle found inside one area
struct ShortCycle<P> {
    length: usize,
    key: Vec<P>,
    steps: Vec<(P, P)>,
}

/// Walls off one step of each two-way cycle shorter than `min_length`
///
/// Cycles are measured in cell steps. A cycle whose every cut failed is
/// remembered and not attempted again.
#[derive(Debug, Clone)]
pub struct MinLengthCycleStrategy<T: Topology> {
    min_length: usize,
    failed: IndexSet<Vec<T::Point>>,
}

impl<T: Topology> Default for MinLengthCycleStrategy<T> {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_CYCLE_LENGTH)
    }
}

impl<T: Topology> MinLengthCycleStrategy<T> {
    /// Strategy keeping cycles of at least `min_length` steps
    pub fn new(min_length: usize) -> Self {
        Self {
            min_length,
            failed: IndexSet::new(),
        }
    }

    /// Minimum cycle length kept
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    /// Number of cycles given up on
    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    /// Shortest cycle below the minimum not given up on yet, and whether a
    /// given-up cycle was skipped
    fn shortest_cycle(
        &self,
        graph: &Graph<PathsGraphEdge<T::Point>>,
    ) -> (Option<ShortCycle<T::Point>>, bool) {
        let mut best: Option<ShortCycle<T::Point>> = None;
        let mut skipped = false;
        for (id, edge) in graph.edges() {
            if !edge.kind.is_bidirectional() {
                continue;
            }
            let mut excluded: HashSet<EdgeId> = HashSet::from([id]);
            excluded.extend(graph.find_reverse(id));
            let Some(path) = shortest_path(
                graph,
                edge.destination(),
                edge.source(),
                &excluded,
                |candidate| candidate.kind.is_bidirectional(),
            ) else {
                continue;
            };

            let length = edge.length() + path.weight;
            if length >= self.min_length || best.as_ref().is_some_and(|cycle| cycle.length <= length) {
                continue;
            }
            let mut steps = cut_steps(edge);
            for path_edge in path.edges.iter().filter_map(|&path_id| graph.edge(path_id)) {
                steps.extend(cut_steps(path_edge));
            }
            let mut key: Vec<T::Point> = steps.iter().map(|&(from, _)| from).collect();
            key.sort();
            key.dedup();
            if self.failed.contains(&key) {
                skipped = true;
                continue;
            }
            best = Some(ShortCycle { length, key, steps });
        }
        (best, skipped)
    }
}

impl<T: Topology> RepairStrategy<T> for MinLengthCycleStrategy<T> {
    fn name(&self) -> &'static str {
        "min-length-cycle"
    }

    fn handle(&mut self, area: AreaId, generator: &mut Generator<T>) -> Result<bool> {
        for _ in 0..MAX_CUTS_PER_AREA {
            let (_, areas) = generator.graphs("cycle trimming")?;
            let Some(current) = areas.area(area) else {
                return Ok(true);
            };
            let (best, skipped) = self.shortest_cycle(current.graph());
            let Some(cycle) = best else {
                return Ok(!skipped);
            };

            let mut steps = cycle.steps;
            generator.selector().shuffle(&mut steps);
            if cut_first(generator, &steps, ProviderId::Strategy(MIN_CYCLE_PROVIDER))? {
                trace!(%area, length = cycle.length, "cut short cycle");
            } else {
                debug!(%area, length = cycle.length, "short cycle could not be cut");
                self.failed.insert(cycle.key);
            }
        }
        Ok(false)
    }

    fn postprocessing(&mut self, generator: &mut Generator<T>) -> Result<()> {
        generator.build_graphs();
        let ids = generator.graphs("cycle trimming")?.1.ids();
        for id in ids {
            self.handle(id, generator)?;
        }
        Ok(())
    }
}
