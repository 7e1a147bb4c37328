//! Summary of a generation run

use indexmap::IndexMap;

use crate::element::ElementCategory;
use crate::generation::generator::{GenerationStats, Generator};
use crate::io::error::{LabyrinthError, Result};
use crate::topology::Topology;

/// Result of running one repair strategy over the labyrinth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyOutcome {
    /// Name of the strategy
    pub strategy: &'static str,
    /// Number of `handle` invocations
    pub attempts: usize,
    /// Invocations that reported success
    pub repaired: usize,
    /// Issues left once the strategy gave up
    pub unrepaired: usize,
}

impl StrategyOutcome {
    /// Outcome with every counter at zero
    pub const fn new(strategy: &'static str) -> Self {
        Self {
            strategy,
            attempts: 0,
            repaired: 0,
            unrepaired: 0,
        }
    }
}

/// What a generation run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Generator counters
    pub stats: GenerationStats,
    /// Number of determined elements per kind
    pub element_counts: IndexMap<ElementCategory, usize>,
    /// Areas left after repairs
    pub area_count: usize,
    /// Vertices of the final paths graph
    pub paths_vertices: usize,
    /// Edges of the final paths graph
    pub paths_edges: usize,
    /// Isolated-area repair result
    pub isolated: Option<StrategyOutcome>,
    /// Cycled-area repair result
    pub cycled: Option<StrategyOutcome>,
    /// Edge-cutting repair result
    pub edge_cutting: Option<StrategyOutcome>,
}

impl GenerationReport {
    /// Collect counters from a generator and the strategy outcomes
    pub fn collect<T: Topology>(
        generator: &Generator<T>,
        isolated: Option<StrategyOutcome>,
        cycled: Option<StrategyOutcome>,
        edge_cutting: Option<StrategyOutcome>,
    ) -> Self {
        let mut element_counts: IndexMap<ElementCategory, usize> = IndexMap::new();
        for (_, element) in generator.field().elements() {
            *element_counts.entry(element.category()).or_insert(0) += 1;
        }
        element_counts.sort_keys();
        let (paths_vertices, paths_edges) = generator
            .paths_graph()
            .map_or((0, 0), |paths| (paths.graph().vertex_count(), paths.graph().edge_count()));
        Self {
            stats: generator.stats(),
            element_counts,
            area_count: generator.areas_graph().map_or(0, |areas| areas.len()),
            paths_vertices,
            paths_edges,
            isolated,
            cycled,
            edge_cutting,
        }
    }

    /// Outcomes of the strategies that ran
    pub fn outcomes(&self) -> impl Iterator<Item = &StrategyOutcome> + '_ {
        [&self.isolated, &self.cycled, &self.edge_cutting]
            .into_iter()
            .flatten()
    }

    /// Fail when a strategy left issues unrepaired
    ///
    /// # Errors
    ///
    /// Returns [`LabyrinthError::StrategyExhausted`] for the first strategy
    /// with unrepaired issues
    pub fn ensure_complete(&self) -> Result<()> {
        match self.outcomes().find(|outcome| outcome.unrepaired > 0) {
            Some(outcome) => Err(LabyrinthError::StrategyExhausted {
                strategy: outcome.strategy,
                reason: format!("{} issue(s) left unrepaired", outcome.unrepaired),
            }),
            None => Ok(()),
        }
    }

    /// Human readable summary, one line per fact
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        let counts: Vec<String> = self
            .element_counts
            .iter()
            .map(|(category, count)| format!("{category}={count}"))
            .collect();
        lines.push(format!("Elements: {}", counts.join(", ")));
        lines.push(format!(
            "Collapses: {}, contradictions: {}",
            self.stats.collapses, self.stats.contradictions
        ));
        lines.push(format!(
            "Regenerations: {} committed, {} rolled back",
            self.stats.regenerations, self.stats.failed_regenerations
        ));
        lines.push(format!(
            "Paths graph: {} vertices, {} edges; areas: {}",
            self.paths_vertices, self.paths_edges, self.area_count
        ));
        for outcome in self.outcomes() {
            lines.push(format!(
                "Strategy {}: {} attempts, {} repaired, {} unrepaired",
                outcome.strategy, outcome.attempts, outcome.repaired, outcome.unrepaired
            ));
        }
        lines
    }
}
