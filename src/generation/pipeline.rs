//! Full generation: collapse, graph analysis and bounded repair passes

use indexmap::IndexSet;
use tracing::info;

use crate::generation::generator::Generator;
use crate::generation::report::{GenerationReport, StrategyOutcome};
use crate::generation::strategy::RepairStrategy;
use crate::io::configuration::MAX_REPAIR_ROUNDS;
use crate::io::error::Result;
use crate::paths::AreaId;
use crate::topology::Topology;

/// Strategies run after the collapse loop, each slot optional
pub struct RepairPlan<T: Topology> {
    /// Connects areas until a single one remains
    pub isolated: Option<Box<dyn RepairStrategy<T>>>,
    /// Runs once per area to reshape its cycles
    pub cycled: Option<Box<dyn RepairStrategy<T>>>,
    /// Runs once per area to remove redundant edges
    pub edge_cutting: Option<Box<dyn RepairStrategy<T>>>,
}

impl<T: Topology> Default for RepairPlan<T> {
    fn default() -> Self {
        Self {
            isolated: None,
            cycled: None,
            edge_cutting: None,
        }
    }
}

impl<T: Topology> RepairPlan<T> {
    /// Plan without any strategy
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the isolated-area strategy
    #[must_use]
    pub fn with_isolated(mut self, strategy: impl RepairStrategy<T> + 'static) -> Self {
        self.isolated = Some(Box::new(strategy));
        self
    }

    /// Set the cycled-area strategy
    #[must_use]
    pub fn with_cycled(mut self, strategy: impl RepairStrategy<T> + 'static) -> Self {
        self.cycled = Some(Box::new(strategy));
        self
    }

    /// Set the edge-cutting strategy
    #[must_use]
    pub fn with_edge_cutting(mut self, strategy: impl RepairStrategy<T> + 'static) -> Self {
        self.edge_cutting = Some(Box::new(strategy));
        self
    }
}

impl<T: Topology> Generator<T> {
    /// Collapse every node, build the graphs and run the plan's repairs
    ///
    /// Isolated areas are handled smallest first until one area remains or
    /// every remaining area failed; cycled-area and edge-cutting strategies
    /// visit each area once. Every strategy gets its postprocessing hook.
    ///
    /// # Errors
    ///
    /// Propagates contradictions under the failing policy and strategy errors
    pub fn generate(&mut self, plan: &mut RepairPlan<T>) -> Result<GenerationReport> {
        self.collapse_all()?;
        self.build_graphs();
        info!(
            areas = self.areas_graph().map_or(0, |areas| areas.len()),
            contradictions = self.stats().contradictions,
            "field collapsed"
        );

        let isolated = match plan.isolated.as_deref_mut() {
            Some(strategy) => Some(self.repair_isolated(strategy)?),
            None => None,
        };
        let cycled = match plan.cycled.as_deref_mut() {
            Some(strategy) => Some(self.repair_each_area(strategy)?),
            None => None,
        };
        let edge_cutting = match plan.edge_cutting.as_deref_mut() {
            Some(strategy) => Some(self.repair_each_area(strategy)?),
            None => None,
        };
        Ok(GenerationReport::collect(self, isolated, cycled, edge_cutting))
    }

    fn repair_isolated(&mut self, strategy: &mut dyn RepairStrategy<T>) -> Result<StrategyOutcome> {
        let mut outcome = StrategyOutcome::new(strategy.name());
        let mut failed: IndexSet<AreaId> = IndexSet::new();

        for _ in 0..MAX_REPAIR_ROUNDS {
            let (_, areas) = self.graphs("isolated area repair")?;
            if areas.len() <= 1 {
                break;
            }
            let Some(area) = areas
                .ids_by_size()
                .into_iter()
                .find(|id| !failed.contains(id))
            else {
                break;
            };
            outcome.attempts += 1;
            if strategy.handle(area, self)? {
                outcome.repaired += 1;
            } else {
                failed.insert(area);
            }
        }
        strategy.postprocessing(self)?;

        let (_, areas) = self.graphs("isolated area repair")?;
        outcome.unrepaired = areas.len().saturating_sub(1);
        info!(
            strategy = outcome.strategy,
            attempts = outcome.attempts,
            areas = areas.len(),
            "isolated area repair finished"
        );
        Ok(outcome)
    }

    fn repair_each_area(&mut self, strategy: &mut dyn RepairStrategy<T>) -> Result<StrategyOutcome> {
        let mut outcome = StrategyOutcome::new(strategy.name());
        let ids = self.graphs("area repair")?.1.ids();

        for area in ids {
            if !self.graphs("area repair")?.1.contains(area) {
                continue;
            }
            outcome.attempts += 1;
            if strategy.handle(area, self)? {
                outcome.repaired += 1;
            } else {
                outcome.unrepaired += 1;
            }
        }
        strategy.postprocessing(self)?;
        info!(
            strategy = outcome.strategy,
            attempts = outcome.attempts,
            unrepaired = outcome.unrepaired,
            "area repair finished"
        );
        Ok(outcome)
    }
}
