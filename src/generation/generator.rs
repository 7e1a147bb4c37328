//! Collapse loop, restriction propagation and the regenerate transaction

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, trace};

use crate::element::{CategoryWeights, Element, ElementCategory, TeleporterDirection};
use crate::generation::entropy_index::EntropyIndex;
use crate::generation::transaction::RegenerateTransaction;
use crate::io::configuration::DEFAULT_SEED;
use crate::io::error::{LabyrinthError, Result, invalid_parameter, point_outside};
use crate::math::random::RandomSelector;
use crate::paths::{AreasGraph, PathsGraph};
use crate::restriction::{ProviderId, Restriction};
use crate::superposition::{CollapseContext, CombinatoricsCache, NodeSuperposition, SuperpositionRegistry};
use crate::topology::{Field, Topology};

/// What to do when a node runs out of options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContradictionPolicy {
    /// Place a solid element and continue
    #[default]
    Fallback,
    /// Abort the collapse loop with an error
    Fail,
}

/// Runtime configuration of a generator
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Registered element kinds
    pub registry: SuperpositionRegistry,
    /// Per-kind collapse weights
    pub weights: CategoryWeights,
    /// Handling of local contradictions
    pub contradiction_policy: ContradictionPolicy,
    /// Seed of the random source
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(SuperpositionRegistry::basic())
    }
}

impl GeneratorConfig {
    /// Configuration with default weights, fallback policy and seed
    pub fn new(registry: SuperpositionRegistry) -> Self {
        Self {
            registry,
            weights: CategoryWeights::new(),
            contradiction_policy: ContradictionPolicy::default(),
            seed: DEFAULT_SEED,
        }
    }

    /// Replace the seed
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the weights
    #[must_use]
    pub fn with_weights(mut self, weights: CategoryWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Replace the contradiction policy
    #[must_use]
    pub const fn with_contradiction_policy(mut self, policy: ContradictionPolicy) -> Self {
        self.contradiction_policy = policy;
        self
    }
}

/// Counters describing a generation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Nodes collapsed by the main loop or placed by prefill
    pub collapses: usize,
    /// Nodes resolved by the contradiction policy
    pub contradictions: usize,
    /// Regenerate transactions committed
    pub regenerations: usize,
    /// Regenerate transactions rolled back
    pub failed_regenerations: usize,
}

/// Owner of the field, the node superpositions and the derived graphs
pub struct Generator<T: Topology> {
    config: GeneratorConfig,
    field: Field<T>,
    nodes: Vec<NodeSuperposition<T>>,
    cache: CombinatoricsCache<T>,
    selector: RandomSelector,
    entropy_index: EntropyIndex<T::Point>,
    paths: Option<PathsGraph<T>>,
    areas: Option<AreasGraph<T>>,
    stats: GenerationStats,
    iteration: usize,
}

impl<T: Topology> Generator<T> {
    /// Create a generator whose border edges are walls
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error for an empty field or for
    /// non-positive weights
    pub fn new(size: T::Size, config: GeneratorConfig) -> Result<Self> {
        config.weights.validate()?;
        let field = Field::new(size);
        if field.is_empty() {
            return Err(invalid_parameter("size", &format!("{size:?}"), &"field has no points"));
        }

        let mut cache = CombinatoricsCache::new();
        let nodes = field
            .points()
            .iter()
            .map(|&point| config.registry.node(point, &mut cache))
            .collect();
        let selector = RandomSelector::new(config.seed);

        let mut generator = Self {
            config,
            field,
            nodes,
            cache,
            selector,
            entropy_index: EntropyIndex::new(),
            paths: None,
            areas: None,
            stats: GenerationStats::default(),
            iteration: 0,
        };
        generator.apply_border_walls();
        for node in &generator.nodes {
            generator.entropy_index.update(node.point(), node.entropy());
        }
        debug!(
            points = generator.field.len(),
            kinds = generator.config.registry.categories().len(),
            seed = generator.config.seed,
            "generator initialised"
        );
        Ok(generator)
    }

    fn apply_border_walls(&mut self) {
        let size = self.field.size();
        for node in &mut self.nodes {
            let point = node.point();
            for &edge in T::all_edges() {
                if !T::contains(size, T::next_point(point, edge)) {
                    node.apply_restriction(Restriction::wall(edge), ProviderId::Border, false);
                }
            }
        }
    }

    /// Active configuration
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Determined elements
    pub const fn field(&self) -> &Field<T> {
        &self.field
    }

    /// Counters of the run so far
    pub const fn stats(&self) -> GenerationStats {
        self.stats
    }

    /// Memo cache statistics
    pub const fn cache(&self) -> &CombinatoricsCache<T> {
        &self.cache
    }

    /// Number of collapse iterations performed
    pub const fn iteration(&self) -> usize {
        self.iteration
    }

    /// Number of points still undetermined
    pub fn remaining(&self) -> usize {
        self.entropy_index.len()
    }

    /// Whether every point is determined
    pub fn is_complete(&self) -> bool {
        self.field.is_complete()
    }

    /// Random source of the run, shared with repair strategies
    pub const fn selector(&mut self) -> &mut RandomSelector {
        &mut self.selector
    }

    /// Node superposition at a point
    pub fn node(&self, point: T::Point) -> Option<&NodeSuperposition<T>> {
        self.field.index_of(point).and_then(|index| self.nodes.get(index))
    }

    fn node_mut(&mut self, point: T::Point) -> Option<&mut NodeSuperposition<T>> {
        self.field.index_of(point).and_then(|index| self.nodes.get_mut(index))
    }

    /// Paths graph, once built
    pub const fn paths_graph(&self) -> Option<&PathsGraph<T>> {
        self.paths.as_ref()
    }

    /// Areas graph, once built
    pub const fn areas_graph(&self) -> Option<&AreasGraph<T>> {
        self.areas.as_ref()
    }

    /// Both graphs, failing when they were not built yet
    ///
    /// # Errors
    ///
    /// Returns [`LabyrinthError::GraphsNotBuilt`] before [`Generator::build_graphs`]
    pub fn graphs(&self, operation: &'static str) -> Result<(&PathsGraph<T>, &AreasGraph<T>)> {
        match (&self.paths, &self.areas) {
            (Some(paths), Some(areas)) => Ok((paths, areas)),
            _ => Err(LabyrinthError::GraphsNotBuilt { operation }),
        }
    }

    /// Record a restriction at an undetermined or determined point
    ///
    /// # Errors
    ///
    /// Returns an error when the point lies outside the field
    pub fn restrict(
        &mut self,
        point: T::Point,
        restriction: Restriction<T>,
        provider: ProviderId<T::Point>,
        onetime: bool,
    ) -> Result<()> {
        if !self.apply_restriction_at(point, restriction, provider, onetime) {
            return Err(point_outside(&point, "restrict"));
        }
        Ok(())
    }

    fn apply_restriction_at(
        &mut self,
        point: T::Point,
        restriction: Restriction<T>,
        provider: ProviderId<T::Point>,
        onetime: bool,
    ) -> bool {
        let determined = self.field.is_determined(point);
        let Some(node) = self.node_mut(point) else {
            return false;
        };
        node.apply_restriction(restriction, provider, onetime);
        let entropy = node.entropy();
        if !determined {
            self.entropy_index.update(point, entropy);
        }
        true
    }

    /// Retract everything a provider imposed on any node
    ///
    /// Returns the number of retracted restrictions.
    pub fn reset_restrictions(&mut self, provider: ProviderId<T::Point>) -> usize {
        let mut removed = 0;
        for node in &mut self.nodes {
            let count = node.reset_restrictions(provider, &mut self.cache);
            if count > 0 && !self.field.is_determined(node.point()) {
                self.entropy_index.update(node.point(), node.entropy());
            }
            removed += count;
        }
        removed
    }

    /// Place concrete elements before the collapse loop
    ///
    /// Placed elements propagate exactly like collapsed ones.
    ///
    /// # Errors
    ///
    /// Returns an error when a point lies outside the field
    pub fn apply_prefill(
        &mut self,
        placements: impl IntoIterator<Item = (T::Point, Element<T>)>,
    ) -> Result<()> {
        for (point, element) in placements {
            if !self.field.contains(point) {
                return Err(point_outside(&point, "prefill"));
            }
            self.place(point, element);
        }
        Ok(())
    }

    fn place(&mut self, point: T::Point, element: Element<T>) {
        self.entropy_index.remove(point);
        self.stats.collapses += 1;
        trace!(?point, category = %element.category(), "placed element");
        self.propagate(point, &element);
        self.field.set(point, Some(element));
    }

    fn propagate(&mut self, point: T::Point, element: &Element<T>) {
        for (receiver, restriction) in element.outcome_restrictions(point) {
            self.apply_restriction_at(receiver, restriction, ProviderId::Element(point), false);
        }
    }

    /// Points a free teleporter at `point` may pair with
    ///
    /// Undetermined points that are neither `point` nor one of its
    /// neighbours, are not already claimed by a placed teleporter and can
    /// still become a teleporter pointing back at `point`.
    pub fn teleport_candidates(&self, point: T::Point) -> Vec<T::Point> {
        self.field
            .points()
            .iter()
            .zip(&self.nodes)
            .filter(|&(&candidate, node)| {
                candidate != point
                    && T::edge_between(point, candidate).is_none()
                    && !self.field.is_determined(candidate)
                    && !node.has_required_teleporter_target()
                    && Self::accepts_pairing(node, point)
            })
            .map(|(&candidate, _)| candidate)
            .collect()
    }

    /// Whether a node keeps a teleporter option once paired with `partner`
    ///
    /// Teleporter entropy under a required target does not depend on the
    /// direction, so the check uses the bidirectional pairing.
    fn accepts_pairing(node: &NodeSuperposition<T>, partner: T::Point) -> bool {
        let mut paired = node.clone();
        paired.apply_restriction(
            Restriction::teleporter_target(partner, TeleporterDirection::Bidirectional),
            ProviderId::Element(partner),
            false,
        );
        paired
            .category_entropy(ElementCategory::Teleporter)
            .is_some_and(|entropy| entropy > 0)
    }

    /// Collapse the undetermined node of lowest entropy
    ///
    /// Returns false once every node is determined.
    ///
    /// # Errors
    ///
    /// Returns [`LabyrinthError::Contradiction`] when a node has no option
    /// left and the policy is [`ContradictionPolicy::Fail`]
    pub fn collapse_next(&mut self) -> Result<bool> {
        let Some(point) = self.entropy_index.pick_min(&mut self.selector) else {
            return Ok(false);
        };
        self.collapse_point(point)?;
        Ok(true)
    }

    /// Run the collapse loop until every node is determined
    ///
    /// # Errors
    ///
    /// Propagates contradictions under [`ContradictionPolicy::Fail`]
    pub fn collapse_all(&mut self) -> Result<()> {
        while self.collapse_next()? {}
        debug!(
            collapses = self.stats.collapses,
            contradictions = self.stats.contradictions,
            "collapse loop finished"
        );
        Ok(())
    }

    fn collapse_point(&mut self, point: T::Point) -> Result<()> {
        self.iteration += 1;
        let Some(index) = self.field.index_of(point) else {
            return Err(point_outside(&point, "collapse"));
        };
        let candidates = match self.nodes.get(index) {
            Some(node) if node.may_pick_teleporter_target() => self.teleport_candidates(point),
            _ => Vec::new(),
        };

        let collapsed = match self.nodes.get_mut(index) {
            Some(node) if node.entropy() > 0 => {
                let mut context = CollapseContext {
                    point,
                    teleport_candidates: &candidates,
                    selector: &mut self.selector,
                };
                node.wave_function_collapse(&self.config.weights, &mut context, &mut self.cache)
            }
            _ => None,
        };
        let element = match collapsed {
            Some(element) => element,
            None => self.resolve_contradiction(point)?,
        };
        let partner = match &element {
            Element::Teleporter { target, .. } if !self.field.is_determined(*target) => Some(*target),
            _ => None,
        };
        self.place(point, element);
        if let Some(target) = partner {
            trace!(?point, ?target, "collapsing teleporter partner");
            self.collapse_point(target)?;
        }
        Ok(())
    }

    fn resolve_contradiction(&mut self, point: T::Point) -> Result<Element<T>> {
        self.stats.contradictions += 1;
        match self.config.contradiction_policy {
            ContradictionPolicy::Fallback => {
                debug!(?point, iteration = self.iteration, "contradiction resolved with solid");
                Ok(Element::Solid)
            }
            ContradictionPolicy::Fail => Err(LabyrinthError::Contradiction {
                point: format!("{point:?}"),
                iteration: self.iteration,
            }),
        }
    }

    /// Derive the paths graph and the grouped areas graph from the field
    pub fn build_graphs(&mut self) {
        let paths = PathsGraph::derive(&self.field);
        let mut areas = AreasGraph::derive(&paths);
        areas.group_cycles();
        self.paths = Some(paths);
        self.areas = Some(areas);
    }

    /// Re-collapse `targets` under extra restrictions, atomically
    ///
    /// The restrictions the targets' old elements imposed are retracted, the
    /// targets are cleared, `extras` are applied under `provider` and the
    /// targets are collapsed again in minimum-entropy order. If any target
    /// cannot be collapsed every touched node and field entry is restored
    /// and `Ok(false)` is returned. On success built graphs are patched.
    ///
    /// # Errors
    ///
    /// Returns an error when a target or extra point lies outside the field
    pub fn regenerate(
        &mut self,
        targets: &[T::Point],
        extras: &IndexMap<T::Point, Vec<Restriction<T>>>,
        provider: ProviderId<T::Point>,
        onetime: bool,
    ) -> Result<bool> {
        let targets: IndexSet<T::Point> = targets.iter().copied().collect();
        if let Some(point) = targets
            .iter()
            .chain(extras.keys())
            .find(|&&point| !self.field.contains(point))
        {
            return Err(point_outside(point, "regenerate"));
        }

        let mut transaction = RegenerateTransaction::begin(provider, targets.iter().copied().collect());
        for &target in &targets {
            transaction.record_element(target, self.field.get(target));
            if let Some(node) = self.node(target) {
                transaction.record_node(node);
            }
            let Some(old) = self.field.set(target, None) else {
                continue;
            };
            for (receiver, _) in old.outcome_restrictions(target) {
                let Some(index) = self.field.index_of(receiver) else {
                    continue;
                };
                if let Some(node) = self.nodes.get_mut(index) {
                    transaction.record_node(node);
                    node.reset_restrictions(ProviderId::Element(target), &mut self.cache);
                }
            }
        }

        for (&point, restrictions) in extras {
            let Some(index) = self.field.index_of(point) else {
                continue;
            };
            if let Some(node) = self.nodes.get_mut(index) {
                transaction.record_node(node);
                for restriction in restrictions {
                    node.apply_restriction(restriction.clone(), provider, onetime);
                }
            }
        }

        let committed = self.recollapse(targets.clone(), &mut transaction);
        let touched = transaction.touched_points();
        if committed {
            self.stats.regenerations += 1;
        } else {
            transaction.rollback(&mut self.field, &mut self.nodes);
            self.stats.failed_regenerations += 1;
        }
        for point in touched {
            match self.node(point) {
                Some(node) if !self.field.is_determined(point) => {
                    let entropy = node.entropy();
                    self.entropy_index.update(point, entropy);
                }
                _ => {
                    self.entropy_index.remove(point);
                }
            }
        }

        let targets: Vec<T::Point> = targets.into_iter().collect();
        if committed {
            self.patch_graphs(&targets);
        }
        debug!(?targets, ?provider, committed, "regenerate finished");
        Ok(committed)
    }

    fn recollapse(
        &mut self,
        mut pending: IndexSet<T::Point>,
        transaction: &mut RegenerateTransaction<T>,
    ) -> bool {
        while !pending.is_empty() {
            let Some(lowest) = pending
                .iter()
                .filter_map(|&point| self.node(point).map(NodeSuperposition::entropy))
                .min()
            else {
                return false;
            };
            if lowest == 0 {
                return false;
            }
            let ties: Vec<T::Point> = pending
                .iter()
                .copied()
                .filter(|&point| self.node(point).is_some_and(|node| node.entropy() == lowest))
                .collect();
            let Some(&point) = self.selector.choose(&ties) else {
                return false;
            };
            pending.shift_remove(&point);

            let Some(index) = self.field.index_of(point) else {
                return false;
            };
            let candidates: Vec<T::Point> = match self.nodes.get(index) {
                Some(node) if node.may_pick_teleporter_target() => self
                    .teleport_candidates(point)
                    .into_iter()
                    .filter(|candidate| pending.contains(candidate))
                    .collect(),
                _ => Vec::new(),
            };
            let collapsed = self.nodes.get_mut(index).and_then(|node| {
                let mut context = CollapseContext {
                    point,
                    teleport_candidates: &candidates,
                    selector: &mut self.selector,
                };
                node.wave_function_collapse(&self.config.weights, &mut context, &mut self.cache)
            });
            let Some(element) = collapsed else {
                return false;
            };

            for (receiver, restriction) in element.outcome_restrictions(point) {
                let Some(receiver_index) = self.field.index_of(receiver) else {
                    continue;
                };
                if let Some(node) = self.nodes.get_mut(receiver_index) {
                    transaction.record_node(node);
                    node.apply_restriction(restriction, ProviderId::Element(point), false);
                }
            }
            self.field.set(point, Some(element));
        }
        true
    }

    fn patch_graphs(&mut self, targets: &[T::Point]) {
        let Some(paths) = self.paths.as_mut() else {
            return;
        };
        let patch = paths.patch(&self.field, targets);
        if let Some(areas) = self.areas.as_mut() {
            let rebuilt = areas.patch(paths, &patch);
            areas.regroup_around(&rebuilt);
        }
    }
}
