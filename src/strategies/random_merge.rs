//! Connect an area to a neighbour by opening a passage across their boundary

use indexmap::IndexMap;
use tracing::debug;

use crate::generation::{Generator, RepairStrategy};
use crate::io::configuration::RANDOM_MERGE_PROVIDER;
use crate::io::error::Result;
use crate::paths::AreaId;
use crate::restriction::{ProviderId, Restriction};
use crate::strategies::support::boundary_candidates;
use crate::topology::Topology;

/// Opens a two-way passage between a random boundary pair
///
/// Boundary pairs are shuffled and tried without replacement; the first
/// regenerate that commits merges the two areas.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomMergeStrategy;

impl<T: Topology> RepairStrategy<T> for RandomMergeStrategy {
    fn name(&self) -> &'static str {
        "random-merge"
    }

    fn handle(&mut self, area: AreaId, generator: &mut Generator<T>) -> Result<bool> {
        let mut candidates = boundary_candidates(generator, area)?;
        generator.selector().shuffle(&mut candidates);

        for candidate in candidates {
            let mut extras = IndexMap::new();
            extras.insert(candidate.inside, vec![Restriction::passage(candidate.edge)]);
            extras.insert(
                candidate.outside,
                vec![Restriction::passage(T::adapt_to_next_point(candidate.edge))],
            );
            let provider = ProviderId::Strategy(RANDOM_MERGE_PROVIDER);
            if generator.regenerate(&[candidate.inside, candidate.outside], &extras, provider, true)? {
                debug!(%area, neighbor = %candidate.neighbor_area, "merged areas through passage");
                return Ok(true);
            }
        }
        Ok(false)
    }
}
