//! Connect an area to a neighbour with a one-way passage closing a loop

use indexmap::IndexMap;
use tracing::debug;

use crate::element::ElementCategory;
use crate::generation::{Generator, RepairStrategy};
use crate::io::configuration::ONE_WAY_MERGE_PROVIDER;
use crate::io::error::Result;
use crate::paths::AreaId;
use crate::restriction::{ProviderId, Restriction};
use crate::strategies::support::boundary_candidates;
use crate::topology::Topology;

/// Adds a one-way edge across an area boundary
///
/// The direction is chosen so that the new edge closes a loop with an
/// existing one-way route, which groups both areas into one. Without an
/// existing route the direction is random and the loop is closed by a
/// later round.
#[derive(Debug, Clone, Copy, Default)]
pub struct OneWayMergeStrategy;

impl<T: Topology> RepairStrategy<T> for OneWayMergeStrategy {
    fn name(&self) -> &'static str {
        "one-way-merge"
    }

    fn handle(&mut self, area: AreaId, generator: &mut Generator<T>) -> Result<bool> {
        let mut candidates = boundary_candidates(generator, area)?;
        generator.selector().shuffle(&mut candidates);

        for candidate in candidates {
            let (_, areas) = generator.graphs("one-way merge")?;
            let reaches_out = areas.reaches(area, candidate.neighbor_area);
            let reaches_in = areas.reaches(candidate.neighbor_area, area);
            let inward = match (reaches_out, reaches_in) {
                (true, false) => true,
                (false, true) => false,
                _ => generator.selector().chance(0.5),
            };

            let edge = candidate.edge;
            let back = T::adapt_to_next_point(edge);
            let (inside, outside) = if inward {
                (Restriction::one_way_income(edge), Restriction::one_way_outgoing(back))
            } else {
                (Restriction::one_way_outgoing(edge), Restriction::one_way_income(back))
            };
            let only_one_way = Restriction::allow_only(&[ElementCategory::OneWay]);
            let mut extras = IndexMap::new();
            extras.insert(candidate.inside, vec![inside, only_one_way.clone()]);
            extras.insert(candidate.outside, vec![outside, only_one_way]);

            let provider = ProviderId::Strategy(ONE_WAY_MERGE_PROVIDER);
            if generator.regenerate(&[candidate.inside, candidate.outside], &extras, provider, true)? {
                debug!(%area, neighbor = %candidate.neighbor_area, inward, "added one-way link");
                return Ok(true);
            }
        }
        Ok(false)
    }
}
