//! Connect an area to a distant one with a pair of teleporters

use std::cmp::Reverse;

use indexmap::IndexMap;
use tracing::debug;

use crate::element::{ElementCategory, TeleporterDirection};
use crate::generation::{Generator, RepairStrategy};
use crate::io::configuration::{TELEPORTER_MERGE_PROVIDER, TELEPORTER_PARTNER_LIMIT};
use crate::io::error::Result;
use crate::paths::AreaId;
use crate::restriction::{ProviderId, Restriction};
use crate::topology::Topology;

/// Replaces two dead ends in different areas with paired teleporters
///
/// Partners are taken from the far end of the labyrinth first so the jump
/// adds the most to the route.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeleporterMergeStrategy;

impl TeleporterMergeStrategy {
    fn dead_end_pairs<T: Topology>(
        generator: &Generator<T>,
        area: AreaId,
    ) -> Result<Vec<(T::Point, T::Point)>> {
        let (_, areas) = generator.graphs("teleporter merge")?;
        let point_areas = areas.point_areas();
        let dead_ends: Vec<T::Point> = generator
            .field()
            .elements()
            .filter(|(_, element)| element.category() == ElementCategory::DeadEnd)
            .map(|(point, _)| point)
            .collect();

        let (inside, outside): (Vec<T::Point>, Vec<T::Point>) = dead_ends
            .into_iter()
            .filter(|point| point_areas.contains_key(point))
            .partition(|point| point_areas.get(point) == Some(&area));

        let mut pairs = Vec::new();
        for &from in &inside {
            let mut partners = outside.clone();
            partners.sort_by_key(|&to| Reverse(T::distance(from, to)));
            pairs.extend(
                partners
                    .into_iter()
                    .take(TELEPORTER_PARTNER_LIMIT)
                    .map(|to| (from, to)),
            );
        }
        Ok(pairs)
    }
}

impl<T: Topology> RepairStrategy<T> for TeleporterMergeStrategy {
    fn name(&self) -> &'static str {
        "teleporter-merge"
    }

    fn handle(&mut self, area: AreaId, generator: &mut Generator<T>) -> Result<bool> {
        let mut pairs = Self::dead_end_pairs(generator, area)?;
        generator.selector().shuffle(&mut pairs);
        pairs.sort_by_key(|&(from, to)| Reverse(T::distance(from, to)));

        for (from, to) in pairs {
            let only_teleporter = Restriction::allow_only(&[ElementCategory::Teleporter]);
            let mut extras = IndexMap::new();
            extras.insert(
                from,
                vec![
                    Restriction::teleporter_target(to, TeleporterDirection::Bidirectional),
                    only_teleporter.clone(),
                ],
            );
            extras.insert(
                to,
                vec![
                    Restriction::teleporter_target(from, TeleporterDirection::Bidirectional),
                    only_teleporter,
                ],
            );
            let provider = ProviderId::Strategy(TELEPORTER_MERGE_PROVIDER);
            if generator.regenerate(&[from, to], &extras, provider, true)? {
                debug!(%area, ?from, ?to, "linked areas with teleporters");
                return Ok(true);
            }
        }
        Ok(false)
    }
}
