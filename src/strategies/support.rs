//! Candidate discovery and cutting shared by the repair strategies

use indexmap::IndexMap;

use crate::element::{EdgeRole, Element, ElementCategory};
use crate::generation::Generator;
use crate::io::error::Result;
use crate::paths::{AreaId, PathsEdgeKind, PathsGraphEdge};
use crate::restriction::{ProviderId, Restriction};
use crate::topology::Topology;

/// Kinds a cut cell may not turn into; they could reopen the cut elsewhere
const CUT_DENIED: [ElementCategory; 3] = [
    ElementCategory::OneWay,
    ElementCategory::Teleporter,
    ElementCategory::Bridge,
];

/// Adjacent pair of points lying in different areas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryCandidate<T: Topology> {
    /// Point inside the repaired area
    pub inside: T::Point,
    /// Edge from `inside` towards `outside`
    pub edge: T::Edge,
    /// Neighbouring point in another area
    pub outside: T::Point,
    /// Area of `outside`
    pub neighbor_area: AreaId,
}

/// Every boundary pair between `area` and the areas around it
///
/// # Errors
///
/// Returns an error when the graphs were not built
pub fn boundary_candidates<T: Topology>(
    generator: &Generator<T>,
    area: AreaId,
) -> Result<Vec<BoundaryCandidate<T>>> {
    let (_, areas) = generator.graphs("boundary search")?;
    let Some(inside_area) = areas.area(area) else {
        return Ok(Vec::new());
    };
    let point_areas = areas.point_areas();
    let field = generator.field();

    let mut candidates = Vec::new();
    for inside in inside_area.points() {
        for &edge in T::all_edges() {
            let outside = T::next_point(inside, edge);
            if !field.contains(outside) {
                continue;
            }
            match point_areas.get(&outside) {
                Some(&neighbor_area) if neighbor_area != area => candidates.push(BoundaryCandidate {
                    inside,
                    edge,
                    outside,
                    neighbor_area,
                }),
                _ => {}
            }
        }
    }
    Ok(candidates)
}

/// Adjacent point pairs walked by a paths edge, teleporter jumps excluded
pub fn edge_steps<P: Copy + Eq>(edge: &PathsGraphEdge<P>) -> Vec<(P, P)> {
    if matches!(edge.kind, PathsEdgeKind::Teleport { .. }) {
        return Vec::new();
    }
    edge.points()
        .windows(2)
        .filter_map(|pair| match pair {
            [a, b] if a != b => Some((*a, *b)),
            _ => None,
        })
        .collect()
}

/// Point pairs a cut may separate along a paths edge
///
/// Walked edges yield their steps; a teleporter jump yields its two ends.
pub fn cut_steps<P: Copy + Eq>(edge: &PathsGraphEdge<P>) -> Vec<(P, P)> {
    if matches!(edge.kind, PathsEdgeKind::Teleport { .. }) {
        return vec![(edge.source.point, edge.destination.point)];
    }
    edge_steps(edge)
}

/// Teleporter partner of the element at `point`, if any
fn partner<T: Topology>(generator: &Generator<T>, point: T::Point) -> Option<T::Point> {
    match generator.field().get(point) {
        Some(Element::Teleporter { target, .. }) => Some(*target),
        _ => None,
    }
}

/// Try to separate one of the given point pairs, first success wins
///
/// Steps between two plain passage cells are attempted first. An adjacent
/// pair gets a wall on the shared edge; a teleporter pair loses its jump.
/// Every regenerated cell, including the partner of a teleporter that is
/// cut, may not become a one-way cell, a teleporter or a bridge. Pairs
/// already separated by a wall are skipped.
///
/// # Errors
///
/// Propagates regenerate errors
pub fn cut_first<T: Topology>(
    generator: &mut Generator<T>,
    steps: &[(T::Point, T::Point)],
    provider: ProviderId<T::Point>,
) -> Result<bool> {
    let field = generator.field();
    let plain = |point: T::Point| field.get(point).is_some_and(Element::is_plain_passage);
    let (mut ordered, rest): (Vec<(T::Point, T::Point)>, Vec<(T::Point, T::Point)>) = steps
        .iter()
        .copied()
        .partition(|&(a, b)| plain(a) && plain(b));
    ordered.extend(rest);

    for (a, b) in ordered {
        let mut extras: IndexMap<T::Point, Vec<Restriction<T>>> = IndexMap::new();
        match T::edge_between(a, b) {
            Some(edge) => {
                let open = generator
                    .field()
                    .get(a)
                    .is_some_and(|element| element.edge_role(edge) != EdgeRole::Wall);
                if !open || !generator.field().is_determined(b) {
                    continue;
                }
                extras.insert(a, vec![Restriction::wall(edge), Restriction::deny(&CUT_DENIED)]);
                extras.insert(
                    b,
                    vec![
                        Restriction::wall(T::adapt_to_next_point(edge)),
                        Restriction::deny(&CUT_DENIED),
                    ],
                );
            }
            None => {
                if partner(generator, a) != Some(b) {
                    continue;
                }
                extras.insert(a, vec![Restriction::deny(&CUT_DENIED)]);
                extras.insert(b, vec![Restriction::deny(&CUT_DENIED)]);
            }
        }
        for point in [a, b] {
            if let Some(other) = partner(generator, point) {
                extras
                    .entry(other)
                    .or_insert_with(|| vec![Restriction::deny(&CUT_DENIED)]);
            }
        }

        let targets: Vec<T::Point> = extras.keys().copied().collect();
        if generator.regenerate(&targets, &extras, provider, true)? {
            return Ok(true);
        }
    }
    Ok(false)
}
