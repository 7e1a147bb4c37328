//! Bridges: independent straight crossings stacked in one cell

use crate::element::{EdgeRole, Element};
use crate::restriction::Restriction;
use crate::topology::Topology;

/// Availability of the single bridge layout a topology allows
///
/// The layout pairs every edge with its opposite; a topology with fewer
/// than two such pairs has no bridge at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeSuperposition<T: Topology> {
    crossings: Vec<(T::Edge, T::Edge)>,
    available: bool,
}

impl<T: Topology> Default for BridgeSuperposition<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Topology> BridgeSuperposition<T> {
    /// Superposition for the topology's opposite-edge pairs
    pub fn new() -> Self {
        let crossings: Vec<(T::Edge, T::Edge)> = T::all_edges()
            .iter()
            .filter_map(|&edge| {
                T::opposite(edge)
                    .filter(|&opposite| edge < opposite)
                    .map(|opposite| (edge, opposite))
            })
            .collect();
        let available = crossings.len() >= 2;
        Self {
            crossings,
            available,
        }
    }

    /// Crossing pairs of the layout
    pub fn crossings(&self) -> &[(T::Edge, T::Edge)] {
        &self.crossings
    }

    fn crosses(&self, edge: T::Edge) -> bool {
        self.crossings.iter().any(|&(a, b)| a == edge || b == edge)
    }

    /// Disable the layout on a wall across a crossing or an opening outside one
    pub fn apply_restriction(&mut self, restriction: &Restriction<T>) -> bool {
        let Some((edge, role)) = restriction.kind.edge_role() else {
            return false;
        };
        let open = role != EdgeRole::Wall;
        if open != self.crosses(edge) {
            self.available = false;
        }
        true
    }

    /// Restore availability
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// One while the layout is still possible
    pub fn entropy(&self) -> usize {
        usize::from(self.available)
    }

    /// The layout, if still possible
    pub fn collapse(&self) -> Option<Element<T>> {
        self.available.then(|| Element::Bridge {
            crossings: self.crossings.clone(),
        })
    }
}
