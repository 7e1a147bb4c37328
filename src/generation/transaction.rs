//! Before-images taken by a regenerate so that a failure can be undone

use indexmap::IndexMap;

use crate::element::Element;
use crate::restriction::ProviderId;
use crate::superposition::NodeSuperposition;
use crate::topology::{Field, Topology};

/// Snapshot of every node and field entry a regenerate touches
///
/// Each point is recorded the first time it is touched, so rolling back
/// restores the state from before the transaction began.
#[derive(Debug, Clone)]
pub struct RegenerateTransaction<T: Topology> {
    provider: ProviderId<T::Point>,
    targets: Vec<T::Point>,
    nodes: IndexMap<T::Point, NodeSuperposition<T>>,
    elements: IndexMap<T::Point, Option<Element<T>>>,
}

impl<T: Topology> RegenerateTransaction<T> {
    /// Start a transaction re-collapsing `targets`
    pub fn begin(provider: ProviderId<T::Point>, targets: Vec<T::Point>) -> Self {
        Self {
            provider,
            targets,
            nodes: IndexMap::new(),
            elements: IndexMap::new(),
        }
    }

    /// Provider of the extra restrictions
    pub const fn provider(&self) -> ProviderId<T::Point> {
        self.provider
    }

    /// Points being re-collapsed
    pub fn targets(&self) -> &[T::Point] {
        &self.targets
    }

    /// Remember a node before its first modification
    pub fn record_node(&mut self, node: &NodeSuperposition<T>) {
        self.nodes
            .entry(node.point())
            .or_insert_with(|| node.clone());
    }

    /// Remember a field entry before its first modification
    pub fn record_element(&mut self, point: T::Point, element: Option<&Element<T>>) {
        self.elements
            .entry(point)
            .or_insert_with(|| element.cloned());
    }

    /// Every point with a recorded node or field entry
    pub fn touched_points(&self) -> Vec<T::Point> {
        let mut points: Vec<T::Point> = self.nodes.keys().copied().collect();
        points.extend(
            self.elements
                .keys()
                .copied()
                .filter(|point| !self.nodes.contains_key(point)),
        );
        points
    }

    /// Restore every recorded node and field entry
    pub fn rollback(self, field: &mut Field<T>, nodes: &mut [NodeSuperposition<T>]) {
        for (point, element) in self.elements {
            field.set(point, element);
        }
        for (point, node) in self.nodes {
            if let Some(slot) = field.index_of(point).and_then(|index| nodes.get_mut(index)) {
                *slot = node;
            }
        }
    }
}
