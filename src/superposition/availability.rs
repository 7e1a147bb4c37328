//! Solid and room cells, which only ever expose walls

use crate::element::{EdgeRole, Element, ElementCategory};
use crate::restriction::Restriction;
use crate::topology::Topology;

/// Whether a wall-only kind is still possible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilitySuperposition {
    category: ElementCategory,
    available: bool,
}

impl AvailabilitySuperposition {
    /// Superposition for [`ElementCategory::Solid`] or [`ElementCategory::Room`]
    pub const fn new(category: ElementCategory) -> Self {
        Self {
            category,
            available: true,
        }
    }

    /// Kind this superposition collapses into
    pub const fn category(&self) -> ElementCategory {
        self.category
    }

    /// Walls are accepted; any demanded opening disables the kind
    pub fn apply_restriction<T: Topology>(&mut self, restriction: &Restriction<T>) -> bool {
        match restriction.kind.edge_role() {
            Some((_, EdgeRole::Wall)) => true,
            Some(_) => {
                self.available = false;
                true
            }
            None => false,
        }
    }

    /// Restore availability
    pub const fn reset(&mut self) {
        self.available = true;
    }

    /// One while the kind is still possible
    pub fn entropy(&self) -> usize {
        usize::from(self.available)
    }

    /// The wall-only element, if still possible
    pub fn collapse<T: Topology>(&self) -> Option<Element<T>> {
        if !self.available {
            return None;
        }
        match self.category {
            ElementCategory::Room => Some(Element::Room),
            _ => Some(Element::Solid),
        }
    }
}
