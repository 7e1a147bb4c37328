//! Set of element kinds a generator works with

use crate::element::ElementCategory;
use crate::io::error::{LabyrinthError, Result};
use crate::superposition::cache::CombinatoricsCache;
use crate::superposition::node::NodeSuperposition;
use crate::topology::Topology;

/// Non-empty, ordered set of registered element kinds
///
/// Kinds are kept sorted and deduplicated, so registration order never
/// influences generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperpositionRegistry {
    categories: Vec<ElementCategory>,
}

impl SuperpositionRegistry {
    /// Register the given kinds
    ///
    /// # Errors
    ///
    /// Returns [`LabyrinthError::EmptyRegistry`] when no kind is given
    pub fn new(categories: impl IntoIterator<Item = ElementCategory>) -> Result<Self> {
        let mut categories: Vec<ElementCategory> = categories.into_iter().collect();
        categories.sort_unstable();
        categories.dedup();
        if categories.is_empty() {
            return Err(LabyrinthError::EmptyRegistry);
        }
        Ok(Self { categories })
    }

    /// Dead-ends, corridors, corners and junctions
    pub fn basic() -> Self {
        Self {
            categories: ElementCategory::BASIC.to_vec(),
        }
    }

    /// Every known kind
    pub fn full() -> Self {
        Self {
            categories: ElementCategory::ALL.to_vec(),
        }
    }

    /// Registered kinds in canonical order
    pub fn categories(&self) -> &[ElementCategory] {
        &self.categories
    }

    /// Whether a kind is registered
    pub fn contains(&self, category: ElementCategory) -> bool {
        self.categories.contains(&category)
    }

    /// Fresh node superposition over the registered kinds
    pub fn node<T: Topology>(
        &self,
        point: T::Point,
        cache: &mut CombinatoricsCache<T>,
    ) -> NodeSuperposition<T> {
        NodeSuperposition::new(point, &self.categories, cache)
    }
}

impl Default for SuperpositionRegistry {
    fn default() -> Self {
        Self::basic()
    }
}
