//! Element kinds known to the generator and their collapse weights

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::io::configuration::DEFAULT_CATEGORY_WEIGHT;
use crate::io::error::{LabyrinthError, invalid_parameter};

/// Kind of element a node may collapse into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementCategory {
    /// Exactly one passage
    DeadEnd,
    /// Two passages on opposite edges
    Corridor,
    /// Two passages on non-opposite edges
    Corner,
    /// Three or more passages
    Junction,
    /// Mix of passages with at least one incoming and one outgoing one-way edge
    OneWay,
    /// Single entrance plus a jump to a paired point
    Teleporter,
    /// Two or more independent straight crossings
    Bridge,
    /// Unvisitable filler
    Solid,
    /// Visitable cell without any exit
    Room,
}

impl ElementCategory {
    /// Every kind in declaration order
    pub const ALL: [Self; 9] = [
        Self::DeadEnd,
        Self::Corridor,
        Self::Corner,
        Self::Junction,
        Self::OneWay,
        Self::Teleporter,
        Self::Bridge,
        Self::Solid,
        Self::Room,
    ];

    /// Kinds made only of plain passages
    pub const BASIC: [Self; 4] = [Self::DeadEnd, Self::Corridor, Self::Corner, Self::Junction];

    /// Command line name of the kind
    pub const fn name(self) -> &'static str {
        match self {
            Self::DeadEnd => "dead-end",
            Self::Corridor => "corridor",
            Self::Corner => "corner",
            Self::Junction => "junction",
            Self::OneWay => "one-way",
            Self::Teleporter => "teleporter",
            Self::Bridge => "bridge",
            Self::Solid => "solid",
            Self::Room => "room",
        }
    }

    /// Whether the kind contributes vertices to the paths graph
    pub const fn is_visitable(self) -> bool {
        !matches!(self, Self::Solid)
    }
}

impl fmt::Display for ElementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementCategory {
    type Err = LabyrinthError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.name() == value)
            .ok_or_else(|| invalid_parameter("kind", &value, &"unknown element kind"))
    }
}

/// Relative likelihood of each kind during weighted collapse
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryWeights {
    weights: IndexMap<ElementCategory, f64>,
}

impl CategoryWeights {
    /// Weights where every kind uses the default
    pub fn new() -> Self {
        Self::default()
    }

    /// Weight of a kind, falling back to the default
    pub fn get(&self, category: ElementCategory) -> f64 {
        self.weights
            .get(&category)
            .copied()
            .unwrap_or(DEFAULT_CATEGORY_WEIGHT)
    }

    /// Override the weight of a kind
    pub fn set(&mut self, category: ElementCategory, weight: f64) {
        self.weights.insert(category, weight);
    }

    /// Builder form of [`CategoryWeights::set`]
    #[must_use]
    pub fn with(mut self, category: ElementCategory, weight: f64) -> Self {
        self.set(category, weight);
        self
    }

    /// Explicit overrides in insertion order
    pub fn overrides(&self) -> impl Iterator<Item = (ElementCategory, f64)> + '_ {
        self.weights.iter().map(|(&category, &weight)| (category, weight))
    }

    /// Check that every override is a positive finite number
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error naming the first offending kind
    pub fn validate(&self) -> crate::Result<()> {
        match self
            .overrides()
            .find(|(_, weight)| !weight.is_finite() || *weight <= 0.0)
        {
            Some((category, weight)) => Err(invalid_parameter(
                "weight",
                &format!("{category}={weight}"),
                &"weights must be positive and finite",
            )),
            None => Ok(()),
        }
    }
}
