//! Dispatch over the per-kind superpositions

use crate::element::{Element, ElementCategory};
use crate::math::random::RandomSelector;
use crate::restriction::Restriction;
use crate::superposition::availability::AvailabilitySuperposition;
use crate::superposition::bridge::BridgeSuperposition;
use crate::superposition::cache::{ArityRule, CombinatoricsCache};
use crate::superposition::edge_set::EdgeSetSuperposition;
use crate::superposition::one_way::OneWaySuperposition;
use crate::superposition::teleporter::TeleporterSuperposition;
use crate::topology::Topology;

/// Inputs a collapse may draw on besides the superposition itself
pub struct CollapseContext<'a, T: Topology> {
    /// Point being collapsed
    pub point: T::Point,
    /// Undetermined points a free teleporter may pair with
    pub teleport_candidates: &'a [T::Point],
    /// Random source of the run
    pub selector: &'a mut RandomSelector,
}

/// Set of still-possible concrete elements of one kind at one node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementSuperposition<T: Topology> {
    /// Dead-end, corridor, corner or junction
    EdgeSet(EdgeSetSuperposition<T>),
    /// One-way cell
    OneWay(OneWaySuperposition<T>),
    /// Teleporter cell
    Teleporter(TeleporterSuperposition<T>),
    /// Bridge cell
    Bridge(BridgeSuperposition<T>),
    /// Solid or room cell
    Availability(AvailabilitySuperposition),
}

impl<T: Topology> ElementSuperposition<T> {
    /// Unrestricted superposition of a kind
    pub fn new(category: ElementCategory, cache: &mut CombinatoricsCache<T>) -> Self {
        match category {
            ElementCategory::OneWay => Self::OneWay(OneWaySuperposition::new()),
            ElementCategory::Teleporter => Self::Teleporter(TeleporterSuperposition::new()),
            ElementCategory::Bridge => Self::Bridge(BridgeSuperposition::new()),
            ElementCategory::Solid | ElementCategory::Room => {
                Self::Availability(AvailabilitySuperposition::new(category))
            }
            ElementCategory::DeadEnd
            | ElementCategory::Corridor
            | ElementCategory::Corner
            | ElementCategory::Junction => {
                let rule = ArityRule::for_category(category).unwrap_or(ArityRule::Branching);
                Self::EdgeSet(EdgeSetSuperposition::new(rule, cache))
            }
        }
    }

    /// Kind this superposition collapses into
    pub const fn category(&self) -> ElementCategory {
        match self {
            Self::EdgeSet(superposition) => superposition.category(),
            Self::OneWay(_) => ElementCategory::OneWay,
            Self::Teleporter(_) => ElementCategory::Teleporter,
            Self::Bridge(_) => ElementCategory::Bridge,
            Self::Availability(superposition) => superposition.category(),
        }
    }

    /// Number of remaining concrete options
    pub fn entropy(&self) -> usize {
        match self {
            Self::EdgeSet(superposition) => superposition.entropy(),
            Self::OneWay(superposition) => superposition.entropy(),
            Self::Teleporter(superposition) => superposition.entropy(),
            Self::Bridge(superposition) => superposition.entropy(),
            Self::Availability(superposition) => superposition.entropy(),
        }
    }

    /// Narrow the options; false when the kind cannot interpret the restriction
    pub fn apply_restriction(&mut self, restriction: &Restriction<T>, point: T::Point) -> bool {
        match self {
            Self::EdgeSet(superposition) => superposition.apply_restriction(restriction),
            Self::OneWay(superposition) => superposition.apply_restriction(restriction),
            Self::Teleporter(superposition) => superposition.apply_restriction(restriction, point),
            Self::Bridge(superposition) => superposition.apply_restriction(restriction),
            Self::Availability(superposition) => superposition.apply_restriction(restriction),
        }
    }

    /// Return to the unrestricted state
    pub fn reset(&mut self, cache: &mut CombinatoricsCache<T>) {
        match self {
            Self::EdgeSet(superposition) => superposition.reset(cache),
            Self::OneWay(superposition) => superposition.reset(),
            Self::Teleporter(superposition) => superposition.reset(),
            Self::Bridge(superposition) => superposition.reset(),
            Self::Availability(superposition) => superposition.reset(),
        }
    }

    /// Draw one concrete element, `None` when nothing valid remains
    pub fn collapse(&self, context: &mut CollapseContext<'_, T>) -> Option<Element<T>> {
        match self {
            Self::EdgeSet(superposition) => superposition.collapse(context.selector),
            Self::OneWay(superposition) => superposition.collapse(context.selector),
            Self::Teleporter(superposition) => superposition.collapse(
                context.point,
                context.teleport_candidates,
                context.selector,
            ),
            Self::Bridge(superposition) => superposition.collapse(),
            Self::Availability(superposition) => superposition.collapse(),
        }
    }

    /// Pairing demanded from a teleporter kind
    pub fn required_teleporter_target(&self) -> Option<T::Point> {
        match self {
            Self::Teleporter(superposition) => superposition.required_target().map(|(target, _)| target),
            _ => None,
        }
    }
}
