//! Facts a node must satisfy, expressed relative to the node itself

use crate::element::{EdgeRole, ElementCategory, TeleporterDirection};
use crate::topology::Topology;

/// What a restriction demands from the restricted node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestrictionKind<T: Topology> {
    /// No connection may leave through the edge
    Wall(T::Edge),
    /// A two-way connection must exist through the edge
    Passage(T::Edge),
    /// Movement must enter the node through the edge
    OneWayIncome(T::Edge),
    /// Movement must leave the node through the edge
    OneWayOutgoing(T::Edge),
    /// The node must be a teleporter paired with the given point
    TeleporterTarget {
        /// Point the teleporter must lead to
        target: T::Point,
        /// Direction the node's teleporter must have
        direction: TeleporterDirection,
    },
    /// The node may not choose the given point as teleporter target
    PreventTeleporterTarget(T::Point),
    /// Only one-way edges required by neighbours may appear
    NoOptionalOneWays,
    /// Only element kinds passing the filter stay available
    Category(CategoryFilter),
}

impl<T: Topology> RestrictionKind<T> {
    /// Edge and required role for edge-based restrictions
    pub const fn edge_role(&self) -> Option<(T::Edge, EdgeRole)> {
        match *self {
            Self::Wall(edge) => Some((edge, EdgeRole::Wall)),
            Self::Passage(edge) => Some((edge, EdgeRole::Passage)),
            Self::OneWayIncome(edge) => Some((edge, EdgeRole::Income)),
            Self::OneWayOutgoing(edge) => Some((edge, EdgeRole::Outgoing)),
            _ => None,
        }
    }
}

/// Element kinds admitted by a [`RestrictionKind::Category`] restriction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Only the listed kinds stay available
    AllowOnly(Vec<ElementCategory>),
    /// The listed kinds become unavailable
    Deny(Vec<ElementCategory>),
}

impl CategoryFilter {
    /// Whether a kind passes the filter
    pub fn permits(&self, category: ElementCategory) -> bool {
        match self {
            Self::AllowOnly(allowed) => allowed.contains(&category),
            Self::Deny(denied) => !denied.contains(&category),
        }
    }
}

/// A restriction together with its tolerance for kinds that cannot handle it
///
/// When `allow_unhandled` is false, an element kind that does not understand
/// the restriction becomes unavailable at the node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restriction<T: Topology> {
    /// What is demanded
    pub kind: RestrictionKind<T>,
    /// Whether kinds ignoring the restriction stay available
    pub allow_unhandled: bool,
}

impl<T: Topology> Restriction<T> {
    const fn strict(kind: RestrictionKind<T>) -> Self {
        Self {
            kind,
            allow_unhandled: false,
        }
    }

    /// No connection through `edge`
    pub const fn wall(edge: T::Edge) -> Self {
        Self::strict(RestrictionKind::Wall(edge))
    }

    /// Two-way connection through `edge`
    pub const fn passage(edge: T::Edge) -> Self {
        Self::strict(RestrictionKind::Passage(edge))
    }

    /// Movement enters through `edge`
    pub const fn one_way_income(edge: T::Edge) -> Self {
        Self::strict(RestrictionKind::OneWayIncome(edge))
    }

    /// Movement leaves through `edge`
    pub const fn one_way_outgoing(edge: T::Edge) -> Self {
        Self::strict(RestrictionKind::OneWayOutgoing(edge))
    }

    /// Teleporter paired with `target`
    pub const fn teleporter_target(target: T::Point, direction: TeleporterDirection) -> Self {
        Self::strict(RestrictionKind::TeleporterTarget { target, direction })
    }

    /// Forbid `target` as teleporter destination; tolerated by every kind
    pub const fn prevent_teleporter_target(target: T::Point) -> Self {
        Self {
            kind: RestrictionKind::PreventTeleporterTarget(target),
            allow_unhandled: true,
        }
    }

    /// Forbid optional one-way edges; tolerated by every kind
    pub const fn no_optional_one_ways() -> Self {
        Self {
            kind: RestrictionKind::NoOptionalOneWays,
            allow_unhandled: true,
        }
    }

    /// Keep only the listed kinds
    pub fn allow_only(categories: &[ElementCategory]) -> Self {
        Self::strict(RestrictionKind::Category(CategoryFilter::AllowOnly(
            categories.to_vec(),
        )))
    }

    /// Remove the listed kinds
    pub fn deny(categories: &[ElementCategory]) -> Self {
        Self::strict(RestrictionKind::Category(CategoryFilter::Deny(
            categories.to_vec(),
        )))
    }

    /// Override how unhandling kinds are treated
    #[must_use]
    pub const fn with_allow_unhandled(mut self, allow_unhandled: bool) -> Self {
        self.allow_unhandled = allow_unhandled;
        self
    }
}
