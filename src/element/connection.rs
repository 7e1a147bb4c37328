//! Connections an element offers, grouped by paths-graph vertex

use crate::element::kinds::TeleporterDirection;
use crate::topology::Topology;

/// Which vertex of a cell a connection group belongs to
///
/// Most elements expose a single cell vertex; bridges expose one vertex per
/// crossing so that levels stay disconnected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VertexKind {
    /// The whole cell
    Cell,
    /// One level of a bridge
    Crossing(u8),
}

/// How movement may use a connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionKind {
    /// Both ways
    Passage,
    /// Only towards this cell
    OneWayIncome,
    /// Only away from this cell
    OneWayOutgoing,
    /// A teleporter jump with the direction of this end
    Teleport(TeleporterDirection),
}

impl ConnectionKind {
    /// Whether movement may leave through the connection
    pub const fn can_leave(self) -> bool {
        match self {
            Self::Passage | Self::OneWayOutgoing => true,
            Self::OneWayIncome => false,
            Self::Teleport(direction) => direction.can_leave(),
        }
    }

    /// Whether movement may arrive through the connection
    pub const fn can_enter(self) -> bool {
        match self {
            Self::Passage | Self::OneWayIncome => true,
            Self::OneWayOutgoing => false,
            Self::Teleport(direction) => direction.can_enter(),
        }
    }

    /// Whether the connection is a teleporter jump
    pub const fn is_teleport(self) -> bool {
        matches!(self, Self::Teleport(_))
    }
}

/// One connection of a cell towards another point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection<T: Topology> {
    /// Point the connection leads to
    pub target: T::Point,
    /// Edge used, `None` for teleporter jumps
    pub via: Option<T::Edge>,
    /// Allowed movement
    pub kind: ConnectionKind,
}

impl<T: Topology> Connection<T> {
    /// Whether `other`, offered by this connection's target, answers it
    ///
    /// Answering means pointing back at `origin` through the adapted edge,
    /// or being the matching teleporter jump.
    pub fn is_answered_by(&self, origin: T::Point, other: &Self) -> bool {
        if other.target != origin || self.kind.is_teleport() != other.kind.is_teleport() {
            return false;
        }
        match (self.via, other.via) {
            (Some(edge), Some(back)) => T::adapt_to_next_point(edge) == back,
            (None, None) => true,
            _ => false,
        }
    }
}

/// Connections sharing one paths-graph vertex
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionGroup<T: Topology> {
    /// Vertex the connections start from
    pub vertex: VertexKind,
    /// Outgoing and incoming connections of the vertex
    pub connections: Vec<Connection<T>>,
}
