//! Determined elements and the restrictions they impose on their neighbours

use crate::element::category::ElementCategory;
use crate::element::connection::{Connection, ConnectionGroup, ConnectionKind, VertexKind};
use crate::restriction::Restriction;
use crate::topology::Topology;

/// Direction of travel a teleporter allows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TeleporterDirection {
    /// Travel both ways
    Bidirectional,
    /// Travel only away from this end
    Outgoing,
    /// Travel only into this end
    Incoming,
}

impl TeleporterDirection {
    /// Direction seen from the other end of the pair
    pub const fn complement(self) -> Self {
        match self {
            Self::Bidirectional => Self::Bidirectional,
            Self::Outgoing => Self::Incoming,
            Self::Incoming => Self::Outgoing,
        }
    }

    /// Whether movement may leave through this end
    pub const fn can_leave(self) -> bool {
        !matches!(self, Self::Incoming)
    }

    /// Whether movement may arrive through this end
    pub const fn can_enter(self) -> bool {
        !matches!(self, Self::Outgoing)
    }
}

/// What an element does at one of its edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeRole {
    /// Closed
    Wall,
    /// Open both ways
    Passage,
    /// Movement enters through the edge
    Income,
    /// Movement leaves through the edge
    Outgoing,
}

/// Element placed at a determined point
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element<T: Topology> {
    /// Plain passages: dead-ends, corridors, corners and junctions
    Passage {
        /// Kind the passage set was drawn from
        category: ElementCategory,
        /// Open edges
        passages: Vec<T::Edge>,
    },
    /// Cell mixing passages with directed edges
    OneWay {
        /// Edges movement enters through
        income: Vec<T::Edge>,
        /// Edges movement leaves through
        outgoing: Vec<T::Edge>,
        /// Edges open both ways
        passages: Vec<T::Edge>,
    },
    /// Cell with one entrance and a jump to a paired point
    Teleporter {
        /// Single open edge
        entrance: T::Edge,
        /// Paired point
        target: T::Point,
        /// Allowed travel through the jump
        direction: TeleporterDirection,
    },
    /// Independent straight crossings sharing one cell
    Bridge {
        /// Pairs of opposite edges, one per level
        crossings: Vec<(T::Edge, T::Edge)>,
    },
    /// Unvisitable filler
    Solid,
    /// Visitable cell without any exit
    Room,
}

impl<T: Topology> Element<T> {
    /// Kind of the element
    pub const fn category(&self) -> ElementCategory {
        match self {
            Self::Passage { category, .. } => *category,
            Self::OneWay { .. } => ElementCategory::OneWay,
            Self::Teleporter { .. } => ElementCategory::Teleporter,
            Self::Bridge { .. } => ElementCategory::Bridge,
            Self::Solid => ElementCategory::Solid,
            Self::Room => ElementCategory::Room,
        }
    }

    /// What the element does at an edge
    pub fn edge_role(&self, edge: T::Edge) -> EdgeRole {
        let open = match self {
            Self::Passage { passages, .. } => passages.contains(&edge),
            Self::OneWay {
                income,
                outgoing,
                passages,
            } => {
                if income.contains(&edge) {
                    return EdgeRole::Income;
                }
                if outgoing.contains(&edge) {
                    return EdgeRole::Outgoing;
                }
                passages.contains(&edge)
            }
            Self::Teleporter { entrance, .. } => *entrance == edge,
            Self::Bridge { crossings } => crossings.iter().any(|&(a, b)| a == edge || b == edge),
            Self::Solid | Self::Room => false,
        };
        if open { EdgeRole::Passage } else { EdgeRole::Wall }
    }

    /// Restrictions the element imposes on its neighbours and teleporter pair
    ///
    /// Every edge yields one restriction for the neighbouring point, expressed
    /// with the edge as seen from that neighbour. Neighbours outside the field
    /// are included; the caller skips them.
    pub fn outcome_restrictions(&self, point: T::Point) -> Vec<(T::Point, Restriction<T>)> {
        let mut outcome = Vec::with_capacity(T::edge_count() + 1);
        for &edge in T::all_edges() {
            let neighbor = T::next_point(point, edge);
            let adapted = T::adapt_to_next_point(edge);
            let restriction = match self.edge_role(edge) {
                EdgeRole::Wall => Restriction::wall(adapted),
                EdgeRole::Passage => Restriction::passage(adapted),
                EdgeRole::Income => Restriction::one_way_outgoing(adapted),
                EdgeRole::Outgoing => Restriction::one_way_income(adapted),
            };
            outcome.push((neighbor, restriction));
        }
        if let Self::Teleporter {
            target, direction, ..
        } = self
        {
            outcome.push((
                *target,
                Restriction::teleporter_target(point, direction.complement()),
            ));
        }
        outcome
    }

    /// Connections grouped by the paths-graph vertex they belong to
    pub fn connection_groups(&self, point: T::Point) -> Vec<ConnectionGroup<T>> {
        let through = |edge: T::Edge, kind: ConnectionKind| Connection {
            target: T::next_point(point, edge),
            via: Some(edge),
            kind,
        };
        let cell = |connections: Vec<Connection<T>>| ConnectionGroup {
            vertex: VertexKind::Cell,
            connections,
        };

        match self {
            Self::Solid => Vec::new(),
            Self::Room => vec![cell(Vec::new())],
            Self::Passage { passages, .. } => vec![cell(
                passages
                    .iter()
                    .map(|&edge| through(edge, ConnectionKind::Passage))
                    .collect(),
            )],
            Self::OneWay {
                income,
                outgoing,
                passages,
            } => {
                let mut connections = Vec::with_capacity(income.len() + outgoing.len() + passages.len());
                connections.extend(income.iter().map(|&edge| through(edge, ConnectionKind::OneWayIncome)));
                connections.extend(outgoing.iter().map(|&edge| through(edge, ConnectionKind::OneWayOutgoing)));
                connections.extend(passages.iter().map(|&edge| through(edge, ConnectionKind::Passage)));
                vec![cell(connections)]
            }
            Self::Teleporter {
                entrance,
                target,
                direction,
            } => vec![cell(vec![
                through(*entrance, ConnectionKind::Passage),
                Connection {
                    target: *target,
                    via: None,
                    kind: ConnectionKind::Teleport(*direction),
                },
            ])],
            Self::Bridge { crossings } => crossings
                .iter()
                .enumerate()
                .map(|(level, &(a, b))| ConnectionGroup {
                    vertex: VertexKind::Crossing(level as u8),
                    connections: vec![
                        through(a, ConnectionKind::Passage),
                        through(b, ConnectionKind::Passage),
                    ],
                })
                .collect(),
        }
    }

    /// Whether the element is a plain passage cell
    pub const fn is_plain_passage(&self) -> bool {
        matches!(self, Self::Passage { .. })
    }
}
