//! Tests for connection kinds and answering connections

#[cfg(test)]
mod tests {
    use labyrinth::element::{Connection, ConnectionKind, TeleporterDirection};
    use labyrinth::topology::{SquareEdge, SquarePoint, SquareTopology};

    fn through(target: SquarePoint, edge: SquareEdge, kind: ConnectionKind) -> Connection<SquareTopology> {
        Connection {
            target,
            via: Some(edge),
            kind,
        }
    }

    // Tests leave and enter permissions per kind
    // Verified by letting OneWayIncome leave
    #[test]
    fn test_directions() {
        assert!(ConnectionKind::Passage.can_leave() && ConnectionKind::Passage.can_enter());
        assert!(!ConnectionKind::OneWayIncome.can_leave());
        assert!(ConnectionKind::OneWayIncome.can_enter());
        assert!(ConnectionKind::OneWayOutgoing.can_leave());
        assert!(!ConnectionKind::OneWayOutgoing.can_enter());
        let outgoing = ConnectionKind::Teleport(TeleporterDirection::Outgoing);
        assert!(outgoing.can_leave() && !outgoing.can_enter());
        assert!(outgoing.is_teleport());
    }

    // Tests a neighbour pointing back through the adapted edge answers
    // Verified by comparing edges without adapting
    #[test]
    fn test_answered_through_adapted_edge() {
        let origin = SquarePoint::new(0, 0);
        let neighbor = SquarePoint::new(1, 0);
        let forward = through(neighbor, SquareEdge::Right, ConnectionKind::Passage);
        let back = through(origin, SquareEdge::Left, ConnectionKind::Passage);
        let wrong_edge = through(origin, SquareEdge::Top, ConnectionKind::Passage);
        let wrong_target = through(SquarePoint::new(2, 0), SquareEdge::Left, ConnectionKind::Passage);
        assert!(forward.is_answered_by(origin, &back));
        assert!(!forward.is_answered_by(origin, &wrong_edge));
        assert!(!forward.is_answered_by(origin, &wrong_target));
    }

    // Tests teleporter jumps only answer teleporter jumps
    // Verified by ignoring the teleport flag
    #[test]
    fn test_teleport_answering() {
        let origin = SquarePoint::new(0, 0);
        let far = SquarePoint::new(5, 5);
        let jump = |target, direction| Connection::<SquareTopology> {
            target,
            via: None,
            kind: ConnectionKind::Teleport(direction),
        };
        let there = jump(far, TeleporterDirection::Bidirectional);
        let back = jump(origin, TeleporterDirection::Bidirectional);
        assert!(there.is_answered_by(origin, &back));
        let walked = through(origin, SquareEdge::Left, ConnectionKind::Passage);
        assert!(!there.is_answered_by(origin, &walked));
    }
}
