//! Tests for regenerate before-images and rollback

#[cfg(test)]
mod tests {
    use labyrinth::element::Element;
    use labyrinth::generation::transaction::RegenerateTransaction;
    use labyrinth::restriction::{ProviderId, Restriction};
    use labyrinth::superposition::{CombinatoricsCache, SuperpositionRegistry};
    use labyrinth::topology::{Field, SquareEdge, SquarePoint, SquareSize, SquareTopology};

    // Tests only the first image of a point is kept and rollback restores it
    // Verified by overwriting images on every record
    #[test]
    fn test_rollback_restores_first_images() {
        let point = SquarePoint::new(0, 0);
        let other = SquarePoint::new(1, 0);
        let mut cache = CombinatoricsCache::<SquareTopology>::new();
        let mut field = Field::<SquareTopology>::new(SquareSize::new(2, 1));
        let registry = SuperpositionRegistry::basic();
        let mut nodes = vec![registry.node(point, &mut cache), registry.node(other, &mut cache)];
        let original = nodes[0].clone();

        let mut transaction = RegenerateTransaction::begin(ProviderId::Strategy(3), vec![point]);
        assert_eq!(transaction.provider(), ProviderId::Strategy(3));
        assert_eq!(transaction.targets(), &[point]);

        transaction.record_element(point, field.get(point));
        transaction.record_node(&nodes[0]);
        field.set(point, Some(Element::Solid));
        nodes[0].apply_restriction(Restriction::wall(SquareEdge::Top), ProviderId::Border, false);
        transaction.record_node(&nodes[0]);
        transaction.record_element(point, field.get(point));
        transaction.record_element(other, field.get(other));
        field.set(other, Some(Element::Room));

        assert_eq!(transaction.touched_points(), vec![point, other]);
        transaction.rollback(&mut field, &mut nodes);
        assert_eq!(field.get(point), None);
        assert_eq!(field.get(other), None);
        assert_eq!(nodes[0], original);
        assert_eq!(nodes[0].entropy(), 15);
    }
}
