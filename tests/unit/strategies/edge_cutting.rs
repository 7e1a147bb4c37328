//! Tests for cutting redundant two-way edges

#[cfg(test)]
mod tests {
    use labyrinth::LabyrinthError;
    use labyrinth::element::{Element, ElementCategory};
    use labyrinth::generation::{Generator, GeneratorConfig, RepairStrategy};
    use labyrinth::paths::AreaId;
    use labyrinth::strategies::RedundantEdgeCutting;
    use labyrinth::topology::{SquareEdge, SquarePoint, SquareSize, SquareTopology};

    type Square = SquareTopology;

    fn point(x: i32, y: i32) -> SquarePoint {
        SquarePoint::new(x, y)
    }

    fn corner_ring() -> (Generator<Square>, AreaId) {
        let Ok(mut generator) = Generator::new(SquareSize::new(2, 2), GeneratorConfig::default()) else {
            panic!("a non-empty field must be accepted");
        };
        let corner = |first, second| Element::Passage {
            category: ElementCategory::Corner,
            passages: vec![first, second],
        };
        let placements = [
            (point(0, 0), corner(SquareEdge::Right, SquareEdge::Bottom)),
            (point(1, 0), corner(SquareEdge::Left, SquareEdge::Bottom)),
            (point(0, 1), corner(SquareEdge::Top, SquareEdge::Right)),
            (point(1, 1), corner(SquareEdge::Top, SquareEdge::Left)),
        ];
        assert!(generator.apply_prefill(placements).is_ok());
        generator.build_graphs();
        let Some(area) = generator.areas_graph().and_then(|areas| areas.ids().first().copied()) else {
            panic!("the ring has an area");
        };
        (generator, area)
    }

    // Tests probabilities outside the unit interval are rejected
    // Verified by clamping the probability instead
    #[test]
    fn test_probability_bounds() {
        for invalid in [-0.1, 1.5, f64::NAN] {
            assert!(matches!(
                RedundantEdgeCutting::<Square>::new(invalid),
                Err(LabyrinthError::InvalidParameter { .. })
            ));
        }
        let Ok(strategy) = RedundantEdgeCutting::<Square>::new(0.3) else {
            panic!("0.3 is a valid probability");
        };
        assert!((strategy.probability() - 0.3).abs() < f64::EPSILON);
        assert_eq!(RepairStrategy::<Square>::name(&strategy), "edge-cutting");
    }

    // Tests a certain cut opens the ring without splitting the area
    // Verified by cutting edges without an alternative route
    #[test]
    fn test_cuts_ring_once() {
        let (mut generator, area) = corner_ring();
        let Ok(mut strategy) = RedundantEdgeCutting::new(1.0) else {
            panic!("1.0 is a valid probability");
        };
        assert!(matches!(strategy.handle(area, &mut generator), Ok(true)));
        assert_eq!(generator.stats().regenerations, 1);
        assert_eq!(strategy.decided_count(), 1);
        assert_eq!(generator.areas_graph().map(|areas| areas.len()), Some(1));
        let dead_ends = generator
            .field()
            .elements()
            .filter(|(_, element)| element.category() == ElementCategory::DeadEnd)
            .count();
        assert_eq!(dead_ends, 2);
    }

    // Tests a zero probability decides every redundant edge without cutting
    // Verified by deciding reverse edges separately
    #[test]
    fn test_zero_probability_only_decides() {
        let (mut generator, area) = corner_ring();
        let before = generator.field().clone();
        let Ok(mut strategy) = RedundantEdgeCutting::new(0.0) else {
            panic!("0.0 is a valid probability");
        };
        assert!(matches!(strategy.handle(area, &mut generator), Ok(true)));
        assert_eq!(strategy.decided_count(), 2);
        assert_eq!(generator.field(), &before);
        assert_eq!(generator.stats().regenerations, 0);
    }
}
