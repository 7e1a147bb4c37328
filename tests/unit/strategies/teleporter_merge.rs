//! Tests for linking distant areas with paired teleporters

#[cfg(test)]
mod tests {
    use labyrinth::element::{Element, ElementCategory, TeleporterDirection};
    use labyrinth::generation::{Generator, GeneratorConfig, RepairStrategy};
    use labyrinth::paths::{AreaId, PathsGraphVertex};
    use labyrinth::strategies::TeleporterMergeStrategy;
    use labyrinth::superposition::SuperpositionRegistry;
    use labyrinth::topology::{SquareEdge, SquarePoint, SquareSize, SquareTopology};

    type Square = SquareTopology;

    fn point(x: i32, y: i32) -> SquarePoint {
        SquarePoint::new(x, y)
    }

    fn split_row(registry: SuperpositionRegistry) -> (Generator<Square>, AreaId) {
        let Ok(mut generator) = Generator::new(SquareSize::new(4, 1), GeneratorConfig::new(registry)) else {
            panic!("a non-empty field must be accepted");
        };
        let dead_end = |edge| Element::Passage {
            category: ElementCategory::DeadEnd,
            passages: vec![edge],
        };
        let placements = [
            (point(0, 0), dead_end(SquareEdge::Right)),
            (point(1, 0), dead_end(SquareEdge::Left)),
            (point(2, 0), dead_end(SquareEdge::Right)),
            (point(3, 0), dead_end(SquareEdge::Left)),
        ];
        assert!(generator.apply_prefill(placements).is_ok());
        generator.build_graphs();
        let Some(area) = generator
            .areas_graph()
            .and_then(|areas| areas.area_of_vertex(PathsGraphVertex::cell(point(0, 0))))
        else {
            panic!("the left corridor has an area");
        };
        (generator, area)
    }

    // Tests the farthest dead-end pair becomes a two-way teleporter link
    // Verified by pairing the nearest dead-ends first
    #[test]
    fn test_links_farthest_dead_ends() {
        let (mut generator, area) = split_row(SuperpositionRegistry::full());
        let mut strategy = TeleporterMergeStrategy;
        assert_eq!(RepairStrategy::<Square>::name(&strategy), "teleporter-merge");
        assert!(matches!(strategy.handle(area, &mut generator), Ok(true)));

        let expected = Element::Teleporter {
            entrance: SquareEdge::Right,
            target: point(3, 0),
            direction: TeleporterDirection::Bidirectional,
        };
        assert_eq!(generator.field().get(point(0, 0)), Some(&expected));
        assert_eq!(
            generator.field().get(point(3, 0)).map(Element::category),
            Some(ElementCategory::Teleporter)
        );
        assert_eq!(generator.areas_graph().map(|areas| areas.len()), Some(1));
    }

    // Tests nothing changes when teleporters are not registered
    // Verified by ignoring the kind filter on the paired cells
    #[test]
    fn test_requires_teleporter_kind() {
        let (mut generator, area) = split_row(SuperpositionRegistry::basic());
        let before = generator.field().clone();
        let mut strategy = TeleporterMergeStrategy;
        assert!(matches!(strategy.handle(area, &mut generator), Ok(false)));
        assert_eq!(generator.field(), &before);
        // Two inside dead-ends times two outside partners
        assert_eq!(generator.stats().failed_regenerations, 4);
    }
}
