//! Tests for merging areas through a new two-way passage

#[cfg(test)]
mod tests {
    use labyrinth::element::{EdgeRole, Element, ElementCategory};
    use labyrinth::generation::{Generator, GeneratorConfig, RepairStrategy};
    use labyrinth::paths::PathsGraphVertex;
    use labyrinth::strategies::RandomMergeStrategy;
    use labyrinth::topology::{SquareEdge, SquarePoint, SquareSize, SquareTopology};

    type Square = SquareTopology;

    fn point(x: i32, y: i32) -> SquarePoint {
        SquarePoint::new(x, y)
    }

    fn split_row(width: usize) -> Generator<Square> {
        let Ok(mut generator) = Generator::new(SquareSize::new(width, 1), GeneratorConfig::default()) else {
            panic!("a non-empty field must be accepted");
        };
        let placements = (0..width as i32).map(|x| {
            let edge = if x % 2 == 0 { SquareEdge::Right } else { SquareEdge::Left };
            (
                point(x, 0),
                Element::Passage {
                    category: ElementCategory::DeadEnd,
                    passages: vec![edge],
                },
            )
        });
        assert!(generator.apply_prefill(placements).is_ok());
        generator.build_graphs();
        generator
    }

    // Tests a merge opens the boundary both ways and joins the areas
    // Verified by opening only the inside cell
    #[test]
    fn test_merge_opens_passage() {
        let mut generator = split_row(4);
        let Some(area) = generator
            .areas_graph()
            .and_then(|areas| areas.area_of_vertex(PathsGraphVertex::cell(point(0, 0))))
        else {
            panic!("the left corridor has an area");
        };
        let mut strategy = RandomMergeStrategy;
        assert_eq!(RepairStrategy::<Square>::name(&strategy), "random-merge");
        assert!(matches!(strategy.handle(area, &mut generator), Ok(true)));

        let field = generator.field();
        let (Some(left), Some(right)) = (field.get(point(1, 0)), field.get(point(2, 0))) else {
            panic!("merged cells are determined");
        };
        assert_eq!(left.edge_role(SquareEdge::Right), EdgeRole::Passage);
        assert_eq!(right.edge_role(SquareEdge::Left), EdgeRole::Passage);
        assert_eq!(generator.areas_graph().map(|areas| areas.len()), Some(1));
        assert_eq!(generator.stats().regenerations, 1);
    }

    // Tests an area without neighbours cannot be merged
    // Verified by treating a missing boundary as success
    #[test]
    fn test_single_area_has_no_candidates() {
        let mut generator = split_row(2);
        let Some(area) = generator.areas_graph().and_then(|areas| areas.ids().first().copied()) else {
            panic!("the row has an area");
        };
        let mut strategy = RandomMergeStrategy;
        assert!(matches!(strategy.handle(area, &mut generator), Ok(false)));
        assert_eq!(generator.stats().failed_regenerations, 0);
    }
}
