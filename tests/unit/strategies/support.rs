//! Tests for boundary discovery, edge steps and cutting

#[cfg(test)]
mod tests {
    use labyrinth::LabyrinthError;
    use labyrinth::element::{EdgeRole, Element, ElementCategory, TeleporterDirection};
    use labyrinth::generation::{Generator, GeneratorConfig};
    use labyrinth::paths::{AreaId, PathsEdgeKind, PathsGraphEdge, PathsGraphVertex};
    use labyrinth::restriction::ProviderId;
    use labyrinth::strategies::support::{boundary_candidates, cut_first, cut_steps, edge_steps};
    use labyrinth::topology::{SquareEdge, SquarePoint, SquareSize, SquareTopology};

    type Square = SquareTopology;

    fn point(x: i32, y: i32) -> SquarePoint {
        SquarePoint::new(x, y)
    }

    fn passage(category: ElementCategory, passages: &[SquareEdge]) -> Element<Square> {
        Element::Passage {
            category,
            passages: passages.to_vec(),
        }
    }

    fn prefilled(width: usize, height: usize, placements: Vec<(SquarePoint, Element<Square>)>) -> Generator<Square> {
        let Ok(mut generator) = Generator::new(SquareSize::new(width, height), GeneratorConfig::default()) else {
            panic!("a non-empty field must be accepted");
        };
        assert!(generator.apply_prefill(placements).is_ok());
        generator
    }

    fn split_row() -> Generator<Square> {
        prefilled(
            4,
            1,
            vec![
                (point(0, 0), passage(ElementCategory::DeadEnd, &[SquareEdge::Right])),
                (point(1, 0), passage(ElementCategory::DeadEnd, &[SquareEdge::Left])),
                (point(2, 0), passage(ElementCategory::DeadEnd, &[SquareEdge::Right])),
                (point(3, 0), passage(ElementCategory::DeadEnd, &[SquareEdge::Left])),
            ],
        )
    }

    fn corner_ring() -> Generator<Square> {
        prefilled(
            2,
            2,
            vec![
                (point(0, 0), passage(ElementCategory::Corner, &[SquareEdge::Right, SquareEdge::Bottom])),
                (point(1, 0), passage(ElementCategory::Corner, &[SquareEdge::Left, SquareEdge::Bottom])),
                (point(0, 1), passage(ElementCategory::Corner, &[SquareEdge::Top, SquareEdge::Right])),
                (point(1, 1), passage(ElementCategory::Corner, &[SquareEdge::Top, SquareEdge::Left])),
            ],
        )
    }

    // Tests boundary pairs are the adjacent cells owned by other areas
    // Verified by pairing cells of the same area
    #[test]
    fn test_boundary_candidates() {
        let mut generator = split_row();
        assert!(matches!(
            boundary_candidates(&generator, AreaId(0)),
            Err(LabyrinthError::GraphsNotBuilt { .. })
        ));
        generator.build_graphs();
        let Some(area) = generator
            .areas_graph()
            .and_then(|areas| areas.area_of_vertex(PathsGraphVertex::cell(point(0, 0))))
        else {
            panic!("the left corridor has an area");
        };
        let Ok(candidates) = boundary_candidates(&generator, area) else {
            panic!("graphs are built");
        };
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].inside, point(1, 0));
        assert_eq!(candidates[0].edge, SquareEdge::Right);
        assert_eq!(candidates[0].outside, point(2, 0));
        assert_ne!(candidates[0].neighbor_area, area);

        assert!(boundary_candidates(&generator, AreaId(99)).is_ok_and(|found| found.is_empty()));
    }

    // Tests steps follow the edge through its intermediates and skip jumps
    // Verified by returning the endpoints only
    #[test]
    fn test_edge_steps() {
        let mut edge = PathsGraphEdge::new(
            PathsGraphVertex::cell(0_u32),
            PathsGraphVertex::cell(3),
            PathsEdgeKind::Passage,
        );
        edge.intermediate = vec![PathsGraphVertex::cell(1), PathsGraphVertex::cell(2)];
        assert_eq!(edge_steps(&edge), vec![(0, 1), (1, 2), (2, 3)]);

        let jump = PathsGraphEdge::new(
            PathsGraphVertex::cell(0_u32),
            PathsGraphVertex::cell(9),
            PathsEdgeKind::Teleport { bidirectional: true },
        );
        assert!(edge_steps(&jump).is_empty());
    }

    // Tests cut pairs keep walked steps and add the two ends of a jump
    // Verified by returning no pair for a jump
    #[test]
    fn test_cut_steps() {
        let mut edge = PathsGraphEdge::new(
            PathsGraphVertex::cell(0_u32),
            PathsGraphVertex::cell(2),
            PathsEdgeKind::Passage,
        );
        edge.intermediate = vec![PathsGraphVertex::cell(1)];
        assert_eq!(cut_steps(&edge), edge_steps(&edge));

        let jump = PathsGraphEdge::new(
            PathsGraphVertex::cell(0_u32),
            PathsGraphVertex::cell(9),
            PathsEdgeKind::Teleport { bidirectional: false },
        );
        assert_eq!(cut_steps(&jump), vec![(0, 9)]);
    }

    // Tests cutting a jump turns both teleporters into dead ends
    // Verified by cutting adjacent pairs only
    #[test]
    fn test_cut_first_breaks_teleporter_pair() {
        let mut generator = prefilled(
            3,
            1,
            vec![
                (
                    point(0, 0),
                    Element::Teleporter {
                        entrance: SquareEdge::Right,
                        target: point(2, 0),
                        direction: TeleporterDirection::Bidirectional,
                    },
                ),
                (point(1, 0), passage(ElementCategory::Corridor, &[SquareEdge::Left, SquareEdge::Right])),
                (
                    point(2, 0),
                    Element::Teleporter {
                        entrance: SquareEdge::Left,
                        target: point(0, 0),
                        direction: TeleporterDirection::Bidirectional,
                    },
                ),
            ],
        );
        generator.build_graphs();
        let result = cut_first(&mut generator, &[(point(0, 0), point(2, 0))], ProviderId::Strategy(3));
        assert!(matches!(result, Ok(true)));

        let field = generator.field();
        let (Some(left), Some(right)) = (field.get(point(0, 0)), field.get(point(2, 0))) else {
            panic!("cut cells are determined again");
        };
        assert_eq!(left, &passage(ElementCategory::DeadEnd, &[SquareEdge::Right]));
        assert_eq!(right, &passage(ElementCategory::DeadEnd, &[SquareEdge::Left]));
    }

    // Tests a cut walls off the shared edge of both cells
    // Verified by restricting only the first cell
    #[test]
    fn test_cut_first_walls_step() {
        let mut generator = corner_ring();
        generator.build_graphs();
        let provider = ProviderId::Strategy(42);
        let result = cut_first(&mut generator, &[(point(0, 0), point(1, 0))], provider);
        assert!(matches!(result, Ok(true)));

        let field = generator.field();
        let (Some(left), Some(right)) = (field.get(point(0, 0)), field.get(point(1, 0))) else {
            panic!("cut cells are determined again");
        };
        assert_eq!(left.edge_role(SquareEdge::Right), EdgeRole::Wall);
        assert_eq!(right.edge_role(SquareEdge::Left), EdgeRole::Wall);
        assert_eq!(left.category(), ElementCategory::DeadEnd);
    }

    // Tests steps touching non-passage cells are never attempted
    // Verified by cutting next to solid cells
    #[test]
    fn test_cut_first_skips_non_passages() {
        let mut generator = prefilled(
            2,
            1,
            vec![
                (point(0, 0), Element::Solid),
                (point(1, 0), Element::Room),
            ],
        );
        generator.build_graphs();
        let result = cut_first(&mut generator, &[(point(0, 0), point(1, 0))], ProviderId::Strategy(1));
        assert!(matches!(result, Ok(false)));
        assert_eq!(generator.stats().regenerations, 0);
        assert_eq!(generator.stats().failed_regenerations, 0);
    }
}
