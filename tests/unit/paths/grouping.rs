//! Tests for merging areas that reach each other through one-way links

#[cfg(test)]
mod tests {
    use labyrinth::element::{Element, ElementCategory};
    use labyrinth::graph::EdgeId;
    use labyrinth::paths::{AreaId, AreasGraph, PathsGraph, PathsGraphVertex};
    use labyrinth::topology::{Field, SquareEdge, SquarePoint, SquareSize, SquareTopology};

    type Square = SquareTopology;

    fn point(x: i32, y: i32) -> SquarePoint {
        SquarePoint::new(x, y)
    }

    fn corner(first: SquareEdge, second: SquareEdge) -> Element<Square> {
        Element::Passage {
            category: ElementCategory::Corner,
            passages: vec![first, second],
        }
    }

    /// Square loop whose bottom-right cell turns the loop into a one-way circuit
    fn one_way_loop() -> Field<Square> {
        let mut field = Field::new(SquareSize::new(2, 2));
        field.set(point(0, 0), Some(corner(SquareEdge::Right, SquareEdge::Bottom)));
        field.set(point(1, 0), Some(corner(SquareEdge::Left, SquareEdge::Bottom)));
        field.set(point(0, 1), Some(corner(SquareEdge::Top, SquareEdge::Right)));
        field.set(
            point(1, 1),
            Some(Element::OneWay {
                income: vec![SquareEdge::Top],
                outgoing: vec![SquareEdge::Left],
                passages: Vec::new(),
            }),
        );
        field
    }

    fn one_way_row() -> Field<Square> {
        let mut field = Field::new(SquareSize::new(3, 1));
        field.set(
            point(0, 0),
            Some(Element::Passage {
                category: ElementCategory::DeadEnd,
                passages: vec![SquareEdge::Right],
            }),
        );
        field.set(
            point(1, 0),
            Some(Element::OneWay {
                income: vec![SquareEdge::Left],
                outgoing: vec![SquareEdge::Right],
                passages: Vec::new(),
            }),
        );
        field.set(
            point(2, 0),
            Some(Element::Passage {
                category: ElementCategory::DeadEnd,
                passages: vec![SquareEdge::Left],
            }),
        );
        field
    }

    fn links(areas: &AreasGraph<Square>) -> Vec<EdgeId> {
        areas.graph().edges().map(|(_, link)| link.paths_edge).collect()
    }

    fn area_at(areas: &AreasGraph<Square>, x: i32, y: i32) -> AreaId {
        let Some(id) = areas.area_of_vertex(PathsGraphVertex::cell(point(x, y))) else {
            panic!("vertex ({x}, {y}) must belong to an area");
        };
        id
    }

    // Tests the one-way loop starts as two areas linked both ways
    // Verified by treating one-way edges as bidirectional
    #[test]
    fn test_loop_starts_split() {
        let areas = AreasGraph::derive(&PathsGraph::derive(&one_way_loop()));
        assert_eq!(areas.len(), 2);
        assert_eq!(areas.graph().edge_count(), 2);
        let (passages, one_way) = (area_at(&areas, 1, 0), area_at(&areas, 1, 1));
        assert!(areas.reaches(passages, one_way));
        assert!(areas.reaches(one_way, passages));
    }

    // Tests a directed cycle of areas merges into one area
    // Verified by merging only the walk top
    #[test]
    fn test_group_cycles_merges() {
        let mut areas = AreasGraph::derive(&PathsGraph::derive(&one_way_loop()));
        assert_eq!(areas.group_cycles(), 1);
        assert_eq!(areas.len(), 1);
        assert_eq!(areas.graph().edge_count(), 0);
        let Some(area) = areas.areas().next() else {
            panic!("one area must remain");
        };
        assert_eq!(area.points().len(), 4);
        assert_eq!(area.graph().edge_count(), 4);
    }

    // Tests an acyclic chain of areas is left alone
    // Verified by merging every linked pair
    #[test]
    fn test_group_cycles_keeps_chain() {
        let mut areas = AreasGraph::derive(&PathsGraph::derive(&one_way_row()));
        assert_eq!(areas.group_cycles(), 0);
        assert_eq!(areas.len(), 3);
        assert_eq!(areas.graph().edge_count(), 2);
    }

    // Tests grouping through a single link merges the whole cycle
    // Verified by merging only the link endpoints without a return path
    #[test]
    fn test_group_mutually_reachable() {
        let mut areas = AreasGraph::derive(&PathsGraph::derive(&one_way_loop()));
        let Some(&link) = links(&areas).first() else {
            panic!("the loop must have area links");
        };
        let Some(merged) = areas.group_mutually_reachable(link) else {
            panic!("the link closes a cycle");
        };
        assert_eq!(areas.len(), 1);
        assert!(areas.contains(merged));
        assert_eq!(areas.group_mutually_reachable(link), None);
    }

    // Tests a link without a way back is not grouped
    // Verified by accepting the link itself as a return path
    #[test]
    fn test_group_without_return() {
        let mut areas = AreasGraph::derive(&PathsGraph::derive(&one_way_row()));
        for link in links(&areas) {
            assert_eq!(areas.group_mutually_reachable(link), None);
        }
        assert_eq!(areas.len(), 3);
    }

    // Tests regrouping around a rebuilt area counts each merge once
    // Verified by re-checking links that became internal
    #[test]
    fn test_regroup_around() {
        let mut areas = AreasGraph::derive(&PathsGraph::derive(&one_way_loop()));
        let one_way = area_at(&areas, 1, 1);
        assert_eq!(areas.regroup_around(&[one_way]), 1);
        assert_eq!(areas.len(), 1);
        let remaining = areas.ids();
        assert_eq!(areas.regroup_around(&remaining), 0);
    }
}
