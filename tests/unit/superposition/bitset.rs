//! Tests for `EdgeBitset` operations and edge conversions

#[cfg(test)]
mod tests {
    use labyrinth::superposition::bitset::EdgeBitset;
    use labyrinth::topology::{SquareEdge, SquareTopology};

    // Verifies new EdgeBitset is empty with count 0
    // Verified by initializing bitset with all bits set to 1
    #[test]
    fn test_new_bitset() {
        let bitset = EdgeBitset::new(4);
        assert_eq!(bitset.count(), 0);
        assert!(bitset.is_empty());
    }

    // Tests insertion, removal and out-of-range indices
    // Verified by removing the bounds check from insert
    #[test]
    fn test_insert_remove_contains() {
        let mut bitset = EdgeBitset::new(4);
        bitset.insert(2);
        bitset.insert(7);
        assert!(bitset.contains(2));
        assert!(!bitset.contains(7));
        assert_eq!(bitset.count(), 1);
        bitset.remove(2);
        assert!(bitset.is_empty());
    }

    // Tests intersection of two bitsets returns correct elements
    // Verified by changing intersection operation to union operation
    #[test]
    fn test_intersection() {
        let first = EdgeBitset::from_indices(4, [0, 1, 3]);
        let second = EdgeBitset::from_indices(4, [1, 2, 3]);
        assert_eq!(first.intersection(&second).to_vec(), vec![1, 3]);
        let mut in_place = first;
        in_place.intersect_with(&EdgeBitset::new(4));
        assert!(in_place.is_empty());
    }

    // Tests conversion between topology edges and bit positions
    // Verified by indexing edges in reverse order
    #[test]
    fn test_edges_round_trip() {
        let bitset = EdgeBitset::from_edges::<SquareTopology>([SquareEdge::Bottom, SquareEdge::Top]);
        assert_eq!(bitset.to_vec(), vec![0, 3]);
        assert_eq!(
            bitset.edges::<SquareTopology>(),
            vec![SquareEdge::Top, SquareEdge::Bottom]
        );
        assert_eq!(EdgeBitset::all(4).count(), 4);
        assert_eq!(bitset.to_string(), "EdgeBitset(2 edges: [0, 3])");
    }
}
