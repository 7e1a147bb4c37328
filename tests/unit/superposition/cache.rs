//! Tests for arity rules and the memoized subset enumeration

#[cfg(test)]
mod tests {
    use labyrinth::element::ElementCategory;
    use labyrinth::superposition::bitset::EdgeBitset;
    use labyrinth::superposition::{ArityRule, CombinatoricsCache};
    use labyrinth::topology::{SquareEdge, SquareTopology};

    // Tests rules and passage kinds map onto each other
    // Verified by mapping Corner to OppositePair
    #[test]
    fn test_rule_category_mapping() {
        for category in ElementCategory::BASIC {
            let rule = ArityRule::for_category(category);
            assert_eq!(rule.map(ArityRule::category), Some(category));
        }
        assert_eq!(ArityRule::for_category(ElementCategory::Bridge), None);
    }

    // Tests opposite and adjacent pairs are told apart
    // Verified by dropping the opposite comparison
    #[test]
    fn test_pair_rules() {
        let straight = EdgeBitset::from_edges::<SquareTopology>([SquareEdge::Left, SquareEdge::Right]);
        let bent = EdgeBitset::from_edges::<SquareTopology>([SquareEdge::Left, SquareEdge::Top]);
        assert!(ArityRule::OppositePair.accepts::<SquareTopology>(&straight));
        assert!(!ArityRule::OppositePair.accepts::<SquareTopology>(&bent));
        assert!(ArityRule::AdjacentPair.accepts::<SquareTopology>(&bent));
        assert!(!ArityRule::AdjacentPair.accepts::<SquareTopology>(&straight));
    }

    // Tests subset counts on the square grid
    // Verified by enumerating branching subsets of size three only
    #[test]
    fn test_subset_counts() {
        let mut cache = CombinatoricsCache::<SquareTopology>::new();
        assert_eq!(cache.edge_subsets(ArityRule::Single).len(), 4);
        assert_eq!(cache.edge_subsets(ArityRule::OppositePair).len(), 2);
        assert_eq!(cache.edge_subsets(ArityRule::AdjacentPair).len(), 4);
        assert_eq!(cache.edge_subsets(ArityRule::Branching).len(), 5);
    }

    // Tests repeated lookups hit the cache
    // Verified by recomputing on every lookup
    #[test]
    fn test_cache_hits() {
        let mut cache = CombinatoricsCache::<SquareTopology>::new();
        let first = cache.edge_subsets(ArityRule::Single).to_vec();
        let misses = cache.stats.misses;
        let second = cache.edge_subsets(ArityRule::Single).to_vec();
        assert_eq!(first, second);
        assert_eq!(cache.stats.misses, misses);
        assert!(cache.stats.hits >= 1);
    }

    // Tests memoized binomials
    // Verified by counting every lookup as a miss
    #[test]
    fn test_binomial_memo() {
        let mut cache = CombinatoricsCache::<SquareTopology>::new();
        assert_eq!(cache.binomial(6, 2), 15);
        let hits = cache.stats.hits;
        assert_eq!(cache.binomial(6, 2), 15);
        assert_eq!(cache.stats.hits, hits + 1);
    }
}
