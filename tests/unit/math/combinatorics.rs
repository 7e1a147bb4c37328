//! Tests for binomial coefficients, subset enumeration and assignments

#[cfg(test)]
mod tests {
    use labyrinth::math::combinatorics::{assignments, binomial, combinations, saturating_power};

    // Tests small binomial coefficients and the out-of-range case
    // Verified by dropping the k > n guard
    #[test]
    fn test_binomial_values() {
        assert_eq!(binomial(4, 0), 1);
        assert_eq!(binomial(4, 2), 6);
        assert_eq!(binomial(10, 3), 120);
        assert_eq!(binomial(3, 4), 0);
    }

    // Tests power saturates instead of overflowing
    // Verified by replacing saturating_pow with pow
    #[test]
    fn test_saturating_power() {
        assert_eq!(saturating_power(3, 4), 81);
        assert_eq!(saturating_power(2, 0), 1);
        assert_eq!(saturating_power(10, 100), usize::MAX);
    }

    // Tests subsets come out in lexicographic order with the right count
    // Verified by advancing the leftmost position first
    #[test]
    fn test_combinations_order() {
        let subsets = combinations(4, 2);
        assert_eq!(
            subsets,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
        assert_eq!(combinations(5, 3).len(), binomial(5, 3));
    }

    // Tests degenerate subset sizes
    // Verified by returning an empty list for k == 0
    #[test]
    fn test_combinations_edge_cases() {
        assert_eq!(combinations(3, 0), vec![Vec::<usize>::new()]);
        assert_eq!(combinations(3, 3), vec![vec![0, 1, 2]]);
        assert!(combinations(2, 3).is_empty());
    }

    // Tests assignments enumerate options^slots tuples with the last slot fastest
    // Verified by carrying from the first slot
    #[test]
    fn test_assignments_counting_order() {
        let all = assignments(2, 3);
        assert_eq!(all.len(), 9);
        assert_eq!(all.first(), Some(&vec![0, 0]));
        assert_eq!(all.get(1), Some(&vec![0, 1]));
        assert_eq!(all.last(), Some(&vec![2, 2]));
    }

    // Tests empty slot and option counts
    // Verified by returning no assignment for zero slots
    #[test]
    fn test_assignments_degenerate() {
        assert_eq!(assignments(0, 3), vec![Vec::<usize>::new()]);
        assert_eq!(assignments(0, 0), vec![Vec::<usize>::new()]);
        assert!(assignments(2, 0).is_empty());
    }
}
