//! Tests for element kind names, parsing and collapse weights

#[cfg(test)]
mod tests {
    use labyrinth::LabyrinthError;
    use labyrinth::element::{CategoryWeights, ElementCategory};
    use labyrinth::io::configuration::DEFAULT_CATEGORY_WEIGHT;

    // Tests every name parses back to its kind
    // Verified by renaming dead-end to dead_end in FromStr only
    #[test]
    fn test_names_parse_back() {
        for category in ElementCategory::ALL {
            let parsed: ElementCategory = category.name().parse().unwrap_or(ElementCategory::Room);
            assert_eq!(parsed, category);
            assert_eq!(category.to_string(), category.name());
        }
    }

    // Tests unknown names are rejected as invalid parameters
    // Verified by defaulting unknown names to Solid
    #[test]
    fn test_unknown_name_rejected() {
        let result = "labyrinth".parse::<ElementCategory>();
        assert!(matches!(
            result,
            Err(LabyrinthError::InvalidParameter {
                parameter: "kind",
                ..
            })
        ));
    }

    // Tests only solid cells are unvisitable
    // Verified by marking Room as unvisitable
    #[test]
    fn test_visitability() {
        assert!(!ElementCategory::Solid.is_visitable());
        assert!(ElementCategory::Room.is_visitable());
        assert!(ElementCategory::BASIC.iter().all(|category| category.is_visitable()));
    }

    // Tests weights fall back to the default and keep overrides
    // Verified by returning zero for missing entries
    #[test]
    fn test_weight_overrides() {
        let weights = CategoryWeights::new()
            .with(ElementCategory::Junction, 0.5)
            .with(ElementCategory::DeadEnd, 3.0);
        assert!((weights.get(ElementCategory::Junction) - 0.5).abs() < f64::EPSILON);
        assert!((weights.get(ElementCategory::Corner) - DEFAULT_CATEGORY_WEIGHT).abs() < f64::EPSILON);
        let overrides: Vec<ElementCategory> = weights.overrides().map(|(category, _)| category).collect();
        assert_eq!(overrides, vec![ElementCategory::Junction, ElementCategory::DeadEnd]);
        assert!(weights.validate().is_ok());
    }

    // Tests non-positive and non-finite weights fail validation
    // Verified by accepting zero weights
    #[test]
    fn test_weight_validation() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let weights = CategoryWeights::new().with(ElementCategory::Corner, bad);
            assert!(weights.validate().is_err(), "weight {bad} must be rejected");
        }
    }
}
