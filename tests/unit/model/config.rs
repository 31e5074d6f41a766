//! Tests for the aggregate configuration model

#[cfg(test)]
mod tests {
    use fractalgen::io::configuration::DEFAULT_ITERATIONS;
    use fractalgen::model::config::{BaseShape, FractalConfig};
    use fractalgen::model::rule::TransformRule;

    // Tests default construction values
    // Verified by changing any field default
    #[test]
    fn test_default_config() {
        let config = FractalConfig::default();

        assert!(config.rules.is_empty());
        assert_eq!(config.iterations, DEFAULT_ITERATIONS);
        assert_eq!(config.base_shape, BaseShape::Cube);
        assert!(config.name.is_empty());
    }

    // Tests the rules-and-iterations constructor
    // Verified by swapping the constructor arguments
    #[test]
    fn test_new_sets_rules_and_iterations() {
        let rules = vec![TransformRule::at_position([0.0, 0.5, 0.0], 0.5)];
        let config = FractalConfig::new(rules.clone(), 7);

        assert_eq!(config.rules, rules);
        assert_eq!(config.iterations, 7);
    }

    // Tests that validation reports the offending rule index
    // Verified by validating rules in reverse order
    #[test]
    fn test_validate_reports_first_bad_rule() {
        let mut config = FractalConfig::new(
            vec![
                TransformRule::at_position([0.0, 0.5, 0.0], 0.5),
                TransformRule::at_position([0.5, 0.0, 0.0], 0.5),
            ],
            2,
        );
        if let Some(rule) = config.rules.get_mut(1) {
            rule.scale = -1.0;
        }

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("index 1"));
    }

    // Tests camelCase field names on the wire
    // Verified by removing the serde rename attribute
    #[test]
    fn test_wire_field_names_are_camel_case() {
        let config = FractalConfig::default();
        let value = serde_json::to_value(&config).unwrap();

        assert!(value.get("baseShape").is_some());
        assert_eq!(value.get("baseShape").and_then(|v| v.as_str()), Some("cube"));
        assert!(value.get("iterations").is_some());
    }

    // Tests base shape wire spelling for every variant
    // Verified by changing the enum rename policy
    #[test]
    fn test_base_shape_serialization() {
        for (shape, expected) in [
            (BaseShape::Cube, "\"cube\""),
            (BaseShape::Sphere, "\"sphere\""),
            (BaseShape::Pyramid, "\"pyramid\""),
        ] {
            assert_eq!(serde_json::to_string(&shape).unwrap(), expected);
        }
    }
}
