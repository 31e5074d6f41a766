//! Tests for command-line interface parsing and batch processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use fractalgen::io::cli::{Cli, FileProcessor};
    use fractalgen::io::configuration::DEFAULT_STEP;
    use std::path::PathBuf;

    // Tests CLI parsing with only the required target argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let args = vec!["program", "config.json"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.target, PathBuf::from("config.json"));
        assert_eq!(cli.iterations, None);
        assert!((cli.step - DEFAULT_STEP).abs() < f64::EPSILON);
        assert!(!cli.frontier);
        assert!(!cli.link);
        assert!(!cli.quiet);
    }

    // Tests CLI parsing with all available arguments
    // Verified by removing any argument definition
    #[test]
    fn test_cli_parse_all_args() {
        let args = vec![
            "program",
            "configs",
            "--iterations",
            "6",
            "--step",
            "0.25",
            "--frontier",
            "--link",
            "--quiet",
            "--no-skip",
        ];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.iterations, Some(6));
        assert!((cli.step - 0.25).abs() < f64::EPSILON);
        assert!(cli.frontier);
        assert!(cli.link);
        assert!(cli.quiet);
        assert!(cli.no_skip);
    }

    // Tests rejection of a negative iterations override
    // Verified by widening the iterations flag to a signed type
    #[test]
    fn test_cli_rejects_negative_iterations() {
        let args = vec!["program", "config.json", "--iterations", "-1"];

        assert!(Cli::try_parse_from(args).is_err());
    }

    // Tests file skip behavior based on --no-skip flag
    // Verified by inverting boolean logic in skip_existing method
    #[test]
    fn test_skip_existing_logic() {
        let cli_default = Cli::parse_from(vec!["program", "config.json"]);
        assert!(cli_default.skip_existing());

        let cli_no_skip = Cli::parse_from(vec!["program", "config.json", "--no-skip"]);
        assert!(!cli_no_skip.skip_existing());
    }

    // Tests progress display based on --quiet flag
    // Verified by inverting quiet flag logic
    #[test]
    fn test_should_show_progress() {
        let cli_default = Cli::parse_from(vec!["program", "config.json"]);
        assert!(cli_default.should_show_progress());

        let cli_quiet = Cli::parse_from(vec!["program", "config.json", "--quiet"]);
        assert!(!cli_quiet.should_show_progress());
    }

    // Tests end-to-end processing of a configuration file
    // Verified by breaking the output path construction
    #[test]
    fn test_process_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tree.json");
        std::fs::write(
            &input,
            r#"{"rules": [{"position": [0, 0.5, 0], "rotation": [0, 0, 0], "scale": 0.5}],
               "iterations": 2}"#,
        )
        .unwrap();

        let cli = Cli::parse_from(vec![
            "program",
            input.to_str().unwrap(),
            "--quiet",
            "--frontier",
        ]);
        let mut processor = FileProcessor::new(cli);
        processor.process().unwrap();

        let output = dir.path().join("tree_instances.json");
        let text = std::fs::read_to_string(output).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value.get("count").and_then(serde_json::Value::as_u64), Some(3));
        assert!(value.get("frontier").is_some());
    }

    // Tests that existing outputs are skipped by default and reprocessed
    // with --no-skip
    // Verified by inverting the skip condition
    #[test]
    fn test_skip_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("flat.json");
        std::fs::write(&input, r#"{"rules": [], "iterations": 1}"#).unwrap();
        let output = dir.path().join("flat_instances.json");
        std::fs::write(&output, "stale").unwrap();

        let cli = Cli::parse_from(vec!["program", input.to_str().unwrap(), "--quiet"]);
        let mut processor = FileProcessor::new(cli);
        processor.process().unwrap();
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "stale");

        let cli = Cli::parse_from(vec![
            "program",
            input.to_str().unwrap(),
            "--quiet",
            "--no-skip",
        ]);
        let mut processor = FileProcessor::new(cli);
        processor.process().unwrap();
        assert_ne!(std::fs::read_to_string(&output).unwrap(), "stale");
    }

    // Tests directory processing ignores generated output documents
    // Verified by removing the output suffix filter
    #[test]
    fn test_directory_skips_output_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("only.json"),
            r#"{"rules": [], "iterations": 0}"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("old_instances.json"), "{}").unwrap();

        let cli = Cli::parse_from(vec!["program", dir.path().to_str().unwrap(), "--quiet"]);
        let mut processor = FileProcessor::new(cli);
        processor.process().unwrap();

        assert!(dir.path().join("only_instances.json").exists());
        // The stale output document was not treated as an input
        assert!(!dir.path().join("old_instances_instances.json").exists());
    }

    // Tests rejection of a non-JSON target file
    // Verified by widening the extension check
    #[test]
    fn test_non_json_target_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("image.png");
        std::fs::write(&input, "not a config").unwrap();

        let cli = Cli::parse_from(vec!["program", input.to_str().unwrap(), "--quiet"]);
        let mut processor = FileProcessor::new(cli);

        assert!(processor.process().is_err());
    }
}
