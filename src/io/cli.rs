//! Command-line interface for batch processing fractal configuration files

use crate::algorithm::generator::generate_instances;
use crate::io::configuration::{DEFAULT_STEP, OUTPUT_SUFFIX};
use crate::io::error::{Result, invalid_parameter};
use crate::io::persistence::{InstanceDocument, load_config};
use crate::io::progress::ProgressManager;
use crate::io::share::encode_share;
use crate::spatial::frontier::compute_frontier;
use crate::spatial::indexer::GridIndexer;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "fractalgen")]
#[command(
    author,
    version,
    about = "Expand fractal rule sets into bounded instance transform lists"
)]
/// Command-line arguments for the instance generation tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input JSON configuration file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Override the recursion depth of every processed configuration
    #[arg(short, long)]
    pub iterations: Option<u32>,

    /// Grid cell size used for frontier queries
    #[arg(short, long, default_value_t = DEFAULT_STEP)]
    pub step: f64,

    /// Include the addable-cell frontier in each output document
    #[arg(short, long)]
    pub frontier: bool,

    /// Print a URL-safe share string for each configuration
    #[arg(short = 'l', long)]
    pub link: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch processing of configuration files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, configuration parsing, or
    /// generation fails for any file.
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("json") {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"target file must be a JSON configuration",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("json")
                    && !Self::is_output_file(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"target must be a JSON file or directory",
            ))
        }
    }

    fn is_output_file(path: &Path) -> bool {
        path.file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    // Allow print for the share string, which is the requested output
    #[allow(clippy::print_stdout)]
    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let output_path = Self::get_output_path(input_path);

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let mut config = load_config(input_path)?;
        if let Some(iterations) = self.cli.iterations {
            config.iterations = iterations;
        }

        let instances = generate_instances(&config)?;

        let frontier = if self.cli.frontier {
            let indexer = GridIndexer::new(self.cli.step)?;
            Some(compute_frontier(&config.rules, &indexer)?)
        } else {
            None
        };

        InstanceDocument::new(&config, &instances, frontier.as_deref()).save(&output_path)?;

        if self.cli.link {
            println!("{}: {}", input_path.display(), encode_share(&config)?);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file(index, input_path, instances.len());
        }

        Ok(())
    }

    fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{}.json", stem.to_string_lossy(), OUTPUT_SUFFIX);

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
