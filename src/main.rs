//! CLI entry point for the fractal instance generation tool

use clap::Parser;
use fractalgen::io::cli::{Cli, FileProcessor};

fn main() -> fractalgen::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
