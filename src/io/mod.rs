//! Input/output operations, persistence, and error handling

/// Command-line interface and batch file processing
pub mod cli;
/// Algorithm constants and runtime defaults
pub mod configuration;
/// Error types for all crate operations
pub mod error;
/// JSON persistence of fractal configurations
pub mod persistence;
/// Multi-file progress display
pub mod progress;
/// URL-safe share-string encoding
pub mod share;
