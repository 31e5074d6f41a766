//! Data model shared by generation, editing, and persistence
//!
//! The model is owned by callers and passed into the core by reference;
//! every algorithm returns derived, independent results rather than mutating
//! it in place.

/// Aggregate fractal configuration
pub mod config;
/// Single child-placement rule
pub mod rule;

pub use config::FractalConfig;
pub use rule::TransformRule;
