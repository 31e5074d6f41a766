//! Core algorithms: bounded instance expansion and rule-set editing

/// Grid-snapped rule-set mutations
pub mod editor;
/// Level-by-level fractal instance expansion
pub mod generator;

pub use generator::generate_instances;
