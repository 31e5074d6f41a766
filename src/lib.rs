//! Iterated function system fractal generation with grid-snapped rule editing
//!
//! The system expands a declarative rule set through N recursive levels into a
//! bounded list of world-space instance transforms, and separately maintains a
//! discrete occupancy grid over placed rules to derive the frontier of empty
//! cells eligible for new placements.

#![forbid(unsafe_code)]

/// Core algorithms: instance generation and rule-set editing
pub mod algorithm;
/// Input/output operations, persistence formats, and error handling
pub mod io;
/// Affine transform construction and composition
pub mod math;
/// Configuration and rule data model
pub mod model;
/// Occupancy grid indexing and frontier computation
pub mod spatial;

pub use io::error::{FractalError, Result};
