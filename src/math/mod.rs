//! Mathematical utilities for instance generation

/// Affine 4×4 transform construction and composition
pub mod transform;
