//! Spatial data structures for grid-snapped editing
//!
//! This module contains spatial-related functionality including:
//! - Continuous-to-discrete grid index mapping
//! - Occupancy and frontier computation over placed rules

/// Frontier derivation from the occupancy grid
pub mod frontier;
/// Continuous ↔ grid-index mapping
pub mod indexer;

pub use frontier::FrontierCell;
pub use indexer::{CellIndex, GridIndexer};
