//! Invertible mapping between continuous positions and grid cell indices
//!
//! Cells are aligned so the parent unit volume (size 1, centered at the
//! origin) covers an integer number of cells. When `round(1 / step)` is even
//! the lattice is shifted by half a cell, which keeps the self-similar grid
//! aligned across the standard child scales (halves, thirds, quarters).

use glam::DVec3;

use crate::io::error::{Result, invalid_parameter};

/// Integer triple identifying one cubic cell of the uniform grid
pub type CellIndex = [i32; 3];

/// Grid indexer for a fixed cell size
///
/// Derived values only; nothing here is persisted. Indices are recomputed
/// from positions and `step` on every frontier query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridIndexer {
    step: f64,
    offset: f64,
}

impl GridIndexer {
    /// Create an indexer for the given cell size
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is not a positive finite value.
    pub fn new(step: f64) -> Result<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(invalid_parameter(
                "step",
                &step,
                &"cell size must be a positive finite value",
            ));
        }

        let cells_per_unit = (1.0 / step).round() as i64;
        let offset = if cells_per_unit.rem_euclid(2) == 0 {
            step / 2.0
        } else {
            0.0
        };

        Ok(Self { step, offset })
    }

    /// Cell size this indexer maps against
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// Lattice offset applied on every axis
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    /// Map one continuous coordinate to its cell index
    pub fn axis_index(&self, value: f64) -> i32 {
        ((value - self.offset) / self.step).round() as i32
    }

    /// Map one cell index back to its cell-center coordinate
    ///
    /// Exact inverse of [`Self::axis_index`] for grid-aligned values.
    pub fn axis_position(&self, index: i32) -> f64 {
        f64::from(index).mul_add(self.step, self.offset)
    }

    /// Map a continuous position to its containing cell
    pub fn to_index(&self, position: DVec3) -> CellIndex {
        [
            self.axis_index(position.x),
            self.axis_index(position.y),
            self.axis_index(position.z),
        ]
    }

    /// Map a cell index to its center position in world space
    pub fn to_position(&self, index: CellIndex) -> DVec3 {
        DVec3::new(
            self.axis_position(index[0]),
            self.axis_position(index[1]),
            self.axis_position(index[2]),
        )
    }
}
