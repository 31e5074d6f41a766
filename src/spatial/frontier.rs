//! Occupancy grid and frontier computation over placed rules
//!
//! The frontier is the set of empty cells 6-connected to occupied space,
//! where occupied space is every placed rule's cell plus every cell inside
//! the fixed parent unit volume. The parent volume anchors editing: the root
//! shape blocks placement and seeds the initial frontier around itself.
//! Everything recomputes from scratch on each call; there is no incremental
//! state.

use std::collections::BTreeSet;

use glam::DVec3;

use crate::io::configuration::{PARENT_HALF_EXTENT, PARENT_VOLUME_EPSILON};
use crate::io::error::Result;
use crate::model::rule::TransformRule;
use crate::spatial::indexer::{CellIndex, GridIndexer};

/// Offsets of the 6 axis-aligned neighbors of a cell
const NEIGHBOR_OFFSETS: [[i32; 3]; 6] = [
    [-1, 0, 0],
    [1, 0, 0],
    [0, -1, 0],
    [0, 1, 0],
    [0, 0, -1],
    [0, 0, 1],
];

/// One empty cell adjacent to occupied space, eligible for a new rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrontierCell {
    /// Discrete cell index
    pub index: CellIndex,
    /// Back-converted cell-center position in world space
    pub world_position: DVec3,
}

/// Compute the full occupied-cell set for a rule sequence
///
/// Marks each rule's containing cell plus every cell whose center lies
/// strictly inside the parent unit volume. The parent-volume scan covers a
/// bounded index window sized from the indexer's step, never an unbounded
/// search.
///
/// # Errors
///
/// Returns an error if any rule carries non-finite fields; validation runs
/// before any cell is marked.
pub fn occupied_cells(rules: &[TransformRule], indexer: &GridIndexer) -> Result<BTreeSet<CellIndex>> {
    for (index, rule) in rules.iter().enumerate() {
        rule.validate(index)?;
    }

    let mut occupied = BTreeSet::new();

    for rule in rules {
        occupied.insert(indexer.to_index(DVec3::from_array(rule.position)));
    }

    // Window radius covering the unit volume at the current step
    let window = (PARENT_HALF_EXTENT / indexer.step()).ceil() as i32 + 1;
    let inside = PARENT_HALF_EXTENT - PARENT_VOLUME_EPSILON;

    for i in -window..=window {
        for j in -window..=window {
            for k in -window..=window {
                let center = indexer.to_position([i, j, k]);
                if center.x.abs() < inside && center.y.abs() < inside && center.z.abs() < inside {
                    occupied.insert([i, j, k]);
                }
            }
        }
    }

    Ok(occupied)
}

/// Compute the frontier of empty cells adjacent to occupied space
///
/// Every returned cell is currently empty and 6-connected to at least one
/// occupied cell, deduplicated by index and emitted in ascending index
/// order. Cost is linear in occupied-cell count × 6.
///
/// # Errors
///
/// Returns an error if any rule carries non-finite fields.
pub fn compute_frontier(rules: &[TransformRule], indexer: &GridIndexer) -> Result<Vec<FrontierCell>> {
    let occupied = occupied_cells(rules, indexer)?;

    let mut frontier = BTreeSet::new();
    for cell in &occupied {
        for offset in &NEIGHBOR_OFFSETS {
            let neighbor = [
                cell[0] + offset[0],
                cell[1] + offset[1],
                cell[2] + offset[2],
            ];
            if !occupied.contains(&neighbor) {
                frontier.insert(neighbor);
            }
        }
    }

    Ok(frontier
        .into_iter()
        .map(|index| FrontierCell {
            index,
            world_position: indexer.to_position(index),
        })
        .collect())
}
