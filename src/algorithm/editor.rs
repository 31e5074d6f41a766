//! Grid-snapped rule-set mutations driven by frontier cells
//!
//! Both operations are pure value-level rewrites of the rule sequence; the
//! next frontier computation reflects the change without any incremental
//! bookkeeping.

use crate::io::error::{FractalError, Result};
use crate::model::rule::TransformRule;
use crate::spatial::frontier::FrontierCell;

/// Append a new rule at a frontier cell
///
/// The new rule sits at the cell's world position with zero rotation and a
/// scale equal to the current grid step, so the placed child exactly fills
/// its cell. Existing rules are untouched.
pub fn add_rule(rules: &[TransformRule], cell: &FrontierCell, step: f64) -> Vec<TransformRule> {
    let mut next = rules.to_vec();
    next.push(TransformRule::at_position(cell.world_position.to_array(), step));
    next
}

/// Remove the rule at the given index
///
/// Order of the remaining rules is preserved.
///
/// # Errors
///
/// Returns [`FractalError::InvalidRuleIndex`] if `index` is out of bounds;
/// this is a caller-programming error, never silently ignored.
pub fn remove_rule(rules: &[TransformRule], index: usize) -> Result<Vec<TransformRule>> {
    if index >= rules.len() {
        return Err(FractalError::InvalidRuleIndex {
            index,
            rule_count: rules.len(),
        });
    }

    let mut next = rules.to_vec();
    next.remove(index);
    Ok(next)
}
