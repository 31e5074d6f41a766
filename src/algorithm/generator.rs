//! Bounded level-by-level expansion of a rule set into instance transforms
//!
//! Expansion is iterative, never recursive: each level is produced from the
//! previous one in full, and a projected-count check runs before every
//! expansion so rule_count^iterations growth can never exceed the instance
//! cap. Truncation is a soft degradation, not an error.

use glam::DMat4;

use crate::io::configuration::MAX_INSTANCES;
use crate::io::error::Result;
use crate::math::transform::{build_local_transform, compose};
use crate::model::config::FractalConfig;

/// Expand a configuration into the ordered list of instance transforms
///
/// Produces every instance from level 0 (the root, identity transform)
/// through level `iterations`, ordered root first and each later level
/// grouped by parent-then-rule order. Output is bit-for-bit identical for
/// identical inputs.
///
/// If a level's projected total (`accumulated + current_level × rule_count`)
/// would exceed [`MAX_INSTANCES`], expansion stops and the accumulated
/// result is returned as-is; the partial level is discarded. An empty rule
/// set or `iterations = 0` yields exactly the root instance.
///
/// # Errors
///
/// Returns an error if any rule has non-finite fields or a non-positive
/// scale; validation runs before any expansion.
pub fn generate_instances(config: &FractalConfig) -> Result<Vec<DMat4>> {
    config.validate()?;

    let mut instances = vec![DMat4::IDENTITY];

    if config.rules.is_empty() {
        return Ok(instances);
    }

    // Each rule's local matrix is level-independent
    let locals: Vec<DMat4> = config.rules.iter().map(build_local_transform).collect();

    let mut current_level = vec![DMat4::IDENTITY];

    for _level in 1..=config.iterations {
        let projected = instances.len() + current_level.len() * locals.len();
        if projected > MAX_INSTANCES {
            break;
        }

        let mut next_level = Vec::with_capacity(current_level.len() * locals.len());
        for parent in &current_level {
            for local in &locals {
                next_level.push(compose(parent, local));
            }
        }

        instances.extend_from_slice(&next_level);
        current_level = next_level;
    }

    Ok(instances)
}

/// Total instance count for an uncapped expansion
///
/// Evaluates `1 + r + r² + … + rⁿ` for `r` rules and `n` iterations,
/// saturating at `usize::MAX`. Useful for callers deciding whether a
/// configuration will truncate before running it.
pub fn uncapped_instance_count(rule_count: usize, iterations: u32) -> usize {
    let mut total = 1_usize;
    let mut level = 1_usize;
    for _ in 0..iterations {
        level = level.saturating_mul(rule_count);
        total = total.saturating_add(level);
    }
    total
}
