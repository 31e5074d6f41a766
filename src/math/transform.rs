//! Affine transform construction for recursive child placement
//!
//! Builds the local 4×4 matrix of a placement rule and composes it into a
//! parent frame. All math is f64 so identical inputs produce bit-identical
//! output across runs.

use glam::{DMat4, DVec3};

use crate::model::rule::TransformRule;

/// Build the local transform of a single placement rule
///
/// Combines the rule's components as `Local = Translation · Rotation · Scale`.
/// The rotation is composed from Euler angles in the fixed extrinsic order
/// X, then Y, then Z, giving `R = Rz · Ry · Rx`. Rotations are
/// order-dependent, so this convention is load-bearing and must not change.
pub fn build_local_transform(rule: &TransformRule) -> DMat4 {
    let translation = DMat4::from_translation(DVec3::from_array(rule.position));

    let rotation = DMat4::from_rotation_z(rule.rotation[2])
        * DMat4::from_rotation_y(rule.rotation[1])
        * DMat4::from_rotation_x(rule.rotation[0]);

    let scale = DMat4::from_scale(DVec3::splat(rule.scale));

    translation * rotation * scale
}

/// Compose a child's local transform into its parent's frame
///
/// Returns `parent · local`. The global transform of a node at recursion
/// depth d is the product of all ancestor local transforms in root-to-leaf
/// order; composition is associative but not commutative.
pub fn compose(parent: &DMat4, local: &DMat4) -> DMat4 {
    *parent * *local
}
