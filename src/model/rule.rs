//! Child-placement rule definition and boundary validation

use serde::{Deserialize, Serialize};

use crate::io::error::{FractalError, Result};

/// One recursive child-placement rule
///
/// The parent is the unit-size shape centered at the origin; `position` is
/// the child center's offset in the parent's local frame, `rotation` is a
/// triple of Euler angles in radians, and `scale` is the uniform size factor
/// of the child relative to its parent. A `scale >= 1` is legal but causes
/// unbounded growth, which the generator's instance cap absorbs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformRule {
    /// Offset of the child center relative to the parent center
    pub position: [f64; 3],
    /// Euler angles in radians, applied in fixed X, Y, Z order
    pub rotation: [f64; 3],
    /// Uniform scale factor relative to the parent (must be positive)
    pub scale: f64,
}

impl TransformRule {
    /// Create a rule at a position with no rotation and the given scale
    pub const fn at_position(position: [f64; 3], scale: f64) -> Self {
        Self {
            position,
            rotation: [0.0; 3],
            scale,
        }
    }

    /// Validate that every field is finite and the scale is positive
    ///
    /// `index` identifies the rule within its configuration for error
    /// reporting.
    ///
    /// # Errors
    ///
    /// Returns [`FractalError::InvalidRule`] if any position or rotation
    /// component is non-finite, or if the scale is non-finite or not
    /// strictly positive.
    pub fn validate(&self, index: usize) -> Result<()> {
        if self.position.iter().any(|v| !v.is_finite()) {
            return Err(FractalError::InvalidRule {
                index,
                reason: "position components must be finite".to_string(),
            });
        }

        if self.rotation.iter().any(|v| !v.is_finite()) {
            return Err(FractalError::InvalidRule {
                index,
                reason: "rotation components must be finite".to_string(),
            });
        }

        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(FractalError::InvalidRule {
                index,
                reason: format!("scale must be a positive finite value, got {}", self.scale),
            });
        }

        Ok(())
    }
}
