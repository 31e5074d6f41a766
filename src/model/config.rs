//! Aggregate fractal configuration: the unit of generation and persistence

use serde::{Deserialize, Serialize};

use crate::io::configuration::DEFAULT_ITERATIONS;
use crate::io::error::Result;
use crate::model::rule::TransformRule;

/// Base shape rendered at every instance transform
///
/// Opaque to the generator; only the presentation layer interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseShape {
    /// Axis-aligned unit cube
    #[default]
    Cube,
    /// Unit-diameter sphere
    Sphere,
    /// Unit-base pyramid
    Pyramid,
}

/// The aggregate unit of generation and persistence
///
/// Constructed by the caller, never owned by the core; generation and
/// frontier queries read it by reference and return independent results.
/// Unknown fields in persisted documents are tolerated, and presentation
/// metadata defaults when missing, so older documents keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FractalConfig {
    /// Display name (presentation metadata, not algorithmic)
    #[serde(default)]
    pub name: String,
    /// Free-form description (presentation metadata)
    #[serde(default)]
    pub description: String,
    /// Shape drawn at each instance
    #[serde(default)]
    pub base_shape: BaseShape,
    /// Opaque presentation color value
    #[serde(default)]
    pub color: String,
    /// Ordered child-placement rules; order is stable for editing but not
    /// semantically significant to generation correctness
    pub rules: Vec<TransformRule>,
    /// Recursion depth (level 0 is the root instance)
    #[serde(default = "default_iterations")]
    pub iterations: u32,
}

const fn default_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            base_shape: BaseShape::default(),
            color: String::new(),
            rules: Vec::new(),
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl FractalConfig {
    /// Create a configuration from rules and an iteration count
    pub fn new(rules: Vec<TransformRule>, iterations: u32) -> Self {
        Self {
            rules,
            iterations,
            ..Self::default()
        }
    }

    /// Validate every rule in the configuration
    ///
    /// Called at the generator and frontier boundaries so malformed input
    /// fails before any computation begins.
    ///
    /// # Errors
    ///
    /// Returns the first [`crate::FractalError::InvalidRule`] encountered,
    /// identifying the offending rule index.
    pub fn validate(&self) -> Result<()> {
        for (index, rule) in self.rules.iter().enumerate() {
            rule.validate(index)?;
        }
        Ok(())
    }
}
