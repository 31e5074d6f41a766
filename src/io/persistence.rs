//! JSON persistence of fractal configurations and generated instances
//!
//! Import is forward-compatible: unknown fields are tolerated and missing
//! presentation metadata defaults, but a document is accepted only if it is
//! an object whose `rules` field is an array. A rejected load never touches
//! existing in-memory state.

use std::path::Path;

use glam::DMat4;
use serde::Serialize;
use serde_json::Value;

use crate::io::error::{Result, file_system_error, invalid_format};
use crate::model::config::{BaseShape, FractalConfig};
use crate::spatial::frontier::FrontierCell;

/// Parse a configuration from its JSON text form
///
/// # Errors
///
/// Returns an invalid-format error if the text is not valid JSON, is not an
/// object, lacks a `rules` array, or any rule field fails typed
/// deserialization.
pub fn parse_config(text: &str) -> Result<FractalConfig> {
    let value: Value = serde_json::from_str(text)?;

    let Some(object) = value.as_object() else {
        return Err(invalid_format(&"document must be a JSON object"));
    };

    match object.get("rules") {
        Some(rules) if rules.is_array() => {}
        Some(_) => return Err(invalid_format(&"'rules' must be an array")),
        None => return Err(invalid_format(&"missing 'rules' array")),
    }

    Ok(serde_json::from_value(value)?)
}

/// Serialize a configuration to pretty-printed JSON
///
/// Round-trips exactly through [`parse_config`].
///
/// # Errors
///
/// Returns an error if serialization fails, which only occurs for
/// non-finite values smuggled past validation.
pub fn to_json(config: &FractalConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// Load and parse a configuration file
///
/// # Errors
///
/// Returns a file system error if the file cannot be read, or an
/// invalid-format error if its contents fail [`parse_config`].
pub fn load_config(path: &Path) -> Result<FractalConfig> {
    let text =
        std::fs::read_to_string(path).map_err(|e| file_system_error(path, "read", e))?;
    parse_config(&text)
}

/// Serialize and write a configuration file
///
/// # Errors
///
/// Returns an error if serialization or the file write fails.
pub fn save_config(config: &FractalConfig, path: &Path) -> Result<()> {
    let text = to_json(config)?;
    std::fs::write(path, text).map_err(|e| file_system_error(path, "write", e))
}

/// Exported record of one frontier cell
#[derive(Debug, Serialize)]
pub struct FrontierRecord {
    /// Discrete cell index
    pub index: [i32; 3],
    /// Cell-center world position
    pub position: [f64; 3],
}

impl From<&FrontierCell> for FrontierRecord {
    fn from(cell: &FrontierCell) -> Self {
        Self {
            index: cell.index,
            position: cell.world_position.to_array(),
        }
    }
}

/// Exported document describing one generation run
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceDocument {
    /// Name copied from the source configuration
    pub name: String,
    /// Shape the presentation layer draws at each transform
    pub base_shape: BaseShape,
    /// Opaque presentation color value
    pub color: String,
    /// Number of generated instances
    pub count: usize,
    /// Column-major 4×4 world transforms, root first
    pub instances: Vec<[f64; 16]>,
    /// Addable cells, present only when a frontier was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frontier: Option<Vec<FrontierRecord>>,
}

impl InstanceDocument {
    /// Assemble an export document from a generation run
    pub fn new(
        config: &FractalConfig,
        instances: &[DMat4],
        frontier: Option<&[FrontierCell]>,
    ) -> Self {
        Self {
            name: config.name.clone(),
            base_shape: config.base_shape,
            color: config.color.clone(),
            count: instances.len(),
            instances: instances.iter().map(DMat4::to_cols_array).collect(),
            frontier: frontier.map(|cells| cells.iter().map(FrontierRecord::from).collect()),
        }
    }

    /// Serialize and write the document
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text).map_err(|e| file_system_error(path, "write", e))
    }
}
