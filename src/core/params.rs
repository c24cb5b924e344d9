use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::LogicalOperation;

/// Combine parameters suitable for config files and CLI presets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombineParams {
    pub operation: LogicalOperation,
}

impl CombineParams {
    pub fn new(operation: LogicalOperation) -> Self {
        Self { operation }
    }

    /// Load parameters from a JSON file; missing fields fall back to defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
