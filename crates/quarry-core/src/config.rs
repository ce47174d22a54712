//! Tool settings schema (quarry.toml)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::ConfigError;
use crate::template::ProjectTemplate;

/// Defaults for `quarry init`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InitSettings {
    /// Default SQL dialect for new projects
    #[serde(default)]
    pub dialect: Option<String>,

    /// Project template used when none is given on the command line
    #[serde(default)]
    pub template: ProjectTemplate,
}

/// Lookup tables and switches for `quarry render`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Values returned by `var()`
    #[serde(default)]
    pub vars: HashMap<String, serde_json::Value>,

    /// Model name -> resolved identifier, used by `ref()`
    #[serde(default)]
    pub refs: HashMap<String, String>,

    /// "package.name" -> resolved identifier, used by `source()`
    #[serde(default)]
    pub sources: HashMap<String, String>,

    /// Install the printing `log()` instead of the silent one
    #[serde(default)]
    pub print_log: bool,
}

/// Main settings structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub init: InitSettings,

    #[serde(default)]
    pub render: RenderSettings,
}

impl Settings {
    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_toml(&contents)
    }

    /// Load settings from a TOML string
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}
