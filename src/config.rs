use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{MdtVersionError, Result};

/// Represents the complete configuration for mdt-version.
///
/// Names the JSON manifest to update and the field within it that holds the
/// version string.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_manifest")]
    pub manifest: String,

    #[serde(default = "default_field")]
    pub field: String,
}

/// Returns the default manifest path (the plugin manifest at the repo root).
fn default_manifest() -> String {
    ".claude-plugin/plugin.json".to_string()
}

/// Returns the default name of the version field.
fn default_field() -> String {
    "version".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            manifest: default_manifest(),
            field: default_field(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `mdtversion.toml` in current directory
/// 3. `mdtversion.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./mdtversion.toml").exists() {
        fs::read_to_string("./mdtversion.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("mdtversion.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    toml::from_str(&config_str).map_err(|e| MdtVersionError::config(e.to_string()))
}
