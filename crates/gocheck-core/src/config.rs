//! Configuration file loading for gocheck.
//!
//! Reads `.gocheck.json` and provides typed access to the naming patterns and
//! rule toggles. Falls back to the built-in convention when the file is
//! missing or incomplete.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File name looked up next to the checked source file.
pub const CONFIG_FILE_NAME: &str = ".gocheck.json";

/// Top-level gocheck configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckConfig {
    #[serde(default)]
    pub prefixes: PrefixConfig,
    #[serde(default)]
    pub suffixes: SuffixConfig,
    #[serde(default)]
    pub enforce: EnforceConfig,
}

/// Required prefixes per declarative kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrefixConfig {
    #[serde(default = "default_global_prefix")]
    pub global: String,
    #[serde(default = "default_local_prefix")]
    pub local: String,
    #[serde(default = "default_parameter_prefix")]
    pub parameter: String,
}

/// Required suffixes for struct type names and per variable shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuffixConfig {
    #[serde(default = "default_type_name_suffix")]
    pub type_name: String,
    #[serde(default = "default_sequence_suffix")]
    pub sequence: String,
    #[serde(default = "default_map_suffix")]
    pub map: String,
    #[serde(default = "default_record_suffix")]
    pub record: String,
    #[serde(default = "default_channel_suffix")]
    pub channel: String,
}

/// Rule family toggles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnforceConfig {
    #[serde(default = "default_true")]
    pub globals: bool,
    #[serde(default = "default_true")]
    pub locals: bool,
    #[serde(default = "default_true")]
    pub parameters: bool,
    #[serde(default = "default_true")]
    pub type_names: bool,
    #[serde(default = "default_true")]
    pub shapes: bool,
}

fn default_true() -> bool {
    true
}
fn default_global_prefix() -> String {
    "G".to_string()
}
fn default_local_prefix() -> String {
    "l".to_string()
}
fn default_parameter_prefix() -> String {
    "p".to_string()
}
fn default_type_name_suffix() -> String {
    "Struct".to_string()
}
fn default_sequence_suffix() -> String {
    "Arr".to_string()
}
fn default_map_suffix() -> String {
    "Map".to_string()
}
fn default_record_suffix() -> String {
    "Rec".to_string()
}
fn default_channel_suffix() -> String {
    "Chan".to_string()
}

impl Default for PrefixConfig {
    fn default() -> Self {
        Self {
            global: default_global_prefix(),
            local: default_local_prefix(),
            parameter: default_parameter_prefix(),
        }
    }
}

impl Default for SuffixConfig {
    fn default() -> Self {
        Self {
            type_name: default_type_name_suffix(),
            sequence: default_sequence_suffix(),
            map: default_map_suffix(),
            record: default_record_suffix(),
            channel: default_channel_suffix(),
        }
    }
}

impl Default for EnforceConfig {
    fn default() -> Self {
        Self {
            globals: true,
            locals: true,
            parameters: true,
            type_names: true,
            shapes: true,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl CheckConfig {
    /// Load `.gocheck.json` from `dir`.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(dir: &Path) -> Self {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Self::default();
        }
        match Self::load_from(&config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!("{e}, using defaults");
                Self::default()
            }
        }
    }

    /// Load an explicitly named config file. Any failure is reported.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
