//! Configuration System
//!
//! File- and environment-driven configuration for the host: where the tree
//! literal lives, which reserved metadata keys the literal uses, and how
//! logging behaves. Precedence: defaults, then `pathwalk.toml`, then
//! `PATHWALK_*` environment variables, then CLI flags (applied by the host).

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::tree::builder::MetaKeys;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathwalkConfig {
    /// Tree literal settings
    #[serde(default)]
    pub tree: TreeSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Tree literal settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeSettings {
    /// Path to the JSON literal describing the tree
    pub literal: Option<PathBuf>,

    /// Reserved metadata key prefix
    #[serde(default = "default_meta_prefix")]
    pub meta_prefix: String,

    /// Type marker key
    #[serde(default = "default_type_key")]
    pub type_key: String,

    /// Contents marker key
    #[serde(default = "default_contents_key")]
    pub contents_key: String,

    /// Type marker value identifying directories
    #[serde(default = "default_dir_value")]
    pub dir_value: String,

    /// Type marker value identifying files
    #[serde(default = "default_file_value")]
    pub file_value: String,
}

fn default_meta_prefix() -> String {
    MetaKeys::default().prefix
}

fn default_type_key() -> String {
    MetaKeys::default().type_key
}

fn default_contents_key() -> String {
    MetaKeys::default().contents_key
}

fn default_dir_value() -> String {
    MetaKeys::default().dir_value
}

fn default_file_value() -> String {
    MetaKeys::default().file_value
}

impl Default for TreeSettings {
    fn default() -> Self {
        Self {
            literal: None,
            meta_prefix: default_meta_prefix(),
            type_key: default_type_key(),
            contents_key: default_contents_key(),
            dir_value: default_dir_value(),
            file_value: default_file_value(),
        }
    }
}

impl TreeSettings {
    /// Builder-facing view of the configured metadata keys
    pub fn meta_keys(&self) -> MetaKeys {
        MetaKeys {
            prefix: self.meta_prefix.clone(),
            type_key: self.type_key.clone(),
            contents_key: self.contents_key.clone(),
            dir_value: self.dir_value.clone(),
            file_value: self.file_value.clone(),
        }
    }

    /// Validate tree settings
    ///
    /// The two marker keys must carry the reserved prefix; otherwise the
    /// builder's key partitioning would let them show up as child names.
    pub fn validate(&self) -> Result<(), String> {
        if self.meta_prefix.is_empty() {
            return Err("Metadata prefix cannot be empty".to_string());
        }
        if !self.type_key.starts_with(&self.meta_prefix) {
            return Err(format!(
                "Type key '{}' does not start with metadata prefix '{}'",
                self.type_key, self.meta_prefix
            ));
        }
        if !self.contents_key.starts_with(&self.meta_prefix) {
            return Err(format!(
                "Contents key '{}' does not start with metadata prefix '{}'",
                self.contents_key, self.meta_prefix
            ));
        }
        if self.dir_value == self.file_value {
            return Err("Directory and file marker values must differ".to_string());
        }
        Ok(())
    }
}

impl PathwalkConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ApiError> {
        self.tree.validate().map_err(ApiError::ConfigError)
    }
}

/// Configuration loader
///
/// Assembles the config from `pathwalk.toml` in the workspace (when
/// present) and `PATHWALK_*` environment variables.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace directory
    pub fn load(workspace_root: &Path) -> Result<PathwalkConfig, ApiError> {
        let mut builder = Config::builder();

        let config_path = workspace_root.join("pathwalk.toml");
        if config_path.exists() {
            builder = builder
                .add_source(File::from(config_path.as_path()).required(false));
        }

        builder = builder.add_source(Environment::with_prefix("PATHWALK").separator("__"));

        let config: PathwalkConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an explicit file path
    pub fn load_from_file(path: &Path) -> Result<PathwalkConfig, ApiError> {
        let builder = Config::builder()
            .add_source(File::from(path).required(true))
            .add_source(Environment::with_prefix("PATHWALK").separator("__"));

        let config: PathwalkConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
