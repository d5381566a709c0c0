//! Configuration for AssayX tools
//!
//! Loaded from TOML. Every key is optional, so a missing file can fall back
//! to `AssayxConfig::default()`:
//!
//! ```
//! use assayx_store::config::AssayxConfig;
//!
//! let config = AssayxConfig::from_toml_str(r#"
//!     vocabulary = "axioms/bioassay.yaml"
//!     schema = "schema/common.yaml"
//!     log_profile = "production"
//! "#).unwrap();
//!
//! assert!(config.vocabulary.is_some());
//! ```

use assayx_core::errors::{ExError, ExErrorKind};
use assayx_core::logging_facility::Profile;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for ExError {
    fn from(err: ConfigError) -> Self {
        let kind = match &err {
            ConfigError::Io(_) => ExErrorKind::Io,
            ConfigError::Toml(_) | ConfigError::Invalid(_) => ExErrorKind::Config,
        };
        ExError::new(kind)
            .with_op("config_load")
            .with_message(err.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AssayxConfig {
    /// Default vocabulary file
    #[serde(default)]
    pub vocabulary: Option<PathBuf>,

    /// Default schema tree file
    #[serde(default)]
    pub schema: Option<PathBuf>,

    #[serde(default)]
    pub log_profile: Profile,
}

impl AssayxConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file
    ///
    /// Relative paths inside the file are resolved against the file's
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns error if the file can't be read or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = Self::from_toml_file(path)?;
        Ok(match path.parent() {
            Some(base) => config.resolved_against(base),
            None => config,
        })
    }

    /// Loads configuration from a TOML file without resolving paths
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [("vocabulary", &self.vocabulary), ("schema", &self.schema)] {
            if value.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
                return Err(ConfigError::Invalid(format!("{} path is empty", key)));
            }
        }
        Ok(())
    }

    /// Make relative paths relative to `base`
    pub fn resolved_against(mut self, base: &Path) -> Self {
        let resolve = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };
        self.vocabulary = self.vocabulary.map(resolve);
        self.schema = self.schema.map(resolve);
        self
    }

    pub fn with_vocabulary(mut self, path: impl Into<PathBuf>) -> Self {
        self.vocabulary = Some(path.into());
        self
    }

    pub fn with_schema(mut self, path: impl Into<PathBuf>) -> Self {
        self.schema = Some(path.into());
        self
    }

    pub fn with_log_profile(mut self, profile: Profile) -> Self {
        self.log_profile = profile;
        self
    }
}
