//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rstree/rstree.toml`
//! 3. Explicit config file passed on the command line
//! 4. Environment variables: `RSTREE_*` prefix, `__` as section separator,
//!    e.g. `RSTREE_RENDER__GRAPH_NAME`

use std::path::{Path, PathBuf};

use config::{Config, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

/// Errors raised while loading settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("environment overrides: {0}")]
    Environment(#[from] config::ConfigError),
}

/// Graph rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderSettings {
    /// Name of the emitted digraph
    pub graph_name: String,
    /// Prefix put in front of every node identity
    pub node_prefix: String,
    /// Emit the edge from the virtual super-root to the root
    pub include_super_root: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            graph_name: "G".into(),
            node_prefix: "n_".into(),
            include_super_root: true,
        }
    }
}

/// Raw render config for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawRenderSettings {
    pub graph_name: Option<String>,
    pub node_prefix: Option<String>,
    pub include_super_root: Option<bool>,
}

impl RenderSettings {
    /// Merge overlay config onto self (base): overlay wins if specified.
    pub fn merge(&self, overlay: &RawRenderSettings) -> Self {
        Self {
            graph_name: overlay
                .graph_name
                .clone()
                .unwrap_or_else(|| self.graph_name.clone()),
            node_prefix: overlay
                .node_prefix
                .clone()
                .unwrap_or_else(|| self.node_prefix.clone()),
            include_super_root: overlay
                .include_super_root
                .unwrap_or(self.include_super_root),
        }
    }
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub render: RawRenderSettings,
}

/// Unified configuration for rstree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    pub render: RenderSettings,
}

/// Get the XDG config directory for rstree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rstree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("rstree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, SettingsError> {
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl Settings {
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            render: self.render.merge(&overlay.render),
        }
    }

    /// Load settings with layered precedence, using the XDG global config.
    pub fn load(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        Self::load_from(global_config_path().as_deref(), explicit)
    }

    /// Load settings from the given global and explicit config files.
    ///
    /// A missing global file is skipped; a missing explicit file is an error.
    #[instrument(level = "debug")]
    pub fn load_from(global: Option<&Path>, explicit: Option<&Path>) -> Result<Self, SettingsError> {
        let mut current = Self::default();

        if let Some(global_path) = global {
            if global_path.exists() {
                debug!(path = %global_path.display(), "loading global config");
                current = current.merge_with(&load_raw_settings(global_path)?);
            }
        }

        if let Some(explicit_path) = explicit {
            debug!(path = %explicit_path.display(), "loading explicit config");
            current = current.merge_with(&load_raw_settings(explicit_path)?);
        }

        Self::apply_env_overrides(current)
    }

    /// Apply RSTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, SettingsError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("RSTREE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        if let Ok(val) = config.get_string("render.graph_name") {
            settings.render.graph_name = val;
        }
        if let Ok(val) = config.get_string("render.node_prefix") {
            settings.render.node_prefix = val;
        }
        if let Ok(val) = config.get_bool("render.include_super_root") {
            settings.render.include_super_root = val;
        }

        Ok(settings)
    }
}
