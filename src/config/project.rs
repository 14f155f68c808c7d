//! Loading and saving `myui.config.json`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MyUiError, Result};

/// File name of the project configuration at the project root.
pub const CONFIG_FILE: &str = "myui.config.json";

pub const DEFAULT_COMPONENTS_DIR: &str = "components";

/// Component style preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Default,
    New,
    /// Any preset this version does not know about.
    #[serde(other)]
    Unknown,
}

/// Tailwind file locations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TailwindConfig {
    pub config: String,
    pub css: String,
}

/// Where components are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentsConfig {
    pub path: String,
    pub prefix: String,
}

/// Contents of `myui.config.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Set by `my-ui init`; `add` refuses to run without it.
    pub initialized: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub typescript: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tailwind: Option<TailwindConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<ComponentsConfig>,
}

impl ProjectConfig {
    /// The configuration `my-ui init --yes` writes.
    pub fn initialized_default() -> Self {
        Self {
            initialized: true,
            style: Some(Style::Default),
            typescript: Some(true),
            tailwind: Some(TailwindConfig {
                config: "tailwind.config.ts".to_string(),
                css: "app/globals.css".to_string(),
            }),
            components: Some(ComponentsConfig {
                path: DEFAULT_COMPONENTS_DIR.to_string(),
                prefix: String::new(),
            }),
        }
    }

    /// Load the configuration from `project_root`.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn load(project_root: &Path) -> Result<Option<Self>> {
        let path = config_path(project_root);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        let config = serde_json::from_str(&content).map_err(|e| MyUiError::ConfigParseError {
            path: path.clone(),
            message: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), "loaded project config");
        Ok(Some(config))
    }

    /// Write the configuration to `project_root`, pretty-printed.
    pub fn save(&self, project_root: &Path) -> Result<PathBuf> {
        let path = config_path(project_root);
        let mut content =
            serde_json::to_string_pretty(self).map_err(|e| MyUiError::Other(e.into()))?;
        content.push('\n');
        fs::write(&path, content)?;
        tracing::debug!(path = %path.display(), "saved project config");
        Ok(path)
    }

    /// Components directory relative to the project root.
    pub fn components_dir(&self) -> &str {
        self.components
            .as_ref()
            .map(|c| c.path.as_str())
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_COMPONENTS_DIR)
    }
}

/// Path of the configuration file for `project_root`.
pub fn config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILE)
}

/// Load the configuration and require `initialized: true`.
pub fn ensure_initialized(project_root: &Path) -> Result<ProjectConfig> {
    match ProjectConfig::load(project_root)? {
        Some(config) if config.initialized => Ok(config),
        _ => Err(MyUiError::NotInitialized {
            path: config_path(project_root),
        }),
    }
}
