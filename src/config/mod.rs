//! Project configuration (`myui.config.json`).
//!
//! The file is written by `my-ui init` and read by every `add` command to
//! check that the project was initialized. Fields other than `initialized`
//! are optional; unknown fields are ignored so newer files still load.
//!
//! # Example
//!
//! ```
//! use myui::config::{ensure_initialized, ProjectConfig};
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! assert!(ensure_initialized(temp.path()).is_err());
//!
//! ProjectConfig::initialized_default().save(temp.path()).unwrap();
//! let config = ensure_initialized(temp.path()).unwrap();
//! assert_eq!(config.components_dir(), "components");
//! ```

pub mod project;

pub use project::{
    config_path, ensure_initialized, ComponentsConfig, ProjectConfig, Style, TailwindConfig,
    CONFIG_FILE, DEFAULT_COMPONENTS_DIR,
};
