//! myui - Add UI components and page layouts to a web project.
//!
//! `my-ui` copies component and layout templates from a registry into a
//! project, installing the packages they depend on.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - The project's `myui.config.json`
//! - [`error`] - Error types and result aliases
//! - [`install`] - Package manager detection and installation
//! - [`materialize`] - Copying template files and overwrite decisions
//! - [`registry`] - The component and layout registry and its templates
//! - [`resolver`] - Prerequisite closures and package sets
//! - [`scaffold`] - Resolve, install, and copy in order
//! - [`shell`] - Shell command execution
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use myui::registry::{load_registry, EmbeddedTemplates};
//! use myui::resolver::resolve_layout;
//!
//! let registry = load_registry(&EmbeddedTemplates::new()).unwrap();
//! let login = resolve_layout(&registry, "login", Some("simple")).unwrap();
//! assert!(login.packages.len() > 0);
//! assert_eq!(login.prerequisite_components()[0].name, "slot");
//! ```
//!
//! For adding files to a project, see [`scaffold::Scaffolder`] and the
//! integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod install;
pub mod materialize;
pub mod registry;
pub mod resolver;
pub mod scaffold;
pub mod shell;
pub mod ui;

pub use error::{MyUiError, Result};
