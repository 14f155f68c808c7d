//! Error types for myui operations.
//!
//! This module defines [`MyUiError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `MyUiError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `MyUiError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users
//! - [`MyUiError::UserCancelled`] is not a failure: the binary exits 0 on it

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The kind of registry entry a lookup was aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// A single UI component.
    Component,
    /// A page layout offered by one or more providers.
    Layout,
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetKind::Component => write!(f, "component"),
            TargetKind::Layout => write!(f, "layout"),
        }
    }
}

/// Core error type for myui operations.
#[derive(Debug, Error)]
pub enum MyUiError {
    /// Requested component or layout is not in the registry.
    #[error("{kind} \"{name}\" not found in registry")]
    NotFound { kind: TargetKind, name: String },

    /// Requested provider is not offered by the layout.
    #[error("Provider \"{provider}\" not found for layout \"{layout}\"")]
    ProviderNotFound { layout: String, provider: String },

    /// Layout declares no providers at all.
    #[error("No providers found for layout \"{layout}\"")]
    NoProvider { layout: String },

    /// A registry entry references a template file that is not shipped.
    #[error("Template file not found: {path}")]
    TemplateMissing { path: PathBuf },

    /// The package installer exited unsuccessfully.
    #[error("Failed to install {packages}: {message}")]
    InstallFailed { packages: String, message: String },

    /// `myui.config.json` is missing or not marked as initialized.
    #[error("Project is not initialized ({path}). Run `my-ui init` first.")]
    NotInitialized { path: PathBuf },

    /// The user declined or escaped a prompt.
    #[error("Operation cancelled")]
    UserCancelled,

    /// A component or layout name failed validation.
    #[error(
        "Invalid name \"{name}\": must start with a lowercase letter and contain only lowercase letters, numbers, and hyphens"
    )]
    InvalidName { name: String },

    /// The registry failed its integrity check.
    #[error("Invalid registry: {message}")]
    RegistryInvalid { message: String },

    /// Component prerequisites form a cycle.
    #[error("Circular dependency detected: {cycle}")]
    CircularDependency { cycle: String },

    /// Failed to parse a configuration or registry file.
    #[error("Failed to parse {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// No app directory exists and the user did not name one.
    #[error("No folder name provided for the app directory")]
    NoTargetDirectory,

    /// Layout sub-path is absolute or escapes the app directory.
    #[error("Invalid layout path \"{path}\": must be a relative path inside the app directory")]
    InvalidLayoutPath { path: String },

    /// Project directory setting is absolute or escapes the project root.
    #[error("Invalid directory \"{path}\": must be a relative path inside the project")]
    InvalidDirectory { path: String },

    /// A prompt has no answer outside a terminal.
    #[error("Cannot prompt for '{key}' in non-interactive mode (no default value)")]
    PromptUnavailable { key: String },

    /// Shell command could not be started.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MyUiError {
    /// Whether this error represents a clean, user-initiated stop.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, MyUiError::UserCancelled)
    }
}

/// Result type alias for myui operations.
pub type Result<T> = std::result::Result<T, MyUiError>;
