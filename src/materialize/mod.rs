//! Writing template files into a project.
//!
//! - [`Materializer`] copies a descriptor's files in declared order
//! - [`ConflictPolicy`] decides what happens to files that already exist
//! - [`resolve_app_dir`] picks the directory layouts are written into
//!
//! Prompts never happen in here directly. Overwrite questions go through an
//! injected [`OverwriteConfirm`] and the folder-name question through a
//! closure, so the copy loop runs unattended in tests.

pub mod conflict;
pub mod materializer;
pub mod target_dir;

pub use conflict::{ConflictPolicy, Decision, OverwriteConfirm, PromptOverwrite};
pub use materializer::{MaterializeReport, Materializer, TargetFile};
pub use target_dir::{
    resolve_app_dir, validate_layout_path, validate_project_dir, DEFAULT_APP_FOLDER,
};
