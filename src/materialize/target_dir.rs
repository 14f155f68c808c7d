//! Where layout files go inside the project, and checks on project-relative paths.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{MyUiError, Result};

/// Folder name suggested when the project has no app directory.
pub const DEFAULT_APP_FOLDER: &str = "app";

/// Find or create the app directory that layouts are written into.
///
/// Checks `src/app`, then `app`. A bare `src` gets an `app` directory created
/// inside it. Otherwise `ask_folder` is called once for a folder name to
/// create at the project root; `None` or a blank answer ends the operation
/// with `NoTargetDirectory`.
pub fn resolve_app_dir<F>(project_root: &Path, ask_folder: F) -> Result<PathBuf>
where
    F: FnOnce() -> Result<Option<String>>,
{
    let src = project_root.join("src");
    let src_app = src.join("app");
    let app = project_root.join("app");

    if src_app.is_dir() {
        return Ok(src_app);
    }
    if app.is_dir() {
        return Ok(app);
    }
    if src.is_dir() {
        fs::create_dir_all(&src_app)?;
        tracing::debug!(path = %src_app.display(), "created app directory");
        return Ok(src_app);
    }

    let folder = ask_folder()?
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or(MyUiError::NoTargetDirectory)?;

    let dir = project_root.join(validate_project_dir(&folder)?);
    fs::create_dir_all(&dir)?;
    tracing::debug!(path = %dir.display(), "created app directory");
    Ok(dir)
}

/// Validate a layout sub-path such as `auth/login`.
///
/// The path must be relative and must not leave the app directory.
pub fn validate_layout_path(path: &str) -> Result<PathBuf> {
    let path = path.trim();
    relative_path(path).ok_or_else(|| MyUiError::InvalidLayoutPath {
        path: path.to_string(),
    })
}

/// Validate a directory setting relative to the project root, such as the
/// components directory chosen during `init`.
pub fn validate_project_dir(path: &str) -> Result<PathBuf> {
    let path = path.trim();
    relative_path(path).ok_or_else(|| MyUiError::InvalidDirectory {
        path: path.to_string(),
    })
}

/// Normalized form of `raw`, or `None` when it is empty, absolute, or
/// climbs out with `..`.
fn relative_path(raw: &str) -> Option<PathBuf> {
    let mut out = PathBuf::new();
    for component in Path::new(raw).components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    if out.as_os_str().is_empty() {
        return None;
    }
    Some(out)
}
