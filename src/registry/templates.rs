//! Template file sources.
//!
//! The registry only names template files; the bytes come from a
//! [`TemplateSource`]. The binary ships its templates embedded at compile
//! time, and `--templates <dir>` switches to a directory on disk.

use include_dir::{include_dir, Dir};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MyUiError, Result};

/// Embedded templates directory.
static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// A read-only tree of template files addressed by relative path.
pub trait TemplateSource {
    /// Check whether a template file exists.
    fn exists(&self, relative: &Path) -> bool;

    /// Read a template file's bytes.
    fn read(&self, relative: &Path) -> Result<Vec<u8>>;

    /// Path shown to users in messages about this template.
    fn display_path(&self, relative: &Path) -> PathBuf;
}

/// Templates compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    /// Create a handle to the embedded templates.
    pub fn new() -> Self {
        Self
    }
}

impl TemplateSource for EmbeddedTemplates {
    fn exists(&self, relative: &Path) -> bool {
        TEMPLATES_DIR.get_file(normalize(relative)).is_some()
    }

    fn read(&self, relative: &Path) -> Result<Vec<u8>> {
        TEMPLATES_DIR
            .get_file(normalize(relative))
            .map(|f| f.contents().to_vec())
            .ok_or_else(|| MyUiError::TemplateMissing {
                path: self.display_path(relative),
            })
    }

    fn display_path(&self, relative: &Path) -> PathBuf {
        Path::new("templates").join(relative)
    }
}

/// Templates read from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    root: PathBuf,
}

impl DirectoryTemplates {
    /// Use `root` as the template tree.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The template root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TemplateSource for DirectoryTemplates {
    fn exists(&self, relative: &Path) -> bool {
        self.root.join(relative).is_file()
    }

    fn read(&self, relative: &Path) -> Result<Vec<u8>> {
        let path = self.root.join(relative);
        if !path.is_file() {
            return Err(MyUiError::TemplateMissing { path });
        }
        Ok(fs::read(path)?)
    }

    fn display_path(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }
}

// include_dir keys entries with forward slashes regardless of platform.
fn normalize(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn embedded_contains_registry_and_utils() {
        let templates = EmbeddedTemplates::new();
        assert!(templates.exists(Path::new("registry.yml")));
        assert!(templates.exists(Path::new("lib/utils.ts")));
    }

    #[test]
    fn embedded_reads_component_template() {
        let templates = EmbeddedTemplates::new();
        let bytes = templates
            .read(&Path::new("components").join("ui").join("button.tsx"))
            .unwrap();
        assert!(!bytes.is_empty());
    }

    #[test]
    fn embedded_missing_file_is_template_missing() {
        let templates = EmbeddedTemplates::new();
        let err = templates.read(Path::new("components/ui/nope.tsx")).unwrap_err();
        assert!(matches!(err, MyUiError::TemplateMissing { .. }));
    }

    #[test]
    fn directory_source_reads_files() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("components/ui")).unwrap();
        fs::write(temp.path().join("components/ui/card.tsx"), "card").unwrap();

        let templates = DirectoryTemplates::new(temp.path());
        let rel = Path::new("components/ui/card.tsx");
        assert!(templates.exists(rel));
        assert_eq!(templates.read(rel).unwrap(), b"card");
        assert_eq!(templates.display_path(rel), temp.path().join(rel));
    }

    #[test]
    fn directory_source_treats_directories_as_missing() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("components")).unwrap();

        let templates = DirectoryTemplates::new(temp.path());
        assert!(!templates.exists(Path::new("components")));
        assert!(matches!(
            templates.read(Path::new("components")),
            Err(MyUiError::TemplateMissing { .. })
        ));
    }
}
