//! Registry schema definitions.
//!
//! Descriptors are immutable once loaded. Components and layouts are
//! referenced by their kebab-case name.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single template file and the directory it belongs to.
///
/// `path` is written with a leading `/` in the registry (`/components/ui`,
/// `/`), meaning "relative to the root this descriptor is materialized into".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSpec {
    /// File name, e.g. `button.tsx`.
    pub file_name: String,

    /// Directory relative to the materialization root.
    pub path: String,
}

impl FileSpec {
    /// Create a file spec.
    pub fn new(file_name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            path: path.into(),
        }
    }

    /// The entry's directory as a relative path (`/components/ui` -> `components/ui`, `/` -> ``).
    pub fn relative_dir(&self) -> PathBuf {
        self.path
            .split(['/', '\\'])
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .collect()
    }

    /// The entry's file as a relative path (`components/ui/button.tsx`).
    pub fn relative_file(&self) -> PathBuf {
        self.relative_dir().join(&self.file_name)
    }
}

/// A UI component in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    /// Unique kebab-case name. Filled in from the registry key.
    #[serde(default)]
    pub name: String,

    /// Files that make up the component, in copy order.
    pub files: Vec<FileSpec>,

    /// Components that must be materialized before this one.
    #[serde(default)]
    pub prerequisites: Vec<String>,

    /// Package specifiers (`name` or `name@version`) the component needs.
    #[serde(default)]
    pub dependencies: Vec<String>,
}

/// A named variant of a layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderDescriptor {
    /// Provider name. Filled in from the registry key.
    #[serde(default)]
    pub name: String,

    /// Files specific to this provider, in copy order.
    pub files: Vec<FileSpec>,

    /// Components materialized before the provider's own files.
    #[serde(default)]
    pub prerequisites: Vec<String>,

    /// Package specifiers specific to this provider.
    #[serde(default)]
    pub dependencies: Vec<String>,
}

/// A page layout offered in one or more provider variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutDescriptor {
    /// Unique layout name.
    pub name: String,

    /// Providers in registry order.
    pub providers: Vec<ProviderDescriptor>,
}

impl LayoutDescriptor {
    /// Look up a provider by name.
    pub fn provider(&self, name: &str) -> Option<&ProviderDescriptor> {
        self.providers.iter().find(|p| p.name == name)
    }

    /// Provider names in registry order.
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name.as_str()).collect()
    }
}

/// Packages installed by `my-ui init`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitPackages {
    /// Always installed.
    pub required_packages: Vec<String>,

    /// Installed when the user accepts the recommended extras.
    pub optional_packages: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn relative_dir_strips_leading_slash() {
        let spec = FileSpec::new("button.tsx", "/components/ui");
        assert_eq!(spec.relative_dir(), Path::new("components/ui"));
        assert_eq!(
            spec.relative_file(),
            Path::new("components/ui").join("button.tsx")
        );
    }

    #[test]
    fn root_path_is_empty() {
        let spec = FileSpec::new("page.tsx", "/");
        assert_eq!(spec.relative_dir(), PathBuf::new());
        assert_eq!(spec.relative_file(), Path::new("page.tsx"));
    }

    #[test]
    fn relative_dir_ignores_dot_and_doubled_separators() {
        let spec = FileSpec::new("card.tsx", "./_components//");
        assert_eq!(spec.relative_dir(), Path::new("_components"));
    }

    #[test]
    fn component_defaults_optional_lists() {
        let yaml = "files:\n  - { file_name: card.tsx, path: /components/ui }\n";
        let component: ComponentDescriptor = serde_yaml::from_str(yaml).unwrap();
        assert!(component.prerequisites.is_empty());
        assert!(component.dependencies.is_empty());
        assert_eq!(component.files.len(), 1);
    }

    #[test]
    fn layout_provider_lookup() {
        let layout = LayoutDescriptor {
            name: "login".into(),
            providers: vec![ProviderDescriptor {
                name: "simple".into(),
                files: vec![FileSpec::new("page.tsx", "/")],
                prerequisites: vec![],
                dependencies: vec![],
            }],
        };
        assert!(layout.provider("simple").is_some());
        assert!(layout.provider("microsoft").is_none());
        assert_eq!(layout.provider_names(), vec!["simple"]);
    }
}
