//! The in-memory registry table.
//!
//! Built once from the manifest, then only read. Lookups never touch the
//! file system; [`Registry::validate`] is the one place that checks the
//! registry against its template files.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{MyUiError, Result, TargetKind};
use crate::registry::schema::{
    ComponentDescriptor, FileSpec, InitPackages, LayoutDescriptor, ProviderDescriptor,
};
use crate::registry::templates::TemplateSource;
use crate::resolver::find_cycle;

/// Directory under the template root that holds layout providers.
const LAYOUT_TEMPLATE_DIR: &str = "layout";

/// Registry of components and layouts keyed by name.
#[derive(Debug, Clone)]
pub struct Registry {
    components: Vec<ComponentDescriptor>,
    layouts: Vec<LayoutDescriptor>,
    component_index: HashMap<String, usize>,
    layout_index: HashMap<String, usize>,
    init: InitPackages,
}

impl Registry {
    /// Build a registry from descriptors, rejecting duplicate names.
    pub fn from_parts(
        components: Vec<ComponentDescriptor>,
        layouts: Vec<LayoutDescriptor>,
        init: InitPackages,
    ) -> Result<Self> {
        let mut component_index = HashMap::with_capacity(components.len());
        for (i, component) in components.iter().enumerate() {
            if component_index.insert(component.name.clone(), i).is_some() {
                return Err(MyUiError::RegistryInvalid {
                    message: format!("duplicate component '{}'", component.name),
                });
            }
        }

        let mut layout_index = HashMap::with_capacity(layouts.len());
        for (i, layout) in layouts.iter().enumerate() {
            if layout_index.insert(layout.name.clone(), i).is_some() {
                return Err(MyUiError::RegistryInvalid {
                    message: format!("duplicate layout '{}'", layout.name),
                });
            }
        }

        Ok(Self {
            components,
            layouts,
            component_index,
            layout_index,
            init,
        })
    }

    /// Look up a component by name.
    pub fn lookup_component(&self, name: &str) -> Result<&ComponentDescriptor> {
        self.component_index
            .get(name)
            .map(|&i| &self.components[i])
            .ok_or_else(|| MyUiError::NotFound {
                kind: TargetKind::Component,
                name: name.to_string(),
            })
    }

    /// Look up a layout by name.
    pub fn lookup_layout(&self, name: &str) -> Result<&LayoutDescriptor> {
        self.layout_index
            .get(name)
            .map(|&i| &self.layouts[i])
            .ok_or_else(|| MyUiError::NotFound {
                kind: TargetKind::Layout,
                name: name.to_string(),
            })
    }

    /// Check if a component exists.
    pub fn has_component(&self, name: &str) -> bool {
        self.component_index.contains_key(name)
    }

    /// All components in registry order.
    pub fn components(&self) -> &[ComponentDescriptor] {
        &self.components
    }

    /// All layouts in registry order.
    pub fn layouts(&self) -> &[LayoutDescriptor] {
        &self.layouts
    }

    /// Component names in registry order.
    pub fn component_names(&self) -> Vec<&str> {
        self.components.iter().map(|c| c.name.as_str()).collect()
    }

    /// Layout names in registry order.
    pub fn layout_names(&self) -> Vec<&str> {
        self.layouts.iter().map(|l| l.name.as_str()).collect()
    }

    /// Packages installed by `my-ui init`.
    pub fn init_packages(&self) -> &InitPackages {
        &self.init
    }

    /// Template root of component files (the template tree itself).
    pub fn component_template_root() -> PathBuf {
        PathBuf::new()
    }

    /// Template root of a layout provider's files.
    pub fn provider_template_root(layout: &str, provider: &str) -> PathBuf {
        Path::new(LAYOUT_TEMPLATE_DIR).join(layout).join(provider)
    }

    /// Integrity pass run before anything is resolved.
    ///
    /// Checks that every prerequisite names a registered component, that
    /// prerequisites are acyclic, that every layout offers a provider, that
    /// no descriptor is empty, and that every template file is present in
    /// `templates`. All problems are reported together.
    pub fn validate(&self, templates: &dyn TemplateSource) -> Result<()> {
        let mut problems = Vec::new();

        for component in &self.components {
            let owner = format!("component '{}'", component.name);
            self.check_descriptor(
                &owner,
                &component.files,
                &component.prerequisites,
                &Self::component_template_root(),
                templates,
                &mut problems,
            );
        }

        for layout in &self.layouts {
            if layout.providers.is_empty() {
                problems.push(format!("layout '{}' has no providers", layout.name));
            }
            for provider in &layout.providers {
                self.check_provider(layout, provider, templates, &mut problems);
            }
        }

        if let Some(cycle) = find_cycle(self) {
            problems.push(format!("prerequisite cycle {}", cycle.join(" -> ")));
        }

        if problems.is_empty() {
            tracing::debug!(
                components = self.components.len(),
                layouts = self.layouts.len(),
                "registry integrity check passed"
            );
            Ok(())
        } else {
            Err(MyUiError::RegistryInvalid {
                message: problems.join("; "),
            })
        }
    }

    fn check_provider(
        &self,
        layout: &LayoutDescriptor,
        provider: &ProviderDescriptor,
        templates: &dyn TemplateSource,
        problems: &mut Vec<String>,
    ) {
        let owner = format!("layout '{}' provider '{}'", layout.name, provider.name);
        self.check_descriptor(
            &owner,
            &provider.files,
            &provider.prerequisites,
            &Self::provider_template_root(&layout.name, &provider.name),
            templates,
            problems,
        );
    }

    fn check_descriptor(
        &self,
        owner: &str,
        files: &[FileSpec],
        prerequisites: &[String],
        template_root: &Path,
        templates: &dyn TemplateSource,
        problems: &mut Vec<String>,
    ) {
        if files.is_empty() {
            problems.push(format!("{} declares no files", owner));
        }

        for prerequisite in prerequisites {
            if !self.has_component(prerequisite) {
                problems.push(format!(
                    "{} requires unknown component '{}'",
                    owner, prerequisite
                ));
            }
        }

        for spec in files {
            if spec.path.split(['/', '\\']).any(|segment| segment == "..") {
                problems.push(format!(
                    "{} file {} leaves its destination via '..'",
                    owner, spec.file_name
                ));
                continue;
            }

            let relative = template_root.join(spec.relative_file());
            if !templates.exists(&relative) {
                problems.push(format!(
                    "{} references missing template {}",
                    owner,
                    templates.display_path(&relative).display()
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::templates::DirectoryTemplates;
    use std::fs;
    use tempfile::TempDir;

    fn component(name: &str, prerequisites: &[&str]) -> ComponentDescriptor {
        ComponentDescriptor {
            name: name.to_string(),
            files: vec![FileSpec::new(format!("{}.tsx", name), "/components/ui")],
            prerequisites: prerequisites.iter().map(|s| s.to_string()).collect(),
            dependencies: vec![],
        }
    }

    fn write_component_templates(root: &Path, names: &[&str]) {
        let dir = root.join("components/ui");
        fs::create_dir_all(&dir).unwrap();
        for name in names {
            fs::write(dir.join(format!("{}.tsx", name)), name).unwrap();
        }
    }

    #[test]
    fn lookup_unknown_component_is_not_found() {
        let registry =
            Registry::from_parts(vec![component("card", &[])], vec![], InitPackages::default())
                .unwrap();
        let err = registry.lookup_component("buton").unwrap_err();
        assert!(matches!(
            err,
            MyUiError::NotFound {
                kind: TargetKind::Component,
                ..
            }
        ));
    }

    #[test]
    fn lookup_unknown_layout_is_not_found() {
        let registry = Registry::from_parts(vec![], vec![], InitPackages::default()).unwrap();
        let err = registry.lookup_layout("signup").unwrap_err();
        assert!(matches!(
            err,
            MyUiError::NotFound {
                kind: TargetKind::Layout,
                ..
            }
        ));
    }

    #[test]
    fn duplicate_component_names_rejected() {
        let result = Registry::from_parts(
            vec![component("card", &[]), component("card", &[])],
            vec![],
            InitPackages::default(),
        );
        assert!(matches!(result, Err(MyUiError::RegistryInvalid { .. })));
    }

    #[test]
    fn validate_rejects_parent_dir_paths() {
        let temp = TempDir::new().unwrap();
        write_component_templates(temp.path(), &["card"]);
        let mut card = component("card", &[]);
        card.files = vec![FileSpec::new("card.tsx", "/../outside")];
        let registry = Registry::from_parts(vec![card], vec![], InitPackages::default()).unwrap();

        let err = registry
            .validate(&DirectoryTemplates::new(temp.path()))
            .unwrap_err();
        assert!(err.to_string().contains("'..'"));
    }

    #[test]
    fn provider_template_root_layout() {
        assert_eq!(
            Registry::provider_template_root("login", "simple"),
            Path::new("layout").join("login").join("simple")
        );
    }

    #[test]
    fn validate_accepts_consistent_registry() {
        let temp = TempDir::new().unwrap();
        write_component_templates(temp.path(), &["button", "slot"]);

        let registry = Registry::from_parts(
            vec![component("button", &["slot"]), component("slot", &[])],
            vec![],
            InitPackages::default(),
        )
        .unwrap();

        registry
            .validate(&DirectoryTemplates::new(temp.path()))
            .unwrap();
    }

    #[test]
    fn validate_reports_dangling_prerequisite() {
        let temp = TempDir::new().unwrap();
        write_component_templates(temp.path(), &["button"]);

        let registry = Registry::from_parts(
            vec![component("button", &["slot"])],
            vec![],
            InitPackages::default(),
        )
        .unwrap();

        let err = registry
            .validate(&DirectoryTemplates::new(temp.path()))
            .unwrap_err();
        assert!(err.to_string().contains("unknown component 'slot'"));
    }

    #[test]
    fn validate_reports_missing_template_and_empty_layout() {
        let temp = TempDir::new().unwrap();

        let registry = Registry::from_parts(
            vec![component("card", &[])],
            vec![LayoutDescriptor {
                name: "login".into(),
                providers: vec![],
            }],
            InitPackages::default(),
        )
        .unwrap();

        let msg = registry
            .validate(&DirectoryTemplates::new(temp.path()))
            .unwrap_err()
            .to_string();
        assert!(msg.contains("missing template"));
        assert!(msg.contains("layout 'login' has no providers"));
    }

    #[test]
    fn validate_reports_cycles() {
        let temp = TempDir::new().unwrap();
        write_component_templates(temp.path(), &["a", "b"]);

        let registry = Registry::from_parts(
            vec![component("a", &["b"]), component("b", &["a"])],
            vec![],
            InitPackages::default(),
        )
        .unwrap();

        let msg = registry
            .validate(&DirectoryTemplates::new(temp.path()))
            .unwrap_err()
            .to_string();
        assert!(msg.contains("prerequisite cycle"));
    }

    #[test]
    fn validate_checks_provider_templates_under_layout_root() {
        let temp = TempDir::new().unwrap();
        write_component_templates(temp.path(), &["button"]);
        let provider_dir = temp.path().join("layout/login/simple");
        fs::create_dir_all(&provider_dir).unwrap();
        fs::write(provider_dir.join("page.tsx"), "page").unwrap();

        let registry = Registry::from_parts(
            vec![component("button", &[])],
            vec![LayoutDescriptor {
                name: "login".into(),
                providers: vec![ProviderDescriptor {
                    name: "simple".into(),
                    files: vec![FileSpec::new("page.tsx", "/")],
                    prerequisites: vec!["button".into()],
                    dependencies: vec![],
                }],
            }],
            InitPackages::default(),
        )
        .unwrap();

        registry
            .validate(&DirectoryTemplates::new(temp.path()))
            .unwrap();
    }
}
