//! Dependency resolution for components and layouts.
//!
//! Resolution is pure: it reads the [`Registry`] and never touches the file
//! system, so an unknown name fails before any file is written or any package
//! is installed.
//!
//! # Example
//!
//! ```
//! use myui::registry::{load_registry, EmbeddedTemplates};
//! use myui::resolver::resolve_component;
//!
//! let registry = load_registry(&EmbeddedTemplates::new()).unwrap();
//! let resolution = resolve_component(&registry, "button").unwrap();
//!
//! // `slot` is a prerequisite of `button` and comes first.
//! let names: Vec<_> = resolution.components.iter().map(|c| c.name.as_str()).collect();
//! assert_eq!(names, vec!["slot", "button"]);
//! ```

pub mod closure;
pub mod packages;

pub use closure::{component_closure, find_cycle};
pub use packages::{package_name, PackageConflict, PackageSet};

use std::collections::HashSet;

use crate::error::{MyUiError, Result};
use crate::registry::{ComponentDescriptor, LayoutDescriptor, ProviderDescriptor, Registry};

/// Everything needed to materialize one component.
#[derive(Debug, Clone)]
pub struct ComponentResolution<'a> {
    /// The requested component.
    pub target: &'a ComponentDescriptor,
    /// The closure in copy order: prerequisites first, `target` last.
    pub components: Vec<&'a ComponentDescriptor>,
    /// Union of every closure member's package dependencies.
    pub packages: PackageSet,
}

/// Everything needed to materialize one layout provider.
#[derive(Debug, Clone)]
pub struct LayoutResolution<'a> {
    pub layout: &'a LayoutDescriptor,
    pub provider: &'a ProviderDescriptor,
    /// One resolution per prerequisite, in the provider's declared order.
    pub prerequisites: Vec<ComponentResolution<'a>>,
    /// Provider packages unioned with all prerequisite packages.
    pub packages: PackageSet,
}

impl<'a> LayoutResolution<'a> {
    /// Prerequisite components in copy order, each listed once.
    pub fn prerequisite_components(&self) -> Vec<&'a ComponentDescriptor> {
        let mut seen = HashSet::new();
        self.prerequisites
            .iter()
            .flat_map(|r| r.components.iter().copied())
            .filter(|c| seen.insert(c.name.as_str()))
            .collect()
    }
}

/// Resolve a component and its prerequisite closure.
pub fn resolve_component<'a>(registry: &'a Registry, name: &str) -> Result<ComponentResolution<'a>> {
    let target = registry.lookup_component(name)?;
    let components = component_closure(registry, std::slice::from_ref(&target.name))?;

    let mut packages = PackageSet::new();
    for component in &components {
        packages.extend(component.dependencies.iter().cloned());
    }

    tracing::debug!(
        component = name,
        closure = components.len(),
        packages = packages.len(),
        "resolved component"
    );

    Ok(ComponentResolution {
        target,
        components,
        packages,
    })
}

/// Resolve a layout provider.
///
/// With no `provider` the layout's first provider is used; callers that want
/// the user to pick should ask before resolving.
pub fn resolve_layout<'a>(
    registry: &'a Registry,
    name: &str,
    provider: Option<&str>,
) -> Result<LayoutResolution<'a>> {
    let layout = registry.lookup_layout(name)?;

    let provider = match provider {
        Some(wanted) => layout
            .provider(wanted)
            .ok_or_else(|| MyUiError::ProviderNotFound {
                layout: layout.name.clone(),
                provider: wanted.to_string(),
            })?,
        None => layout.providers.first().ok_or_else(|| MyUiError::NoProvider {
            layout: layout.name.clone(),
        })?,
    };

    let mut prerequisites = Vec::with_capacity(provider.prerequisites.len());
    let mut packages = PackageSet::new();
    for prerequisite in &provider.prerequisites {
        let resolution = resolve_component(registry, prerequisite)?;
        packages.extend(resolution.packages.iter().cloned());
        prerequisites.push(resolution);
    }
    packages.extend(provider.dependencies.iter().cloned());

    tracing::debug!(
        layout = name,
        provider = %provider.name,
        prerequisites = prerequisites.len(),
        packages = packages.len(),
        "resolved layout"
    );

    Ok(LayoutResolution {
        layout,
        provider,
        prerequisites,
        packages,
    })
}
