//! Loading of the registry manifest (`registry.yml`).

use serde::Deserialize;
use std::path::Path;

use crate::error::{MyUiError, Result};
use crate::registry::schema::{
    ComponentDescriptor, InitPackages, LayoutDescriptor, ProviderDescriptor,
};
use crate::registry::store::Registry;
use crate::registry::templates::TemplateSource;

/// File name of the manifest at the template root.
pub const MANIFEST_FILE: &str = "registry.yml";

/// On-disk manifest shape. Mappings keep their YAML order so that listings
/// and provider prompts follow the order the registry was written in.
#[derive(Debug, Deserialize)]
struct RawManifest {
    #[serde(default = "default_version")]
    version: u32,

    #[serde(default)]
    init: InitPackages,

    #[serde(default)]
    components: serde_yaml::Mapping,

    #[serde(default)]
    layouts: serde_yaml::Mapping,
}

fn default_version() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
struct RawLayout {
    #[serde(default)]
    providers: serde_yaml::Mapping,
}

/// Load the registry manifest shipped with a template source.
pub fn load_registry(templates: &dyn TemplateSource) -> Result<Registry> {
    let manifest = Path::new(MANIFEST_FILE);
    let path = templates.display_path(manifest);
    let bytes = templates.read(manifest)?;
    let content = String::from_utf8(bytes).map_err(|_| MyUiError::ConfigParseError {
        path: path.clone(),
        message: "Invalid UTF-8".to_string(),
    })?;

    parse_registry(&content, &path)
}

/// Parse registry YAML into a [`Registry`].
///
/// `origin` is only used in error messages.
pub fn parse_registry(content: &str, origin: &Path) -> Result<Registry> {
    let parse_err = |message: String| MyUiError::ConfigParseError {
        path: origin.to_path_buf(),
        message,
    };

    let raw: RawManifest =
        serde_yaml::from_str(content).map_err(|e| parse_err(e.to_string()))?;
    tracing::debug!(version = raw.version, "parsed registry manifest");

    let mut components = Vec::with_capacity(raw.components.len());
    for (key, value) in raw.components {
        let name = mapping_key(&key)
            .ok_or_else(|| parse_err("component keys must be strings".into()))?;
        let mut component: ComponentDescriptor = serde_yaml::from_value(value)
            .map_err(|e| parse_err(format!("component '{}': {}", name, e)))?;
        component.name = name;
        components.push(component);
    }

    let mut layouts = Vec::with_capacity(raw.layouts.len());
    for (key, value) in raw.layouts {
        let name =
            mapping_key(&key).ok_or_else(|| parse_err("layout keys must be strings".into()))?;
        let layout: RawLayout = serde_yaml::from_value(value)
            .map_err(|e| parse_err(format!("layout '{}': {}", name, e)))?;

        let mut providers = Vec::with_capacity(layout.providers.len());
        for (pkey, pvalue) in layout.providers {
            let provider_name = mapping_key(&pkey).ok_or_else(|| {
                parse_err(format!("layout '{}': provider keys must be strings", name))
            })?;
            let mut provider: ProviderDescriptor = serde_yaml::from_value(pvalue).map_err(|e| {
                parse_err(format!("layout '{}' provider '{}': {}", name, provider_name, e))
            })?;
            provider.name = provider_name;
            providers.push(provider);
        }

        layouts.push(LayoutDescriptor { name, providers });
    }

    Registry::from_parts(components, layouts, raw.init)
}

fn mapping_key(key: &serde_yaml::Value) -> Option<String> {
    key.as_str().map(|s| s.to_string())
}
