//! Component and layout registry.
//!
//! The registry is a YAML manifest (`registry.yml`) at the root of a template
//! tree. By default the tree is embedded in the binary; `--templates <dir>`
//! points at a tree on disk instead.
//!
//! # Template layout
//!
//! - Component files: `<templates>/<path>/<file_name>`
//! - Provider files: `<templates>/layout/<layout>/<provider>/<path>/<file_name>`
//!
//! # Example
//!
//! ```
//! use myui::registry::{load_registry, EmbeddedTemplates};
//!
//! let templates = EmbeddedTemplates::new();
//! let registry = load_registry(&templates).unwrap();
//! registry.validate(&templates).unwrap();
//!
//! let button = registry.lookup_component("button").unwrap();
//! assert_eq!(button.files[0].file_name, "button.tsx");
//! ```

pub mod builtin;
pub mod schema;
pub mod store;
pub mod templates;

pub use builtin::{load_registry, parse_registry, MANIFEST_FILE};
pub use schema::{
    ComponentDescriptor, FileSpec, InitPackages, LayoutDescriptor, ProviderDescriptor,
};
pub use store::Registry;
pub use templates::{DirectoryTemplates, EmbeddedTemplates, TemplateSource};
