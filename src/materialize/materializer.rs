//! Copying template files into the project.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MyUiError, Result};
use crate::materialize::conflict::{ConflictPolicy, Decision, OverwriteConfirm};
use crate::registry::{ComponentDescriptor, FileSpec, ProviderDescriptor, Registry, TemplateSource};

/// One file to copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFile {
    /// Path inside the template source.
    pub source: PathBuf,
    /// Destination path in the project.
    pub destination: PathBuf,
    /// Name of the component or provider the file belongs to.
    pub origin: String,
}

impl TargetFile {
    /// Destination file name, for messages.
    pub fn file_name(&self) -> String {
        self.destination
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Outcome of materializing one descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializeReport {
    pub origin: String,
    /// Destinations written, in copy order.
    pub written: Vec<PathBuf>,
    /// Destinations left untouched because the user declined.
    pub skipped: Vec<PathBuf>,
    /// Set when an abort stopped the remaining files.
    pub aborted: bool,
}

impl MaterializeReport {
    fn new(origin: &str) -> Self {
        Self {
            origin: origin.to_string(),
            ..Self::default()
        }
    }

    /// Whether every file was either written or deliberately skipped.
    pub fn is_complete(&self) -> bool {
        !self.aborted
    }
}

/// Copies descriptor files from a [`TemplateSource`] into a destination root.
pub struct Materializer<'t> {
    templates: &'t dyn TemplateSource,
}

impl<'t> Materializer<'t> {
    pub fn new(templates: &'t dyn TemplateSource) -> Self {
        Self { templates }
    }

    /// Compute source and destination for each file spec, in list order.
    pub fn plan(
        &self,
        origin: &str,
        files: &[FileSpec],
        source_root: &Path,
        dest_root: &Path,
    ) -> Vec<TargetFile> {
        files
            .iter()
            .map(|spec| TargetFile {
                source: source_root.join(spec.relative_file()),
                destination: dest_root.join(spec.relative_file()),
                origin: origin.to_string(),
            })
            .collect()
    }

    /// Materialize a component under `dest_root` (the project root).
    pub fn materialize_component(
        &self,
        component: &ComponentDescriptor,
        dest_root: &Path,
        policy: ConflictPolicy,
        confirm: &mut dyn OverwriteConfirm,
    ) -> Result<MaterializeReport> {
        self.materialize(
            &component.name,
            &component.files,
            &Registry::component_template_root(),
            dest_root,
            policy,
            confirm,
        )
    }

    /// Materialize a layout provider's own files under `dest_root`.
    pub fn materialize_provider(
        &self,
        layout: &str,
        provider: &ProviderDescriptor,
        dest_root: &Path,
        policy: ConflictPolicy,
        confirm: &mut dyn OverwriteConfirm,
    ) -> Result<MaterializeReport> {
        self.materialize(
            &format!("{}/{}", layout, provider.name),
            &provider.files,
            &Registry::provider_template_root(layout, &provider.name),
            dest_root,
            policy,
            confirm,
        )
    }

    /// Copy `files` from `source_root` in the template source to `dest_root`.
    ///
    /// A missing template fails the descriptor with `TemplateMissing`; files
    /// copied before it stay on disk.
    pub fn materialize(
        &self,
        origin: &str,
        files: &[FileSpec],
        source_root: &Path,
        dest_root: &Path,
        policy: ConflictPolicy,
        confirm: &mut dyn OverwriteConfirm,
    ) -> Result<MaterializeReport> {
        let mut report = MaterializeReport::new(origin);

        for target in self.plan(origin, files, source_root, dest_root) {
            if !self.templates.exists(&target.source) {
                return Err(MyUiError::TemplateMissing {
                    path: self.templates.display_path(&target.source),
                });
            }

            let exists = target.destination.exists();
            match policy.decide(&target, exists, confirm) {
                Decision::Overwrite => {
                    if let Some(parent) = target.destination.parent() {
                        fs::create_dir_all(parent)?;
                    }
                    let bytes = self.templates.read(&target.source)?;
                    fs::write(&target.destination, bytes)?;
                    tracing::debug!(
                        origin,
                        destination = %target.destination.display(),
                        replaced = exists,
                        "wrote file"
                    );
                    report.written.push(target.destination);
                }
                Decision::Skip => {
                    tracing::debug!(
                        origin,
                        destination = %target.destination.display(),
                        "skipped existing file"
                    );
                    report.skipped.push(target.destination);
                }
                Decision::Abort => {
                    tracing::debug!(origin, "materialization aborted");
                    report.aborted = true;
                    break;
                }
            }
        }

        Ok(report)
    }
}
