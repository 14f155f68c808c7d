//! Adding components and layouts to a project.
//!
//! A [`Scaffolder`] runs the three phases in a fixed order:
//!
//! 1. resolve the target against the registry (no I/O, so unknown names fail
//!    before anything is touched),
//! 2. install the union of package dependencies once,
//! 3. copy files, prerequisite components first, then the layout provider's
//!    own files.
//!
//! [`Scaffolder::add_component`] and [`Scaffolder::add_layout`] run all three.
//! The CLI drives the phases one at a time so it can report between them.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::install::PackageInstaller;
use crate::materialize::{ConflictPolicy, MaterializeReport, Materializer, OverwriteConfirm};
use crate::registry::{
    ComponentDescriptor, LayoutDescriptor, ProviderDescriptor, Registry, TemplateSource,
};
use crate::resolver::{resolve_component, resolve_layout, PackageConflict, PackageSet};

/// A resolved target, ready to install and copy.
#[derive(Debug, Clone)]
pub struct ScaffoldPlan<'r> {
    /// `button`, or `login/simple` for a layout provider.
    pub target: String,
    /// Components to copy, in order, each once.
    pub components: Vec<&'r ComponentDescriptor>,
    /// Layout provider whose files are copied after the components.
    pub provider: Option<(&'r LayoutDescriptor, &'r ProviderDescriptor)>,
    /// Packages to install before copying.
    pub packages: PackageSet,
}

impl ScaffoldPlan<'_> {
    /// Package names requested with more than one specifier.
    pub fn conflicts(&self) -> Vec<PackageConflict> {
        self.packages.conflicts()
    }

    /// Number of descriptors that will be materialized.
    pub fn descriptor_count(&self) -> usize {
        self.components.len() + usize::from(self.provider.is_some())
    }
}

/// What a scaffold run wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub target: String,
    /// One report per descriptor, in copy order. Stops at the first abort.
    pub reports: Vec<MaterializeReport>,
}

impl ScaffoldReport {
    /// Whether every descriptor was processed without an abort.
    pub fn is_complete(&self) -> bool {
        self.reports.iter().all(MaterializeReport::is_complete)
    }

    /// Every file written, in copy order.
    pub fn written(&self) -> impl Iterator<Item = &PathBuf> {
        self.reports.iter().flat_map(|r| r.written.iter())
    }

    /// Every existing file left untouched.
    pub fn skipped(&self) -> impl Iterator<Item = &PathBuf> {
        self.reports.iter().flat_map(|r| r.skipped.iter())
    }

    /// Origin of the descriptor that was aborted, if any.
    pub fn aborted_at(&self) -> Option<&str> {
        self.reports
            .iter()
            .find(|r| r.aborted)
            .map(|r| r.origin.as_str())
    }
}

/// Adds registry entries to one project.
pub struct Scaffolder<'r, I> {
    registry: &'r Registry,
    templates: &'r dyn TemplateSource,
    installer: I,
    project_root: PathBuf,
}

impl<'r, I: PackageInstaller> Scaffolder<'r, I> {
    pub fn new(
        registry: &'r Registry,
        templates: &'r dyn TemplateSource,
        installer: I,
        project_root: &Path,
    ) -> Self {
        Self {
            registry,
            templates,
            installer,
            project_root: project_root.to_path_buf(),
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn installer(&self) -> &I {
        &self.installer
    }

    /// Resolve a component and its prerequisites.
    pub fn plan_component(&self, name: &str) -> Result<ScaffoldPlan<'r>> {
        let resolution = resolve_component(self.registry, name)?;
        Ok(ScaffoldPlan {
            target: resolution.target.name.clone(),
            components: resolution.components,
            provider: None,
            packages: resolution.packages,
        })
    }

    /// Resolve a layout provider and its prerequisite components.
    pub fn plan_layout(&self, name: &str, provider: Option<&str>) -> Result<ScaffoldPlan<'r>> {
        let resolution = resolve_layout(self.registry, name, provider)?;
        Ok(ScaffoldPlan {
            target: format!("{}/{}", resolution.layout.name, resolution.provider.name),
            components: resolution.prerequisite_components(),
            provider: Some((resolution.layout, resolution.provider)),
            packages: resolution.packages,
        })
    }

    /// Install the plan's packages in one installer call.
    ///
    /// Returns false when there was nothing to install.
    pub fn install(&mut self, plan: &ScaffoldPlan<'_>) -> Result<bool> {
        for conflict in plan.conflicts() {
            tracing::debug!(
                package = %conflict.name,
                specifiers = %conflict.specifiers.join(", "),
                "conflicting version specifiers passed to installer"
            );
        }

        if plan.packages.is_empty() {
            tracing::debug!(item = %plan.target, "no packages to install");
            return Ok(false);
        }

        self.installer.install(plan.packages.as_slice())?;
        Ok(true)
    }

    /// Copy the plan's files.
    ///
    /// Components go to the project root. Layout provider files go to
    /// `layout_root`. Copying stops after the first aborted descriptor.
    pub fn apply(
        &self,
        plan: &ScaffoldPlan<'_>,
        layout_root: &Path,
        policy: ConflictPolicy,
        confirm: &mut dyn OverwriteConfirm,
    ) -> Result<ScaffoldReport> {
        let materializer = Materializer::new(self.templates);
        let mut report = ScaffoldReport {
            target: plan.target.clone(),
            reports: Vec::with_capacity(plan.descriptor_count()),
        };

        for component in &plan.components {
            let result =
                materializer.materialize_component(component, &self.project_root, policy, confirm)?;
            let aborted = result.aborted;
            report.reports.push(result);
            if aborted {
                return Ok(report);
            }
        }

        if let Some((layout, provider)) = plan.provider {
            let result =
                materializer.materialize_provider(&layout.name, provider, layout_root, policy, confirm)?;
            report.reports.push(result);
        }

        tracing::debug!(
            item = %report.target,
            written = report.written().count(),
            skipped = report.skipped().count(),
            complete = report.is_complete(),
            "scaffold finished"
        );
        Ok(report)
    }

    /// Resolve, install, and copy a component into the project root.
    pub fn add_component(
        &mut self,
        name: &str,
        policy: ConflictPolicy,
        confirm: &mut dyn OverwriteConfirm,
    ) -> Result<ScaffoldReport> {
        let plan = self.plan_component(name)?;
        self.install(&plan)?;
        let root = self.project_root.clone();
        self.apply(&plan, &root, policy, confirm)
    }

    /// Resolve, install, and copy a layout provider into `dest_root`.
    pub fn add_layout(
        &mut self,
        name: &str,
        provider: Option<&str>,
        dest_root: &Path,
        policy: ConflictPolicy,
        confirm: &mut dyn OverwriteConfirm,
    ) -> Result<ScaffoldReport> {
        let plan = self.plan_layout(name, provider)?;
        self.install(&plan)?;
        self.apply(&plan, dest_root, policy, confirm)
    }
}
