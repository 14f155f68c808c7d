//! Package installation.

use std::path::{Path, PathBuf};

use crate::error::{MyUiError, Result};
use crate::install::package_manager::PackageManager;
use crate::shell::{execute, quote_arg, CommandOptions};

/// Installs package specifiers into the project.
pub trait PackageInstaller {
    /// Install `packages` with a single installer invocation.
    fn install(&mut self, packages: &[String]) -> Result<()>;
}

impl<T: PackageInstaller + ?Sized> PackageInstaller for Box<T> {
    fn install(&mut self, packages: &[String]) -> Result<()> {
        (**self).install(packages)
    }
}

impl<T: PackageInstaller + ?Sized> PackageInstaller for &mut T {
    fn install(&mut self, packages: &[String]) -> Result<()> {
        (**self).install(packages)
    }
}

/// Runs the project's package manager through the shell.
#[derive(Debug, Clone)]
pub struct ShellInstaller {
    project_root: PathBuf,
    manager: PackageManager,
}

impl ShellInstaller {
    /// Use the package manager detected from `project_root`'s lockfile.
    pub fn new(project_root: &Path) -> Self {
        Self::with_manager(project_root, PackageManager::detect(project_root))
    }

    pub fn with_manager(project_root: &Path, manager: PackageManager) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            manager,
        }
    }

    pub fn manager(&self) -> PackageManager {
        self.manager
    }

    /// The command line that installs `packages`.
    pub fn command_line(&self, packages: &[String]) -> String {
        let mut parts = vec![
            self.manager.program().to_string(),
            self.manager.add_subcommand().to_string(),
        ];
        parts.extend(packages.iter().map(|p| quote_arg(p)));
        parts.join(" ")
    }
}

impl PackageInstaller for ShellInstaller {
    fn install(&mut self, packages: &[String]) -> Result<()> {
        if packages.is_empty() {
            return Ok(());
        }

        let command = self.command_line(packages);
        tracing::debug!(%command, "installing packages");

        let options = CommandOptions {
            cwd: Some(self.project_root.clone()),
            capture_stdout: true,
            capture_stderr: true,
            ..Default::default()
        };
        let result = execute(&command, &options)?;

        if result.success {
            tracing::debug!(duration_ms = result.duration.as_millis() as u64, "install finished");
            return Ok(());
        }

        let stderr = result.stderr.trim();
        let message = if stderr.is_empty() {
            format!("{} exited with code {:?}", self.manager, result.exit_code)
        } else {
            stderr.to_string()
        };
        Err(MyUiError::InstallFailed {
            packages: packages.join(" "),
            message,
        })
    }
}

/// Skips installation (`--no-install`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipInstaller;

impl PackageInstaller for SkipInstaller {
    fn install(&mut self, packages: &[String]) -> Result<()> {
        tracing::debug!(packages = %packages.join(" "), "skipping package installation");
        Ok(())
    }
}

/// Records install calls instead of running anything.
#[derive(Debug, Clone, Default)]
pub struct RecordingInstaller {
    calls: Vec<Vec<String>>,
    failure: Option<String>,
}

impl RecordingInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every install call fail with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            calls: Vec::new(),
            failure: Some(message.into()),
        }
    }

    /// Package lists passed to each call, in order.
    pub fn calls(&self) -> &[Vec<String>] {
        &self.calls
    }
}

impl PackageInstaller for RecordingInstaller {
    fn install(&mut self, packages: &[String]) -> Result<()> {
        self.calls.push(packages.to_vec());
        match &self.failure {
            Some(message) => Err(MyUiError::InstallFailed {
                packages: packages.join(" "),
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn specs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn npm_command_line() {
        let temp = TempDir::new().unwrap();
        let installer = ShellInstaller::with_manager(temp.path(), PackageManager::Npm);
        assert_eq!(
            installer.command_line(&specs(&["lucide-react@latest", "@radix-ui/react-slot"])),
            "npm install lucide-react@latest @radix-ui/react-slot"
        );
    }

    #[test]
    fn yarn_command_line_detected_from_lockfile() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("yarn.lock"), "").unwrap();
        let installer = ShellInstaller::new(temp.path());
        assert_eq!(installer.manager(), PackageManager::Yarn);
        assert_eq!(installer.command_line(&specs(&["zod"])), "yarn add zod");
    }

    #[test]
    fn shell_installer_empty_list_is_noop() {
        let temp = TempDir::new().unwrap();
        let mut installer = ShellInstaller::new(temp.path());
        installer.install(&[]).unwrap();
    }

    #[test]
    fn recording_installer_records_calls() {
        let mut installer = RecordingInstaller::new();
        installer.install(&specs(&["clsx"])).unwrap();
        installer.install(&specs(&["zod", "react-hook-form"])).unwrap();
        assert_eq!(
            installer.calls(),
            &[specs(&["clsx"]), specs(&["zod", "react-hook-form"])]
        );
    }

    #[test]
    fn recording_installer_can_fail() {
        let mut installer = RecordingInstaller::failing("npm ERR! 404");
        let err = installer.install(&specs(&["nope"])).unwrap_err();
        assert!(matches!(err, MyUiError::InstallFailed { .. }));
        assert!(err.to_string().contains("npm ERR! 404"));
        assert_eq!(installer.calls().len(), 1);
    }

    #[test]
    fn skip_installer_succeeds() {
        SkipInstaller.install(&specs(&["clsx"])).unwrap();
    }
}
