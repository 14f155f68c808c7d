//! Node package manager detection.

use std::fmt;
use std::path::Path;

/// Package manager used to install component dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    /// Detect the package manager from the project's lockfile.
    ///
    /// Falls back to npm when no lockfile is present.
    pub fn detect(project_root: &Path) -> Self {
        let has = |name: &str| project_root.join(name).is_file();

        if has("yarn.lock") {
            PackageManager::Yarn
        } else if has("pnpm-lock.yaml") {
            PackageManager::Pnpm
        } else if has("bun.lockb") || has("bun.lock") {
            PackageManager::Bun
        } else {
            PackageManager::Npm
        }
    }

    /// Executable name.
    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    /// Subcommand that adds dependencies.
    pub fn add_subcommand(&self) -> &'static str {
        match self {
            PackageManager::Npm => "install",
            _ => "add",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_to_npm() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{}").unwrap();

        assert_eq!(PackageManager::detect(temp.path()), PackageManager::Npm);
    }

    #[test]
    fn detects_yarn() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("yarn.lock"), "").unwrap();

        assert_eq!(PackageManager::detect(temp.path()), PackageManager::Yarn);
    }

    #[test]
    fn detects_pnpm() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("pnpm-lock.yaml"), "").unwrap();

        assert_eq!(PackageManager::detect(temp.path()), PackageManager::Pnpm);
    }

    #[test]
    fn detects_bun_either_lockfile() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("bun.lock"), "").unwrap();
        assert_eq!(PackageManager::detect(temp.path()), PackageManager::Bun);

        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("bun.lockb"), "").unwrap();
        assert_eq!(PackageManager::detect(temp.path()), PackageManager::Bun);
    }

    #[test]
    fn yarn_wins_over_package_lock() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package-lock.json"), "{}").unwrap();
        fs::write(temp.path().join("yarn.lock"), "").unwrap();

        assert_eq!(PackageManager::detect(temp.path()), PackageManager::Yarn);
    }

    #[test]
    fn add_commands() {
        assert_eq!(PackageManager::Npm.add_subcommand(), "install");
        assert_eq!(PackageManager::Pnpm.add_subcommand(), "add");
        assert_eq!(PackageManager::Bun.to_string(), "bun");
    }
}
