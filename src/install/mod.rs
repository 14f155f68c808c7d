//! Installing the packages a component or layout depends on.
//!
//! [`ShellInstaller`] runs the project's package manager (npm, yarn, pnpm or
//! bun, detected from the lockfile). `--no-install` swaps in
//! [`SkipInstaller`], and tests use [`RecordingInstaller`].

pub mod installer;
pub mod package_manager;

pub use installer::{PackageInstaller, RecordingInstaller, ShellInstaller, SkipInstaller};
pub use package_manager::PackageManager;
