//! Shared display helpers for `init` and `add`.
//!
//! These helpers render package installation progress and scaffold results
//! consistently across commands.

use std::path::Path;

use crate::error::Result;
use crate::resolver::PackageConflict;
use crate::scaffold::ScaffoldReport;
use crate::ui::UserInterface;

/// Run `install` behind a spinner, or report that installation is skipped.
///
/// Nothing is shown when `packages` is empty. A failure finishes the spinner
/// with an error line and is returned unchanged.
pub fn install_with_progress<F>(
    ui: &mut dyn UserInterface,
    packages: &[String],
    skip: bool,
    install: F,
) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    if packages.is_empty() {
        return Ok(());
    }

    if skip {
        ui.message(&format!(
            "Skipping package installation: {}",
            packages.join(", ")
        ));
        return install();
    }

    let mut spinner = ui.start_spinner("Installing dependencies...");
    match install() {
        Ok(()) => {
            spinner.finish_success(&format!("Installed {}", packages.join(", ")));
            Ok(())
        }
        Err(e) => {
            spinner.finish_error("Failed to install dependencies");
            Err(e)
        }
    }
}

/// Warn about packages requested with different version specifiers.
pub fn warn_conflicts(ui: &mut dyn UserInterface, conflicts: &[PackageConflict]) {
    for conflict in conflicts {
        ui.warning(&format!(
            "Conflicting versions requested for {}: {}",
            conflict.name,
            conflict.specifiers.join(", ")
        ));
    }
}

/// `path` relative to `root` when possible, for messages.
pub fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Print the files a scaffold run wrote and skipped.
///
/// File lists appear in verbose mode; the summary line always does.
pub fn show_scaffold_report(ui: &mut dyn UserInterface, root: &Path, report: &ScaffoldReport) {
    if ui.output_mode().shows_details() {
        for path in report.written() {
            ui.message(&format!("  created {}", display_path(root, path)));
        }
        for path in report.skipped() {
            ui.message(&format!("  skipped {}", display_path(root, path)));
        }
    }

    let written = report.written().count();
    let skipped = report.skipped().count();

    if let Some(origin) = report.aborted_at() {
        ui.warning(&format!(
            "Stopped while adding {}: {} file(s) written before the stop",
            origin, written
        ));
        return;
    }

    let mut summary = format!("Added {} ({} file(s) written", report.target, written);
    if skipped > 0 {
        summary.push_str(&format!(", {} skipped", skipped));
    }
    summary.push(')');
    ui.success(&summary);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MyUiError;
    use crate::materialize::MaterializeReport;
    use crate::ui::{MockUI, OutputMode, SpinnerStatus};
    use std::path::PathBuf;

    fn packages(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn report(aborted: bool) -> ScaffoldReport {
        ScaffoldReport {
            target: "button".to_string(),
            reports: vec![
                MaterializeReport {
                    origin: "slot".to_string(),
                    written: vec![PathBuf::from("/p/components/ui/slot.tsx")],
                    skipped: vec![],
                    aborted: false,
                },
                MaterializeReport {
                    origin: "button".to_string(),
                    written: vec![],
                    skipped: vec![PathBuf::from("/p/components/ui/button.tsx")],
                    aborted,
                },
            ],
        }
    }

    #[test]
    fn install_with_progress_runs_spinner() {
        let mut ui = MockUI::new();
        let mut called = false;
        install_with_progress(&mut ui, &packages(&["clsx"]), false, || {
            called = true;
            Ok(())
        })
        .unwrap();

        assert!(called);
        assert_eq!(ui.spinners(), &["Installing dependencies..."]);
        assert_eq!(
            ui.spinner_outcomes(),
            vec![(SpinnerStatus::Success, "Installed clsx".to_string())]
        );
    }

    #[test]
    fn install_with_progress_empty_is_silent() {
        let mut ui = MockUI::new();
        install_with_progress(&mut ui, &[], false, || panic!("should not install")).unwrap();
        assert!(ui.spinners().is_empty());
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn install_with_progress_skip_reports_packages() {
        let mut ui = MockUI::new();
        install_with_progress(&mut ui, &packages(&["clsx", "zod"]), true, || Ok(())).unwrap();
        assert!(ui.has_message("Skipping package installation: clsx, zod"));
        assert!(ui.spinners().is_empty());
    }

    #[test]
    fn install_with_progress_propagates_failure() {
        let mut ui = MockUI::new();
        let err = install_with_progress(&mut ui, &packages(&["nope"]), false, || {
            Err(MyUiError::InstallFailed {
                packages: "nope".to_string(),
                message: "404".to_string(),
            })
        })
        .unwrap_err();
        assert!(matches!(err, MyUiError::InstallFailed { .. }));
        assert_eq!(
            ui.spinner_outcomes(),
            vec![(SpinnerStatus::Error, "Failed to install dependencies".to_string())]
        );
    }

    #[test]
    fn warn_conflicts_lists_specifiers() {
        let mut ui = MockUI::new();
        warn_conflicts(
            &mut ui,
            &[PackageConflict {
                name: "lucide-react".to_string(),
                specifiers: packages(&["lucide-react@latest", "lucide-react@0.400.0"]),
            }],
        );
        assert!(ui.has_warning("lucide-react@latest, lucide-react@0.400.0"));
    }

    #[test]
    fn display_path_strips_root() {
        assert_eq!(
            display_path(Path::new("/p"), Path::new("/p/components/ui/button.tsx")),
            "components/ui/button.tsx"
        );
        assert_eq!(display_path(Path::new("/p"), Path::new("/q/x")), "/q/x");
    }

    #[test]
    fn report_summary_counts_files() {
        let mut ui = MockUI::new();
        show_scaffold_report(&mut ui, Path::new("/p"), &report(false));
        assert!(ui.has_success("Added button (1 file(s) written, 1 skipped)"));
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn report_lists_files_when_verbose() {
        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        show_scaffold_report(&mut ui, Path::new("/p"), &report(false));
        assert!(ui.has_message("created components/ui/slot.tsx"));
        assert!(ui.has_message("skipped components/ui/button.tsx"));
    }

    #[test]
    fn aborted_report_warns() {
        let mut ui = MockUI::new();
        show_scaffold_report(&mut ui, Path::new("/p"), &report(true));
        assert!(ui.has_warning("Stopped while adding button"));
        assert!(ui.successes().is_empty());
    }
}
