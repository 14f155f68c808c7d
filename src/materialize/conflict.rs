//! Overwrite decisions for destination files that already exist.

use crate::error::MyUiError;
use crate::materialize::TargetFile;
use crate::ui::{Prompt, PromptResult, PromptType, UserInterface};

/// What to do with one target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Write the file, replacing any existing content.
    Overwrite,
    /// Leave the destination untouched and continue.
    Skip,
    /// Stop materializing the current descriptor.
    Abort,
}

/// Flags that pre-answer the overwrite question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConflictPolicy {
    /// `--overwrite`: replace existing files without asking.
    pub force_overwrite: bool,
    /// `--yes`: accept every confirmation without asking.
    pub auto_yes: bool,
}

impl ConflictPolicy {
    pub fn new(force_overwrite: bool, auto_yes: bool) -> Self {
        Self {
            force_overwrite,
            auto_yes,
        }
    }

    /// Decide for one file. `confirm` is only consulted when the destination
    /// exists and neither flag is set.
    pub fn decide(
        &self,
        target: &TargetFile,
        dest_exists: bool,
        confirm: &mut dyn OverwriteConfirm,
    ) -> Decision {
        if !dest_exists || self.force_overwrite || self.auto_yes {
            return Decision::Overwrite;
        }
        confirm.confirm_overwrite(target)
    }
}

/// Caller-supplied answer to "overwrite this existing file?".
pub trait OverwriteConfirm {
    fn confirm_overwrite(&mut self, target: &TargetFile) -> Decision;
}

impl<F> OverwriteConfirm for F
where
    F: FnMut(&TargetFile) -> Decision,
{
    fn confirm_overwrite(&mut self, target: &TargetFile) -> Decision {
        self(target)
    }
}

/// Asks through the [`UserInterface`].
///
/// Confirm overwrites, decline skips, and escaping the prompt aborts.
pub struct PromptOverwrite<'a> {
    ui: &'a mut dyn UserInterface,
}

impl<'a> PromptOverwrite<'a> {
    pub fn new(ui: &'a mut dyn UserInterface) -> Self {
        Self { ui }
    }
}

impl OverwriteConfirm for PromptOverwrite<'_> {
    fn confirm_overwrite(&mut self, target: &TargetFile) -> Decision {
        let prompt = Prompt {
            key: "overwrite".to_string(),
            question: format!(
                "File \"{}\" already exists. Overwrite?",
                target.destination.display()
            ),
            prompt_type: PromptType::Confirm,
            default: Some("false".to_string()),
        };

        match self.ui.prompt(&prompt) {
            Ok(PromptResult::Bool(true)) => Decision::Overwrite,
            Ok(_) => {
                self.ui
                    .message(&format!("Skipping existing file {}", target.file_name()));
                Decision::Skip
            }
            Err(MyUiError::UserCancelled) => Decision::Abort,
            Err(e) => {
                tracing::warn!(error = %e, "overwrite prompt failed");
                Decision::Abort
            }
        }
    }
}
