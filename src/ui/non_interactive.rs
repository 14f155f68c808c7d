//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::{MyUiError, Result};

use super::theme::MyUiTheme;
use super::{
    parse_bool, OutputMode, Prompt, PromptResult, PromptType, SpinnerHandle, UserInterface,
};

/// Prefix of environment variables that answer prompts.
pub const PROMPT_ENV_PREFIX: &str = "MYUI_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `MYUI_PROMPT_<KEY>` environment variables,
/// then from the prompt's default. A prompt with neither is an error.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
    theme: MyUiTheme,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self::with_overrides(mode, env_overrides)
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
            theme: MyUiTheme::plain(),
        }
    }

    fn override_for(&self, key: &str) -> Option<&String> {
        let env_key = format!(
            "{}{}",
            PROMPT_ENV_PREFIX,
            key.to_uppercase().replace('-', "_")
        );
        self.env_overrides.get(&env_key)
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let answer = self
            .override_for(&prompt.key)
            .or(prompt.default.as_ref())
            .cloned()
            .ok_or_else(|| MyUiError::PromptUnavailable {
                key: prompt.key.clone(),
            })?;

        tracing::debug!(key = %prompt.key, %answer, "answered prompt non-interactively");

        match &prompt.prompt_type {
            PromptType::Confirm => Ok(PromptResult::Bool(parse_bool(&answer).unwrap_or(false))),
            PromptType::Input => Ok(PromptResult::String(answer)),
            PromptType::Select { options } => {
                if options.is_empty() || options.iter().any(|o| o.value == answer) {
                    Ok(PromptResult::String(answer))
                } else {
                    Err(MyUiError::PromptUnavailable {
                        key: prompt.key.clone(),
                    })
                }
            }
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("{}", message);
        }
        Box::new(LineSpinner {
            theme: self.theme.clone(),
        })
    }
}

/// Prints the outcome line only; logs have no use for animation.
struct LineSpinner {
    theme: MyUiTheme,
}

impl SpinnerHandle for LineSpinner {
    fn finish_success(&mut self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }
}
