//! Init command implementation.
//!
//! The `my-ui init` command prepares a project for components: it creates the
//! components and `lib` directories, writes `lib/utils.ts`, writes
//! `myui.config.json`, and installs the baseline packages.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::InitArgs;
use crate::config::{ComponentsConfig, ProjectConfig, DEFAULT_COMPONENTS_DIR};
use crate::error::{MyUiError, Result};
use crate::install::PackageInstaller;
use crate::materialize::validate_project_dir;
use crate::registry::TemplateSource;
use crate::ui::{Prompt, PromptResult, UserInterface};

use super::dispatcher::{Command, CommandContext, CommandResult};
use super::display::install_with_progress;

/// Template written to `lib/utils.ts`.
const UTILS_TEMPLATE: &str = "lib/utils.ts";

/// Answers gathered before anything is written.
#[derive(Debug, Clone, PartialEq, Eq)]
struct InitAnswers {
    components_dir: String,
    typescript: bool,
    install_extras: bool,
}

impl Default for InitAnswers {
    fn default() -> Self {
        Self {
            components_dir: DEFAULT_COMPONENTS_DIR.to_string(),
            typescript: true,
            install_extras: false,
        }
    }
}

/// The init command implementation.
pub struct InitCommand {
    ctx: CommandContext,
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(ctx: CommandContext, args: InitArgs) -> Self {
        Self { ctx, args }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.ctx.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &InitArgs {
        &self.args
    }

    fn already_initialized(&self) -> Result<bool> {
        match ProjectConfig::load(&self.ctx.project_root) {
            Ok(config) => Ok(config.is_some_and(|c| c.initialized)),
            // A broken config can be replaced with --force.
            Err(MyUiError::ConfigParseError { .. }) if self.args.force => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Ask the init questions. `None` means the user declined to proceed.
    fn ask(&self, ui: &mut dyn UserInterface) -> Result<Option<InitAnswers>> {
        let proceed = ui.prompt(&Prompt::confirm(
            "proceed",
            "Would you like to proceed with initialization?",
            true,
        ))?;
        if proceed != PromptResult::Bool(true) {
            return Ok(None);
        }

        let components_dir = ui
            .prompt(&Prompt::input(
                "components_dir",
                "Where would you like to add your components?",
                Some(DEFAULT_COMPONENTS_DIR),
            ))?
            .as_string();
        let components_dir = match components_dir.trim() {
            "" => DEFAULT_COMPONENTS_DIR.to_string(),
            dir => dir.to_string(),
        };

        let typescript = ui
            .prompt(&Prompt::confirm(
                "typescript",
                "Would you like to use TypeScript?",
                true,
            ))?
            .as_bool()
            .unwrap_or(true);

        let install_extras = ui
            .prompt(&Prompt::confirm(
                "install_extras",
                "Would you like to install additional recommended dependencies?",
                true,
            ))?
            .as_bool()
            .unwrap_or(false);

        Ok(Some(InitAnswers {
            components_dir,
            typescript,
            install_extras,
        }))
    }

    /// Create directories and files, then save the config.
    fn write_project(&self, templates: &dyn TemplateSource, answers: &InitAnswers) -> Result<PathBuf> {
        let root = &self.ctx.project_root;
        let components_dir = validate_project_dir(&answers.components_dir)?;

        fs::create_dir_all(root.join(&components_dir).join("ui"))?;

        let utils = root.join(UTILS_TEMPLATE);
        if let Some(parent) = utils.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&utils, templates.read(Path::new(UTILS_TEMPLATE))?)?;

        let mut config = ProjectConfig::initialized_default();
        config.typescript = Some(answers.typescript);
        config.components = Some(ComponentsConfig {
            path: answers.components_dir.clone(),
            prefix: String::new(),
        });
        config.save(root)
    }

    /// Run the command with an explicit installer.
    pub fn run(
        &self,
        ui: &mut dyn UserInterface,
        installer: &mut dyn PackageInstaller,
    ) -> Result<CommandResult> {
        if self.already_initialized()? && !self.args.force {
            ui.warning("Project is already initialized. Use --force to re-initialize.");
            return Ok(CommandResult::failure(1));
        }

        let answers = if self.args.yes {
            InitAnswers::default()
        } else {
            match self.ask(ui)? {
                Some(answers) => answers,
                None => {
                    ui.message("Initialization cancelled");
                    return Ok(CommandResult::success());
                }
            }
        };

        let templates = self.ctx.template_source();
        let registry = self.ctx.registry(templates.as_ref())?;

        let config_path = self.write_project(templates.as_ref(), &answers)?;
        tracing::debug!(path = %config_path.display(), "project initialized");
        if ui.output_mode().shows_details() {
            ui.message(&format!("  created {}/ui", answers.components_dir));
            ui.message(&format!("  created {}", UTILS_TEMPLATE));
            ui.message(&format!("  created {}", crate::config::CONFIG_FILE));
        }

        let init = registry.init_packages();
        let mut packages = init.required_packages.clone();
        if answers.install_extras {
            packages.extend(init.optional_packages.iter().cloned());
        }

        install_with_progress(ui, &packages, self.ctx.no_install, || {
            installer.install(&packages)
        })?;

        if self.args.yes {
            ui.success("Project initialized successfully with default configuration");
        } else {
            ui.success("Project initialized successfully");
        }
        Ok(CommandResult::success())
    }
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut installer = self.ctx.installer();
        self.run(ui, installer.as_mut())
    }
}
