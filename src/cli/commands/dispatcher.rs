//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandContext`] for the global flags every command shares
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::install::{PackageInstaller, ShellInstaller, SkipInstaller};
use crate::registry::{load_registry, DirectoryTemplates, EmbeddedTemplates, Registry, TemplateSource};
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Global settings shared by every command.
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    /// Project the command operates on.
    pub project_root: PathBuf,
    /// Template directory from `--templates`; the embedded set otherwise.
    pub templates_dir: Option<PathBuf>,
    /// `--no-install`.
    pub no_install: bool,
}

impl CommandContext {
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            ..Self::default()
        }
    }

    /// Build the context from parsed global flags.
    pub fn from_cli(project_root: &Path, cli: &Cli) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            templates_dir: cli.templates.clone(),
            no_install: cli.no_install,
        }
    }

    /// The template tree commands read from.
    pub fn template_source(&self) -> Box<dyn TemplateSource> {
        match &self.templates_dir {
            Some(dir) => Box::new(DirectoryTemplates::new(dir)),
            None => Box::new(EmbeddedTemplates::new()),
        }
    }

    /// Load the registry manifest from `templates`.
    pub fn registry(&self, templates: &dyn TemplateSource) -> Result<Registry> {
        load_registry(templates)
    }

    /// The installer honouring `--no-install`.
    pub fn installer(&self) -> Box<dyn PackageInstaller> {
        if self.no_install {
            Box::new(SkipInstaller)
        } else {
            Box::new(ShellInstaller::new(&self.project_root))
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = CommandContext::from_cli(&self.project_root, cli);

        match &cli.command {
            Commands::Init(args) => {
                let cmd = super::init::InitCommand::new(ctx, args.clone());
                cmd.execute(ui)
            }
            Commands::Add(args) => {
                let cmd = super::add::AddCommand::new(ctx, args.clone());
                cmd.execute(ui)
            }
            Commands::List(args) => {
                let cmd = super::list::ListCommand::new(ctx, args.clone());
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}
