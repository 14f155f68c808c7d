//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// my-ui - Add UI components and page layouts to your project.
#[derive(Debug, Parser)]
#[command(name = "my-ui")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Read templates from this directory instead of the built-in set
    #[arg(long, global = true, value_name = "DIR", env = "MYUI_TEMPLATES")]
    pub templates: Option<PathBuf>,

    /// Do not install package dependencies
    #[arg(long, global = true)]
    pub no_install: bool,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Set up the project for my-ui
    Init(InitArgs),

    /// Add a component or layout to the project
    Add(AddArgs),

    /// List available components and layouts
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InitArgs {
    /// Accept all defaults without prompting
    #[arg(short, long)]
    pub yes: bool,

    /// Re-initialize a project that is already initialized
    #[arg(long)]
    pub force: bool,
}

/// What `add` adds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AddType {
    Components,
    Layout,
}

/// Arguments for the `add` command.
#[derive(Debug, Clone, Default, clap::Args)]
#[command(args_conflicts_with_subcommands = true)]
pub struct AddArgs {
    /// Type of item to add (prompted when omitted)
    #[arg(short = 't', long = "type", value_enum)]
    pub add_type: Option<AddType>,

    /// Skip confirmation prompts
    #[arg(short, long)]
    pub yes: bool,

    /// Overwrite existing files
    #[arg(short, long)]
    pub overwrite: bool,

    #[command(subcommand)]
    pub target: Option<AddTarget>,
}

/// Direct `add` targets.
#[derive(Debug, Clone, Subcommand)]
pub enum AddTarget {
    /// Add a component by name
    Components(AddComponentArgs),

    /// Add a layout by name
    Layout(AddLayoutArgs),
}

/// Arguments for `add components`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct AddComponentArgs {
    /// Component name
    pub name: String,

    /// Skip confirmation prompts
    #[arg(short, long)]
    pub yes: bool,

    /// Overwrite existing files
    #[arg(short, long)]
    pub overwrite: bool,
}

/// Arguments for `add layout`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct AddLayoutArgs {
    /// Layout name
    pub name: String,

    /// Provider to use (prompted when the layout has several)
    #[arg(long)]
    pub provider: Option<String>,

    /// Sub-path inside the app directory (defaults to the layout name)
    #[arg(long)]
    pub path: Option<String>,

    /// Skip confirmation prompts
    #[arg(short, long)]
    pub yes: bool,

    /// Overwrite existing files
    #[arg(short, long)]
    pub overwrite: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// List only components
    #[arg(long, conflicts_with = "layouts_only")]
    pub components_only: bool,

    /// List only layouts
    #[arg(long)]
    pub layouts_only: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
