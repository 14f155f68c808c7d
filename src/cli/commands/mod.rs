//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`my-ui init`, `my-ui add`)
//! - Shared global flags through [`CommandContext`]
//! - Tests that drive a command with `MockUI` and a recording installer

pub mod add;
pub mod completions;
pub mod dispatcher;
pub mod display;
pub mod init;
pub mod list;

pub use add::validate_name;
pub use dispatcher::{Command, CommandContext, CommandDispatcher, CommandResult};
