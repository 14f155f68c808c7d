//! Shell command execution.

pub mod command;
pub mod platform;

pub use command::{execute, quote_arg, CommandOptions, CommandResult};
pub use platform::{is_ci, shell_executable, ShellType};
