//! Shell completions generation.
//!
//! `my-ui completions <shell>` prints a completion script to stdout.

use std::io::Write;

use clap::CommandFactory;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Binary name the scripts complete.
const BIN_NAME: &str = "my-ui";

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }

    /// Write the completion script to `out`.
    pub fn render(&self, out: &mut dyn Write) {
        let mut cmd = Cli::command();
        clap_complete::generate(self.args.shell, &mut cmd, BIN_NAME, out);
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.render(&mut std::io::stdout());
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap_complete::Shell;

    fn script(shell: Shell) -> String {
        let mut buf = Vec::new();
        CompletionsCommand::new(CompletionsArgs { shell }).render(&mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn bash_script_covers_subcommands() {
        let output = script(Shell::Bash);
        assert!(output.contains("my-ui"));
        assert!(output.contains("complete"));
        assert!(output.contains("add"));
        assert!(output.contains("layout"));
    }

    #[test]
    fn zsh_script_includes_global_flags() {
        let output = script(Shell::Zsh);
        assert!(output.contains("--no-install"));
        assert!(output.contains("--templates"));
    }

    #[test]
    fn fish_script_names_binary() {
        assert!(script(Shell::Fish).contains("my-ui"));
    }
}
