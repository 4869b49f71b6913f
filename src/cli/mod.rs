//! CLI routing and command dispatch.

use crate::constants;
use crate::models::prompt_options::PromptOptions;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

pub mod ask;
pub mod check_root;
pub mod config;
pub mod confirm;

/// Shared context passed to all command handlers.
pub struct CliContext {
    pub options: PromptOptions,
}

#[derive(Parser, Debug)]
#[command(
    name = "goamet-userutil",
    version,
    about = "Operator prompts and privilege checks for shell scripts"
)]
pub struct Cli {
    /// Prompt config file (TOML with a [prompt] table)
    #[arg(long, global = true, value_name = "PATH", env = constants::CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Text written before the prompt message
    #[arg(long, global = true)]
    pub prefix: Option<String>,

    /// Text written after the prompt message
    #[arg(long, global = true)]
    pub suffix: Option<String>,

    /// Text appended to yes/no questions
    #[arg(long, global = true)]
    pub yes_no_message: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<ExitCode> {
        let mut options = config::resolve(self.config.as_deref())?;
        if let Some(prefix) = self.prefix {
            options.input_prefix = Some(prefix);
        }
        if let Some(suffix) = self.suffix {
            options.input_suffix = Some(suffix);
        }
        if let Some(message) = self.yes_no_message {
            options.yes_no_message = Some(message);
        }

        let ctx = CliContext { options };

        match self.command {
            Commands::Ask(args) => ask::run(&ctx, args),
            Commands::Confirm(args) => confirm::run(&ctx, args),
            Commands::CheckRoot(args) => check_root::run(&ctx, args),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prompt for a line of input and print it
    Ask(ask::AskArgs),
    /// Ask a yes/no question (exit 0 = yes, 1 = no, 2 = invalid answer)
    Confirm(confirm::ConfirmArgs),
    /// Check for root/Administrator rights (exit 0 = yes, 1 = no, 2 = unknown)
    CheckRoot(check_root::CheckRootArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ask_hidden() {
        let cli = Cli::try_parse_from(["goamet-userutil", "ask", "Password", "--hide"]).unwrap();
        match cli.command {
            Commands::Ask(args) => {
                assert_eq!(args.message, "Password");
                assert!(args.hide);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_overrides() {
        let cli = Cli::try_parse_from([
            "goamet-userutil",
            "confirm",
            "Delete?",
            "--prefix",
            "* ",
            "--yes-no-message",
            " (y/n)",
        ])
        .unwrap();
        assert_eq!(cli.prefix.as_deref(), Some("* "));
        assert_eq!(cli.yes_no_message.as_deref(), Some(" (y/n)"));
        assert!(matches!(cli.command, Commands::Confirm(_)));
    }

    #[test]
    fn test_parse_check_root_format() {
        let cli =
            Cli::try_parse_from(["goamet-userutil", "check-root", "--format", "json"]).unwrap();
        match cli.command {
            Commands::CheckRoot(args) => assert_eq!(args.format, "json"),
            other => panic!("unexpected command {:?}", other),
        }
        assert!(
            Cli::try_parse_from(["goamet-userutil", "check-root", "--format", "xml"]).is_err()
        );
    }
}
