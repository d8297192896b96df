//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Check mock responses against the translation bundle
//! - `init`: Initialize mocklint configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use super::commands::check::CheckRule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all analysis commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root directory, where the config file is looked up
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Mock files directory (overrides config file)
    #[arg(long)]
    pub mocks_root: Option<PathBuf>,

    /// Translation bundle, .json or .properties (overrides config file)
    #[arg(long, env = "MOCKLINT_BUNDLE")]
    pub bundle: Option<PathBuf>,

    /// Bundle name used in messages (overrides config file)
    #[arg(long)]
    pub bundle_name: Option<String>,

    /// i18n key allowed to be missing from the bundle, added to `ignoreKeys`
    /// (can be repeated)
    #[arg(long = "ignore-key", value_name = "KEY")]
    pub ignore_keys: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check API mocks for hard-coded messages and keys missing from the bundle
    Check(CheckCommand),
    /// Initialize a new .mocklintrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
