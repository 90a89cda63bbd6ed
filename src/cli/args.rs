//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `compare`: Compare every locale's keys against the baseline locale
//! - `unused`: Find baseline keys that never appear in the source tree
//! - `init`: Initialize keyaudit configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

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

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Compare(cmd)) => cmd.common.verbose,
            Some(Command::Unused(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by the audit commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Path to the baseline (English) locale directory
    #[arg(long)]
    pub en_locale_path: PathBuf,

    /// Directory containing one subdirectory per locale
    #[arg(long)]
    pub base_path: PathBuf,

    /// Directory to write the CSV reports to
    #[arg(long)]
    pub output_dir: PathBuf,

    /// Name of the baseline locale directory (overrides config file)
    #[arg(long)]
    pub baseline_locale: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CompareCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct UnusedCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Source tree to search for key usages (required unless set in config file)
    #[arg(long)]
    pub search_path: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compare locale JSON keys against the baseline locale
    Compare(CompareCommand),
    /// Find baseline keys that do not appear anywhere under the search path
    Unused(UnusedCommand),
    /// Initialize a new .keyauditrc.json configuration file
    Init,
}
