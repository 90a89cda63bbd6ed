use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, compare::compare, init::init, unused::unused},
};
use crate::core::progress::ProgressSink;

/// Dispatch to the command handler for the parsed arguments.
pub fn run(
    Arguments { command }: Arguments,
    progress: &mut dyn ProgressSink,
) -> Result<CommandResult> {
    match command {
        Some(Command::Compare(cmd)) => compare(cmd, progress),
        Some(Command::Unused(cmd)) => unused(cmd, progress),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
