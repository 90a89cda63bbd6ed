use std::path::PathBuf;

use super::super::exit_status::ExitStatus;
use crate::rules::{compare::CompareOutcome, unused::UnusedOutcome};

#[derive(Debug)]
pub enum CommandSummary {
    Compare(CompareOutcome),
    Unused(UnusedOutcome),
    Init(InitSummary),
    /// The command could not start; nothing was written.
    Usage(String),
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    /// False when a config file already existed.
    pub created: bool,
}

/// Result of running a keyaudit command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub status: ExitStatus,
}

impl CommandResult {
    pub fn success(summary: CommandSummary) -> Self {
        Self {
            summary,
            status: ExitStatus::Success,
        }
    }

    pub fn usage_error(message: impl Into<String>) -> Self {
        Self {
            summary: CommandSummary::Usage(message.into()),
            status: ExitStatus::Failure,
        }
    }
}
