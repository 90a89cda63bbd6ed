use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

use super::super::exit_status::ExitStatus;
use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init() -> Result<CommandResult> {
    let path = PathBuf::from(CONFIG_FILE_NAME);

    if path.exists() {
        return Ok(CommandResult {
            summary: CommandSummary::Init(InitSummary {
                path,
                created: false,
            }),
            status: ExitStatus::Failure,
        });
    }

    fs::write(&path, format!("{}\n", default_config_json()?))
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(CommandResult::success(CommandSummary::Init(InitSummary {
        path,
        created: true,
    })))
}
