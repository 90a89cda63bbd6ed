use std::{env, path::PathBuf};

use anyhow::Result;

use super::super::args::UnusedCommand;
use super::{CommandResult, CommandSummary};
use crate::{
    config::load_config,
    core::progress::ProgressSink,
    rules::unused::{UnusedOptions, audit_unused_keys},
};

/// `--base-path` is accepted for symmetry with `compare` but not used here.
pub fn unused(cmd: UnusedCommand, progress: &mut dyn ProgressSink) -> Result<CommandResult> {
    let config = load_config(&env::current_dir()?)?.config;

    let Some(search_path) = cmd
        .search_path
        .or_else(|| config.search_path.as_ref().map(PathBuf::from))
    else {
        return Ok(CommandResult::usage_error(
            "--search-path is required for 'unused' mode.",
        ));
    };

    let outcome = audit_unused_keys(
        &UnusedOptions {
            baseline_path: &cmd.common.en_locale_path,
            search_path: &search_path,
            output_dir: &cmd.common.output_dir,
            ignores: &config.ignores,
        },
        progress,
    )?;

    Ok(CommandResult::success(CommandSummary::Unused(outcome)))
}
