use std::env;

use anyhow::Result;

use super::super::args::CompareCommand;
use super::{CommandResult, CommandSummary};
use crate::{
    config::load_config,
    core::progress::ProgressSink,
    rules::compare::{CompareOptions, compare_locales},
};

pub fn compare(cmd: CompareCommand, progress: &mut dyn ProgressSink) -> Result<CommandResult> {
    let config = load_config(&env::current_dir()?)?.config;
    let args = &cmd.common;
    let baseline_locale = args
        .baseline_locale
        .as_deref()
        .unwrap_or(&config.baseline_locale);

    let outcome = compare_locales(
        &CompareOptions {
            baseline_path: &args.en_locale_path,
            base_path: &args.base_path,
            output_dir: &args.output_dir,
            baseline_locale,
        },
        progress,
    )?;

    Ok(CommandResult::success(CommandSummary::Compare(outcome)))
}
