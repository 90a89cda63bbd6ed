use anyhow::Result;

pub mod args;
pub mod commands;
mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

use report::TerminalProgress;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let mut progress = TerminalProgress::stdout(verbose);
    let result = run::run(args, &mut progress)?;
    report::print(&result);

    Ok(result.status)
}
