//! Terminal output for the CLI.
//!
//! Renders progress events as they happen and a summary once a command
//! finishes. Kept out of the core so keyaudit can be used as a library
//! without printing side effects.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, InitSummary};
use crate::core::progress::{Progress, ProgressSink};
use crate::rules::{compare::CompareOutcome, unused::UnusedOutcome};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

fn plural(count: usize, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 { singular } else { plural }
}

/// Progress sink that writes events to a terminal-like writer.
///
/// Detail events (loaded files, matched keys, skipped files) are only
/// written in verbose mode.
pub struct TerminalProgress<W: Write> {
    writer: W,
    verbose: bool,
}

impl TerminalProgress<io::Stdout> {
    pub fn stdout(verbose: bool) -> Self {
        Self::new(io::stdout(), verbose)
    }
}

impl<W: Write> TerminalProgress<W> {
    pub fn new(writer: W, verbose: bool) -> Self {
        Self { writer, verbose }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ProgressSink for TerminalProgress<W> {
    fn emit(&mut self, event: Progress<'_>) {
        if event.is_verbose() && !self.verbose {
            return;
        }

        let w = &mut self.writer;
        let _ = match event {
            Progress::BaselineLoaded { keys, files } => writeln!(
                w,
                "Loaded {} baseline {} from {} {}",
                keys,
                plural(keys, "key", "keys"),
                files,
                plural(files, "file", "files")
            ),
            Progress::LocaleLoaded {
                locale,
                keys,
                files,
            } => writeln!(
                w,
                "Comparing locale {} ({} {} in {} {})",
                locale.bold(),
                keys,
                plural(keys, "key", "keys"),
                files,
                plural(files, "file", "files")
            ),
            Progress::SearchStarted { keys, root } => writeln!(
                w,
                "Searching for {} {} under {}",
                keys,
                plural(keys, "key", "keys"),
                root.display()
            ),
            Progress::KeyMatched { key, path } => writeln!(
                w,
                "Found key: {} {}",
                key,
                format!("({})", path.display()).dimmed()
            ),
            Progress::FileSkipped { path, reason } => writeln!(
                w,
                "{} skipped {}: {}",
                "warning:".bold().yellow(),
                path.display(),
                reason
            ),
            Progress::ReportWritten { kind, path } => writeln!(
                w,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("{} written to {}", kind.label(), path.display()).green()
            ),
        };
    }
}

/// Print the command summary to stdout, usage problems to stderr.
pub fn print(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Usage(message) => {
            let _ = writeln!(io::stderr().lock(), "{} {}", "error:".bold().red(), message);
        }
        summary => print_summary_to(summary, &mut io::stdout().lock()),
    }
}

/// Print a command summary to a custom writer.
pub fn print_summary_to<W: Write>(summary: &CommandSummary, writer: &mut W) {
    match summary {
        CommandSummary::Compare(outcome) => print_compare_summary(outcome, writer),
        CommandSummary::Unused(outcome) => print_unused_summary(outcome, writer),
        CommandSummary::Init(init) => print_init_summary(init, writer),
        CommandSummary::Usage(message) => {
            let _ = writeln!(writer, "{} {}", "error:".bold().red(), message);
        }
    }
}

fn print_compare_summary<W: Write>(outcome: &CompareOutcome, writer: &mut W) {
    for comparison in &outcome.comparisons {
        let missing = comparison.result.missing.len();
        let extraneous = comparison.result.extraneous.len();
        let _ = writeln!(
            writer,
            "  {}: {} missing, {} extraneous",
            comparison.locale.bold(),
            missing,
            extraneous
        );
    }

    let total = outcome.comparisons.len();
    let out_of_sync = outcome
        .comparisons
        .iter()
        .filter(|c| !c.result.is_clean())
        .count();

    let _ = if out_of_sync == 0 {
        writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "{} {} in sync with {} baseline {}",
                total,
                plural(total, "locale", "locales"),
                outcome.baseline_entries,
                plural(outcome.baseline_entries, "entry", "entries")
            )
            .green()
        )
    } else {
        writeln!(
            writer,
            "{} {} of {} {} out of sync with {} baseline {}",
            FAILURE_MARK.red(),
            out_of_sync,
            total,
            plural(total, "locale", "locales"),
            outcome.baseline_entries,
            plural(outcome.baseline_entries, "entry", "entries")
        )
    };
}

fn print_unused_summary<W: Write>(outcome: &UnusedOutcome, writer: &mut W) {
    let unused = outcome.scan.unused.len();
    let searched = outcome.scan.files_searched;

    let _ = if unused == 0 {
        writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "All {} baseline {} used ({} {} searched)",
                outcome.total_keys,
                plural(outcome.total_keys, "key", "keys"),
                searched,
                plural(searched, "file", "files")
            )
            .green()
        )
    } else {
        writeln!(
            writer,
            "{} {} of {} baseline {} unused ({} {} searched)",
            FAILURE_MARK.red(),
            unused,
            outcome.total_keys,
            plural(outcome.total_keys, "key", "keys"),
            searched,
            plural(searched, "file", "files")
        )
    };
}

fn print_init_summary<W: Write>(init: &InitSummary, writer: &mut W) {
    let _ = if init.created {
        writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", init.path.display()).green()
        )
    } else {
        writeln!(
            writer,
            "{} {} already exists",
            "error:".bold().red(),
            init.path.display()
        )
    };
}
