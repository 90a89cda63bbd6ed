//! Progress events emitted while an audit runs.
//!
//! The library never prints. Callers pass a [`ProgressSink`]; the CLI renders
//! events to the terminal, tests record them, and [`NoProgress`] drops them.

use std::path::Path;

/// Which CSV report was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    BaselineLabels,
    Comparison,
    UnusedKeys,
}

impl ReportKind {
    /// Output file name inside the output directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            ReportKind::BaselineLabels => "english_labels.csv",
            ReportKind::Comparison => "locale_key_comparison_consolidated.csv",
            ReportKind::UnusedKeys => "unused_keys.csv",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::BaselineLabels => "Baseline labels",
            ReportKind::Comparison => "Comparison CSV",
            ReportKind::UnusedKeys => "Unused keys",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress<'a> {
    /// Baseline directory loaded.
    BaselineLoaded { keys: usize, files: usize },
    /// A locale directory loaded and about to be compared.
    LocaleLoaded {
        locale: &'a str,
        keys: usize,
        files: usize,
    },
    /// Unused-key search started.
    SearchStarted { keys: usize, root: &'a Path },
    /// First occurrence of a baseline key found; the key is used.
    KeyMatched { key: &'a str, path: &'a Path },
    /// A file under the search path could not be read and was skipped.
    FileSkipped { path: &'a Path, reason: &'a str },
    /// A report file was written.
    ReportWritten { kind: ReportKind, path: &'a Path },
}

impl Progress<'_> {
    /// Detail-level events, only shown in verbose mode.
    pub fn is_verbose(&self) -> bool {
        !matches!(self, Progress::ReportWritten { .. })
    }
}

pub trait ProgressSink {
    fn emit(&mut self, event: Progress<'_>);
}

/// Sink that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn emit(&mut self, _event: Progress<'_>) {}
}

impl<F> ProgressSink for F
where
    F: FnMut(Progress<'_>),
{
    fn emit(&mut self, event: Progress<'_>) {
        self(event)
    }
}
