//! Unused translation key detection rule.
//!
//! A baseline key counts as used when its literal text occurs anywhere in any
//! file under the search path. This is a plain substring test: `greeting` is
//! used by a file mentioning `greeting_label`, and keys assembled at runtime
//! are never seen.

use std::{
    collections::BTreeSet,
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::Result;

use crate::core::{
    file_scanner::{ScanEntry, SearchScope},
    parsers::json::{find_json_files, load_keys},
    progress::{Progress, ProgressSink, ReportKind},
    reports::write_unused_keys,
};

pub struct UnusedOptions<'a> {
    /// Directory holding the baseline locale's JSON files.
    pub baseline_path: &'a Path,
    /// Root of the tree searched for key usages.
    pub search_path: &'a Path,
    pub output_dir: &'a Path,
    /// Paths excluded from the search (literal prefixes or globs).
    pub ignores: &'a [String],
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct UnusedScan {
    /// Keys with no occurrence, in key order.
    pub unused: Vec<String>,
    /// Files read and searched.
    pub files_searched: usize,
    /// Files or directories that could not be read.
    pub files_skipped: usize,
}

#[derive(Debug)]
pub struct UnusedOutcome {
    pub total_keys: usize,
    pub scan: UnusedScan,
    pub report: PathBuf,
}

/// Read a file as text, dropping byte sequences that are not valid UTF-8.
pub fn read_lossy(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    Ok(text)
}

/// Search the scope for every key and return the ones never found.
///
/// Each file is read once and checked against the keys not yet matched.
/// The walk stops as soon as every key has been seen. Unreadable files are
/// skipped.
pub fn find_unused_keys(
    keys: &BTreeSet<String>,
    scope: &SearchScope,
    progress: &mut dyn ProgressSink,
) -> UnusedScan {
    progress.emit(Progress::SearchStarted {
        keys: keys.len(),
        root: scope.root(),
    });

    let mut pending: Vec<&str> = keys.iter().map(String::as_str).collect();
    let mut scan = UnusedScan::default();

    for entry in scope.walk() {
        if pending.is_empty() {
            break;
        }
        match entry {
            ScanEntry::File(path) => match read_lossy(&path) {
                Ok(content) => {
                    scan.files_searched += 1;
                    pending.retain(|key| {
                        if content.contains(key) {
                            progress.emit(Progress::KeyMatched { key: *key, path: &path });
                            false
                        } else {
                            true
                        }
                    });
                }
                Err(err) => {
                    scan.files_skipped += 1;
                    progress.emit(Progress::FileSkipped {
                        path: &path,
                        reason: &err.to_string(),
                    });
                }
            },
            ScanEntry::Inaccessible { path, reason } => {
                scan.files_skipped += 1;
                progress.emit(Progress::FileSkipped {
                    path: &path,
                    reason: &reason,
                });
            }
        }
    }

    scan.unused = pending.into_iter().map(str::to_string).collect();
    scan
}

/// Load the baseline keys, search for each one and write the unused-keys report.
pub fn audit_unused_keys(
    options: &UnusedOptions,
    progress: &mut dyn ProgressSink,
) -> Result<UnusedOutcome> {
    let files = find_json_files(options.baseline_path)?;
    let keys = load_keys(&files)?;
    progress.emit(Progress::BaselineLoaded {
        keys: keys.len(),
        files: files.len(),
    });

    let scope = SearchScope::new(options.search_path, options.ignores)?;
    let scan = find_unused_keys(&keys, &scope, progress);

    let report = options.output_dir.join(ReportKind::UnusedKeys.file_name());
    write_unused_keys(&report, &scan.unused)?;
    progress.emit(Progress::ReportWritten {
        kind: ReportKind::UnusedKeys,
        path: &report,
    });

    Ok(UnusedOutcome {
        total_keys: keys.len(),
        scan,
        report,
    })
}
