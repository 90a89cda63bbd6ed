//! Locale key comparison rule.
//!
//! Compares the baseline locale's key set against every other locale
//! directory and reports missing and extraneous keys.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

use crate::core::{
    ComparisonResult, LocaleComparison, MessageSet,
    parsers::json::load_messages,
    progress::{Progress, ProgressSink, ReportKind},
    reports::{write_baseline_labels, write_comparison},
};

pub struct CompareOptions<'a> {
    /// Directory holding the baseline locale's JSON files.
    pub baseline_path: &'a Path,
    /// Directory holding one subdirectory per locale.
    pub base_path: &'a Path,
    pub output_dir: &'a Path,
    /// Name of the baseline subdirectory, skipped during locale discovery.
    pub baseline_locale: &'a str,
}

#[derive(Debug)]
pub struct CompareOutcome {
    pub baseline_entries: usize,
    pub baseline_files: usize,
    pub comparisons: Vec<LocaleComparison>,
    pub labels_report: PathBuf,
    pub comparison_report: PathBuf,
}

/// Compare the key sets of two locales.
///
/// Membership uses keys only. Missing keys are listed once per baseline file
/// that defines them; extraneous keys once per locale file that defines them.
pub fn compare_messages(baseline: &MessageSet, locale: &MessageSet) -> ComparisonResult {
    let baseline_keys = baseline.key_set();
    let locale_keys = locale.key_set();

    let missing = baseline
        .iter()
        .filter(|e| !locale_keys.contains(e.key()))
        .map(|e| e.entry.clone())
        .collect();

    let extraneous = locale
        .iter()
        .filter(|e| !baseline_keys.contains(e.key()))
        .map(|e| e.entry.clone())
        .collect();

    ComparisonResult {
        missing,
        extraneous,
    }
}

/// Every immediate subdirectory of `base_path` except `baseline_locale`,
/// sorted by name.
pub fn discover_locales(base_path: &Path, baseline_locale: &str) -> Result<Vec<(String, PathBuf)>> {
    if !base_path.is_dir() {
        bail!(
            "Locales base path '{}' is not a directory.\n\
             Hint: Check the --base-path argument.",
            base_path.display()
        );
    }

    let mut locales = Vec::new();
    let entries = fs::read_dir(base_path)
        .with_context(|| format!("Failed to read directory: {}", base_path.display()))?;
    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read directory: {}", base_path.display()))?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        if path.is_dir() && name != baseline_locale {
            locales.push((name, path));
        }
    }

    locales.sort();
    Ok(locales)
}

/// Run the full comparison and write both reports.
///
/// The baseline listing is written before any locale is loaded.
pub fn compare_locales(
    options: &CompareOptions,
    progress: &mut dyn ProgressSink,
) -> Result<CompareOutcome> {
    let (baseline, baseline_files) = load_messages(options.baseline_path)?;
    progress.emit(Progress::BaselineLoaded {
        keys: baseline.len(),
        files: baseline_files,
    });

    let labels_report = options
        .output_dir
        .join(ReportKind::BaselineLabels.file_name());
    write_baseline_labels(&labels_report, &baseline)?;
    progress.emit(Progress::ReportWritten {
        kind: ReportKind::BaselineLabels,
        path: &labels_report,
    });

    let mut comparisons = Vec::new();
    for (locale, path) in discover_locales(options.base_path, options.baseline_locale)? {
        let (messages, files) = load_messages(&path)?;
        progress.emit(Progress::LocaleLoaded {
            locale: &locale,
            keys: messages.len(),
            files,
        });
        let result = compare_messages(&baseline, &messages);
        comparisons.push(LocaleComparison { locale, result });
    }

    let comparison_report = options.output_dir.join(ReportKind::Comparison.file_name());
    write_comparison(&comparison_report, &comparisons)?;
    progress.emit(Progress::ReportWritten {
        kind: ReportKind::Comparison,
        path: &comparison_report,
    });

    Ok(CompareOutcome {
        baseline_entries: baseline.len(),
        baseline_files,
        comparisons,
        labels_report,
        comparison_report,
    })
}
