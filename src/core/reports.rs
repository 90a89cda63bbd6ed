//! CSV report emitters.
//!
//! Each emitter writes a header row, then one row per item in the order
//! given. Existing files are overwritten.

use std::path::Path;

use anyhow::Result;

use crate::core::{LocaleComparison, MessageSet};
use crate::csv_writer::CsvWriter;

pub const BASELINE_LABELS_HEADER: [&str; 3] = ["label_key", "value", "json_file"];
pub const COMPARISON_HEADER: [&str; 4] = ["locale", "status", "label_key", "json_file"];
pub const UNUSED_KEYS_HEADER: [&str; 1] = ["unused_key"];

/// Every baseline `(key, value, file)` triple.
pub fn write_baseline_labels(path: &Path, baseline: &MessageSet) -> Result<()> {
    let mut writer = CsvWriter::create(path)?;
    writer.write_record(BASELINE_LABELS_HEADER)?;
    for entry in baseline {
        writer.write_record([entry.key(), entry.value.as_str(), entry.source_file()])?;
    }
    writer.finish()
}

/// One row per missing or extraneous key, grouped by locale.
pub fn write_comparison(path: &Path, comparisons: &[LocaleComparison]) -> Result<()> {
    let mut writer = CsvWriter::create(path)?;
    writer.write_record(COMPARISON_HEADER)?;
    for comparison in comparisons {
        for (status, entry) in comparison.result.rows() {
            let status = status.to_string();
            writer.write_record([
                comparison.locale.as_str(),
                status.as_str(),
                entry.key.as_str(),
                entry.source_file.as_str(),
            ])?;
        }
    }
    writer.finish()
}

pub fn write_unused_keys<S: AsRef<str>>(path: &Path, unused_keys: &[S]) -> Result<()> {
    let mut writer = CsvWriter::create(path)?;
    writer.write_record(UNUSED_KEYS_HEADER)?;
    for key in unused_keys {
        writer.write_record([key.as_ref()])?;
    }
    writer.finish()
}
