use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde_json::Value;
use walkdir::WalkDir;

use crate::core::{LocaleFile, MessageSet, file_scanner::is_file_entry};

/// Recursively collect every `*.json` file under `dir`.
///
/// Entries are visited in file-name order so repeated runs see the same
/// sequence regardless of the filesystem's listing order.
pub fn find_json_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();

    if !dir.exists() {
        bail!(
            "Locale directory '{}' does not exist.\n\
             Hint: Check the --en-locale-path and --base-path arguments.",
            dir.display()
        );
    }

    if !dir.is_dir() {
        bail!("'{}' is not a directory.", dir.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            // Unreadable subdirectories are skipped; only the root must be readable.
            Err(err) if err.depth() > 0 => continue,
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to walk directory: {}", dir.display()));
            }
        };
        if is_file_entry(&entry) && entry.file_name().to_string_lossy().ends_with(".json") {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Parse one locale file. The root must be a JSON object.
pub fn load_json(path: impl AsRef<Path>) -> Result<LocaleFile> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {}", path.display()))?;

    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {}", path.display()))?;

    let Value::Object(messages) = value else {
        bail!(
            "Failed to parse JSON file: {}: root must be an object",
            path.display()
        );
    };

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(LocaleFile {
        path: path.to_path_buf(),
        file_name,
        messages,
    })
}

/// Union of the top-level keys of all given files.
pub fn load_keys<P: AsRef<Path>>(paths: &[P]) -> Result<BTreeSet<String>> {
    let mut keys = BTreeSet::new();
    for path in paths {
        let file = load_json(path)?;
        keys.extend(file.messages.into_iter().map(|(key, _)| key));
    }
    Ok(keys)
}

/// Load and merge every JSON file of one locale directory.
///
/// Returns the merged messages and the number of files read.
pub fn load_messages(dir: impl AsRef<Path>) -> Result<(MessageSet, usize)> {
    let files = find_json_files(dir)?;
    let mut messages = MessageSet::new();
    for path in &files {
        messages.extend_from_file(&load_json(path)?);
    }
    Ok((messages, files.len()))
}
