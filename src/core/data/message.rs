use std::{
    collections::{HashMap, HashSet},
    fmt,
    path::PathBuf,
};

use serde_json::{Map, Value};

/// A translation key together with the base name of the file it came from.
///
/// Keys are unique within one file, but the same key may appear in several
/// files of a locale. `KeyEntry` keeps those occurrences apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyEntry {
    /// The label key (e.g., "settings.title").
    pub key: String,
    /// Base name of the JSON file (e.g., "common.json").
    pub source_file: String,
}

impl KeyEntry {
    pub fn new(key: impl Into<String>, source_file: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            source_file: source_file.into(),
        }
    }
}

impl fmt::Display for KeyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.key, self.source_file)
    }
}

/// One parsed locale JSON document.
#[derive(Debug, Clone)]
pub struct LocaleFile {
    /// Full path the file was read from.
    pub path: PathBuf,
    /// Base name of the file, used as provenance in reports.
    pub file_name: String,
    /// Top-level key/value pairs in document order.
    pub messages: Map<String, Value>,
}

impl LocaleFile {
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.messages.keys()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// A key/value pair with provenance, as merged into a [`MessageSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEntry {
    pub entry: KeyEntry,
    /// String values verbatim, anything else as compact JSON text.
    pub value: String,
}

impl MessageEntry {
    pub fn key(&self) -> &str {
        &self.entry.key
    }

    pub fn source_file(&self) -> &str {
        &self.entry.source_file
    }
}

/// Every key of one locale directory, merged across its JSON files.
///
/// Iteration follows insertion order. Re-inserting an existing
/// `(key, source_file)` pair keeps its position and replaces the value.
#[derive(Debug, Clone, Default)]
pub struct MessageSet {
    entries: Vec<MessageEntry>,
    positions: HashMap<KeyEntry, usize>,
}

impl MessageSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: KeyEntry, value: impl Into<String>) {
        let value = value.into();
        match self.positions.get(&entry) {
            Some(&index) => self.entries[index].value = value,
            None => {
                self.positions.insert(entry.clone(), self.entries.len());
                self.entries.push(MessageEntry { entry, value });
            }
        }
    }

    /// Merge all top-level pairs of a parsed file.
    pub fn extend_from_file(&mut self, file: &LocaleFile) {
        for (key, value) in &file.messages {
            self.insert(KeyEntry::new(key, &file.file_name), render_value(value));
        }
    }

    pub fn entries(&self) -> &[MessageEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MessageEntry> {
        self.entries.iter()
    }

    /// Distinct keys, file names ignored.
    pub fn key_set(&self) -> HashSet<&str> {
        self.entries.iter().map(MessageEntry::key).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a MessageSet {
    type Item = &'a MessageEntry;
    type IntoIter = std::slice::Iter<'a, MessageEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Render a JSON value for reports.
///
/// Nested values are opaque to the audit, so they are written as JSON text.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
