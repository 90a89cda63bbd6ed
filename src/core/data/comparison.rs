use std::fmt;

use super::message::KeyEntry;

/// Whether a key is absent from a locale or only present there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum KeyStatus {
    /// In the baseline, not in the locale.
    Missing,
    /// In the locale, not in the baseline.
    Extraneous,
}

impl fmt::Display for KeyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyStatus::Missing => write!(f, "missing"),
            KeyStatus::Extraneous => write!(f, "extraneous"),
        }
    }
}

/// Key-set difference between the baseline and one locale.
///
/// `missing` entries carry baseline file names, `extraneous` entries carry
/// the locale's own file names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonResult {
    pub missing: Vec<KeyEntry>,
    pub extraneous: Vec<KeyEntry>,
}

impl ComparisonResult {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.extraneous.is_empty()
    }

    /// All entries tagged with their status, missing first.
    pub fn rows(&self) -> impl Iterator<Item = (KeyStatus, &KeyEntry)> {
        self.missing
            .iter()
            .map(|e| (KeyStatus::Missing, e))
            .chain(self.extraneous.iter().map(|e| (KeyStatus::Extraneous, e)))
    }
}

/// Comparison result for a named locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleComparison {
    /// Locale directory name (e.g., "fr").
    pub locale: String,
    pub result: ComparisonResult,
}
