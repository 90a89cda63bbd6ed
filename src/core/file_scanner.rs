use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Whether a walked entry should be read as a file.
///
/// Links are not followed during the walk, so a symlink is accepted unless it
/// points at a directory. A dangling link is accepted and fails on read.
pub fn is_file_entry(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && !entry.path().is_dir())
}

/// An entry produced while walking the search tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEntry {
    File(PathBuf),
    /// A path the walk could not access.
    Inaccessible { path: PathBuf, reason: String },
}

/// The set of files searched for key usages.
///
/// Ignore patterns are matched against paths relative to the root, with `/`
/// separators. Literal patterns exclude a path and everything below it.
#[derive(Debug)]
pub struct SearchScope {
    root: PathBuf,
    literal_ignores: Vec<PathBuf>,
    glob_ignores: Vec<Pattern>,
}

impl SearchScope {
    pub fn new(root: impl Into<PathBuf>, ignores: &[String]) -> Result<Self> {
        let root = root.into();

        if !root.exists() {
            bail!(
                "Search path '{}' does not exist.\n\
                 Hint: Check the --search-path argument or 'searchPath' in the config file.",
                root.display()
            );
        }

        let mut literal_ignores = Vec::new();
        let mut glob_ignores = Vec::new();
        for pattern in ignores {
            if is_glob_pattern(pattern) {
                glob_ignores.push(
                    Pattern::new(pattern)
                        .with_context(|| format!("Invalid glob pattern: \"{}\"", pattern))?,
                );
            } else {
                literal_ignores.push(PathBuf::from(pattern.trim_start_matches("./")));
            }
        }

        Ok(Self {
            root,
            literal_ignores,
            glob_ignores,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_ignored(&self, path: &Path) -> bool {
        let Ok(relative) = path.strip_prefix(&self.root) else {
            return false;
        };
        if relative.as_os_str().is_empty() {
            return false;
        }

        if self
            .literal_ignores
            .iter()
            .any(|ignore| relative.starts_with(ignore))
        {
            return true;
        }

        let relative = relative.to_string_lossy().replace('\\', "/");
        self.glob_ignores.iter().any(|p| p.matches(&relative))
    }

    /// Walk every regular file under the root in file-name order.
    pub fn walk(&self) -> impl Iterator<Item = ScanEntry> + '_ {
        WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| !self.is_ignored(entry.path()))
            .filter_map(|entry| match entry {
                Ok(entry) if is_file_entry(&entry) => Some(ScanEntry::File(entry.into_path())),
                Ok(_) => None,
                Err(err) => Some(ScanEntry::Inaccessible {
                    path: err.path().map(Path::to_path_buf).unwrap_or_default(),
                    reason: err.to_string(),
                }),
            })
    }
}
