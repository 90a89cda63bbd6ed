use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Minimal CSV writer for audit reports.
///
/// Every field is double-quoted with embedded quotes doubled, records end
/// with `\r\n`. The file is created (or truncated) on open.
pub struct CsvWriter {
    file_path: PathBuf,
    out: BufWriter<File>,
}

impl CsvWriter {
    /// Create the file, creating parent directories as needed.
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let file = File::create(path)
            .with_context(|| format!("Failed to create file: {}", path.display()))?;

        Ok(Self {
            file_path: path.to_path_buf(),
            out: BufWriter::new(file),
        })
    }

    pub fn write_record<I, S>(&mut self, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let line = format_record(fields);
        self.out
            .write_all(line.as_bytes())
            .with_context(|| format!("Failed to write file: {}", self.file_path.display()))
    }

    /// Flush buffered records to disk.
    pub fn finish(mut self) -> Result<()> {
        self.out
            .flush()
            .with_context(|| format!("Failed to write file: {}", self.file_path.display()))
    }
}

/// Render one record, including the trailing `\r\n`.
pub fn format_record<I, S>(fields: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = String::new();
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            line.push(',');
        }
        line.push('"');
        line.push_str(&field.as_ref().replace('"', "\"\""));
        line.push('"');
    }
    line.push_str("\r\n");
    line
}
