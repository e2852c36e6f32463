//! Plain-text report of outdated dependencies
//!
//! Layout per category:
//!
//! ```text
//! Category: direct main
//! Package                       Local Version       Latest Version
//! ----------------------------------------------------------------------
//! http                          1.1.0               1.2.0
//!
//! ```

use crate::domain::{Category, OutdatedEntry};
use crate::error::ReportError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const NAME_WIDTH: usize = 30;
const VERSION_WIDTH: usize = 20;
const TABLE_WIDTH: usize = NAME_WIDTH + VERSION_WIDTH * 2;

/// Format one fixed-width table row
pub fn format_row(name: &str, local: &str, latest: &str) -> String {
    format!(
        "{:<name_w$}{:<ver_w$}{}",
        name,
        local,
        latest,
        name_w = NAME_WIDTH,
        ver_w = VERSION_WIDTH
    )
}

/// Writes report sections to any `Write` target
pub struct ReportWriter<W: Write> {
    writer: W,
    path: PathBuf,
    rows_in_section: usize,
}

impl ReportWriter<BufWriter<File>> {
    /// Create (or truncate) the report file
    pub fn create(path: &Path) -> Result<Self, ReportError> {
        let file = File::create(path).map_err(|e| ReportError::create(path, e))?;
        Ok(Self::new(BufWriter::new(file), path))
    }
}

impl<W: Write> ReportWriter<W> {
    /// Wrap an existing writer; `path` is only used in error messages
    pub fn new(writer: W, path: impl Into<PathBuf>) -> Self {
        Self {
            writer,
            path: path.into(),
            rows_in_section: 0,
        }
    }

    /// Write the header, column titles and separator for a category
    pub fn begin_section(&mut self, category: Category) -> Result<(), ReportError> {
        self.rows_in_section = 0;
        let header = format!(
            "Category: {}\n{}\n{}\n",
            category,
            format_row("Package", "Local Version", "Latest Version"),
            "-".repeat(TABLE_WIDTH)
        );
        self.write_str(&header)
    }

    /// Write one outdated entry
    pub fn write_row(&mut self, entry: &OutdatedEntry) -> Result<(), ReportError> {
        self.rows_in_section += 1;
        let row = format_row(&entry.name, &entry.local_version, &entry.latest_version);
        self.write_str(&row)?;
        self.write_str("\n")
    }

    /// Close the section with a blank line and flush it to disk.
    ///
    /// Returns the number of rows written in the section.
    pub fn end_section(&mut self) -> Result<usize, ReportError> {
        self.write_str("\n")?;
        self.writer
            .flush()
            .map_err(|e| ReportError::write(&self.path, e))?;
        Ok(self.rows_in_section)
    }

    /// Consume the writer, returning the underlying target
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_str(&mut self, s: &str) -> Result<(), ReportError> {
        self.writer
            .write_all(s.as_bytes())
            .map_err(|e| ReportError::write(&self.path, e))
    }
}
