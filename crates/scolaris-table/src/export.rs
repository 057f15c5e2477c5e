//! CSV export payloads.

use serde::{Deserialize, Serialize};

/// MIME type a host should attach when offering the payload as a download.
pub const CSV_MIME: &str = "text/csv;charset=utf-8";

/// A ready-to-download CSV document.
///
/// Covers the full filtered and sorted result set, never just the visible
/// page. The header row is emitted unquoted; every data cell is quoted
/// with embedded quotes doubled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvExport {
    /// Suggested download filename, `.csv` extension included.
    pub filename: String,
    /// Full document text, rows joined by `\n`.
    pub content: String,
}

impl CsvExport {
    /// Number of data rows (lines beyond the header).
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.content.lines().count().saturating_sub(1)
    }
}

/// Quote one data cell, doubling embedded quotes.
pub(crate) fn escape_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
