//! Column descriptors and cell values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A record presentable in a table. Identity is stable for the record's
/// lifetime; the engine never mutates records.
pub trait TableRecord {
    /// Unique, stable identifier.
    fn id(&self) -> &str;
}

/// A projected cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Text value
    Text(String),
    /// Numeric value
    Number(f64),
    /// Boolean value
    Bool(bool),
    /// Empty cell
    Empty,
}

impl CellValue {
    /// Display text for the cell; also the value searched, sorted and
    /// exported.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => format!("{n}"),
            Self::Bool(b) => if *b { "Oui" } else { "Non" }.to_string(),
            Self::Empty => String::new(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<u64> for CellValue {
    fn from(n: u64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

type Extractor<R> = Box<dyn Fn(&R) -> CellValue + Send + Sync>;

/// Describes one presentable facet of a record collection.
///
/// The extractor is the canonical accessor for the column: sorting,
/// searching and CSV export all read through it. A visual layer may fuse
/// several fields into one cell, but the extractor designates the one value
/// the engine reasons about.
pub struct Column<R> {
    key: String,
    header: String,
    sortable: bool,
    extract: Extractor<R>,
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .finish()
    }
}

impl<R> Column<R> {
    /// Create a new column.
    #[must_use]
    pub fn new<F, V>(key: impl Into<String>, header: impl Into<String>, extract: F) -> Self
    where
        F: Fn(&R) -> V + Send + Sync + 'static,
        V: Into<CellValue>,
    {
        Self {
            key: key.into(),
            header: header.into(),
            sortable: false,
            extract: Box::new(move |record| extract(record).into()),
        }
    }

    /// Make the column eligible as a sort key.
    #[must_use]
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Column key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Display header.
    #[must_use]
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Whether the column may be sorted.
    #[must_use]
    pub const fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// Extract this column's value from a record.
    #[must_use]
    pub fn value(&self, record: &R) -> CellValue {
        (self.extract)(record)
    }
}

/// Rejected table configuration. Raised at construction, never at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableConfigError {
    /// No columns were supplied.
    NoColumns,
    /// Two columns share a key.
    DuplicateKey(String),
    /// The search key names no column.
    UnknownSearchKey(String),
    /// Page size of zero.
    ZeroPageSize,
}

impl fmt::Display for TableConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoColumns => write!(f, "table requires at least one column"),
            Self::DuplicateKey(key) => write!(f, "duplicate column key: {key}"),
            Self::UnknownSearchKey(key) => write!(f, "search key matches no column: {key}"),
            Self::ZeroPageSize => write!(f, "page size must be at least 1"),
        }
    }
}

impl std::error::Error for TableConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        id: String,
        name: String,
        amount: u64,
    }

    impl TableRecord for Item {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn item() -> Item {
        Item {
            id: "p-1".into(),
            name: "Tranche 1".into(),
            amount: 25_000,
        }
    }

    #[test]
    fn test_cell_value_display() {
        assert_eq!(CellValue::Text("Diallo".into()).display(), "Diallo");
        assert_eq!(CellValue::Number(42.5).display(), "42.5");
        assert_eq!(CellValue::Bool(true).display(), "Oui");
        assert_eq!(CellValue::Bool(false).display(), "Non");
        assert_eq!(CellValue::Empty.display(), "");
    }

    #[test]
    fn test_cell_value_from() {
        assert_eq!(CellValue::from("x"), CellValue::Text("x".into()));
        assert_eq!(CellValue::from(3u64), CellValue::Number(3.0));
        assert_eq!(CellValue::from(true), CellValue::Bool(true));
    }

    #[test]
    fn test_column_extracts_through_accessor() {
        let col = Column::new("name", "Nom", |item: &Item| item.name.clone());
        assert_eq!(col.value(&item()).display(), "Tranche 1");
        assert_eq!(col.key(), "name");
        assert_eq!(col.header(), "Nom");
        assert!(!col.is_sortable());
    }

    #[test]
    fn test_column_sortable_builder() {
        let col = Column::new("amount", "Montant", |item: &Item| item.amount).sortable();
        assert!(col.is_sortable());
        assert_eq!(col.value(&item()), CellValue::Number(25_000.0));
    }

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            TableConfigError::DuplicateKey("name".into()).to_string(),
            "duplicate column key: name"
        );
        assert_eq!(
            TableConfigError::UnknownSearchKey("ghost".into()).to_string(),
            "search key matches no column: ghost"
        );
    }
}
