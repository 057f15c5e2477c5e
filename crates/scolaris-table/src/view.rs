//! The table view engine.
//!
//! A [`TableView`] owns an immutable snapshot of records plus per-instance
//! view state (search query, sort, page). Every operation is synchronous
//! and total; [`TableView::render`] is a pure function of the current
//! state.

use crate::column::{CellValue, Column, TableConfigError, TableRecord};
use crate::export::{escape_field, CsvExport};
use scolaris_core::{compare_fr, ITEMS_PER_PAGE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sort direction for a sorted column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// One page of rendered output. Borrowed from the view; rendering never
/// mutates.
#[derive(Debug)]
pub struct TableSnapshot<'a, R> {
    /// Records visible on the current page, in display order.
    pub rows: Vec<&'a R>,
    /// Column headers, in column order.
    pub headers: Vec<&'a str>,
    /// Pagination summary for the toolbar.
    pub pagination: PageSummary,
    /// Currently sorted column, if any.
    pub sort_key: Option<&'a str>,
    /// Direction of the current sort.
    pub sort_direction: Option<SortDirection>,
}

/// `start – end of total`, 1-based; `start` is 0 when there are no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSummary {
    pub page: usize,
    pub total_pages: usize,
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

/// Builder for [`TableView`]; validates the column configuration eagerly.
pub struct TableViewBuilder<R> {
    rows: Vec<R>,
    columns: Vec<Column<R>>,
    search_key: Option<String>,
    export_filename: Option<String>,
    page_size: usize,
}

impl<R: TableRecord> TableViewBuilder<R> {
    fn new(rows: Vec<R>) -> Self {
        Self {
            rows,
            columns: Vec::new(),
            search_key: None,
            export_filename: None,
            page_size: ITEMS_PER_PAGE,
        }
    }

    /// Add a column.
    #[must_use]
    pub fn column(mut self, column: Column<R>) -> Self {
        self.columns.push(column);
        self
    }

    /// Add multiple columns.
    #[must_use]
    pub fn columns(mut self, columns: impl IntoIterator<Item = Column<R>>) -> Self {
        self.columns.extend(columns);
        self
    }

    /// Designate the column whose value the search box filters on.
    #[must_use]
    pub fn search_key(mut self, key: impl Into<String>) -> Self {
        self.search_key = Some(key.into());
        self
    }

    /// Enable CSV export under `<filename>.csv`.
    #[must_use]
    pub fn exportable(mut self, filename: impl Into<String>) -> Self {
        self.export_filename = Some(filename.into());
        self
    }

    /// Override the page size. Fixed for the view's lifetime.
    #[must_use]
    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = size;
        self
    }

    /// Validate the configuration and build the view.
    pub fn build(self) -> Result<TableView<R>, TableConfigError> {
        if self.columns.is_empty() {
            return Err(TableConfigError::NoColumns);
        }
        if self.page_size == 0 {
            return Err(TableConfigError::ZeroPageSize);
        }
        for (i, col) in self.columns.iter().enumerate() {
            if self.columns[..i].iter().any(|c| c.key() == col.key()) {
                return Err(TableConfigError::DuplicateKey(col.key().to_string()));
            }
        }
        if let Some(key) = &self.search_key {
            if !self.columns.iter().any(|c| c.key() == key) {
                return Err(TableConfigError::UnknownSearchKey(key.clone()));
            }
        }
        Ok(TableView {
            rows: self.rows,
            columns: self.columns,
            search_key: self.search_key,
            export_filename: self.export_filename,
            page_size: self.page_size,
            search_query: String::new(),
            page: 1,
            sort: None,
        })
    }
}

/// Searched, sorted, paginated, exportable view over a record collection.
pub struct TableView<R> {
    rows: Vec<R>,
    columns: Vec<Column<R>>,
    search_key: Option<String>,
    export_filename: Option<String>,
    page_size: usize,
    search_query: String,
    page: usize,
    sort: Option<(String, SortDirection)>,
}

impl<R> fmt::Debug for TableView<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableView")
            .field("rows", &self.rows.len())
            .field("columns", &self.columns)
            .field("search_query", &self.search_query)
            .field("page", &self.page)
            .field("sort", &self.sort)
            .finish()
    }
}

impl<R: TableRecord> TableView<R> {
    /// Start building a view over a record snapshot.
    #[must_use]
    pub fn builder(rows: Vec<R>) -> TableViewBuilder<R> {
        TableViewBuilder::new(rows)
    }

    /// Replace the search query and jump back to page 1.
    ///
    /// A record is retained iff the search column's value contains the
    /// query case-insensitively. When no search key is configured this is
    /// a deliberate no-op filter (all records retained); multi-field
    /// search is out of contract.
    pub fn set_search_query(&mut self, query: &str) {
        self.search_query = query.to_string();
        self.page = 1;
    }

    /// Cycle the sort state for a column and jump back to page 1.
    ///
    /// Ignored unless the key names a sortable column. Repeated requests
    /// on the same column cycle ascending → descending → original order;
    /// a different column starts again at ascending.
    pub fn request_sort(&mut self, key: &str) {
        let sortable = self
            .columns
            .iter()
            .any(|c| c.key() == key && c.is_sortable());
        if !sortable {
            return;
        }
        self.sort = match self.sort.take() {
            Some((current, SortDirection::Ascending)) if current == key => {
                Some((current, SortDirection::Descending))
            }
            Some((current, SortDirection::Descending)) if current == key => None,
            _ => Some((key.to_string(), SortDirection::Ascending)),
        };
        self.page = 1;
    }

    /// Go to a page, clamped to `[1, total_pages]`.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages());
    }

    /// Pages needed for the current filter state; at least 1, even empty.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.filtered_indices().len().div_ceil(self.page_size).max(1)
    }

    /// Current page number.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Current search query.
    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Currently sorted column key.
    #[must_use]
    pub fn sort_key(&self) -> Option<&str> {
        self.sort.as_ref().map(|(key, _)| key.as_str())
    }

    /// Current sort direction.
    #[must_use]
    pub fn sort_direction(&self) -> Option<SortDirection> {
        self.sort.as_ref().map(|(_, dir)| *dir)
    }

    /// Number of records in the underlying snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the snapshot holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the current page. Pure; repeated calls yield identical
    /// output until a state-mutating call intervenes.
    #[must_use]
    pub fn render(&self) -> TableSnapshot<'_, R> {
        let ordered = self.ordered_indices();
        let total = ordered.len();
        let total_pages = total.div_ceil(self.page_size).max(1);
        let page = self.page.min(total_pages);
        let first = (page - 1) * self.page_size;
        let last = (first + self.page_size).min(total);

        TableSnapshot {
            rows: ordered[first..last].iter().map(|&i| &self.rows[i]).collect(),
            headers: self.columns.iter().map(Column::header).collect(),
            pagination: PageSummary {
                page,
                total_pages,
                start: if total == 0 { 0 } else { first + 1 },
                end: last,
                total,
            },
            sort_key: self.sort_key(),
            sort_direction: self.sort_direction(),
        }
    }

    /// Export the full filtered+sorted result set as CSV, independent of
    /// the current page. `None` when the view was not built exportable.
    #[must_use]
    pub fn export_csv(&self) -> Option<CsvExport> {
        let filename = self.export_filename.as_ref()?;
        let header = self
            .columns
            .iter()
            .map(Column::header)
            .collect::<Vec<_>>()
            .join(",");
        let mut lines = vec![header];
        for &i in &self.ordered_indices() {
            let record = &self.rows[i];
            let row = self
                .columns
                .iter()
                .map(|c| escape_field(&c.value(record).display()))
                .collect::<Vec<_>>()
                .join(",");
            lines.push(row);
        }
        Some(CsvExport {
            filename: format!("{filename}.csv"),
            content: lines.join("\n"),
        })
    }

    /// Indices of records retained by the search filter, in insertion
    /// order.
    fn filtered_indices(&self) -> Vec<usize> {
        let Some(search_col) = self.search_column() else {
            return (0..self.rows.len()).collect();
        };
        if self.search_query.is_empty() {
            return (0..self.rows.len()).collect();
        }
        let needle = self.search_query.to_lowercase();
        (0..self.rows.len())
            .filter(|&i| {
                search_col
                    .value(&self.rows[i])
                    .display()
                    .to_lowercase()
                    .contains(&needle)
            })
            .collect()
    }

    /// Filtered indices, stably sorted by the active sort column.
    fn ordered_indices(&self) -> Vec<usize> {
        let mut indices = self.filtered_indices();
        if let Some((key, direction)) = &self.sort {
            if let Some(col) = self.columns.iter().find(|c| c.key() == key) {
                indices.sort_by(|&a, &b| {
                    let va = col.value(&self.rows[a]);
                    let vb = col.value(&self.rows[b]);
                    // Numbers compare numerically; everything else falls
                    // back to French collation over the display text.
                    let ord = match (&va, &vb) {
                        (CellValue::Number(x), CellValue::Number(y)) => x.total_cmp(y),
                        _ => compare_fr(&va.display(), &vb.display()),
                    };
                    match direction {
                        SortDirection::Ascending => ord,
                        SortDirection::Descending => ord.reverse(),
                    }
                });
            }
        }
        indices
    }

    fn search_column(&self) -> Option<&Column<R>> {
        let key = self.search_key.as_ref()?;
        self.columns.iter().find(|c| c.key() == *key)
    }
}
