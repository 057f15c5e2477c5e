//! Generic client-side table engine for the Scolaris dashboard.
//!
//! A [`TableView`] is built once over a snapshot of records and then
//! driven by three mutating operations: [`TableView::set_search_query`],
//! [`TableView::request_sort`] and [`TableView::set_page`]. Rendering and
//! CSV export are pure reads of the current state.
//!
//! The pipeline is always filter, then sort, then paginate. Text ordering
//! uses French collation from `scolaris-core`.
//!
//! # Example
//!
//! ```
//! use scolaris_table::{Column, TableRecord, TableView};
//!
//! struct Student { id: String, last_name: String }
//!
//! impl TableRecord for Student {
//!     fn id(&self) -> &str { &self.id }
//! }
//!
//! let students = vec![
//!     Student { id: "s1".into(), last_name: "Ndiaye".into() },
//!     Student { id: "s2".into(), last_name: "Diallo".into() },
//! ];
//!
//! let mut view = TableView::builder(students)
//!     .column(Column::new("lastName", "Nom", |s: &Student| s.last_name.clone()).sortable())
//!     .search_key("lastName")
//!     .exportable("eleves")
//!     .build()
//!     .unwrap();
//!
//! view.request_sort("lastName");
//! let snapshot = view.render();
//! assert_eq!(snapshot.rows[0].last_name, "Diallo");
//! ```

pub mod column;
pub mod export;
pub mod records;
pub mod view;

pub use column::{CellValue, Column, TableConfigError, TableRecord};
pub use export::{CsvExport, CSV_MIME};
pub use view::{PageSummary, SortDirection, TableSnapshot, TableView, TableViewBuilder};
