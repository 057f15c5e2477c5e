//! Scolaris: role-based school management dashboard core.
//!
//! The workspace splits into focused crates re-exported here:
//! - `scolaris-core`: entities, French labels, formatting, validation
//! - `scolaris-table`: the generic search/sort/paginate/export engine
//! - `scolaris-session`: session persistence, auth gate, role navigation
//! - `scolaris-fixtures`: the demo dataset
//!
//! This crate adds the glue a shell consumes: [`AppContext`] for
//! lifecycle and login flow, and [`pages`] for the per-page table
//! view-models.
//!
//! # Example
//!
//! ```
//! use scolaris::AppContext;
//!
//! let mut app = AppContext::new();
//! app.init();
//! app.submit_demo_login("fatou.ndiaye@edusaas.sn").unwrap();
//! assert_eq!(app.router().pathname(), "/admin");
//! ```

pub mod context;
pub mod pages;

pub use context::{AppContext, LoginError};
pub use pages::{grades_view, messages_view, payments_view, students_view};

pub use scolaris_core as core;
pub use scolaris_fixtures as fixtures;
pub use scolaris_session as session;
pub use scolaris_table as table;
