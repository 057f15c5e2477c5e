//! Session, authentication and navigation for the Scolaris dashboard.
//!
//! The pieces compose as follows: a [`Session`] persists the signed-in
//! user through [`storage`], [`auth`] checks credentials against a
//! [`UserDirectory`], [`guard`] decides what a dashboard route should do
//! with the current session, and [`nav`] holds the static role-scoped
//! sidebar map. [`Router`] performs the resulting navigation and
//! [`Submission`] tracks in-flight login attempts.

pub mod auth;
pub mod guard;
pub mod nav;
pub mod router;
pub mod session;
pub mod storage;
pub mod submission;
pub mod ui;

pub use auth::{authenticate, demo_login, AuthError, DemoAccount, UserDirectory, DEMO_ACCOUNTS};
pub use guard::{guard_route, GuardDecision};
pub use nav::{is_path_allowed, nav_for, role_home, IconKind, NavItem};
pub use router::{RouteMatcher, Router};
pub use session::{Session, SessionState, SESSION_STORAGE_KEY};
pub use storage::{Storage, StorageError, StorageKind};
pub use submission::{Submission, SubmissionState, TIMEOUT_MESSAGE};
pub use ui::UiState;
