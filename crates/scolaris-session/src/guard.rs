//! Route guarding for dashboard pages.

use crate::nav::{is_path_allowed, role_home};
use crate::session::{Session, SessionState};

/// What the shell should do before showing a guarded page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still hydrating: show the placeholder, do not redirect.
    /// Redirecting here would bounce a signed-in user to the login page
    /// on every reload.
    Loading,
    /// Render the page.
    Allow,
    /// Send the visitor to `/login`.
    RedirectToLogin,
    /// Signed in but outside this role's section: send home.
    RedirectToHome(&'static str),
}

/// Decide access for a dashboard path.
#[must_use]
pub fn guard_route(session: &Session, path: &str) -> GuardDecision {
    match session.state() {
        SessionState::Hydrating => GuardDecision::Loading,
        SessionState::Unauthenticated => GuardDecision::RedirectToLogin,
        SessionState::Authenticated(user) => {
            if is_path_allowed(user.role, path) {
                GuardDecision::Allow
            } else {
                GuardDecision::RedirectToHome(role_home(user.role))
            }
        }
    }
}
