//! Application context: the one object a shell owns.
//!
//! Wires session, router, UI chrome and the login flow together. No
//! ambient singletons; a host constructs a context at startup, drives it
//! through `init`, and tears it down when the app unmounts.

use scolaris_core::{validation::login_form, User};
use scolaris_fixtures::FixtureDirectory;
use scolaris_session::{
    authenticate, demo_login, guard_route, role_home, AuthError, GuardDecision, Router, Session,
    Storage, StorageError, Submission, UserDirectory,
};

use std::fmt;

/// Login failure surfaced to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// Field-level validation errors, `(field, message)` pairs.
    Validation(Vec<(String, String)>),
    /// Directory rejected the credentials.
    Auth(AuthError),
    /// Session could not be persisted.
    Storage(StorageError),
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(errors) => write!(f, "formulaire invalide ({} champs)", errors.len()),
            Self::Auth(err) => err.fmt(f),
            Self::Storage(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for LoginError {}

impl From<AuthError> for LoginError {
    fn from(err: AuthError) -> Self {
        Self::Auth(err)
    }
}

impl From<StorageError> for LoginError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err)
    }
}

/// Owns the session store, router, UI chrome state and the in-flight
/// login submission.
pub struct AppContext<D = FixtureDirectory> {
    session: Session,
    router: Router,
    ui: scolaris_session::UiState,
    directory: D,
    login: Submission<User>,
}

impl Default for AppContext<FixtureDirectory> {
    fn default() -> Self {
        Self::new()
    }
}

impl AppContext<FixtureDirectory> {
    /// Context over the demo directory and session-scoped storage.
    #[must_use]
    pub fn new() -> Self {
        Self::with_directory(Storage::session(), FixtureDirectory)
    }
}

impl<D: UserDirectory> AppContext<D> {
    /// Context over an explicit storage area and directory.
    #[must_use]
    pub fn with_directory(storage: Storage, directory: D) -> Self {
        Self {
            session: Session::new(storage),
            router: Router::new(),
            ui: scolaris_session::UiState::new(),
            directory,
            login: Submission::new(),
        }
    }

    /// Hydrate the session, then land signed-in visitors on their
    /// dashboard when they arrive at a public entry path.
    pub fn init(&mut self) {
        self.session.hydrate();
        if let Some(user) = self.session.current_user() {
            let path = self.router.pathname();
            if path == "/" || path == "/login" {
                self.router.replace(role_home(user.role));
            }
        }
    }

    /// Navigate to a dashboard path, applying the route guard.
    ///
    /// Redirect decisions are executed on the router with `replace`, so
    /// the guarded page never enters history. The decision is returned
    /// for the shell to act on (placeholder vs. page render).
    pub fn activate(&mut self, path: &str) -> GuardDecision {
        self.router.push(path);
        let decision = guard_route(&self.session, path);
        match decision {
            GuardDecision::RedirectToLogin => self.router.replace("/login"),
            GuardDecision::RedirectToHome(home) => self.router.replace(home),
            GuardDecision::Loading | GuardDecision::Allow => {}
        }
        decision
    }

    /// Submit the login form: validate, check the directory, open the
    /// session and navigate to the role's dashboard.
    pub fn submit_login(&mut self, email: &str, password: &str) -> Result<(), LoginError> {
        let mut form = login_form();
        form.set_value("email", email);
        form.set_value("password", password);
        let errors = form.validate();
        if !errors.is_empty() {
            let mut pairs: Vec<(String, String)> = errors.into_iter().collect();
            pairs.sort();
            return Err(LoginError::Validation(pairs));
        }

        self.login.start();
        match authenticate(&self.directory, email, password) {
            Ok(user) => self.finish_login(user),
            Err(err) => {
                self.login.fail(err.to_string());
                Err(err.into())
            }
        }
    }

    /// One-click demo sign-in from the login screen.
    pub fn submit_demo_login(&mut self, email: &str) -> Result<(), LoginError> {
        self.login.start();
        match demo_login(&self.directory, email) {
            Ok(user) => self.finish_login(user),
            Err(err) => {
                self.login.fail(err.to_string());
                Err(err.into())
            }
        }
    }

    fn finish_login(&mut self, user: User) -> Result<(), LoginError> {
        self.session.login(user.clone())?;
        self.router.push(role_home(user.role));
        self.login.resolve(user);
        Ok(())
    }

    /// Sign out and return to the login screen.
    pub fn logout(&mut self) -> Result<(), StorageError> {
        self.session.logout()?;
        self.router.replace("/login");
        Ok(())
    }

    /// Drop transient state. The persisted session survives, so the next
    /// `init` restores the user.
    pub fn teardown(&mut self) {
        self.login.cancel();
        self.ui = scolaris_session::UiState::new();
    }

    /// Session store.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Router.
    #[must_use]
    pub const fn router(&self) -> &Router {
        &self.router
    }

    /// UI chrome state.
    #[must_use]
    pub const fn ui(&self) -> &scolaris_session::UiState {
        &self.ui
    }

    /// Mutable UI chrome state, for sidebar toggles.
    pub fn ui_mut(&mut self) -> &mut scolaris_session::UiState {
        &mut self.ui
    }

    /// In-flight login submission, for pending/error display.
    #[must_use]
    pub const fn login_submission(&self) -> &Submission<User> {
        &self.login
    }

    /// Consume the context, returning the storage handle. A context
    /// rebuilt over the same handle models a page reload.
    #[must_use]
    pub fn into_storage(self) -> Storage {
        self.session.into_storage()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scolaris_core::Role;

    #[test]
    fn test_submit_login_validation_failure() {
        let mut context = AppContext::new();
        context.init();
        let err = context.submit_login("", "").unwrap_err();
        let LoginError::Validation(pairs) = err else {
            panic!("expected validation error");
        };
        assert!(pairs.iter().any(|(field, _)| field == "email"));
        assert!(pairs.iter().any(|(field, _)| field == "password"));
        // Validation failures never start a submission.
        assert!(!context.login_submission().is_pending());
    }

    #[test]
    fn test_submit_login_unknown_account() {
        let mut context = AppContext::new();
        context.init();
        let err = context
            .submit_login("inconnu@edusaas.sn", "motdepasse")
            .unwrap_err();
        assert_eq!(err, LoginError::Auth(AuthError::InvalidCredentials));
        assert_eq!(
            context.login_submission().error(),
            Some("Identifiants incorrects. Vérifiez votre email et mot de passe.")
        );
        assert!(!context.session().is_authenticated());
    }

    #[test]
    fn test_submit_login_navigates_to_role_home() {
        let mut context = AppContext::new();
        context.init();
        context
            .submit_login("marie.faye@edusaas.sn", "motdepasse")
            .unwrap();
        assert!(context.session().is_authenticated());
        assert_eq!(context.router().pathname(), "/teacher");
        assert_eq!(
            context.session().current_user().map(|u| u.role),
            Some(Role::Teacher)
        );
    }

    #[test]
    fn test_demo_login_super_admin_home() {
        let mut context = AppContext::new();
        context.init();
        context.submit_demo_login("ibrahima.sow@edusaas.sn").unwrap();
        assert_eq!(context.router().pathname(), "/super-admin");
    }

    #[test]
    fn test_logout_returns_to_login() {
        let mut context = AppContext::new();
        context.init();
        context.submit_demo_login("fatou.ndiaye@edusaas.sn").unwrap();
        context.logout().unwrap();
        assert!(!context.session().is_authenticated());
        assert_eq!(context.router().pathname(), "/login");
    }

    #[test]
    fn test_teardown_clears_transients_keeps_session() {
        let mut context = AppContext::new();
        context.init();
        context.submit_demo_login("fatou.ndiaye@edusaas.sn").unwrap();
        context.ui_mut().toggle_sidebar();
        context.teardown();
        assert!(context.ui().sidebar_open());
        assert!(context.session().is_authenticated());
    }

    #[test]
    fn test_init_redirects_restored_user_from_entry_path() {
        let mut context = AppContext::new();
        context.init();
        context.submit_demo_login("amadou.diallo@edusaas.sn").unwrap();

        let storage = context.into_storage();
        let mut reloaded = AppContext::with_directory(storage, FixtureDirectory);
        reloaded.init();
        assert_eq!(reloaded.router().pathname(), "/accountant");
    }
}
