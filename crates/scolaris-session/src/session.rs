//! Session state machine with storage-backed persistence.
//!
//! A freshly created [`Session`] is hydrating: nothing is known yet about
//! the user, and consumers must not treat it as signed out. Only after
//! [`Session::hydrate`] replays the persisted snapshot does the session
//! settle into authenticated or unauthenticated.

use crate::storage::{Storage, StorageError};
use scolaris_core::User;
use serde::{Deserialize, Serialize};

/// Storage key under which the session snapshot is persisted.
pub const SESSION_STORAGE_KEY: &str = "scolaris-auth";

/// Resolved session state.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Persisted state not yet replayed. Neither signed in nor out.
    Hydrating,
    /// A user is signed in.
    Authenticated(User),
    /// No user is signed in.
    Unauthenticated,
}

/// Persisted snapshot. Only identity survives a reload; transient flags
/// like hydration progress are deliberately not written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct StoredSession {
    user: Option<User>,
    #[serde(rename = "isAuthenticated")]
    is_authenticated: bool,
}

/// The authenticated-user store.
#[derive(Debug)]
pub struct Session {
    state: SessionState,
    storage: Storage,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Storage::session())
    }
}

impl Session {
    /// Create a session over a storage area. Starts hydrating.
    #[must_use]
    pub fn new(storage: Storage) -> Self {
        Self {
            state: SessionState::Hydrating,
            storage,
        }
    }

    /// Replay the persisted snapshot.
    ///
    /// Always completes hydration: a missing, corrupt or inconsistent
    /// snapshot resolves to unauthenticated rather than failing, so a
    /// damaged storage entry can never lock the user out of the login
    /// screen.
    pub fn hydrate(&mut self) {
        let stored: Option<StoredSession> = self
            .storage
            .get_json(SESSION_STORAGE_KEY)
            .unwrap_or_default();
        self.state = match stored {
            Some(StoredSession {
                user: Some(user),
                is_authenticated: true,
            }) => SessionState::Authenticated(user),
            _ => SessionState::Unauthenticated,
        };
    }

    /// Sign a user in and persist the snapshot.
    pub fn login(&mut self, user: User) -> Result<(), StorageError> {
        self.storage.set_json(
            SESSION_STORAGE_KEY,
            &StoredSession {
                user: Some(user.clone()),
                is_authenticated: true,
            },
        )?;
        self.state = SessionState::Authenticated(user);
        Ok(())
    }

    /// Sign out and persist the cleared snapshot.
    pub fn logout(&mut self) -> Result<(), StorageError> {
        self.storage.set_json(
            SESSION_STORAGE_KEY,
            &StoredSession {
                user: None,
                is_authenticated: false,
            },
        )?;
        self.state = SessionState::Unauthenticated;
        Ok(())
    }

    /// Replace the signed-in user's profile, keeping the session alive.
    /// Ignored unless authenticated.
    pub fn set_user(&mut self, user: User) -> Result<(), StorageError> {
        if matches!(self.state, SessionState::Authenticated(_)) {
            self.login(user)?;
        }
        Ok(())
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// The signed-in user, if any.
    #[must_use]
    pub const fn current_user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// True only once a user is signed in. False while hydrating.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    /// True once hydration has resolved, whatever the outcome.
    #[must_use]
    pub const fn has_hydrated(&self) -> bool {
        !matches!(self.state, SessionState::Hydrating)
    }

    /// Consume the session, returning the storage handle. A fresh session
    /// over the same handle models a page reload.
    #[must_use]
    pub fn into_storage(self) -> Storage {
        self.storage
    }
}
