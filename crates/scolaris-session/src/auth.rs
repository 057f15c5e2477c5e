//! Credential checking against a user directory.

use scolaris_core::{Role, User};
use std::fmt;

/// Source of user accounts. The demo build backs this with fixtures; a
/// deployment backs it with an API client.
pub trait UserDirectory {
    /// Look up a user by email.
    fn find_by_email(&self, email: &str) -> Option<User>;
}

/// Authentication failure, with the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Email/password pair matched no account.
    InvalidCredentials,
    /// A one-click demo account no longer exists in the directory.
    DemoAccountMissing,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCredentials => {
                write!(f, "Identifiants incorrects. Vérifiez votre email et mot de passe.")
            }
            Self::DemoAccountMissing => write!(f, "Compte de démo introuvable."),
        }
    }
}

impl std::error::Error for AuthError {}

/// One-click demo account shown on the login screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoAccount {
    pub role: Role,
    pub email: &'static str,
    pub label: &'static str,
}

/// Demo accounts, in display order.
pub const DEMO_ACCOUNTS: [DemoAccount; 5] = [
    DemoAccount {
        role: Role::SchoolAdmin,
        email: "fatou.ndiaye@edusaas.sn",
        label: "Directeur",
    },
    DemoAccount {
        role: Role::Accountant,
        email: "amadou.diallo@edusaas.sn",
        label: "Comptable",
    },
    DemoAccount {
        role: Role::Teacher,
        email: "marie.faye@edusaas.sn",
        label: "Enseignant",
    },
    DemoAccount {
        role: Role::Parent,
        email: "ousmane.camara@edusaas.sn",
        label: "Parent",
    },
    DemoAccount {
        role: Role::SuperAdmin,
        email: "ibrahima.sow@edusaas.sn",
        label: "Super Admin",
    },
];

/// Check submitted credentials against the directory.
///
/// The demo deployment accepts any password for a known email; the
/// password still travels through validation so the form contract matches
/// a real backend.
pub fn authenticate(
    directory: &dyn UserDirectory,
    email: &str,
    _password: &str,
) -> Result<User, AuthError> {
    directory
        .find_by_email(email)
        .ok_or(AuthError::InvalidCredentials)
}

/// Resolve a one-click demo login.
pub fn demo_login(directory: &dyn UserDirectory, email: &str) -> Result<User, AuthError> {
    directory
        .find_by_email(email)
        .ok_or(AuthError::DemoAccountMissing)
}
