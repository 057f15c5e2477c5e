//! Demo dataset for the Scolaris dashboard.
//!
//! Every collection is a function returning fresh owned records, so a
//! view can consume its snapshot without coordinating with other views.
//! [`FixtureDirectory`] plugs the demo accounts into the authentication
//! layer.

pub mod academics;
pub mod finance;
pub mod inbox;
pub mod school;
pub mod users;

pub use academics::{grades, grades_for_students};
pub use finance::{payments, payments_for_students};
pub use inbox::{messages, messages_for, notifications, unread_notification_count};
pub use school::{classes, students, students_of_parent};
pub use users::users;

use scolaris_core::User;
use scolaris_session::UserDirectory;

/// User directory backed by the fixture accounts.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureDirectory;

impl UserDirectory for FixtureDirectory {
    fn find_by_email(&self, email: &str) -> Option<User> {
        users().into_iter().find(|u| u.email == email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scolaris_session::{authenticate, demo_login, AuthError, DEMO_ACCOUNTS};

    #[test]
    fn test_directory_finds_demo_accounts() {
        for account in DEMO_ACCOUNTS {
            let user = demo_login(&FixtureDirectory, account.email).unwrap();
            assert_eq!(user.role, account.role);
        }
    }

    #[test]
    fn test_directory_rejects_unknown_email() {
        let err = authenticate(&FixtureDirectory, "inconnu@edusaas.sn", "pw").unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
    }
}
