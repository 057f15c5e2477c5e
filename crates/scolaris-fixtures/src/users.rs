//! Demo user accounts, one per role.

use scolaris_core::{Role, User};

const SCHOOL_ID: &str = "sch-1";
const SCHOOL_NAME: &str = "École Primaire Les Baobabs";

fn user(
    id: &str,
    first_name: &str,
    last_name: &str,
    email: &str,
    role: Role,
    with_school: bool,
) -> User {
    User {
        id: id.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        role,
        school_id: with_school.then(|| SCHOOL_ID.to_string()),
        school_name: with_school.then(|| SCHOOL_NAME.to_string()),
        country: "SN".to_string(),
    }
}

/// All demo accounts. Matches the login screen's one-click list.
#[must_use]
pub fn users() -> Vec<User> {
    vec![
        user(
            "u-1",
            "Fatou",
            "Ndiaye",
            "fatou.ndiaye@edusaas.sn",
            Role::SchoolAdmin,
            true,
        ),
        user(
            "u-2",
            "Amadou",
            "Diallo",
            "amadou.diallo@edusaas.sn",
            Role::Accountant,
            true,
        ),
        user(
            "u-3",
            "Marie",
            "Faye",
            "marie.faye@edusaas.sn",
            Role::Teacher,
            true,
        ),
        user(
            "u-4",
            "Ousmane",
            "Camara",
            "ousmane.camara@edusaas.sn",
            Role::Parent,
            true,
        ),
        user(
            "u-5",
            "Ibrahima",
            "Sow",
            "ibrahima.sow@edusaas.sn",
            Role::SuperAdmin,
            false,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use scolaris_session::DEMO_ACCOUNTS;

    #[test]
    fn test_one_user_per_role() {
        let users = users();
        for role in Role::ALL {
            assert_eq!(users.iter().filter(|u| u.role == role).count(), 1);
        }
    }

    #[test]
    fn test_every_demo_account_resolves() {
        let users = users();
        for account in DEMO_ACCOUNTS {
            let user = users
                .iter()
                .find(|u| u.email == account.email)
                .unwrap_or_else(|| panic!("missing {}", account.email));
            assert_eq!(user.role, account.role);
        }
    }

    #[test]
    fn test_super_admin_has_no_school() {
        let users = users();
        let super_admin = users.iter().find(|u| u.role == Role::SuperAdmin).unwrap();
        assert!(super_admin.school_id.is_none());
        assert!(super_admin.school_name.is_none());
    }
}
