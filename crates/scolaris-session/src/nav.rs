//! Role-scoped navigation map.
//!
//! Each role sees a fixed sidebar; the map is static data, not derived
//! from permissions at runtime.

use scolaris_core::Role;

/// Sidebar icon, a closed set the visual layer maps to glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Dashboard,
    School,
    CreditCard,
    HelpCircle,
    Users,
    UserCheck,
    BookOpen,
    ClipboardList,
    BarChart,
    Settings,
    DollarSign,
    FileText,
    Bell,
    MessageSquare,
}

/// One sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: IconKind,
}

const SUPER_ADMIN_NAV: &[NavItem] = &[
    NavItem { path: "/super-admin", label: "Tableau de bord", icon: IconKind::Dashboard },
    NavItem { path: "/super-admin/schools", label: "Écoles", icon: IconKind::School },
    NavItem { path: "/super-admin/subscriptions", label: "Abonnements", icon: IconKind::CreditCard },
    NavItem { path: "/super-admin/support", label: "Support", icon: IconKind::HelpCircle },
];

const SCHOOL_ADMIN_NAV: &[NavItem] = &[
    NavItem { path: "/admin", label: "Tableau de bord", icon: IconKind::Dashboard },
    NavItem { path: "/admin/students", label: "Élèves", icon: IconKind::Users },
    NavItem { path: "/admin/teachers", label: "Enseignants", icon: IconKind::UserCheck },
    NavItem { path: "/admin/classes", label: "Classes", icon: IconKind::BookOpen },
    NavItem { path: "/admin/subjects", label: "Matières", icon: IconKind::ClipboardList },
    NavItem { path: "/admin/reports", label: "Rapports", icon: IconKind::BarChart },
    NavItem { path: "/admin/settings", label: "Paramètres", icon: IconKind::Settings },
];

const ACCOUNTANT_NAV: &[NavItem] = &[
    NavItem { path: "/accountant", label: "Tableau de bord", icon: IconKind::Dashboard },
    NavItem { path: "/accountant/payments", label: "Paiements", icon: IconKind::DollarSign },
    NavItem { path: "/accountant/fee-structures", label: "Grilles tarifaires", icon: IconKind::FileText },
    NavItem { path: "/accountant/reminders", label: "Rappels", icon: IconKind::Bell },
];

const TEACHER_NAV: &[NavItem] = &[
    NavItem { path: "/teacher", label: "Tableau de bord", icon: IconKind::Dashboard },
    NavItem { path: "/teacher/grades", label: "Saisie des notes", icon: IconKind::ClipboardList },
    NavItem { path: "/teacher/observations", label: "Observations", icon: IconKind::MessageSquare },
];

const PARENT_NAV: &[NavItem] = &[
    NavItem { path: "/parent", label: "Tableau de bord", icon: IconKind::Dashboard },
    NavItem { path: "/parent/grades", label: "Notes", icon: IconKind::BarChart },
    NavItem { path: "/parent/payments", label: "Paiements", icon: IconKind::DollarSign },
    NavItem { path: "/parent/messages", label: "Messages", icon: IconKind::MessageSquare },
];

/// Sidebar entries for a role, in display order.
#[must_use]
pub const fn nav_for(role: Role) -> &'static [NavItem] {
    match role {
        Role::SuperAdmin => SUPER_ADMIN_NAV,
        Role::SchoolAdmin => SCHOOL_ADMIN_NAV,
        Role::Accountant => ACCOUNTANT_NAV,
        Role::Teacher => TEACHER_NAV,
        Role::Parent => PARENT_NAV,
    }
}

/// Landing page after login. Always the role's own dashboard.
#[must_use]
pub const fn role_home(role: Role) -> &'static str {
    match role {
        Role::SuperAdmin => "/super-admin",
        Role::SchoolAdmin => "/admin",
        Role::Accountant => "/accountant",
        Role::Teacher => "/teacher",
        Role::Parent => "/parent",
    }
}

/// Whether a path falls inside a role's navigable section.
///
/// A path is allowed when it equals a sidebar entry or sits below one
/// (`/admin/students/42` under `/admin/students`). Prefix matching stops
/// at path-segment boundaries so `/administration` never matches `/admin`.
#[must_use]
pub fn is_path_allowed(role: Role, path: &str) -> bool {
    nav_for(role).iter().any(|item| {
        path == item.path
            || (path.starts_with(item.path) && path[item.path.len()..].starts_with('/'))
    })
}
