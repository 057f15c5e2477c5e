//! French display labels for domain codes.
//!
//! The deployment's primary language is French; every enum that reaches the
//! screen goes through one of these dictionaries instead of leaking wire
//! names like `MOBILE_MONEY` into the UI or CSV exports.

use crate::types::{
    EvaluationType, MobileOperator, PaymentMethod, PaymentStatus, Role, SubscriptionStatus,
};

/// Rows shown per table page. Fixed; changing it at runtime is unsupported.
pub const ITEMS_PER_PAGE: usize = 10;

impl Role {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SuperAdmin => "Super Admin",
            Self::SchoolAdmin => "Directeur",
            Self::Accountant => "Comptable",
            Self::Teacher => "Enseignant",
            Self::Parent => "Parent",
        }
    }
}

impl PaymentStatus {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "En attente",
            Self::Completed => "Payé",
            Self::Failed => "Échoué",
            Self::Refunded => "Remboursé",
        }
    }
}

impl PaymentMethod {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MobileMoney => "Mobile Money",
            Self::Cash => "Espèces",
            Self::BankTransfer => "Virement bancaire",
            Self::Check => "Chèque",
        }
    }
}

impl MobileOperator {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Wave => "Wave",
            Self::OrangeMoney => "Orange Money",
            Self::MtnMomo => "MTN MoMo",
        }
    }
}

impl EvaluationType {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ClassTest => "Devoir",
            Self::Exam => "Examen",
            Self::Homework => "Exercice maison",
            Self::Oral => "Oral",
        }
    }
}

impl SubscriptionStatus {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Actif",
            Self::Expired => "Expiré",
            Self::Trial => "Essai",
        }
    }
}
