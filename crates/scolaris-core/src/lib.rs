//! Domain model and shared utilities for the Scolaris dashboard.
//!
//! This crate provides the foundations used throughout Scolaris:
//! - Entity types and closed domain enums: [`types`]
//! - French display dictionaries: [`labels`]
//! - Currency/date formatting: [`format`]
//! - French-locale collation for sorting: [`collate`]
//! - Declarative form validation: [`validation`]

pub mod collate;
pub mod format;
pub mod labels;
pub mod types;
pub mod validation;

pub use collate::compare_fr;
pub use labels::ITEMS_PER_PAGE;
pub use types::{
    ClassGroup, EvaluationType, Gender, Grade, Message, MobileOperator, Notification,
    NotificationType, Payment, PaymentMethod, PaymentStatus, Role, School, Student, Subject,
    SubscriptionStatus, User,
};
