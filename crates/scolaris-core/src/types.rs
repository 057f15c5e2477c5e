//! Entity types shared by every dashboard view.
//!
//! All entities carry a stable `id` and are treated as immutable snapshots:
//! a view that needs fresh data is handed a new collection rather than
//! mutating records in place.

use serde::{Deserialize, Serialize};

/// User role, closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SuperAdmin,
    SchoolAdmin,
    Accountant,
    Teacher,
    Parent,
}

impl Role {
    /// Every role, in display order.
    pub const ALL: [Self; 5] = [
        Self::SuperAdmin,
        Self::SchoolAdmin,
        Self::Accountant,
        Self::Teacher,
        Self::Parent,
    ];
}

/// Student gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
}

/// How a payment was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    MobileMoney,
    Cash,
    BankTransfer,
    Check,
}

/// Mobile-money operator for `PaymentMethod::MobileMoney`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MobileOperator {
    Wave,
    OrangeMoney,
    MtnMomo,
}

/// Lifecycle state of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

/// Kind of graded evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvaluationType {
    ClassTest,
    Exam,
    Homework,
    Oral,
}

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    Info,
    Warning,
    Error,
    Success,
}

/// An authenticated identity: role plus profile attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub school_id: Option<String>,
    pub school_name: Option<String>,
    pub country: String,
}

impl User {
    /// Full display name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One enrolled student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub registration_no: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub date_of_birth: String,
    pub class_name: String,
    pub class_id: String,
    pub is_active: bool,
    pub parent_name: String,
    pub parent_phone: String,
}

/// One recorded payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub student_id: String,
    pub student_name: String,
    pub class_name: String,
    pub installment_name: String,
    pub amount: u64,
    pub currency: String,
    pub method: PaymentMethod,
    pub operator: Option<MobileOperator>,
    pub status: PaymentStatus,
    pub paid_at: String,
    pub invoice_number: String,
}

/// One evaluation result for one student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    pub id: String,
    pub student_id: String,
    pub student_name: String,
    pub evaluation_title: String,
    pub evaluation_type: EvaluationType,
    pub subject_name: String,
    pub score: f64,
    pub max_score: f64,
    pub coefficient: u32,
    pub is_absent: bool,
    pub comment: String,
    pub created_at: String,
}

/// A message between two users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub sender_role: Role,
    pub receiver_id: String,
    pub receiver_name: String,
    pub content: String,
    pub is_read: bool,
    pub created_at: String,
}

/// A notification shown in the top bar panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub is_read: bool,
    pub created_at: String,
}

/// Subscription state of a school tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionStatus {
    Active,
    Expired,
    Trial,
}

/// A school tenant, as the super-admin directory sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct School {
    pub id: String,
    pub name: String,
    pub country: String,
    pub city: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub subscription_status: SubscriptionStatus,
    pub students_count: u32,
    pub teachers_count: u32,
    pub created_at: String,
}

/// A taught subject, weighted by coefficient in averages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub coefficient: u32,
    pub class_id: String,
    pub class_name: String,
    pub teacher_name: String,
}

/// A class group (e.g. CM2 A).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassGroup {
    pub id: String,
    pub name: String,
    pub level: String,
    pub students_count: u32,
    pub teacher_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serde_wire_names() {
        assert_eq!(
            serde_json::to_string(&Role::SchoolAdmin).unwrap(),
            "\"SCHOOL_ADMIN\""
        );
        let parsed: Role = serde_json::from_str("\"SUPER_ADMIN\"").unwrap();
        assert_eq!(parsed, Role::SuperAdmin);
    }

    #[test]
    fn test_role_all_is_exhaustive() {
        assert_eq!(Role::ALL.len(), 5);
    }

    #[test]
    fn test_user_full_name() {
        let user = User {
            id: "u-1".into(),
            first_name: "Fatou".into(),
            last_name: "Ndiaye".into(),
            email: "fatou@example.sn".into(),
            role: Role::SchoolAdmin,
            school_id: Some("sch-1".into()),
            school_name: Some("Les Manguiers".into()),
            country: "SN".into(),
        };
        assert_eq!(user.full_name(), "Fatou Ndiaye");
    }

    #[test]
    fn test_user_camel_case_round_trip() {
        let json = r#"{
            "id": "u-2",
            "firstName": "Amadou",
            "lastName": "Diallo",
            "email": "amadou@example.sn",
            "role": "ACCOUNTANT",
            "schoolId": null,
            "schoolName": null,
            "country": "SN"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::Accountant);
        assert!(user.school_id.is_none());

        let back = serde_json::to_string(&user).unwrap();
        assert!(back.contains("\"firstName\":\"Amadou\""));
    }

    #[test]
    fn test_notification_type_field_name() {
        let json = r#"{
            "id": "n-1",
            "title": "Paiement",
            "message": "Nouveau paiement",
            "type": "SUCCESS",
            "isRead": false,
            "createdAt": "2025-09-01T08:00:00"
        }"#;
        let notif: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(notif.kind, NotificationType::Success);
    }
}
