//! Table view-models for the dashboard pages.
//!
//! Each builder wires one entity collection into a [`TableView`] with the
//! page's column set. Callers pass the (possibly role-filtered) records;
//! construction fails only on a column misconfiguration, which would be a
//! bug in this module.
//!
//! Extractors yield the raw attribute for each column: that value is what
//! the engine searches, sorts and exports, so ISO dates sort
//! chronologically and scores numerically. French formatting happens where
//! cells are rendered.

use scolaris_core::{Grade, Message, Payment, Student};
use scolaris_table::{Column, TableConfigError, TableView};

/// Student roster (admin "Élèves" page). Searchable by last name,
/// exportable as `eleves.csv`.
pub fn students_view(rows: Vec<Student>) -> Result<TableView<Student>, TableConfigError> {
    TableView::builder(rows)
        .column(Column::new("registrationNo", "N°", |s: &Student| s.registration_no.clone()).sortable())
        .column(Column::new("lastName", "Nom", |s: &Student| s.last_name.clone()).sortable())
        .column(Column::new("className", "Classe", |s: &Student| s.class_name.clone()).sortable())
        .column(Column::new("parentName", "Parent", |s: &Student| s.parent_name.clone()))
        .column(Column::new("isActive", "Statut", |s: &Student| {
            if s.is_active { "Actif" } else { "Inactif" }
        }))
        .search_key("lastName")
        .exportable("eleves")
        .build()
}

/// Payment ledger (accountant "Paiements" page). Searchable by student
/// name, exportable as `paiements.csv`.
pub fn payments_view(rows: Vec<Payment>) -> Result<TableView<Payment>, TableConfigError> {
    TableView::builder(rows)
        .column(Column::new("invoiceNumber", "Facture", |p: &Payment| p.invoice_number.clone()).sortable())
        .column(Column::new("studentName", "Élève", |p: &Payment| p.student_name.clone()).sortable())
        .column(Column::new("installmentName", "Tranche", |p: &Payment| p.installment_name.clone()))
        .column(Column::new("amount", "Montant", |p: &Payment| p.amount).sortable())
        .column(Column::new("method", "Mode", |p: &Payment| p.method.label()))
        .column(Column::new("status", "Statut", |p: &Payment| p.status.label()))
        .column(Column::new("paidAt", "Date", |p: &Payment| p.paid_at.clone()).sortable())
        .search_key("studentName")
        .exportable("paiements")
        .build()
}

/// Grade sheet (teacher "Saisie des notes", parent "Notes"). Searchable
/// by student name, exportable as `notes.csv`.
pub fn grades_view(rows: Vec<Grade>) -> Result<TableView<Grade>, TableConfigError> {
    TableView::builder(rows)
        .column(Column::new("studentName", "Élève", |g: &Grade| g.student_name.clone()).sortable())
        .column(Column::new("evaluationTitle", "Évaluation", |g: &Grade| g.evaluation_title.clone()))
        .column(Column::new("evaluationType", "Type", |g: &Grade| g.evaluation_type.label()))
        .column(Column::new("subjectName", "Matière", |g: &Grade| g.subject_name.clone()).sortable())
        .column(Column::new("score", "Note", |g: &Grade| g.score).sortable())
        .column(Column::new("comment", "Appréciation", |g: &Grade| g.comment.clone()))
        .search_key("studentName")
        .exportable("notes")
        .build()
}

/// Parent message inbox. Searchable by sender, not exportable.
pub fn messages_view(rows: Vec<Message>) -> Result<TableView<Message>, TableConfigError> {
    TableView::builder(rows)
        .column(Column::new("senderName", "Expéditeur", |m: &Message| m.sender_name.clone()).sortable())
        .column(Column::new("content", "Message", |m: &Message| m.content.clone()))
        .column(Column::new("isRead", "Lu", |m: &Message| m.is_read))
        .column(Column::new("createdAt", "Date", |m: &Message| m.created_at.clone()).sortable())
        .search_key("senderName")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scolaris_core::{PaymentMethod, PaymentStatus};

    fn payment(id: &str, paid_at: &str) -> Payment {
        Payment {
            id: id.to_string(),
            student_id: "s-1".to_string(),
            student_name: "Awa Ndiaye".to_string(),
            class_name: "CM2 A".to_string(),
            installment_name: "Tranche 1".to_string(),
            amount: 25_000,
            currency: "XOF".to_string(),
            method: PaymentMethod::Cash,
            operator: None,
            status: PaymentStatus::Completed,
            paid_at: paid_at.to_string(),
            invoice_number: format!("FAC-2025-{id}"),
        }
    }

    #[test]
    fn test_students_view_configuration() {
        let view = students_view(scolaris_fixtures::students()).unwrap();
        assert_eq!(
            view.render().headers,
            vec!["N°", "Nom", "Classe", "Parent", "Statut"]
        );
        assert_eq!(view.export_csv().unwrap().filename, "eleves.csv");
    }

    #[test]
    fn test_payments_view_configuration() {
        let view = payments_view(scolaris_fixtures::payments()).unwrap();
        assert_eq!(view.export_csv().unwrap().filename, "paiements.csv");
    }

    #[test]
    fn test_payments_sort_by_date_is_chronological() {
        // ISO dates: October sorts after September even though the
        // formatted labels would compare the other way around.
        let mut view = payments_view(vec![
            payment("p-late", "2025-10-12"),
            payment("p-early", "2025-09-05"),
        ])
        .unwrap();
        view.request_sort("paidAt");
        let ids: Vec<_> = view.render().rows.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p-early", "p-late"]);
    }

    #[test]
    fn test_grades_sort_scores_numerically() {
        let mut view = grades_view(scolaris_fixtures::grades()).unwrap();
        view.request_sort("score");
        let scores: Vec<f64> = view.render().rows.iter().map(|g| g.score).collect();
        assert!(scores.windows(2).all(|w| w[0] <= w[1]));
        assert!(view.render().rows[0].is_absent);
    }

    #[test]
    fn test_grades_export_carries_raw_scores() {
        let mut view = grades_view(scolaris_fixtures::grades()).unwrap();
        view.set_search_query("adama");
        let export = view.export_csv().unwrap();
        assert!(export.content.contains("\"0\""));
    }

    #[test]
    fn test_messages_view_not_exportable() {
        let view = messages_view(scolaris_fixtures::messages_for("u-4")).unwrap();
        assert!(view.export_csv().is_none());
    }
}
