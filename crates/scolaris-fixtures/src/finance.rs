//! Payment records.

use scolaris_core::{MobileOperator, Payment, PaymentMethod, PaymentStatus};

#[allow(clippy::too_many_arguments)]
fn payment(
    id: &str,
    invoice_number: &str,
    student: (&str, &str, &str),
    installment_name: &str,
    amount: u64,
    method: PaymentMethod,
    operator: Option<MobileOperator>,
    status: PaymentStatus,
    paid_at: &str,
) -> Payment {
    Payment {
        id: id.to_string(),
        student_id: student.0.to_string(),
        student_name: student.1.to_string(),
        class_name: student.2.to_string(),
        installment_name: installment_name.to_string(),
        amount,
        currency: "XOF".to_string(),
        method,
        operator,
        status,
        paid_at: paid_at.to_string(),
        invoice_number: invoice_number.to_string(),
    }
}

/// Recorded payments, most recent first.
#[must_use]
pub fn payments() -> Vec<Payment> {
    use MobileOperator::{OrangeMoney, Wave};
    use PaymentMethod::{BankTransfer, Cash, MobileMoney};
    use PaymentStatus::{Completed, Failed, Pending};
    vec![
        payment("p-1", "FAC-2025-010", ("s-1", "Awa Ndiaye", "CM2 A"), "Tranche 1", 45_000, MobileMoney, Some(Wave), Completed, "2025-10-04T09:12:00"),
        payment("p-2", "FAC-2025-009", ("s-3", "Khady Camara", "CM2 B"), "Tranche 1", 45_000, Cash, None, Completed, "2025-10-03T11:40:00"),
        payment("p-3", "FAC-2025-008", ("s-2", "Mamadou Diallo", "CM2 A"), "Tranche 1", 45_000, MobileMoney, Some(OrangeMoney), Pending, "2025-10-03T08:05:00"),
        payment("p-4", "FAC-2025-007", ("s-5", "Astou Fall", "CM1 A"), "Inscription", 25_000, BankTransfer, None, Completed, "2025-09-28T15:22:00"),
        payment("p-5", "FAC-2025-006", ("s-8", "Ibou Sarr", "CE2 A"), "Inscription", 25_000, MobileMoney, Some(Wave), Failed, "2025-09-27T17:48:00"),
        payment("p-6", "FAC-2025-005", ("s-4", "Cheikh Sow", "CM2 B"), "Tranche 1", 45_000, Cash, None, Completed, "2025-09-25T10:15:00"),
        payment("p-7", "FAC-2025-004", ("s-12", "Omar Camara", "CM2 B"), "Inscription", 25_000, Cash, None, Completed, "2025-09-20T09:30:00"),
        payment("p-8", "FAC-2025-003", ("s-10", "Pape Diop", "CM1 A"), "Inscription", 25_000, MobileMoney, Some(OrangeMoney), Completed, "2025-09-18T14:02:00"),
        payment("p-9", "FAC-2025-002", ("s-9", "Élise Mendy", "CE2 A"), "Inscription", 25_000, MobileMoney, Some(Wave), Completed, "2025-09-15T16:55:00"),
        payment("p-10", "FAC-2025-001", ("s-6", "Modou Gueye", "CM1 A"), "Inscription", 25_000, Cash, None, Completed, "2025-09-12T08:44:00"),
        payment("p-11", "FAC-2025-011", ("s-11", "Sokhna Cissé", "CM2 B"), "Tranche 1", 45_000, MobileMoney, Some(Wave), Pending, "2025-10-05T10:08:00"),
    ]
}

/// Payments made for the given students.
#[must_use]
pub fn payments_for_students(student_ids: &[&str]) -> Vec<Payment> {
    payments()
        .into_iter()
        .filter(|p| student_ids.contains(&p.student_id.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_numbers_unique() {
        let payments = payments();
        let mut invoices: Vec<_> = payments.iter().map(|p| &p.invoice_number).collect();
        invoices.sort();
        invoices.dedup();
        assert_eq!(invoices.len(), payments.len());
    }

    #[test]
    fn test_operator_only_with_mobile_money() {
        for payment in payments() {
            if payment.method == PaymentMethod::MobileMoney {
                assert!(payment.operator.is_some(), "{}", payment.id);
            } else {
                assert!(payment.operator.is_none(), "{}", payment.id);
            }
        }
    }

    #[test]
    fn test_all_amounts_in_cfa() {
        for payment in payments() {
            assert_eq!(payment.currency, "XOF");
            assert!(payment.amount > 0);
        }
    }

    #[test]
    fn test_filter_by_student() {
        let filtered = payments_for_students(&["s-3", "s-12"]);
        let ids: Vec<_> = filtered.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p-2", "p-7"]);
    }

    #[test]
    fn test_collection_pages_beyond_one_page() {
        assert!(payments().len() > scolaris_core::ITEMS_PER_PAGE);
    }
}
