//! [`TableRecord`] implementations for the domain entities.

use crate::column::TableRecord;
use scolaris_core::{
    ClassGroup, Grade, Message, Notification, Payment, School, Student, Subject, User,
};

macro_rules! impl_table_record {
    ($($ty:ty),* $(,)?) => {
        $(impl TableRecord for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })*
    };
}

impl_table_record!(Student, Payment, Grade, Message, Notification, ClassGroup, Subject, School, User);

#[cfg(test)]
mod tests {
    use super::*;
    use scolaris_core::{Gender, Student};

    #[test]
    fn test_student_identity() {
        let student = Student {
            id: "s-1".into(),
            registration_no: "2025-001".into(),
            first_name: "Awa".into(),
            last_name: "Ndiaye".into(),
            gender: Gender::Female,
            date_of_birth: "2014-03-12".into(),
            class_id: "cls-1".into(),
            class_name: "CM2 A".into(),
            is_active: true,
            parent_name: "Moussa Ndiaye".into(),
            parent_phone: "+221 77 123 45 01".into(),
        };
        assert_eq!(TableRecord::id(&student), "s-1");
    }
}
