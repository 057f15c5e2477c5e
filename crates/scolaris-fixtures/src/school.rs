//! Students and class groups.

use scolaris_core::{ClassGroup, Gender, Student};

#[allow(clippy::too_many_arguments)]
fn student(
    id: &str,
    registration_no: &str,
    first_name: &str,
    last_name: &str,
    gender: Gender,
    date_of_birth: &str,
    class: (&str, &str),
    is_active: bool,
    parent: (&str, &str),
) -> Student {
    Student {
        id: id.to_string(),
        registration_no: registration_no.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        gender,
        date_of_birth: date_of_birth.to_string(),
        class_id: class.0.to_string(),
        class_name: class.1.to_string(),
        is_active,
        parent_name: parent.0.to_string(),
        parent_phone: parent.1.to_string(),
    }
}

/// Enrolled students. Twelve records so the default page size pages.
#[must_use]
pub fn students() -> Vec<Student> {
    let cm2a = ("cls-1", "CM2 A");
    let cm2b = ("cls-2", "CM2 B");
    let cm1a = ("cls-3", "CM1 A");
    let ce2a = ("cls-4", "CE2 A");
    vec![
        student("s-1", "2025-001", "Awa", "Ndiaye", Gender::Female, "2014-03-12", cm2a, true, ("Moussa Ndiaye", "+221 77 123 45 01")),
        student("s-2", "2025-002", "Mamadou", "Diallo", Gender::Male, "2014-07-25", cm2a, true, ("Aïssatou Diallo", "+221 77 123 45 02")),
        student("s-3", "2025-003", "Khady", "Camara", Gender::Female, "2013-11-02", cm2b, true, ("Ousmane Camara", "+221 77 123 45 03")),
        student("s-4", "2025-004", "Cheikh", "Sow", Gender::Male, "2014-01-18", cm2b, true, ("Bineta Sow", "+221 77 123 45 04")),
        student("s-5", "2025-005", "Astou", "Fall", Gender::Female, "2015-05-09", cm1a, true, ("Ibrahima Fall", "+221 77 123 45 05")),
        student("s-6", "2025-006", "Modou", "Gueye", Gender::Male, "2015-09-30", cm1a, true, ("Ndeye Gueye", "+221 77 123 45 06")),
        student("s-7", "2025-007", "Adama", "Ba", Gender::Female, "2014-12-14", cm2a, false, ("Serigne Ba", "+221 77 123 45 07")),
        student("s-8", "2025-008", "Ibou", "Sarr", Gender::Male, "2016-02-21", ce2a, true, ("Maguette Sarr", "+221 77 123 45 08")),
        student("s-9", "2025-009", "Élise", "Mendy", Gender::Female, "2016-06-03", ce2a, true, ("Joseph Mendy", "+221 77 123 45 09")),
        student("s-10", "2025-010", "Pape", "Diop", Gender::Male, "2015-04-27", cm1a, true, ("Rokhaya Diop", "+221 77 123 45 10")),
        student("s-11", "2025-011", "Sokhna", "Cissé", Gender::Female, "2014-08-11", cm2b, true, ("Abdou Cissé", "+221 77 123 45 11")),
        student("s-12", "2025-012", "Omar", "Camara", Gender::Male, "2013-10-06", cm2b, false, ("Ousmane Camara", "+221 77 123 45 03")),
    ]
}

/// Class groups referenced by the student records.
#[must_use]
pub fn classes() -> Vec<ClassGroup> {
    let class = |id: &str, name: &str, level: &str, count: u32, teacher: &str| ClassGroup {
        id: id.to_string(),
        name: name.to_string(),
        level: level.to_string(),
        students_count: count,
        teacher_name: teacher.to_string(),
    };
    vec![
        class("cls-1", "CM2 A", "CM2", 3, "Marie Faye"),
        class("cls-2", "CM2 B", "CM2", 4, "Abdoulaye Thiam"),
        class("cls-3", "CM1 A", "CM1", 3, "Marie Faye"),
        class("cls-4", "CE2 A", "CE2", 2, "Coumba Niang"),
    ]
}

/// Students whose parent contact matches the given parent.
#[must_use]
pub fn students_of_parent(parent_name: &str) -> Vec<Student> {
    students()
        .into_iter()
        .filter(|s| s.parent_name == parent_name)
        .collect()
}
