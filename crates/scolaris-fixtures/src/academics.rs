//! Grade records.

use scolaris_core::{EvaluationType, Grade};

#[allow(clippy::too_many_arguments)]
fn grade(
    id: &str,
    student: (&str, &str),
    evaluation_title: &str,
    evaluation_type: EvaluationType,
    subject_name: &str,
    score: f64,
    coefficient: u32,
    is_absent: bool,
    comment: &str,
    created_at: &str,
) -> Grade {
    Grade {
        id: id.to_string(),
        student_id: student.0.to_string(),
        student_name: student.1.to_string(),
        evaluation_title: evaluation_title.to_string(),
        evaluation_type,
        subject_name: subject_name.to_string(),
        score,
        max_score: 20.0,
        coefficient,
        is_absent,
        comment: comment.to_string(),
        created_at: created_at.to_string(),
    }
}

/// Recorded evaluations.
#[must_use]
pub fn grades() -> Vec<Grade> {
    use EvaluationType::{ClassTest, Exam, Homework, Oral};
    vec![
        grade("g-1", ("s-1", "Awa Ndiaye"), "Devoir n°1", ClassTest, "Mathématiques", 15.5, 2, false, "Bon travail", "2025-10-02T10:00:00"),
        grade("g-2", ("s-2", "Mamadou Diallo"), "Devoir n°1", ClassTest, "Mathématiques", 12.0, 2, false, "", "2025-10-02T10:00:00"),
        grade("g-3", ("s-7", "Adama Ba"), "Devoir n°1", ClassTest, "Mathématiques", 0.0, 2, true, "Absente", "2025-10-02T10:00:00"),
        grade("g-4", ("s-1", "Awa Ndiaye"), "Dictée préparée", Homework, "Français", 17.0, 1, false, "Très bien", "2025-09-29T09:00:00"),
        grade("g-5", ("s-3", "Khady Camara"), "Récitation", Oral, "Français", 14.0, 1, false, "", "2025-09-26T11:00:00"),
        grade("g-6", ("s-12", "Omar Camara"), "Récitation", Oral, "Français", 11.5, 1, false, "Peut mieux faire", "2025-09-26T11:00:00"),
        grade("g-7", ("s-5", "Astou Fall"), "Composition 1er trimestre", Exam, "Sciences", 16.0, 3, false, "Excellente copie", "2025-09-22T08:30:00"),
        grade("g-8", ("s-10", "Pape Diop"), "Composition 1er trimestre", Exam, "Sciences", 9.5, 3, false, "Des lacunes en géométrie", "2025-09-22T08:30:00"),
    ]
}

/// Grades for the given students.
#[must_use]
pub fn grades_for_students(student_ids: &[&str]) -> Vec<Grade> {
    grades()
        .into_iter()
        .filter(|g| student_ids.contains(&g.student_id.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_within_scale() {
        for grade in grades() {
            assert!(grade.score >= 0.0 && grade.score <= grade.max_score, "{}", grade.id);
        }
    }

    #[test]
    fn test_absent_students_score_zero() {
        for grade in grades() {
            if grade.is_absent {
                assert_eq!(grade.score, 0.0, "{}", grade.id);
            }
        }
    }

    #[test]
    fn test_filter_by_student() {
        let filtered = grades_for_students(&["s-1"]);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|g| g.student_id == "s-1"));
    }
}
