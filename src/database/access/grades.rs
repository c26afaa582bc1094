use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::Grade;

#[derive(Debug, Clone, Deserialize)]
pub struct GradeSubmission {
    #[serde(rename = "subjectID")]
    pub subject_id: i32,
    #[serde(rename = "studentID")]
    pub student_id: i32,
    #[serde(rename = "teacherID")]
    pub teacher_id: i32,
    /// `null` records the teacher without touching an existing grade
    #[serde(default)]
    pub grade: Option<Decimal>,
    pub term: String,
}

/// Insert-or-update keyed on (subject, student, term), as one statement.
///
/// On conflict the teacher is always replaced; the grade only when the new
/// value is non-null. Returns the row as stored.
pub async fn upsert_grade(pool: &PgPool, submission: &GradeSubmission) -> Result<Grade, DatabaseError> {
    sqlx::query_as::<_, Grade>(
        "INSERT INTO grades (subject_id, student_id, teacher_id, grade, term)
         VALUES ($1, $2, $3, $4, $5)
         ON CONFLICT ON CONSTRAINT grades_subject_student_term_key DO UPDATE SET
             teacher_id = EXCLUDED.teacher_id,
             grade = COALESCE(EXCLUDED.grade, grades.grade),
             updated_at = now()
         RETURNING id, subject_id, student_id, teacher_id, grade, term, recorded_at, updated_at",
    )
    .bind(submission.subject_id)
    .bind(submission.student_id)
    .bind(submission.teacher_id)
    .bind(submission.grade)
    .bind(&submission.term)
    .fetch_one(pool)
    .await
    .map_err(DatabaseError::insert)
}
