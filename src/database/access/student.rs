use serde::Deserialize;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{StudentGrade, Subject};

#[derive(Debug, Clone, Deserialize)]
pub struct StudentGradesParams {
    /// Users.id of the student account
    #[serde(rename = "userID")]
    pub user_id: i32,
    pub year: i32,
    pub semester: i32,
    pub term: String,
}

/// A student's own grades for one year/semester/term, by subject id
pub async fn grades_by_student(
    pool: &PgPool,
    params: &StudentGradesParams,
) -> Result<Vec<StudentGrade>, DatabaseError> {
    sqlx::query_as::<_, StudentGrade>(
        "SELECT s.id AS subject_id, s.code, s.description, s.lec, s.lab, s.year, s.semester,
                g.grade, g.term, g.teacher_id
         FROM grades g
         JOIN subjects s ON s.id = g.subject_id
         JOIN student st ON st.id = g.student_id
         WHERE st.u_id = $1 AND s.year = $2 AND s.semester = $3 AND g.term = $4
         ORDER BY s.id",
    )
    .bind(params.user_id)
    .bind(params.year)
    .bind(params.semester)
    .bind(&params.term)
    .fetch_all(pool)
    .await
    .map_err(DatabaseError::fetch)
}

#[derive(Debug, Clone, Deserialize)]
pub struct StudentSubjectsParams {
    #[serde(rename = "userID")]
    pub user_id: i32,
}

/// Every subject of the student's course
pub async fn subjects_for_student(
    pool: &PgPool,
    params: &StudentSubjectsParams,
) -> Result<Vec<Subject>, DatabaseError> {
    sqlx::query_as::<_, Subject>(
        "SELECT s.id, s.course_id, s.year, s.semester, s.code, s.description, s.lec, s.lab
         FROM subjects s
         JOIN student st ON st.course_id = s.course_id
         WHERE st.u_id = $1
         ORDER BY s.id",
    )
    .bind(params.user_id)
    .fetch_all(pool)
    .await
    .map_err(DatabaseError::fetch)
}
