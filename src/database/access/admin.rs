use serde::Deserialize;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{Assignment, Course, SectionRow, Subject, Teacher};

/// Teacher directory, by surname then given name
pub async fn list_teachers(pool: &PgPool) -> Result<Vec<Teacher>, DatabaseError> {
    sqlx::query_as::<_, Teacher>(
        "SELECT id, u_id, firstname, middlename, lastname
         FROM teacher
         ORDER BY lastname, firstname, id",
    )
    .fetch_all(pool)
    .await
    .map_err(DatabaseError::fetch)
}

pub async fn list_courses(pool: &PgPool) -> Result<Vec<Course>, DatabaseError> {
    sqlx::query_as::<_, Course>(
        "SELECT id, course_code, description
         FROM course
         ORDER BY description, id",
    )
    .fetch_all(pool)
    .await
    .map_err(DatabaseError::fetch)
}

#[derive(Debug, Clone, Deserialize)]
pub struct SectionsParams {
    #[serde(rename = "courseID")]
    pub course_id: i32,
    pub year: i32,
}

/// Section names in use by students of a course/year
pub async fn course_sections(pool: &PgPool, params: &SectionsParams) -> Result<Vec<SectionRow>, DatabaseError> {
    sqlx::query_as::<_, SectionRow>(
        "SELECT DISTINCT section
         FROM student
         WHERE course_id = $1 AND year = $2
         ORDER BY section",
    )
    .bind(params.course_id)
    .bind(params.year)
    .fetch_all(pool)
    .await
    .map_err(DatabaseError::fetch)
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubjectsParams {
    #[serde(rename = "courseID")]
    pub course_id: i32,
    pub year: i32,
    pub semester: i32,
}

pub async fn subjects_for_slot(pool: &PgPool, params: &SubjectsParams) -> Result<Vec<Subject>, DatabaseError> {
    sqlx::query_as::<_, Subject>(
        "SELECT id, course_id, year, semester, code, description, lec, lab
         FROM subjects
         WHERE course_id = $1 AND year = $2 AND semester = $3
         ORDER BY id",
    )
    .bind(params.course_id)
    .bind(params.year)
    .bind(params.semester)
    .fetch_all(pool)
    .await
    .map_err(DatabaseError::fetch)
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewAssignment {
    #[serde(rename = "teacherID")]
    pub teacher_id: i32,
    #[serde(rename = "subjectID")]
    pub subject_id: i32,
    #[serde(rename = "courseID")]
    pub course_id: i32,
    pub year: i32,
    pub semester: i32,
    pub section: String,
}

/// Plain insert. Duplicate assignments are accepted as-is.
pub async fn create_assignment(pool: &PgPool, assignment: &NewAssignment) -> Result<Assignment, DatabaseError> {
    sqlx::query_as::<_, Assignment>(
        "INSERT INTO assignment (teacher_id, subject_id, course_id, year, semester, section)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING id, teacher_id, subject_id, course_id, year, semester, section",
    )
    .bind(assignment.teacher_id)
    .bind(assignment.subject_id)
    .bind(assignment.course_id)
    .bind(assignment.year)
    .bind(assignment.semester)
    .bind(&assignment.section)
    .fetch_one(pool)
    .await
    .map_err(DatabaseError::insert)
}
