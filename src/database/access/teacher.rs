use serde::Deserialize;
use sqlx::PgPool;

use crate::database::distinct::distinct_by;
use crate::database::manager::DatabaseError;
use crate::database::models::{RosterEntry, SectionGrade, Student, Subject, TeacherSection};

#[derive(Debug, Clone, Deserialize)]
pub struct RosterParams {
    #[serde(rename = "teacherID")]
    pub teacher_id: i32,
    #[serde(rename = "courseID")]
    pub course_id: i32,
    pub year: i32,
    pub section: String,
}

/// Students a teacher may see in one course/year/section, one row per
/// (student, subject). Only assignments whose subject sits in the assigned
/// course/year/semester slot grant visibility.
pub async fn teacher_roster(pool: &PgPool, params: &RosterParams) -> Result<Vec<RosterEntry>, DatabaseError> {
    let rows = sqlx::query_as::<_, RosterEntry>(
        "SELECT st.id AS student_id, st.firstname, st.middlename, st.lastname,
                s.id AS subject_id, s.code, s.description,
                a.course_id, s.year, s.semester, a.section, t.id AS teacher_id
         FROM assignment a
         JOIN subjects s ON s.id = a.subject_id
                        AND s.course_id = a.course_id
                        AND s.year = a.year
                        AND s.semester = a.semester
         JOIN student st ON st.course_id = a.course_id
                        AND st.year = a.year
                        AND st.section = a.section
         JOIN teacher t ON t.id = a.teacher_id
         WHERE a.teacher_id = $1 AND a.course_id = $2 AND a.year = $3 AND a.section = $4
         ORDER BY s.year, s.semester, a.section, st.lastname, st.firstname, st.id, s.id",
    )
    .bind(params.teacher_id)
    .bind(params.course_id)
    .bind(params.year)
    .bind(&params.section)
    .fetch_all(pool)
    .await
    .map_err(DatabaseError::fetch)?;

    Ok(distinct_by(rows, |r| (r.student_id, r.subject_id)))
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeacherSubjectsParams {
    #[serde(rename = "teacherID")]
    pub teacher_id: i32,
}

/// Subjects the teacher is assigned to, once each
pub async fn teacher_subjects(
    pool: &PgPool,
    params: &TeacherSubjectsParams,
) -> Result<Vec<Subject>, DatabaseError> {
    let rows = sqlx::query_as::<_, Subject>(
        "SELECT s.id, s.course_id, s.year, s.semester, s.code, s.description, s.lec, s.lab
         FROM assignment a
         JOIN subjects s ON s.id = a.subject_id
         WHERE a.teacher_id = $1
         ORDER BY s.code, s.id",
    )
    .bind(params.teacher_id)
    .fetch_all(pool)
    .await
    .map_err(DatabaseError::fetch)?;

    Ok(distinct_by(rows, |s| s.id))
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeacherSectionsParams {
    #[serde(rename = "teacherID")]
    pub teacher_id: i32,
    #[serde(rename = "subjectCode")]
    pub subject_code: String,
}

/// Distinct (course, year, section) cohorts the teacher handles for a subject
/// code. Each carries the lowest matching assignment id.
pub async fn teacher_sections(
    pool: &PgPool,
    params: &TeacherSectionsParams,
) -> Result<Vec<TeacherSection>, DatabaseError> {
    let rows = sqlx::query_as::<_, TeacherSection>(
        "SELECT a.id AS assignment_id, s.id AS subject_id, a.course_id, c.course_code,
                a.year, a.semester, a.section
         FROM assignment a
         JOIN subjects s ON s.id = a.subject_id
         JOIN course c ON c.id = a.course_id
         WHERE a.teacher_id = $1 AND s.code = $2
         ORDER BY c.course_code, a.year, a.section, a.id",
    )
    .bind(params.teacher_id)
    .bind(&params.subject_code)
    .fetch_all(pool)
    .await
    .map_err(DatabaseError::fetch)?;

    Ok(distinct_by(rows, |r| (r.course_id, r.year, r.section.clone())))
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssignmentStudentsParams {
    #[serde(rename = "aID")]
    pub assignment_id: i32,
}

/// Students in the cohort named by one assignment
pub async fn assignment_students(
    pool: &PgPool,
    params: &AssignmentStudentsParams,
) -> Result<Vec<Student>, DatabaseError> {
    sqlx::query_as::<_, Student>(
        "SELECT st.id, st.u_id, st.course_id, st.section, st.year,
                st.firstname, st.middlename, st.lastname
         FROM assignment a
         JOIN student st ON st.course_id = a.course_id
                        AND st.year = a.year
                        AND st.section = a.section
         WHERE a.id = $1
         ORDER BY st.lastname, st.firstname, st.id",
    )
    .bind(params.assignment_id)
    .fetch_all(pool)
    .await
    .map_err(DatabaseError::fetch)
}

#[derive(Debug, Clone, Deserialize)]
pub struct SectionGradesParams {
    #[serde(rename = "subjectID")]
    pub subject_id: i32,
    pub section: String,
    #[serde(rename = "courseID")]
    pub course_id: i32,
    pub year: i32,
}

/// Recorded grades of a (subject, section, course, year) cohort, every term
pub async fn section_grades(
    pool: &PgPool,
    params: &SectionGradesParams,
) -> Result<Vec<SectionGrade>, DatabaseError> {
    sqlx::query_as::<_, SectionGrade>(
        "SELECT st.id AS student_id, st.firstname, st.middlename, st.lastname,
                g.subject_id, g.grade, g.term, g.teacher_id
         FROM grades g
         JOIN student st ON st.id = g.student_id
         WHERE g.subject_id = $1 AND st.section = $2 AND st.course_id = $3 AND st.year = $4
         ORDER BY st.lastname, st.firstname, st.id, g.term",
    )
    .bind(params.subject_id)
    .bind(&params.section)
    .bind(params.course_id)
    .bind(params.year)
    .fetch_all(pool)
    .await
    .map_err(DatabaseError::fetch)
}
