use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// A stored Grades row. At most one exists per (subject, student, term).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Grade {
    pub id: i32,
    #[serde(rename = "subjectID")]
    pub subject_id: i32,
    #[serde(rename = "studentID")]
    pub student_id: i32,
    #[serde(rename = "teacherID")]
    pub teacher_id: i32,
    pub grade: Option<Decimal>,
    pub term: String,
    #[serde(rename = "recordedAt")]
    pub recorded_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// A student's own grade joined with its subject
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct StudentGrade {
    #[serde(rename = "subjectID")]
    pub subject_id: i32,
    pub code: String,
    pub description: String,
    pub lec: i32,
    pub lab: i32,
    pub year: i32,
    pub semester: i32,
    pub grade: Option<Decimal>,
    pub term: String,
    #[serde(rename = "teacherID")]
    pub teacher_id: i32,
}

/// A grade of one student in a (subject, section, course, year) cohort
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SectionGrade {
    #[serde(rename = "studentID")]
    pub student_id: i32,
    pub firstname: String,
    pub middlename: Option<String>,
    pub lastname: String,
    #[serde(rename = "subjectID")]
    pub subject_id: i32,
    pub grade: Option<Decimal>,
    pub term: String,
    #[serde(rename = "teacherID")]
    pub teacher_id: i32,
}
