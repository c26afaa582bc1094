use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Course {
    pub id: i32,
    #[serde(rename = "courseCode")]
    pub course_code: String,
    pub description: String,
}

/// One distinct section name of a course/year cohort
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct SectionRow {
    pub section: String,
}
