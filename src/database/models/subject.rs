use serde::Serialize;
use sqlx::FromRow;

/// A subject occupies exactly one course/year/semester slot
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Subject {
    pub id: i32,
    #[serde(rename = "courseID")]
    pub course_id: i32,
    pub year: i32,
    pub semester: i32,
    pub code: String,
    pub description: String,
    pub lec: i32,
    pub lab: i32,
}
