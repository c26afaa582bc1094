use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Student {
    pub id: i32,
    #[serde(rename = "uID")]
    pub u_id: i32,
    #[serde(rename = "courseID")]
    pub course_id: i32,
    pub section: String,
    pub year: i32,
    pub firstname: String,
    pub middlename: Option<String>,
    pub lastname: String,
}
