use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Teacher {
    pub id: i32,
    #[serde(rename = "uID")]
    pub u_id: i32,
    pub firstname: String,
    pub middlename: Option<String>,
    pub lastname: String,
}
