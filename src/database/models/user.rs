use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Login principal kind. Stored as lowercase text in `users.role`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "student" => Some(Role::Student),
            "teacher" => Some(Role::Teacher),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i32,
    pub email: String,
    /// bcrypt hash; never leaves the process
    #[serde(skip_serializing)]
    pub password: String,
    pub role: String,
    #[serde(rename = "courseID")]
    pub course_id: Option<i32>,
    pub section: Option<String>,
    pub year: Option<i32>,
    pub firstname: String,
    pub middlename: Option<String>,
    pub lastname: String,
    pub birthdate: Option<NaiveDate>,
}

impl User {
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }
}

/// A user row plus the id of its student or teacher specialisation
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Account {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub user: User,
    #[serde(rename = "studentID")]
    pub student_id: Option<i32>,
    #[serde(rename = "teacherID")]
    pub teacher_id: Option<i32>,
}
