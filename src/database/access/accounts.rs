use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::PgPool;
use std::collections::HashMap;

use crate::auth::password;
use crate::database::manager::DatabaseError;
use crate::database::models::{Account, Role, User};

/// Emails are matched case-insensitively by storing them normalised
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Look up the account used for login. Returns zero or one row.
pub async fn find_account_by_email(pool: &PgPool, email: &str) -> Result<Option<Account>, DatabaseError> {
    sqlx::query_as::<_, Account>(
        "SELECT u.id, u.email, u.password, u.role, u.course_id, u.section, u.year,
                u.firstname, u.middlename, u.lastname, u.birthdate,
                st.id AS student_id, t.id AS teacher_id
         FROM users u
         LEFT JOIN student st ON st.u_id = u.id
         LEFT JOIN teacher t ON t.u_id = u.id
         WHERE u.email = $1
         ORDER BY u.id
         LIMIT 1",
    )
    .bind(normalize_email(email))
    .fetch_optional(pool)
    .await
    .map_err(DatabaseError::fetch)
}

/// Every account, oldest first
pub async fn list_users(pool: &PgPool) -> Result<Vec<User>, DatabaseError> {
    sqlx::query_as::<_, User>(
        "SELECT id, email, password, role, course_id, section, year,
                firstname, middlename, lastname, birthdate
         FROM users
         ORDER BY id",
    )
    .fetch_all(pool)
    .await
    .map_err(DatabaseError::fetch)
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(rename = "courseID", default)]
    pub course_id: Option<i32>,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    pub firstname: String,
    #[serde(default)]
    pub middlename: Option<String>,
    pub lastname: String,
    #[serde(default)]
    pub birthdate: Option<NaiveDate>,
}

impl NewAccount {
    /// Field-level problems that would otherwise surface as constraint errors
    pub fn validate(&self) -> Result<(), HashMap<String, String>> {
        let mut errors = HashMap::new();
        if !self.email.contains('@') {
            errors.insert("email".to_string(), "Must be an email address".to_string());
        }
        if self.password.is_empty() {
            errors.insert("password".to_string(), "This field is required".to_string());
        } else if self.password.len() > password::MAX_PASSWORD_BYTES {
            errors.insert("password".to_string(), "Must be at most 72 bytes".to_string());
        }
        if self.firstname.trim().is_empty() {
            errors.insert("firstname".to_string(), "This field is required".to_string());
        }
        if self.lastname.trim().is_empty() {
            errors.insert("lastname".to_string(), "This field is required".to_string());
        }
        // A student row needs its cohort
        if self.role == Role::Student {
            if self.course_id.is_none() {
                errors.insert("courseID".to_string(), "Required for students".to_string());
            }
            if self.section.as_deref().map_or(true, |s| s.trim().is_empty()) {
                errors.insert("section".to_string(), "Required for students".to_string());
            }
            if self.year.is_none() {
                errors.insert("year".to_string(), "Required for students".to_string());
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Insert a Users row and, in the same statement, its Student or Teacher row.
pub async fn create_account(pool: &PgPool, account: &NewAccount) -> Result<User, DatabaseError> {
    let email = normalize_email(&account.email);
    let cost = crate::config::config().security.password_hash_cost;
    let password_hash = password::hash_password(&account.password, Some(cost)).await?;

    sqlx::query_as::<_, User>(
        "WITH account AS (
             INSERT INTO users (email, password, role, course_id, section, year,
                                firstname, middlename, lastname, birthdate)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING *
         ), student_row AS (
             INSERT INTO student (u_id, course_id, section, year, firstname, middlename, lastname)
             SELECT id, course_id, section, year, firstname, middlename, lastname
             FROM account WHERE role = 'student'
         ), teacher_row AS (
             INSERT INTO teacher (u_id, firstname, middlename, lastname)
             SELECT id, firstname, middlename, lastname
             FROM account WHERE role = 'teacher'
         )
         SELECT id, email, password, role, course_id, section, year,
                firstname, middlename, lastname, birthdate
         FROM account",
    )
    .bind(&email)
    .bind(&password_hash)
    .bind(account.role.as_str())
    .bind(account.course_id)
    .bind(&account.section)
    .bind(account.year)
    .bind(&account.firstname)
    .bind(&account.middlename)
    .bind(&account.lastname)
    .bind(account.birthdate)
    .fetch_one(pool)
    .await
    .map_err(DatabaseError::insert)
}
