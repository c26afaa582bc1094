use anyhow::Result;
use sqlx::PgPool;

use records_api::database::access::accounts::{self, NewAccount};
use records_api::database::access::admin::{self, NewAssignment};
use records_api::database::models::Role;

#[derive(Debug, Clone, Copy)]
pub struct SeededStudent {
    pub user_id: i32,
    pub student_id: i32,
}

/// Two courses, four subjects, two teachers, four students and a set of
/// assignments including a duplicate and one whose subject is in another semester.
pub struct Fixture {
    pub bsit: i32,
    pub bscs: i32,
    /// BSIT year 1 semester 1
    pub it101: i32,
    pub it102: i32,
    /// BSIT year 1 semester 2
    pub it103: i32,
    /// BSCS year 1 semester 1
    pub cs101: i32,
    pub reyes: i32,
    pub santos: i32,
    /// BSIT 1-A
    pub cruz: SeededStudent,
    pub bautista: SeededStudent,
    /// BSIT 1-B
    pub dizon: SeededStudent,
    /// BSCS 1-A
    pub garcia: SeededStudent,
    /// Reyes teaches IT101 to BSIT 1-A (recorded twice)
    pub it101_a: i32,
    pub it101_a_again: i32,
    pub it101_b: i32,
}

pub const PASSWORD: &str = "s3cret-pw";

impl Fixture {
    pub async fn seed(pool: &PgPool) -> Result<Self> {
        let bsit = course(pool, "BSIT", "Information Technology").await?;
        let bscs = course(pool, "BSCS", "Computer Science").await?;

        let it101 = subject(pool, bsit, 1, 1, "IT101", "Introduction to Computing").await?;
        let it102 = subject(pool, bsit, 1, 1, "IT102", "Computer Programming 1").await?;
        let it103 = subject(pool, bsit, 1, 2, "IT103", "Computer Programming 2").await?;
        let cs101 = subject(pool, bscs, 1, 1, "CS101", "Discrete Structures").await?;

        let reyes = teacher(pool, "reyes@school.edu", "Maria", "Reyes").await?;
        let santos = teacher(pool, "santos@school.edu", "Jose", "Santos").await?;

        let cruz = student(pool, "cruz@school.edu", "Juan", "Cruz", bsit, 1, "A").await?;
        let bautista = student(pool, "bautista@school.edu", "Ana", "Bautista", bsit, 1, "A").await?;
        let dizon = student(pool, "dizon@school.edu", "Pedro", "Dizon", bsit, 1, "B").await?;
        let garcia = student(pool, "garcia@school.edu", "Liza", "Garcia", bscs, 1, "A").await?;

        let it101_a = assign(pool, reyes, it101, bsit, 1, 1, "A").await?;
        let it101_a_again = assign(pool, reyes, it101, bsit, 1, 1, "A").await?;
        assign(pool, reyes, it102, bsit, 1, 1, "A").await?;
        let it101_b = assign(pool, reyes, it101, bsit, 1, 1, "B").await?;
        // IT103 belongs to semester 2; this row must not expose it in a semester-1 roster
        assign(pool, reyes, it103, bsit, 1, 1, "A").await?;
        assign(pool, santos, it103, bsit, 1, 2, "A").await?;
        assign(pool, santos, cs101, bscs, 1, 1, "A").await?;

        Ok(Self {
            bsit,
            bscs,
            it101,
            it102,
            it103,
            cs101,
            reyes,
            santos,
            cruz,
            bautista,
            dizon,
            garcia,
            it101_a,
            it101_a_again,
            it101_b,
        })
    }
}

async fn course(pool: &PgPool, code: &str, description: &str) -> Result<i32> {
    let id = sqlx::query_scalar::<_, i32>(
        "INSERT INTO course (course_code, description) VALUES ($1, $2) RETURNING id",
    )
    .bind(code)
    .bind(description)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

async fn subject(pool: &PgPool, course_id: i32, year: i32, semester: i32, code: &str, description: &str) -> Result<i32> {
    let id = sqlx::query_scalar::<_, i32>(
        "INSERT INTO subjects (course_id, year, semester, code, description, lec, lab)
         VALUES ($1, $2, $3, $4, $5, 3, 1)
         RETURNING id",
    )
    .bind(course_id)
    .bind(year)
    .bind(semester)
    .bind(code)
    .bind(description)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

fn new_account(email: &str, firstname: &str, lastname: &str, role: Role) -> NewAccount {
    NewAccount {
        email: email.to_string(),
        password: PASSWORD.to_string(),
        role,
        course_id: None,
        section: None,
        year: None,
        firstname: firstname.to_string(),
        middlename: None,
        lastname: lastname.to_string(),
        birthdate: None,
    }
}

async fn teacher(pool: &PgPool, email: &str, firstname: &str, lastname: &str) -> Result<i32> {
    accounts::create_account(pool, &new_account(email, firstname, lastname, Role::Teacher)).await?;
    let account = accounts::find_account_by_email(pool, email)
        .await?
        .ok_or_else(|| anyhow::anyhow!("teacher account {} missing", email))?;
    account
        .teacher_id
        .ok_or_else(|| anyhow::anyhow!("teacher row for {} missing", email))
}

async fn student(
    pool: &PgPool,
    email: &str,
    firstname: &str,
    lastname: &str,
    course_id: i32,
    year: i32,
    section: &str,
) -> Result<SeededStudent> {
    let mut account = new_account(email, firstname, lastname, Role::Student);
    account.course_id = Some(course_id);
    account.year = Some(year);
    account.section = Some(section.to_string());

    let user = accounts::create_account(pool, &account).await?;
    let stored = accounts::find_account_by_email(pool, email)
        .await?
        .ok_or_else(|| anyhow::anyhow!("student account {} missing", email))?;
    let student_id = stored
        .student_id
        .ok_or_else(|| anyhow::anyhow!("student row for {} missing", email))?;

    Ok(SeededStudent {
        user_id: user.id,
        student_id,
    })
}

async fn assign(
    pool: &PgPool,
    teacher_id: i32,
    subject_id: i32,
    course_id: i32,
    year: i32,
    semester: i32,
    section: &str,
) -> Result<i32> {
    let created = admin::create_assignment(
        pool,
        &NewAssignment {
            teacher_id,
            subject_id,
            course_id,
            year,
            semester,
            section: section.to_string(),
        },
    )
    .await?;
    Ok(created.id)
}
