use serde::Serialize;
use sqlx::FromRow;

/// "This teacher teaches this subject to this course/year/section in this semester"
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Assignment {
    pub id: i32,
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

/// One (student, subject) pair visible to a teacher through an assignment
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RosterEntry {
    #[serde(rename = "studentID")]
    pub student_id: i32,
    pub firstname: String,
    pub middlename: Option<String>,
    pub lastname: String,
    #[serde(rename = "subjectID")]
    pub subject_id: i32,
    pub code: String,
    pub description: String,
    #[serde(rename = "courseID")]
    pub course_id: i32,
    pub year: i32,
    pub semester: i32,
    pub section: String,
    #[serde(rename = "teacherID")]
    pub teacher_id: i32,
}

/// A (course, year, section) cohort a teacher handles for one subject code
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TeacherSection {
    #[serde(rename = "aID")]
    pub assignment_id: i32,
    #[serde(rename = "subjectID")]
    pub subject_id: i32,
    #[serde(rename = "courseID")]
    pub course_id: i32,
    #[serde(rename = "courseCode")]
    pub course_code: String,
    pub year: i32,
    pub semester: i32,
    pub section: String,
}
