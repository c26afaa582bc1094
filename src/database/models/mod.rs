pub mod assignment;
pub mod course;
pub mod grade;
pub mod student;
pub mod subject;
pub mod teacher;
pub mod user;

pub use assignment::{Assignment, RosterEntry, TeacherSection};
pub use course::{Course, SectionRow};
pub use grade::{Grade, SectionGrade, StudentGrade};
pub use student::Student;
pub use subject::Subject;
pub use teacher::Teacher;
pub use user::{Account, Role, User};
