//! One function per use case. Each issues a single parameterized statement
//! against the pool and returns typed rows; an empty result is not an error.
//! Caller-supplied values are only ever bound, never formatted into SQL.

pub mod accounts;
pub mod admin;
pub mod grades;
pub mod student;
pub mod teacher;
