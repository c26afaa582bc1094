// handlers/protected/mod.rs - Protected handlers (access gate required)
//
// Route prefix: /api/*. The gate runs as a route layer before any of these,
// so a handler only executes for an admitted caller.

pub mod admin;
pub mod grades;
pub mod student;
pub mod teacher;
