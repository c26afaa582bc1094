pub mod access;
pub mod distinct;
pub mod manager;
pub mod models;

pub use manager::{DatabaseError, DatabaseManager, MIGRATOR};
