// handlers/public/mod.rs - Public handlers (no credential required)
//
// Service information, liveness and login.

mod health;
mod login;

pub use health::{health, root};
pub use login::login;
