pub mod auth;
pub mod response;

pub use auth::access_gate_middleware;
pub use response::{ApiResponse, ApiResult};
