// handlers/public/login.rs - POST /login

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;

use crate::app::AppState;
use crate::auth::password;
use crate::database::access::accounts;
use crate::database::models::Account;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /login - check an email/password pair and return the account,
/// including its student or teacher id for the follow-up lookups.
///
/// Unknown email and wrong password are indistinguishable to the caller.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Account> {
    let Json(payload) = payload?;
    let account = accounts::find_account_by_email(&state.pool, &payload.email).await?;

    let Some(account) = account else {
        tracing::info!("Login rejected");
        return Err(ApiError::unauthorized("Invalid email or password"));
    };

    match password::verify_password(&payload.password, &account.user.password).await {
        Ok(true) => {
            tracing::info!("Login succeeded for user {}", account.user.id);
            Ok(ApiResponse::success(account))
        }
        Ok(false) => {
            tracing::info!("Login rejected");
            Err(ApiError::unauthorized("Invalid email or password"))
        }
        Err(e) => {
            tracing::warn!("Unreadable password hash for user {}: {}", account.user.id, e);
            Err(ApiError::unauthorized("Invalid email or password"))
        }
    }
}
