// Password hashing for login accounts

use bcrypt::{hash, verify as bcrypt_verify, DEFAULT_COST};
use thiserror::Error;

/// bcrypt only reads the first 72 bytes of its input
pub const MAX_PASSWORD_BYTES: usize = 72;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    Hashing(String),
}

/// bcrypt hash stored in `users.password`. The salt lives inside the hash.
/// `cost` defaults to `bcrypt::DEFAULT_COST`.
///
/// Runs on the blocking pool; bcrypt is deliberately CPU-heavy.
pub async fn hash_password(password: &str, cost: Option<u32>) -> Result<String, PasswordError> {
    let password = password.to_string();
    let cost = cost.unwrap_or(DEFAULT_COST);

    tokio::task::spawn_blocking(move || hash(password, cost).map_err(|e| PasswordError::Hashing(e.to_string())))
        .await
        .map_err(|e| PasswordError::Hashing(format!("Task join error: {}", e)))?
}

/// `Ok(false)` on a wrong password, `Err` when `stored` is not a bcrypt hash
pub async fn verify_password(password: &str, stored: &str) -> Result<bool, PasswordError> {
    let password = password.to_string();
    let stored = stored.to_string();

    tokio::task::spawn_blocking(move || {
        bcrypt_verify(password, &stored).map_err(|e| PasswordError::Hashing(e.to_string()))
    })
    .await
    .map_err(|e| PasswordError::Hashing(format!("Task join error: {}", e)))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_verifies_only_the_right_password() {
        let stored = hash_password("correct horse", Some(4)).await.unwrap();
        assert!(stored.starts_with("$2"));
        assert!(!stored.contains("correct horse"));
        assert!(verify_password("correct horse", &stored).await.unwrap());
        assert!(!verify_password("battery staple", &stored).await.unwrap());
    }

    #[tokio::test]
    async fn same_password_hashes_differently() {
        let first = hash_password("pw", Some(4)).await.unwrap();
        let second = hash_password("pw", Some(4)).await.unwrap();
        assert_ne!(first, second);
        assert!(verify_password("pw", &first).await.unwrap());
        assert!(verify_password("pw", &second).await.unwrap());
    }

    #[tokio::test]
    async fn cost_is_recorded_in_the_hash() {
        let stored = hash_password("pw", Some(5)).await.unwrap();
        assert!(stored.starts_with("$2b$05$"));
    }

    #[tokio::test]
    async fn non_bcrypt_stored_value_is_an_error() {
        // e.g. a plain SHA-256 hex digest
        let legacy = "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8";
        assert!(verify_password("password", legacy).await.is_err());
    }
}
