pub mod password;

use async_trait::async_trait;
use sha2::{Digest, Sha256};

/// Who was admitted by the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Principal {
    /// Some valid caller, identity unknown (shared-secret mode)
    Caller,
    /// A caller bound to a user account. Reserved for per-user credentials.
    Identified { user_id: i32 },
}

/// Why the gate refused a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRejection {
    /// No credential header was supplied
    MissingCredential,
    /// A credential was supplied but did not verify
    InvalidCredential,
}

impl AuthRejection {
    pub fn message(&self) -> &'static str {
        match self {
            AuthRejection::MissingCredential => "No token",
            AuthRejection::InvalidCredential => "Invalid access token",
        }
    }
}

/// Pluggable credential verification used by the authorization gate
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// `credential` is the raw header value bytes, `None` when the header is absent
    async fn verify(&self, credential: Option<&[u8]>) -> Result<Principal, AuthRejection>;
}

/// Admits any caller presenting exactly the process-wide secret
pub struct SharedSecretVerifier {
    secret: String,
}

impl SharedSecretVerifier {
    pub fn new(secret: impl Into<String>) -> Self {
        Self { secret: secret.into() }
    }
}

#[async_trait]
impl CredentialVerifier for SharedSecretVerifier {
    async fn verify(&self, credential: Option<&[u8]>) -> Result<Principal, AuthRejection> {
        let presented = credential.ok_or(AuthRejection::MissingCredential)?;
        // An unset secret must never match an empty header
        if self.secret.is_empty() || !constant_time_eq(presented, self.secret.as_bytes()) {
            return Err(AuthRejection::InvalidCredential);
        }
        Ok(Principal::Caller)
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Short SHA-256 fingerprint of a credential, safe to write to audit logs
pub fn fingerprint(credential: &[u8]) -> String {
    let hash = Sha256::digest(credential);
    let hex = format!("{:x}", hash);
    hex[..12].to_string()
}
