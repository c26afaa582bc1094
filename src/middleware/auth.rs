use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::app::AppState;
use crate::auth::{fingerprint, AuthRejection};
use crate::error::ApiError;

/// Authorization gate for every protected route.
///
/// The `Authorization` header value is handed to the configured verifier as-is.
/// On success the resulting `Principal` is added to the request extensions.
pub async fn access_gate_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    // Compared as raw bytes; no decoding or prefix stripping
    let credential = headers.get("authorization").map(|value| value.as_bytes());

    let outcome = state.verifier.verify(credential).await;
    audit(state.audit, credential, outcome.as_ref().map(|_| ()).map_err(|r| *r));

    let principal = outcome?;
    request.extensions_mut().insert(principal);

    Ok(next.run(request).await)
}

fn audit(enabled: bool, credential: Option<&[u8]>, outcome: Result<(), AuthRejection>) {
    if !enabled {
        return;
    }
    let presented = credential.map(fingerprint).unwrap_or_else(|| "none".to_string());
    match outcome {
        Ok(()) => tracing::info!(credential = %presented, outcome = "admitted", "access gate"),
        Err(rejection) => tracing::warn!(
            credential = %presented,
            outcome = rejection.message(),
            "access gate"
        ),
    }
}
