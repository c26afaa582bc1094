use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::{CredentialVerifier, SharedSecretVerifier};
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::handlers::{protected, public};
use crate::middleware::access_gate_middleware;

/// Shared by every handler. Holds no per-request mutable state.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub verifier: Arc<dyn CredentialVerifier>,
    /// Emit one audit event per gate check
    pub audit: bool,
}

impl AppState {
    pub fn new(pool: PgPool, verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self {
            pool,
            verifier,
            audit: true,
        }
    }

    /// Shared-secret gate configured from `ACCESS_TOKEN`
    pub fn from_config(pool: PgPool, config: &AppConfig) -> Self {
        let verifier = Arc::new(SharedSecretVerifier::new(config.security.access_token.clone()));
        Self {
            pool,
            verifier,
            audit: config.security.enable_audit_logging,
        }
    }
}

/// Full application: routes plus CORS and request tracing
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let mut router = router(state);

    if config.security.enable_cors {
        router = router.layer(cors_layer(&config.security.cors_origins));
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router
}

/// Routes only, without global layers
pub fn router(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(public::root))
        .route("/health", get(public::health))
        .route("/login", post(public::login))
        // Behind the access gate
        .merge(protected_routes(state.clone()))
        .fallback(not_found)
        .with_state(state)
}

fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/student/grades", get(protected::student::grades))
        .route("/api/student/subjects", get(protected::student::subjects))
        .route("/api/teacher/roster", get(protected::teacher::roster))
        .route("/api/teacher/subjects", get(protected::teacher::subjects))
        .route("/api/teacher/sections", get(protected::teacher::sections))
        .route("/api/teacher/students", get(protected::teacher::students))
        .route("/api/teacher/grades", get(protected::teacher::grades))
        .route("/api/grades", post(protected::grades::submit))
        .route("/api/admin/teachers", get(protected::admin::teachers))
        .route("/api/admin/courses", get(protected::admin::courses))
        .route("/api/admin/sections", get(protected::admin::sections))
        .route("/api/admin/subjects", get(protected::admin::subjects))
        .route("/api/admin/users", get(protected::admin::users))
        .route("/api/admin/accounts", post(protected::admin::create_account))
        .route("/api/admin/assignments", post(protected::admin::create_assignment))
        .route_layer(middleware::from_fn_with_state(state, access_gate_middleware))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}

async fn not_found() -> ApiError {
    ApiError::not_found("Route not found")
}
