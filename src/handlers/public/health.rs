use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::database::DatabaseManager;

/// GET / - service information
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Records API",
            "version": version,
            "description": "Academic records backend: students, teachers, subjects and grades",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "login": "/login (public)",
                "student": "/api/student/{grades,subjects} (protected)",
                "teacher": "/api/teacher/{roster,subjects,sections,students,grades} (protected)",
                "grades": "/api/grades (protected)",
                "admin": "/api/admin/{teachers,courses,sections,subjects,users,accounts,assignments} (protected)",
            }
        }
    }))
}

/// GET /health - database ping
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "success": false,
                    "error": "database unavailable",
                    "data": {
                        "status": "degraded",
                        "timestamp": now
                    }
                })),
            )
        }
    }
}
