use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::collections::HashMap;

use crate::app::AppState;
use crate::database::access::grades::{self, GradeSubmission};
use crate::database::models::Grade;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

/// POST /api/grades - record a grade; re-submitting the same
/// (subjectID, studentID, term) updates the existing row.
pub async fn submit(
    State(state): State<AppState>,
    submission: Result<Json<GradeSubmission>, JsonRejection>,
) -> ApiResult<Grade> {
    let Json(submission) = submission?;
    if submission.term.trim().is_empty() {
        let mut field_errors = HashMap::new();
        field_errors.insert("term".to_string(), "This field is required".to_string());
        return Err(ApiError::validation_error("Invalid grade submission", Some(field_errors)));
    }

    let stored = grades::upsert_grade(&state.pool, &submission).await?;
    tracing::debug!(
        "Grade stored: subject={} student={} term={}",
        stored.subject_id,
        stored.student_id,
        stored.term
    );
    Ok(ApiResponse::created(stored))
}
