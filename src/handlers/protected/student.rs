use axum::extract::{rejection::QueryRejection, Query, State};

use crate::app::AppState;
use crate::database::access::student::{self, StudentGradesParams, StudentSubjectsParams};
use crate::database::models::{StudentGrade, Subject};
use crate::middleware::{ApiResponse, ApiResult};

/// GET /api/student/grades?userID&year&semester&term
pub async fn grades(
    State(state): State<AppState>,
    params: Result<Query<StudentGradesParams>, QueryRejection>,
) -> ApiResult<Vec<StudentGrade>> {
    let Query(params) = params?;
    let rows = student::grades_by_student(&state.pool, &params).await?;
    Ok(ApiResponse::success(rows))
}

/// GET /api/student/subjects?userID
pub async fn subjects(
    State(state): State<AppState>,
    params: Result<Query<StudentSubjectsParams>, QueryRejection>,
) -> ApiResult<Vec<Subject>> {
    let Query(params) = params?;
    let rows = student::subjects_for_student(&state.pool, &params).await?;
    Ok(ApiResponse::success(rows))
}
