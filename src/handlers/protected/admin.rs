use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};

use crate::app::AppState;
use crate::database::access::accounts::{self, NewAccount};
use crate::database::access::admin::{self, NewAssignment, SectionsParams, SubjectsParams};
use crate::database::models::{Assignment, Course, SectionRow, Subject, Teacher, User};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

/// GET /api/admin/teachers
pub async fn teachers(State(state): State<AppState>) -> ApiResult<Vec<Teacher>> {
    Ok(ApiResponse::success(admin::list_teachers(&state.pool).await?))
}

/// GET /api/admin/courses
pub async fn courses(State(state): State<AppState>) -> ApiResult<Vec<Course>> {
    Ok(ApiResponse::success(admin::list_courses(&state.pool).await?))
}

/// GET /api/admin/sections?courseID&year
pub async fn sections(
    State(state): State<AppState>,
    params: Result<Query<SectionsParams>, QueryRejection>,
) -> ApiResult<Vec<SectionRow>> {
    let Query(params) = params?;
    Ok(ApiResponse::success(admin::course_sections(&state.pool, &params).await?))
}

/// GET /api/admin/subjects?courseID&year&semester
pub async fn subjects(
    State(state): State<AppState>,
    params: Result<Query<SubjectsParams>, QueryRejection>,
) -> ApiResult<Vec<Subject>> {
    let Query(params) = params?;
    Ok(ApiResponse::success(admin::subjects_for_slot(&state.pool, &params).await?))
}

/// GET /api/admin/users
pub async fn users(State(state): State<AppState>) -> ApiResult<Vec<User>> {
    Ok(ApiResponse::success(accounts::list_users(&state.pool).await?))
}

/// POST /api/admin/accounts
pub async fn create_account(
    State(state): State<AppState>,
    account: Result<Json<NewAccount>, JsonRejection>,
) -> ApiResult<User> {
    let Json(account) = account?;
    if let Err(field_errors) = account.validate() {
        return Err(ApiError::validation_error("Invalid account", Some(field_errors)));
    }

    match accounts::create_account(&state.pool, &account).await {
        Ok(user) => {
            tracing::info!("Created {} account {}", user.role, user.id);
            Ok(ApiResponse::created(user))
        }
        // 23505: users.email is unique
        Err(e) if e.sqlstate().as_deref() == Some("23505") => {
            Err(ApiError::conflict("An account with this email already exists"))
        }
        Err(e) => Err(e.into()),
    }
}

/// POST /api/admin/assignments
pub async fn create_assignment(
    State(state): State<AppState>,
    assignment: Result<Json<NewAssignment>, JsonRejection>,
) -> ApiResult<Assignment> {
    let Json(assignment) = assignment?;
    let created = admin::create_assignment(&state.pool, &assignment).await?;
    tracing::info!(
        "Assigned teacher {} to subject {} ({}/{}/{})",
        created.teacher_id,
        created.subject_id,
        created.course_id,
        created.year,
        created.section
    );
    Ok(ApiResponse::created(created))
}
