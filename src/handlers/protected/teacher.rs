use axum::extract::{rejection::QueryRejection, Query, State};

use crate::app::AppState;
use crate::database::access::teacher::{
    self, AssignmentStudentsParams, RosterParams, SectionGradesParams, TeacherSectionsParams,
    TeacherSubjectsParams,
};
use crate::database::models::{RosterEntry, SectionGrade, Student, Subject, TeacherSection};
use crate::middleware::{ApiResponse, ApiResult};

/// GET /api/teacher/roster?teacherID&courseID&year&section
pub async fn roster(
    State(state): State<AppState>,
    params: Result<Query<RosterParams>, QueryRejection>,
) -> ApiResult<Vec<RosterEntry>> {
    let Query(params) = params?;
    let rows = teacher::teacher_roster(&state.pool, &params).await?;
    Ok(ApiResponse::success(rows))
}

/// GET /api/teacher/subjects?teacherID
pub async fn subjects(
    State(state): State<AppState>,
    params: Result<Query<TeacherSubjectsParams>, QueryRejection>,
) -> ApiResult<Vec<Subject>> {
    let Query(params) = params?;
    let rows = teacher::teacher_subjects(&state.pool, &params).await?;
    Ok(ApiResponse::success(rows))
}

/// GET /api/teacher/sections?teacherID&subjectCode
pub async fn sections(
    State(state): State<AppState>,
    params: Result<Query<TeacherSectionsParams>, QueryRejection>,
) -> ApiResult<Vec<TeacherSection>> {
    let Query(params) = params?;
    let rows = teacher::teacher_sections(&state.pool, &params).await?;
    Ok(ApiResponse::success(rows))
}

/// GET /api/teacher/students?aID
pub async fn students(
    State(state): State<AppState>,
    params: Result<Query<AssignmentStudentsParams>, QueryRejection>,
) -> ApiResult<Vec<Student>> {
    let Query(params) = params?;
    let rows = teacher::assignment_students(&state.pool, &params).await?;
    Ok(ApiResponse::success(rows))
}

/// GET /api/teacher/grades?subjectID&section&courseID&year
pub async fn grades(
    State(state): State<AppState>,
    params: Result<Query<SectionGradesParams>, QueryRejection>,
) -> ApiResult<Vec<SectionGrade>> {
    let Query(params) = params?;
    let rows = teacher::section_grades(&state.pool, &params).await?;
    Ok(ApiResponse::success(rows))
}
