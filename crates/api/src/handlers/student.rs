//! Handlers for the `/students` resource.
//!
//! Every response embeds the student detail aggregate: the student, its
//! course enrollments and their application statuses.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use enrollment_core::error::CoreError;
use enrollment_core::status::EnrollmentStatus;
use enrollment_core::types::DbId;
use enrollment_core::validation::not_blank;
use enrollment_db::models::application_status::ApplicationStatus;
use enrollment_db::models::student::StudentFilter;
use enrollment_db::models::student_detail::{
    RegisterStudentDetail, StudentDetail, UpdateStudentDetail,
};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::query::{CourseNameParams, RequestStatusParams, StudentListParams, StudentSearchParams};
use crate::response::{MessageResponse, MessageWithData};
use crate::services::{StudentSearch, StudentService};
use crate::state::AppState;

/// Message returned by the retired `/studentsList` endpoint.
pub const LEGACY_LIST_MESSAGE: &str =
    "This endpoint is no longer available. Use /api/v1/students instead of /api/v1/studentsList.";

/// GET /api/v1/students
///
/// Active students only, unless `?includeDeleted=true`.
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<StudentListParams>,
) -> AppResult<Json<Vec<StudentDetail>>> {
    let details = StudentService::list(&state.pool, params.include_deleted).await?;
    Ok(Json(details))
}

/// GET /api/v1/students/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<StudentDetail>> {
    let detail = StudentService::get(&state.pool, id).await?;
    Ok(Json(detail))
}

/// GET /api/v1/students/search
///
/// All filters are optional. Student, course and status filters are applied
/// independently before the join.
pub async fn search(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<StudentSearchParams>,
) -> AppResult<Json<Vec<StudentDetail>>> {
    let status = params
        .status
        .as_deref()
        .map(str::parse::<EnrollmentStatus>)
        .transpose()?;

    let search = StudentSearch {
        student: StudentFilter {
            full_name: params.full_name,
            furigana: params.furigana,
            address: params.address,
            age: params.age,
            sex: params.sex,
        },
        course_name: params.course_name,
        status,
    };

    let details = StudentService::search(&state.pool, &search).await?;
    Ok(Json(details))
}

/// GET /api/v1/students/status/{status}
///
/// One entry per (status row, course) pair.
pub async fn search_by_status(
    State(state): State<AppState>,
    ApiPath(status): ApiPath<String>,
) -> AppResult<Json<Vec<StudentDetail>>> {
    let status: EnrollmentStatus = status.parse()?;
    let details = StudentService::search_by_status(&state.pool, status).await?;
    Ok(Json(details))
}

/// GET /api/v1/students/courses?courseName=
///
/// One entry per matching course.
pub async fn search_by_course_name(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<CourseNameParams>,
) -> AppResult<Json<Vec<StudentDetail>>> {
    if not_blank(&params.course_name).is_err() {
        return Err(AppError::Core(CoreError::Validation(
            "courseName must not be blank".to_string(),
        )));
    }
    let details = StudentService::search_by_course_name(&state.pool, &params.course_name).await?;
    Ok(Json(details))
}

/// POST /api/v1/students
///
/// Ids, enrollment periods and initial statuses are assigned server-side.
pub async fn register(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<RegisterStudentDetail>,
) -> AppResult<(StatusCode, Json<StudentDetail>)> {
    input.validate()?;
    let detail = StudentService::register(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(detail)))
}

/// PUT /api/v1/students
///
/// Full replacement of the student row plus course-name corrections.
/// Setting `isDeleted` here is how a student is deleted.
pub async fn update(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<UpdateStudentDetail>,
) -> AppResult<Json<MessageResponse>> {
    input.validate()?;
    let student = StudentService::update(&state.pool, &input).await?;
    Ok(Json(MessageResponse {
        message: format!("Student {} updated successfully", student.id),
    }))
}

/// PUT /api/v1/students/request-status?id=&status=
pub async fn request_status(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<RequestStatusParams>,
) -> AppResult<Json<MessageWithData<Vec<ApplicationStatus>>>> {
    let target: EnrollmentStatus = params.status.parse()?;
    let updated = StudentService::transition_status(&state.pool, &[params.id], target).await?;

    let ids: Vec<String> = updated.iter().map(|row| row.id.to_string()).collect();
    Ok(Json(MessageWithData {
        message: format!(
            "Application status {} changed to {}",
            ids.join(", "),
            target.label()
        ),
        data: updated,
    }))
}

/// GET /api/v1/studentsList
///
/// Retired path. Always answers with an unsupported-route error.
pub async fn legacy_list() -> AppResult<Json<Vec<StudentDetail>>> {
    Err(AppError::Core(CoreError::UnsupportedRoute(
        LEGACY_LIST_MESSAGE.to_string(),
    )))
}
