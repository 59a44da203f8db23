use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        teacher::{TeacherDto, TeacherRequestDto},
    },
    server::{
        controller::JsonBody, error::AppError, model::teacher::TeacherParams,
        service::teacher::TeacherService, state::AppState,
    },
};

/// Tag for grouping teacher endpoints in OpenAPI documentation
pub static TEACHER_TAG: &str = "teacher";

/// List all teachers.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Teachers ordered by id
/// - `204 No Content` - No teachers stored
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/teachers",
    tag = TEACHER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved teachers", body = Vec<TeacherDto>),
        (status = 204, description = "No teachers stored"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teachers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let teachers = TeacherService::new(&state.db).get_all().await?;

    if teachers.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let teachers: Vec<TeacherDto> = teachers.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(teachers)).into_response())
}

/// Create a teacher.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Teacher fields; `name` is required
///
/// # Returns
/// - `201 Created` - The stored teacher
/// - `400 Bad Request` - Missing name or unknown house
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/teachers",
    tag = TEACHER_TAG,
    request_body = TeacherRequestDto,
    responses(
        (status = 201, description = "Successfully created teacher", body = TeacherDto),
        (status = 400, description = "Missing name or unknown house", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_teacher(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<TeacherRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = TeacherParams::from_dto(payload);

    let teacher = TeacherService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(teacher.into_dto())))
}

/// Get a teacher by id.
///
/// # Returns
/// - `200 OK` - The teacher
/// - `404 Not Found` - No teacher with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/teachers/{id}",
    tag = TEACHER_TAG,
    params(
        ("id" = i32, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved teacher", body = TeacherDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teacher_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = TeacherService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Teacher {} not found.", id)))?;

    Ok((StatusCode::OK, Json(teacher.into_dto())))
}

/// Replace a teacher.
///
/// Every field is overwritten; absent optional fields are cleared and absent flags
/// become `false`.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Teacher ID
/// - `payload` - Replacement teacher fields; `name` is required
///
/// # Returns
/// - `200 OK` - The updated teacher
/// - `400 Bad Request` - Missing name or unknown house
/// - `404 Not Found` - No teacher with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/teachers/{id}",
    tag = TEACHER_TAG,
    params(
        ("id" = i32, Path, description = "Teacher ID")
    ),
    request_body = TeacherRequestDto,
    responses(
        (status = 200, description = "Successfully replaced teacher", body = TeacherDto),
        (status = 400, description = "Missing name or unknown house", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_teacher(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<TeacherRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = TeacherParams::from_dto(payload);

    let teacher = TeacherService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(teacher.into_dto())))
}

/// Partially update a teacher.
///
/// Only fields present in the body are overwritten.
///
/// # Returns
/// - `200 OK` - The updated teacher
/// - `400 Bad Request` - Blank name or unknown house
/// - `404 Not Found` - No teacher with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/teachers/{id}",
    tag = TEACHER_TAG,
    params(
        ("id" = i32, Path, description = "Teacher ID")
    ),
    request_body = TeacherRequestDto,
    responses(
        (status = 200, description = "Successfully patched teacher", body = TeacherDto),
        (status = 400, description = "Blank name or unknown house", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_teacher(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<TeacherRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = TeacherParams::from_dto(payload);

    let teacher = TeacherService::new(&state.db).patch(id, params).await?;

    Ok((StatusCode::OK, Json(teacher.into_dto())))
}

/// Delete a teacher.
///
/// Courses taught by the teacher are left without a teacher.
///
/// # Returns
/// - `200 OK` - The deleted teacher
/// - `404 Not Found` - No teacher with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/teachers/{id}",
    tag = TEACHER_TAG,
    params(
        ("id" = i32, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted teacher", body = TeacherDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_teacher(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = TeacherService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(teacher.into_dto())))
}
