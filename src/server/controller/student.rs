use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        student::{StudentDto, StudentRequestDto},
    },
    server::{
        controller::JsonBody, error::AppError, model::student::StudentParams,
        service::student::StudentService, state::AppState,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

/// List all students.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Students ordered by id
/// - `204 No Content` - No students stored
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/students",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved students", body = Vec<StudentDto>),
        (status = 204, description = "No students stored"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let students = StudentService::new(&state.db).get_all().await?;

    if students.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let students: Vec<StudentDto> = students.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(students)).into_response())
}

/// Create a student.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Student fields; `name` is required
///
/// # Returns
/// - `201 Created` - The stored student
/// - `400 Bad Request` - Missing name or unknown house
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/students",
    tag = STUDENT_TAG,
    request_body = StudentRequestDto,
    responses(
        (status = 201, description = "Successfully created student", body = StudentDto),
        (status = 400, description = "Missing name or unknown house", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<StudentRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = StudentParams::from_dto(payload);

    let student = StudentService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(student.into_dto())))
}

/// Get a student by id.
///
/// # Returns
/// - `200 OK` - The student
/// - `404 Not Found` - No student with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved student", body = StudentDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Student {} not found.", id)))?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Replace a student.
///
/// Every field is overwritten; absent optional fields are cleared and absent flags
/// become `false`.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Student ID
/// - `payload` - Replacement student fields; `name` is required
///
/// # Returns
/// - `200 OK` - The updated student
/// - `400 Bad Request` - Missing name or unknown house
/// - `404 Not Found` - No student with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body = StudentRequestDto,
    responses(
        (status = 200, description = "Successfully replaced student", body = StudentDto),
        (status = 400, description = "Missing name or unknown house", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<StudentRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = StudentParams::from_dto(payload);

    let student = StudentService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Partially update a student.
///
/// Only fields present in the body are overwritten.
///
/// # Returns
/// - `200 OK` - The updated student
/// - `400 Bad Request` - Blank name or unknown house
/// - `404 Not Found` - No student with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body = StudentRequestDto,
    responses(
        (status = 200, description = "Successfully patched student", body = StudentDto),
        (status = 400, description = "Blank name or unknown house", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<StudentRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = StudentParams::from_dto(payload);

    let student = StudentService::new(&state.db).patch(id, params).await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Delete a student.
///
/// The student is removed from every course roster before deletion.
///
/// # Returns
/// - `200 OK` - The deleted student
/// - `404 Not Found` - No student with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted student", body = StudentDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}
