use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        course::{CourseDto, CourseRequestDto, IdReferenceDto, StudentReferenceDto},
        student::StudentDto,
        teacher::TeacherDto,
    },
    server::{
        controller::JsonBody,
        error::AppError,
        model::course::{CourseParams, StudentReference, INVALID_TEACHER},
        service::course::CourseService,
        state::AppState,
    },
};

/// Tag for grouping course endpoints in OpenAPI documentation
pub static COURSE_TAG: &str = "course";

/// List all courses with their teacher and roster.
///
/// # Returns
/// - `200 OK` - Courses ordered by id
/// - `204 No Content` - No courses stored
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/courses",
    tag = COURSE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved courses", body = Vec<CourseDto>),
        (status = 204, description = "No courses stored"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_courses(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let courses = CourseService::new(&state.db).get_all().await?;

    if courses.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let courses: Vec<CourseDto> = courses.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(courses)).into_response())
}

/// Create a course.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Course fields; `subject` is required, teacher and students are
///   referenced by id
///
/// # Returns
/// - `201 Created` - The stored course
/// - `400 Bad Request` - Missing subject, unknown teacher or unknown student
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/courses",
    tag = COURSE_TAG,
    request_body = CourseRequestDto,
    responses(
        (status = 201, description = "Successfully created course", body = CourseDto),
        (status = 400, description = "Missing subject, invalid teacher or invalid students", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_course(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CourseRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CourseParams::from_dto(payload)?;

    let course = CourseService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(course.into_dto())))
}

/// Get a course by id.
///
/// # Returns
/// - `200 OK` - The course with its teacher and roster
/// - `404 Not Found` - No course with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/courses/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved course", body = CourseDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let course = CourseService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Course {} not found.", id)))?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

/// Replace a course, including its teacher and roster.
///
/// # Returns
/// - `200 OK` - The updated course
/// - `400 Bad Request` - Missing subject, unknown teacher or unknown student
/// - `404 Not Found` - No course with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/courses/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    request_body = CourseRequestDto,
    responses(
        (status = 200, description = "Successfully replaced course", body = CourseDto),
        (status = 400, description = "Missing subject, invalid teacher or invalid students", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<CourseRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CourseParams::from_dto(payload)?;

    let course = CourseService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

/// Partially update a course.
///
/// Only fields present in the body are overwritten. A present `students` list
/// replaces the roster.
#[utoipa::path(
    patch,
    path = "/courses/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    request_body = CourseRequestDto,
    responses(
        (status = 200, description = "Successfully patched course", body = CourseDto),
        (status = 400, description = "Blank subject, invalid teacher or invalid students", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<CourseRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CourseParams::from_dto(payload)?;

    let course = CourseService::new(&state.db).patch(id, params).await?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

/// Delete a course and its roster.
///
/// # Returns
/// - `200 OK` - The deleted course
/// - `404 Not Found` - No course with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/courses/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted course", body = CourseDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let course = CourseService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

/// Get the teacher of a course.
///
/// # Returns
/// - `200 OK` - The assigned teacher
/// - `204 No Content` - The course has no teacher
/// - `404 Not Found` - No course with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/courses/{id}/teacher",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved teacher", body = TeacherDto),
        (status = 204, description = "Course has no teacher"),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course_teacher(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = CourseService::new(&state.db).get_teacher(id).await?;

    match teacher {
        Some(teacher) => Ok((StatusCode::OK, Json(teacher.into_dto())).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// Assign a teacher to a course.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Course ID
/// - `payload` - Reference to an existing teacher, `{ "id": n }`
///
/// # Returns
/// - `200 OK` - The updated course
/// - `400 Bad Request` - Reference has no id or names an unknown teacher
/// - `404 Not Found` - No course with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/courses/{id}/teacher",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    request_body = IdReferenceDto,
    responses(
        (status = 200, description = "Successfully assigned teacher", body = CourseDto),
        (status = 400, description = "Invalid teacher", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_course_teacher(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<IdReferenceDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    let Some(teacher_id) = payload.id else {
        // An unknown course answers 404 before the reference is judged
        if service.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Course {} not found.", id)));
        }
        return Err(AppError::BadRequest(INVALID_TEACHER.to_string()));
    };

    let course = service.set_teacher(id, teacher_id).await?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

/// Remove the teacher from a course.
///
/// Succeeds when no teacher is assigned.
#[utoipa::path(
    delete,
    path = "/courses/{id}/teacher",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Successfully removed teacher", body = CourseDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_course_teacher(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let course = CourseService::new(&state.db).remove_teacher(id).await?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

/// Get the roster of a course.
///
/// # Returns
/// - `200 OK` - Enrolled students ordered by id
/// - `204 No Content` - Nobody is enrolled
/// - `404 Not Found` - No course with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/courses/{id}/students",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved students", body = Vec<StudentDto>),
        (status = 204, description = "Nobody is enrolled"),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course_students(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let students = CourseService::new(&state.db).get_students(id).await?;

    if students.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let students: Vec<StudentDto> = students.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(students)).into_response())
}

/// Enroll several students at once.
///
/// Each reference carries a student `id` or a full `name`. Either every student is
/// enrolled or none is.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Course ID
/// - `payload` - Student references
///
/// # Returns
/// - `200 OK` - The course with its updated roster
/// - `400 Bad Request` - A reference matches no student, or names an enrolled or
///   repeated student
/// - `404 Not Found` - No course with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/courses/{id}/students",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    request_body = Vec<StudentReferenceDto>,
    responses(
        (status = 200, description = "Successfully enrolled students", body = CourseDto),
        (status = 400, description = "Invalid or already enrolled students", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_course_students(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<Vec<StudentReferenceDto>>,
) -> Result<impl IntoResponse, AppError> {
    let references = payload
        .into_iter()
        .map(StudentReference::from_dto)
        .collect::<Result<Vec<_>, _>>()?;

    let course = CourseService::new(&state.db)
        .add_students(id, references)
        .await?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

/// Enroll one student.
///
/// # Returns
/// - `200 OK` - The course with its updated roster
/// - `400 Bad Request` - Unknown student or already enrolled
/// - `404 Not Found` - No course with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/courses/{id}/students/{student_id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course ID"),
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Successfully enrolled student", body = CourseDto),
        (status = 400, description = "Invalid or already enrolled student", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_course_student(
    State(state): State<AppState>,
    Path((id, student_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let course = CourseService::new(&state.db)
        .add_student(id, student_id)
        .await?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

/// Remove one student from the roster.
///
/// # Returns
/// - `200 OK` - The course with its updated roster
/// - `400 Bad Request` - The student is not enrolled
/// - `404 Not Found` - No course with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/courses/{id}/students/{student_id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course ID"),
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Successfully removed student", body = CourseDto),
        (status = 400, description = "Student not enrolled", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_course_student(
    State(state): State<AppState>,
    Path((id, student_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let course = CourseService::new(&state.db)
        .remove_student(id, student_id)
        .await?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}
