use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        course::{CourseDto, CourseRequestDto, IdReferenceDto, StudentReferenceDto},
        house::HouseDto,
        student::{StudentDto, StudentRequestDto},
        teacher::{EmploymentTypeDto, TeacherDto, TeacherRequestDto},
    },
    server::{
        controller::{course, house, student, teacher},
        state::AppState,
    },
};

/// OpenAPI document for the REST API, served by Swagger UI at `/api/docs`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hogwarts administration API",
        description = "Houses, students, teachers and course rosters."
    ),
    paths(
        house::get_houses,
        house::get_house_by_name,
        student::get_students,
        student::create_student,
        student::get_student_by_id,
        student::update_student,
        student::patch_student,
        student::delete_student,
        teacher::get_teachers,
        teacher::create_teacher,
        teacher::get_teacher_by_id,
        teacher::update_teacher,
        teacher::patch_teacher,
        teacher::delete_teacher,
        course::get_courses,
        course::create_course,
        course::get_course_by_id,
        course::update_course,
        course::patch_course,
        course::delete_course,
        course::get_course_teacher,
        course::set_course_teacher,
        course::remove_course_teacher,
        course::get_course_students,
        course::add_course_students,
        course::add_course_student,
        course::remove_course_student,
    ),
    components(schemas(
        ErrorDto,
        HouseDto,
        StudentDto,
        StudentRequestDto,
        TeacherDto,
        TeacherRequestDto,
        EmploymentTypeDto,
        CourseDto,
        CourseRequestDto,
        IdReferenceDto,
        StudentReferenceDto,
    )),
    tags(
        (name = "house", description = "The four school houses"),
        (name = "student", description = "Student records"),
        (name = "teacher", description = "Teacher records"),
        (name = "course", description = "Courses, their teacher and roster")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/houses", get(house::get_houses))
        .route("/houses/{name}", get(house::get_house_by_name))
        .route(
            "/students",
            get(student::get_students).post(student::create_student),
        )
        .route(
            "/students/{id}",
            get(student::get_student_by_id)
                .put(student::update_student)
                .patch(student::patch_student)
                .delete(student::delete_student),
        )
        .route(
            "/teachers",
            get(teacher::get_teachers).post(teacher::create_teacher),
        )
        .route(
            "/teachers/{id}",
            get(teacher::get_teacher_by_id)
                .put(teacher::update_teacher)
                .patch(teacher::patch_teacher)
                .delete(teacher::delete_teacher),
        )
        .route("/courses", get(course::get_courses).post(course::create_course))
        .route(
            "/courses/{id}",
            get(course::get_course_by_id)
                .put(course::update_course)
                .patch(course::patch_course)
                .delete(course::delete_course),
        )
        .route(
            "/courses/{id}/teacher",
            get(course::get_course_teacher)
                .put(course::set_course_teacher)
                .delete(course::remove_course_teacher),
        )
        .route(
            "/courses/{id}/students",
            get(course::get_course_students).post(course::add_course_students),
        )
        .route(
            "/courses/{id}/students/{student_id}",
            axum::routing::put(course::add_course_student).delete(course::remove_course_student),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
