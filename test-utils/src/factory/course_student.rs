//! Roster factory for enrolling students in courses.

use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Enrolls a student in a course.
///
/// Both the course and the student must already exist.
///
/// # Arguments
/// - `db` - Database connection
/// - `course_id` - Course to enroll into
/// - `student_id` - Student being enrolled
///
/// # Returns
/// - `Ok(())` - Roster row inserted
/// - `Err(DbErr)` - Database error during insert
pub async fn enroll_student(
    db: &DatabaseConnection,
    course_id: i32,
    student_id: i32,
) -> Result<(), DbErr> {
    entity::course_student::Entity::insert(entity::course_student::ActiveModel {
        course_id: ActiveValue::Set(course_id),
        student_id: ActiveValue::Set(student_id),
    })
    .exec_without_returning(db)
    .await?;

    Ok(())
}
