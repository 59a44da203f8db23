use super::*;

/// Tests overwriting a course.
///
/// Verifies that the teacher is cleared and the roster left untouched.
///
/// Expected: Ok with the new subject and no teacher
#[tokio::test]
async fn overwrites_columns_and_keeps_roster() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (course, _, students) = factory::helpers::create_course_with_roster(db, 1).await?;

    let repo = CourseRepository::new(db);
    let mut params = save_params("Advanced Potions", None);
    params.current = true;
    let updated = repo.update(course.id, params).await?;

    assert_eq!(updated.subject, "Advanced Potions");
    assert!(updated.teacher_id.is_none());
    assert!(updated.current);

    let stored = repo.get_by_id(course.id).await?.unwrap();
    assert_eq!(stored.students.len(), 1);
    assert_eq!(stored.students[0].id, students[0].id);

    Ok(())
}
