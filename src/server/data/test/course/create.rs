use super::*;

/// Tests inserting a course with a teacher.
///
/// Expected: Ok with the teacher id stored
#[tokio::test]
async fn creates_course() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;

    let course = CourseRepository::new(db)
        .create(save_params("Charms", Some(teacher.id)))
        .await?;

    assert!(course.id > 0);
    assert_eq!(course.subject, "Charms");
    assert_eq!(course.teacher_id, Some(teacher.id));

    Ok(())
}

/// Tests inserting a course with an unknown teacher.
///
/// Expected: Err from the teacher foreign key
#[tokio::test]
async fn fails_for_unknown_teacher() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CourseRepository::new(db)
        .create(save_params("Charms", Some(999)))
        .await;

    assert!(result.is_err());

    Ok(())
}
