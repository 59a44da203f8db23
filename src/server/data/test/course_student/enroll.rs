use super::*;

/// Tests enrolling several students at once.
///
/// Expected: Ok with both students enrolled and listed in id order
#[tokio::test]
async fn enrolls_students() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;
    let first = factory::create_student(db).await?;
    let second = factory::create_student(db).await?;

    let repo = CourseStudentRepository::new(db);
    repo.enroll(course.id, &[second.id, first.id]).await?;

    assert_eq!(repo.get_student_ids(course.id).await?, vec![first.id, second.id]);
    assert!(repo.is_enrolled(course.id, first.id).await?);

    Ok(())
}

/// Tests enrolling an empty list.
///
/// Expected: Ok with the roster unchanged
#[tokio::test]
async fn ignores_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;

    let repo = CourseStudentRepository::new(db);
    repo.enroll(course.id, &[]).await?;

    assert!(repo.get_student_ids(course.id).await?.is_empty());

    Ok(())
}

/// Tests enrolling a student twice.
///
/// Expected: Err from the composite primary key
#[tokio::test]
async fn fails_for_duplicate_enrollment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (course, _, students) = factory::helpers::create_course_with_roster(db, 1).await?;

    let result = CourseStudentRepository::new(db)
        .enroll(course.id, &[students[0].id])
        .await;

    assert!(result.is_err());

    Ok(())
}
