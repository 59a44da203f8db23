use super::*;

/// Tests replacing a roster.
///
/// Verifies that previous students are dropped and repeated ids are stored once.
///
/// Expected: Ok with only the new students enrolled
#[tokio::test]
async fn replaces_existing_roster() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (course, _, old) = factory::helpers::create_course_with_roster(db, 2).await?;
    let new = factory::create_student(db).await?;

    let repo = CourseStudentRepository::new(db);
    repo.replace_roster(course.id, &[new.id, old[1].id, new.id])
        .await?;

    assert_eq!(repo.get_student_ids(course.id).await?, vec![old[1].id, new.id]);

    Ok(())
}

/// Tests replacing a roster with nothing.
///
/// Expected: Ok with an empty roster
#[tokio::test]
async fn clears_roster() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (course, _, _) = factory::helpers::create_course_with_roster(db, 3).await?;

    let repo = CourseStudentRepository::new(db);
    repo.replace_roster(course.id, &[]).await?;

    assert!(repo.get_student_ids(course.id).await?.is_empty());

    Ok(())
}
