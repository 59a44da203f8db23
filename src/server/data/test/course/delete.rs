use super::*;

/// Tests deleting a course without a roster.
///
/// Expected: Ok(true), then Ok(false) for a second delete
#[tokio::test]
async fn deletes_course() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;

    let repo = CourseRepository::new(db);
    assert!(repo.delete(course.id).await?);
    assert!(!repo.delete(course.id).await?);

    Ok(())
}
