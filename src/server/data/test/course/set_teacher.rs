use super::*;

/// Tests assigning and clearing a course's teacher.
///
/// Expected: Ok with the teacher set, then cleared
#[tokio::test]
async fn sets_and_clears_teacher() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;
    let teacher = factory::create_teacher(db).await?;

    let repo = CourseRepository::new(db);

    repo.set_teacher(course.id, Some(teacher.id)).await?;
    let stored = repo.get_by_id(course.id).await?.unwrap();
    assert_eq!(stored.teacher.map(|t| t.id), Some(teacher.id));

    repo.set_teacher(course.id, None).await?;
    let stored = repo.get_by_id(course.id).await?.unwrap();
    assert!(stored.teacher.is_none());

    Ok(())
}
