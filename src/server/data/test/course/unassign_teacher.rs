use super::*;

/// Tests clearing a teacher from every course they teach.
///
/// Verifies that courses taught by other teachers keep theirs.
///
/// Expected: Ok(2) with only the other teacher's course still assigned
#[tokio::test]
async fn clears_only_that_teachers_courses() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let snape = factory::create_teacher(db).await?;
    let slughorn = factory::create_teacher(db).await?;
    let first = factory::course::CourseFactory::new(db)
        .teacher_id(Some(snape.id))
        .build()
        .await?;
    let second = factory::course::CourseFactory::new(db)
        .teacher_id(Some(snape.id))
        .build()
        .await?;
    let other = factory::course::CourseFactory::new(db)
        .teacher_id(Some(slughorn.id))
        .build()
        .await?;

    let repo = CourseRepository::new(db);
    let cleared = repo.unassign_teacher(snape.id).await?;

    assert_eq!(cleared, 2);
    assert!(repo.get_by_id(first.id).await?.unwrap().teacher.is_none());
    assert!(repo.get_by_id(second.id).await?.unwrap().teacher.is_none());
    assert_eq!(
        repo.get_by_id(other.id).await?.unwrap().teacher.map(|t| t.id),
        Some(slughorn.id)
    );

    Ok(())
}
