use super::*;

/// Tests deleting a teacher with no courses.
///
/// Expected: Ok(true), then Ok(false) for a second delete
#[tokio::test]
async fn deletes_teacher() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;

    let repo = TeacherRepository::new(db);
    assert!(repo.delete(teacher.id).await?);
    assert!(!repo.delete(teacher.id).await?);

    Ok(())
}
