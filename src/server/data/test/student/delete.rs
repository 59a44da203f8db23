use super::*;

/// Tests deleting a student.
///
/// Expected: Ok(true) and the student is gone
#[tokio::test]
async fn deletes_student() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    assert!(repo.delete(student.id).await?);
    assert!(repo.get_by_id(student.id).await?.is_none());

    Ok(())
}

/// Tests deleting an unknown student.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = StudentRepository::new(db).delete(999).await?;

    assert!(!deleted);

    Ok(())
}
