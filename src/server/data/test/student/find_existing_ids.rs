use super::*;

/// Tests filtering a list of ids down to existing students.
///
/// Verifies that unknown ids are dropped and repeated ids collapse to one entry.
///
/// Expected: Ok with the two existing ids in ascending order
#[tokio::test]
async fn returns_only_existing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_student(db).await?;
    let second = factory::create_student(db).await?;

    let ids = StudentRepository::new(db)
        .find_existing_ids(&[second.id, 999, first.id, second.id])
        .await?;

    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests filtering an empty id list.
///
/// Expected: Ok with an empty vector and no query error
#[tokio::test]
async fn returns_empty_for_empty_input() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ids = StudentRepository::new(db).find_existing_ids(&[]).await?;

    assert!(ids.is_empty());

    Ok(())
}
