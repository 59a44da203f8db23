use super::*;

/// Tests overwriting a student.
///
/// Verifies that every column is replaced, including clearing the house.
///
/// Expected: Ok with the new values stored
#[tokio::test]
async fn overwrites_every_field() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_houses(db).await?;
    let existing = factory::student::StudentFactory::new(db)
        .house(Some("Hufflepuff"))
        .prefect(true)
        .build()
        .await?;

    let mut params = save_params("Cedric", Some("Diggory"));
    params.graduated = true;
    params.graduation_year = Some(1995);

    let repo = StudentRepository::new(db);
    let updated = repo.update(existing.id, params).await?;

    assert_eq!(updated.id, existing.id);
    assert_eq!(updated.person.first_name, "Cedric");
    assert!(updated.person.house.is_none());
    assert!(!updated.prefect);
    assert!(updated.graduated);

    let stored = repo.get_by_id(existing.id).await?.unwrap();
    assert_eq!(stored, updated);

    Ok(())
}

/// Tests updating a student that does not exist.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StudentRepository::new(db)
        .update(999, save_params("Nobody", None))
        .await;

    assert!(result.is_err());

    Ok(())
}
