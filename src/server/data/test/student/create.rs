use super::*;

/// Tests inserting a student.
///
/// Expected: Ok with a generated id and the given fields
#[tokio::test]
async fn creates_student() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut params = save_params("Dean", Some("Thomas"));
    params.school_year = Some(1);

    let student = StudentRepository::new(db).create(params).await?;

    assert!(student.id > 0);
    assert_eq!(student.person.full_name(), "Dean Thomas");
    assert_eq!(student.school_year, Some(1));

    Ok(())
}

/// Tests inserting a student in a house that does not exist.
///
/// Expected: Err from the house foreign key
#[tokio::test]
async fn fails_for_unknown_house() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut params = save_params("Dean", Some("Thomas"));
    params.person.house = Some("Durmstrang".to_string());

    let result = StudentRepository::new(db).create(params).await;

    assert!(result.is_err());

    Ok(())
}
