use super::*;

/// Tests fetching a student by id.
///
/// Expected: Ok(Some) with every stored field converted
#[tokio::test]
async fn returns_existing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_houses(db).await?;
    let created = factory::student::StudentFactory::new(db)
        .name("Hermione", Some("Jean"), Some("Granger"))
        .house(Some("Gryffindor"))
        .prefect(true)
        .enrollment_year(Some(1991))
        .build()
        .await?;

    let student = StudentRepository::new(db).get_by_id(created.id).await?;

    let student = student.unwrap();
    assert_eq!(student.person.full_name(), "Hermione Jean Granger");
    assert_eq!(student.person.house.as_deref(), Some("Gryffindor"));
    assert!(student.prefect);
    assert_eq!(student.enrollment_year, Some(1991));

    Ok(())
}

/// Tests fetching an unknown student id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = StudentRepository::new(db).get_by_id(999).await?;

    assert!(student.is_none());

    Ok(())
}
