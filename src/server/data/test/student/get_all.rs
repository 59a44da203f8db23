use super::*;

/// Tests listing students.
///
/// Verifies that students come back in id order regardless of their names.
///
/// Expected: Ok with both students, lowest id first
#[tokio::test]
async fn returns_students_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let zed = factory::student::StudentFactory::new(db)
        .name("Zacharias", None, Some("Smith"))
        .build()
        .await?;
    let abe = factory::student::StudentFactory::new(db)
        .name("Abe", None, None)
        .build()
        .await?;

    let students = StudentRepository::new(db).get_all().await?;

    assert_eq!(students.len(), 2);
    assert_eq!(students[0].id, zed.id);
    assert_eq!(students[1].id, abe.id);

    Ok(())
}

/// Tests listing students on an empty table.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_when_no_students() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let students = StudentRepository::new(db).get_all().await?;

    assert!(students.is_empty());

    Ok(())
}
