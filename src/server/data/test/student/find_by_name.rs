use super::*;

/// Tests finding a student by full name ignoring case.
///
/// Expected: Ok(Some) with the matching student
#[tokio::test]
async fn matches_full_name_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let neville = factory::student::StudentFactory::new(db)
        .name("Neville", None, Some("Longbottom"))
        .build()
        .await?;

    let name = split_full_name("neville LONGBOTTOM").unwrap();
    let found = StudentRepository::new(db).find_by_name(&name).await?;

    assert_eq!(found.map(|s| s.id), Some(neville.id));

    Ok(())
}

/// Tests that a middle name must match when one is given.
///
/// Expected: Ok(None) for a wrong middle name, Ok(Some) for the right one
#[tokio::test]
async fn requires_middle_name_when_given() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ginny = factory::student::StudentFactory::new(db)
        .name("Ginevra", Some("Molly"), Some("Weasley"))
        .build()
        .await?;

    let repo = StudentRepository::new(db);

    let wrong = split_full_name("Ginevra Luna Weasley").unwrap();
    assert!(repo.find_by_name(&wrong).await?.is_none());

    let right = split_full_name("Ginevra Molly Weasley").unwrap();
    assert_eq!(repo.find_by_name(&right).await?.map(|s| s.id), Some(ginny.id));

    Ok(())
}

/// Tests that several matches resolve to the lowest id.
///
/// Expected: Ok(Some) with the first inserted Weasley
#[tokio::test]
async fn returns_lowest_id_on_ambiguous_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fred = factory::student::StudentFactory::new(db)
        .name("Fred", None, Some("Weasley"))
        .build()
        .await?;
    factory::student::StudentFactory::new(db)
        .name("Fred", Some("Gideon"), Some("Weasley"))
        .build()
        .await?;

    let name = split_full_name("Fred Weasley").unwrap();
    let found = StudentRepository::new(db).find_by_name(&name).await?;

    assert_eq!(found.map(|s| s.id), Some(fred.id));

    Ok(())
}

/// Tests searching for a name no student has.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_no_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::student::StudentFactory::new(db)
        .name("Luna", None, Some("Lovegood"))
        .build()
        .await?;

    let name = split_full_name("Luna Scamander").unwrap();
    let found = StudentRepository::new(db).find_by_name(&name).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests finding a student whose name has non-ASCII letters in another case.
///
/// Expected: Ok(Some) with the matching student
#[tokio::test]
async fn matches_non_ascii_name_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::student::StudentFactory::new(db)
        .name("Ösel", None, Some("Élan"))
        .build()
        .await?;

    let name = split_full_name("ösel élan").unwrap();
    let found = StudentRepository::new(db).find_by_name(&name).await?;

    assert_eq!(found.map(|s| s.id), Some(student.id));

    Ok(())
}
