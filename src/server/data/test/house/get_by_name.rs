use super::*;

/// Tests looking up a house by its stored name.
///
/// Expected: Ok(Some) with the founder of Ravenclaw
#[tokio::test]
async fn finds_existing_house() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_houses(db).await?;

    let house = HouseRepository::new(db).get_by_name("Ravenclaw").await?;

    assert!(house.is_some());
    assert_eq!(house.unwrap().founder, "Rowena Ravenclaw");

    Ok(())
}

/// Tests that the repository lookup is exact.
///
/// Verifies that a differently cased name does not match, normalization happens in
/// the service layer.
///
/// Expected: Ok(None)
#[tokio::test]
async fn does_not_normalize_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_houses(db).await?;

    let house = HouseRepository::new(db).get_by_name("ravenclaw").await?;

    assert!(house.is_none());

    Ok(())
}
