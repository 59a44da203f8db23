use super::*;
use crate::server::service::house::{HouseService, INVALID_HOUSE};

/// Tests resolving a house name in any capitalization.
///
/// Expected: Ok with the stored name
#[tokio::test]
async fn resolves_house_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_houses(db).await?;

    let service = HouseService::new(db);

    assert_eq!(service.resolve("gryffindor").await.unwrap(), "Gryffindor");
    assert_eq!(service.resolve(" SLYTHERIN ").await.unwrap(), "Slytherin");

    Ok(())
}

/// Tests resolving a house that does not exist.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_unknown_house() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_houses(db).await?;

    let result = HouseService::new(db).resolve("Beauxbatons").await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == INVALID_HOUSE));

    Ok(())
}
