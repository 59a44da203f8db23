use super::*;

/// Tests inserting a house.
///
/// Expected: Ok with the stored house readable by name
#[tokio::test]
async fn creates_house() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HouseRepository::new(db);
    let created = repo
        .create(House {
            name: "Hufflepuff".to_string(),
            founder: "Helga Hufflepuff".to_string(),
            colors: ["yellow".to_string(), "black".to_string()],
        })
        .await?;

    assert_eq!(created.name, "Hufflepuff");
    let stored = repo.get_by_name("Hufflepuff").await?.unwrap();
    assert_eq!(stored, created);

    Ok(())
}

/// Tests inserting a house twice.
///
/// Expected: Err because the name is the primary key
#[tokio::test]
async fn fails_for_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_houses(db).await?;

    let result = HouseRepository::new(db)
        .create(House {
            name: "Slytherin".to_string(),
            founder: "Someone Else".to_string(),
            colors: ["green".to_string(), "silver".to_string()],
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
