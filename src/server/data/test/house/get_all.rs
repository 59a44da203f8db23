use super::*;

/// Tests listing houses.
///
/// Verifies that every stored house is returned in name order with both colors.
///
/// Expected: Ok with the four houses sorted by name
#[tokio::test]
async fn returns_houses_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_houses(db).await?;

    let repo = HouseRepository::new(db);
    let houses = repo.get_all().await?;

    let names: Vec<&str> = houses.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, ["Gryffindor", "Hufflepuff", "Ravenclaw", "Slytherin"]);
    assert_eq!(houses[0].colors, ["scarlet".to_string(), "gold".to_string()]);

    Ok(())
}

/// Tests listing houses on an empty table.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_when_no_houses() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let houses = HouseRepository::new(db).get_all().await?;

    assert!(houses.is_empty());

    Ok(())
}
