use super::*;

/// Tests overwriting a teacher.
///
/// Expected: Ok with the head-of-house flag and house replaced
#[tokio::test]
async fn overwrites_every_field() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_houses(db).await?;
    let existing = factory::create_teacher(db).await?;

    let mut params = save_params("Pomona", Some("Sprout"));
    params.person.house = Some("Hufflepuff".to_string());
    params.head_of_house = true;

    let repo = TeacherRepository::new(db);
    let updated = repo.update(existing.id, params).await?;

    assert_eq!(updated.id, existing.id);
    assert_eq!(updated.person.full_name(), "Pomona Sprout");
    assert!(updated.head_of_house);
    assert!(updated.employment.is_none());

    Ok(())
}
