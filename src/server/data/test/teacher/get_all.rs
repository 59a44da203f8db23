use super::*;

/// Tests listing teachers and fetching one by id.
///
/// Expected: Ok with teachers in id order and the lookup returning the same teacher
#[tokio::test]
async fn returns_teachers_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_teacher(db).await?;
    let second = factory::create_teacher(db).await?;

    let repo = TeacherRepository::new(db);
    let teachers = repo.get_all().await?;

    assert_eq!(teachers.len(), 2);
    assert_eq!(teachers[0].id, first.id);
    assert_eq!(teachers[1].id, second.id);

    let fetched = repo.get_by_id(second.id).await?;
    assert_eq!(fetched.as_ref(), Some(&teachers[1]));
    assert!(repo.get_by_id(999).await?.is_none());

    Ok(())
}
