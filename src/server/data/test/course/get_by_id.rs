use super::*;

/// Tests fetching a course with its roster.
///
/// Verifies that the roster is ordered by student id even when enrollment order differs.
///
/// Expected: Ok(Some) with students sorted by id
#[tokio::test]
async fn returns_roster_ordered_by_student_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;
    let first = factory::create_student(db).await?;
    let second = factory::create_student(db).await?;
    factory::enroll_student(db, course.id, second.id).await?;
    factory::enroll_student(db, course.id, first.id).await?;

    let repo = CourseRepository::new(db);
    let result = repo.get_by_id(course.id).await?.unwrap();

    let roster: Vec<i32> = result.students.iter().map(|s| s.id).collect();
    assert_eq!(roster, vec![first.id, second.id]);
    assert!(repo.exists(course.id).await?);

    Ok(())
}

/// Tests fetching an unknown course.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourseRepository::new(db);

    assert!(repo.get_by_id(999).await?.is_none());
    assert!(!repo.exists(999).await?);

    Ok(())
}
