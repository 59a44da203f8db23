use super::*;

/// Tests removing one student from a roster.
///
/// Expected: Ok(true) for an enrolled student, Ok(false) afterwards
#[tokio::test]
async fn removes_enrollment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (course, _, students) = factory::helpers::create_course_with_roster(db, 2).await?;

    let repo = CourseStudentRepository::new(db);

    assert!(repo.remove(course.id, students[0].id).await?);
    assert!(!repo.remove(course.id, students[0].id).await?);
    assert!(!repo.is_enrolled(course.id, students[0].id).await?);
    assert_eq!(repo.get_student_ids(course.id).await?, vec![students[1].id]);

    Ok(())
}
