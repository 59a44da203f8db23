use super::*;

/// Tests removing a student from every course.
///
/// Expected: Ok(2) and other students stay enrolled
#[tokio::test]
async fn removes_student_from_all_courses() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (course, _, students) = factory::helpers::create_course_with_roster(db, 2).await?;
    let other = factory::create_course(db).await?;
    factory::enroll_student(db, other.id, students[0].id).await?;

    let repo = CourseStudentRepository::new(db);
    let removed = repo.delete_by_student(students[0].id).await?;

    assert_eq!(removed, 2);
    assert_eq!(repo.get_student_ids(course.id).await?, vec![students[1].id]);
    assert!(repo.get_student_ids(other.id).await?.is_empty());

    let cleared = repo.delete_by_course(course.id).await?;
    assert_eq!(cleared, 1);

    Ok(())
}
