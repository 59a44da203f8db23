use super::*;

/// Tests listing courses with their relations.
///
/// Verifies that each course carries its own teacher and roster and that courses
/// without either come back with none.
///
/// Expected: Ok with two courses in id order
#[tokio::test]
async fn returns_courses_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (course, teacher, students) = factory::helpers::create_course_with_roster(db, 2).await?;
    let empty = factory::create_course(db).await?;

    let courses = CourseRepository::new(db).get_all().await?;

    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0].course.id, course.id);
    assert_eq!(courses[0].teacher.as_ref().map(|t| t.id), Some(teacher.id));
    let roster: Vec<i32> = courses[0].students.iter().map(|s| s.id).collect();
    assert_eq!(roster, students.iter().map(|s| s.id).collect::<Vec<_>>());

    assert_eq!(courses[1].course.id, empty.id);
    assert!(courses[1].teacher.is_none());
    assert!(courses[1].students.is_empty());

    Ok(())
}

/// Tests listing courses on an empty table.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_when_no_courses() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let courses = CourseRepository::new(db).get_all().await?;

    assert!(courses.is_empty());

    Ok(())
}
