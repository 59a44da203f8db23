//! Shared helper utilities for factory methods.
//!
//! ID generation plus convenience methods for creating entities along with their
//! dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Inserts the four school houses with their founders and colors.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(Vec<entity::house::Model>)` - Gryffindor, Hufflepuff, Ravenclaw and Slytherin
/// - `Err(DbErr)` - Database error during creation
pub async fn create_houses(db: &DatabaseConnection) -> Result<Vec<entity::house::Model>, DbErr> {
    let houses = [
        ("Gryffindor", "Godric Gryffindor", "scarlet", "gold"),
        ("Hufflepuff", "Helga Hufflepuff", "yellow", "black"),
        ("Ravenclaw", "Rowena Ravenclaw", "blue", "silver"),
        ("Slytherin", "Salazar Slytherin", "green", "silver"),
    ];

    let mut created = Vec::with_capacity(houses.len());
    for (name, founder, color1, color2) in houses {
        let house = crate::factory::house::HouseFactory::new(db)
            .name(name)
            .founder(founder)
            .colors(color1, color2)
            .build()
            .await?;
        created.push(house);
    }

    Ok(created)
}

/// Creates a course taught by a new teacher with `count` new students enrolled.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of students to enroll
///
/// # Returns
/// - `Ok((course, teacher, students))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_course_with_roster(
    db: &DatabaseConnection,
    count: usize,
) -> Result<
    (
        entity::course::Model,
        entity::teacher::Model,
        Vec<entity::student::Model>,
    ),
    DbErr,
> {
    let teacher = crate::factory::teacher::create_teacher(db).await?;
    let course = crate::factory::course::CourseFactory::new(db)
        .teacher_id(Some(teacher.id))
        .build()
        .await?;

    let mut students = Vec::with_capacity(count);
    for _ in 0..count {
        let student = crate::factory::student::create_student(db).await?;
        crate::factory::course_student::enroll_student(db, course.id, student.id).await?;
        students.push(student);
    }

    Ok((course, teacher, students))
}
