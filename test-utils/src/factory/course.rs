//! Course factory for creating test course entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;
use crate::fixture;

/// Factory for creating test courses with customizable fields.
pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::course::Model,
}

impl<'a> CourseFactory<'a> {
    /// Creates a new CourseFactory with default values from fixture.
    ///
    /// The subject is unique per call and no teacher is assigned.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::course::entity_builder()
            .subject(format!("Subject {}", id))
            .build();

        Self { db, entity }
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.entity.subject = subject.into();
        self
    }

    pub fn school_year(mut self, school_year: Option<i32>) -> Self {
        self.entity.school_year = school_year;
        self
    }

    pub fn current(mut self, current: bool) -> Self {
        self.entity.current = current;
        self
    }

    /// Sets the assigned teacher. The teacher must already exist.
    pub fn teacher_id(mut self, teacher_id: Option<i32>) -> Self {
        self.entity.teacher_id = teacher_id;
        self
    }

    /// Builds and inserts the course entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::course::Model)` - Created course entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            id: ActiveValue::NotSet,
            subject: ActiveValue::Set(self.entity.subject),
            school_year: ActiveValue::Set(self.entity.school_year),
            current: ActiveValue::Set(self.entity.current),
            teacher_id: ActiveValue::Set(self.entity.teacher_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a course with default values.
pub async fn create_course(db: &DatabaseConnection) -> Result<entity::course::Model, DbErr> {
    CourseFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_course_with_teacher() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_school_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let teacher = crate::factory::create_teacher(db).await?;
        let course = CourseFactory::new(db)
            .subject("Potions")
            .teacher_id(Some(teacher.id))
            .current(true)
            .build()
            .await?;

        assert_eq!(course.subject, "Potions");
        assert_eq!(course.teacher_id, Some(teacher.id));
        assert!(course.current);

        Ok(())
    }

    #[tokio::test]
    async fn creates_course_with_roster() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_school_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (course, teacher, students) =
            crate::factory::helpers::create_course_with_roster(db, 3).await?;

        assert_eq!(course.teacher_id, Some(teacher.id));
        assert_eq!(students.len(), 3);

        Ok(())
    }
}
