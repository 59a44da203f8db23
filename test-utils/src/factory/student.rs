//! Student factory for creating test student entities.
//!
//! Defaults come from the student fixture with a unique first name per call.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;
use crate::fixture;

/// Factory for creating test students with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let student = StudentFactory::new(&db)
///     .name("Luna", None, Some("Lovegood"))
///     .house(Some("Ravenclaw"))
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::student::Model,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values from fixture.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `StudentFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::student::entity_builder()
            .first_name(format!("Student{}", id))
            .build();

        Self { db, entity }
    }

    /// Sets all three name parts at once.
    pub fn name(mut self, first: &str, middle: Option<&str>, last: Option<&str>) -> Self {
        self.entity.first_name = first.to_string();
        self.entity.middle_name = middle.map(str::to_string);
        self.entity.last_name = last.map(str::to_string);
        self
    }

    pub fn date_of_birth(mut self, date_of_birth: Option<NaiveDate>) -> Self {
        self.entity.date_of_birth = date_of_birth;
        self
    }

    /// Sets the house name. The house must already exist.
    pub fn house(mut self, house: Option<&str>) -> Self {
        self.entity.house = house.map(str::to_string);
        self
    }

    pub fn prefect(mut self, prefect: bool) -> Self {
        self.entity.prefect = prefect;
        self
    }

    pub fn enrollment_year(mut self, year: Option<i32>) -> Self {
        self.entity.enrollment_year = year;
        self
    }

    pub fn graduation_year(mut self, year: Option<i32>) -> Self {
        self.entity.graduation_year = year;
        self
    }

    pub fn graduated(mut self, graduated: bool) -> Self {
        self.entity.graduated = graduated;
        self
    }

    pub fn school_year(mut self, year: Option<i32>) -> Self {
        self.entity.school_year = year;
        self
    }

    /// Builds and inserts the student entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::student::Model)` - Created student entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            id: ActiveValue::NotSet,
            first_name: ActiveValue::Set(self.entity.first_name),
            middle_name: ActiveValue::Set(self.entity.middle_name),
            last_name: ActiveValue::Set(self.entity.last_name),
            date_of_birth: ActiveValue::Set(self.entity.date_of_birth),
            house: ActiveValue::Set(self.entity.house),
            prefect: ActiveValue::Set(self.entity.prefect),
            enrollment_year: ActiveValue::Set(self.entity.enrollment_year),
            graduation_year: ActiveValue::Set(self.entity.graduation_year),
            graduated: ActiveValue::Set(self.entity.graduated),
            school_year: ActiveValue::Set(self.entity.school_year),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values.
///
/// Shorthand for `StudentFactory::new(db).build().await`.
///
/// # Returns
/// - `Ok(entity::student::Model)` - Created student entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_student(db: &DatabaseConnection) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).build().await
}
