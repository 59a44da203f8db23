//! Teacher factory for creating test teacher entities.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::EmploymentType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;
use crate::fixture;

/// Factory for creating test teachers with customizable fields.
pub struct TeacherFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::teacher::Model,
}

impl<'a> TeacherFactory<'a> {
    /// Creates a new TeacherFactory with default values from fixture.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `TeacherFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::teacher::entity_builder()
            .first_name(format!("Teacher{}", id))
            .build();

        Self { db, entity }
    }

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

    pub fn house(mut self, house: Option<&str>) -> Self {
        self.entity.house = house.map(str::to_string);
        self
    }

    pub fn head_of_house(mut self, head_of_house: bool) -> Self {
        self.entity.head_of_house = head_of_house;
        self
    }

    pub fn employment(mut self, employment: Option<EmploymentType>) -> Self {
        self.entity.employment = employment;
        self
    }

    pub fn employment_start(mut self, start: Option<NaiveDate>) -> Self {
        self.entity.employment_start = start;
        self
    }

    pub fn employment_end(mut self, end: Option<NaiveDate>) -> Self {
        self.entity.employment_end = end;
        self
    }

    /// Builds and inserts the teacher entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::teacher::Model)` - Created teacher entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::teacher::Model, DbErr> {
        entity::teacher::ActiveModel {
            id: ActiveValue::NotSet,
            first_name: ActiveValue::Set(self.entity.first_name),
            middle_name: ActiveValue::Set(self.entity.middle_name),
            last_name: ActiveValue::Set(self.entity.last_name),
            date_of_birth: ActiveValue::Set(self.entity.date_of_birth),
            house: ActiveValue::Set(self.entity.house),
            head_of_house: ActiveValue::Set(self.entity.head_of_house),
            employment: ActiveValue::Set(self.entity.employment),
            employment_start: ActiveValue::Set(self.entity.employment_start),
            employment_end: ActiveValue::Set(self.entity.employment_end),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a teacher with default values.
pub async fn create_teacher(db: &DatabaseConnection) -> Result<entity::teacher::Model, DbErr> {
    TeacherFactory::new(db).build().await
}
