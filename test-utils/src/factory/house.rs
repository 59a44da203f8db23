//! House factory for creating test house entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test houses with customizable fields.
///
/// The default name is unique per call so several houses can coexist in one test.
pub struct HouseFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::house::Model,
}

impl<'a> HouseFactory<'a> {
    /// Creates a new HouseFactory with default values from fixture.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `HouseFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::house::entity_builder()
            .name(format!("House {}", id))
            .build();

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn founder(mut self, founder: impl Into<String>) -> Self {
        self.entity.founder = founder.into();
        self
    }

    pub fn colors(mut self, color1: impl Into<String>, color2: impl Into<String>) -> Self {
        self.entity.color1 = color1.into();
        self.entity.color2 = color2.into();
        self
    }

    /// Builds and inserts the house entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::house::Model)` - Created house entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::house::Model, DbErr> {
        entity::house::ActiveModel {
            name: ActiveValue::Set(self.entity.name),
            founder: ActiveValue::Set(self.entity.founder),
            color1: ActiveValue::Set(self.entity.color1),
            color2: ActiveValue::Set(self.entity.color2),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a house with default values.
///
/// Shorthand for `HouseFactory::new(db).build().await`.
pub async fn create_house(db: &DatabaseConnection) -> Result<entity::house::Model, DbErr> {
    HouseFactory::new(db).build().await
}
