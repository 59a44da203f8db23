use sea_orm::DatabaseConnection;

use crate::server::{
    data::house::HouseRepository, error::AppError, model::house::House,
    util::house::normalize_house_name,
};

pub const INVALID_HOUSE: &str = "Invalid house.";

pub struct HouseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HouseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all houses ordered by name
    pub async fn get_all(&self) -> Result<Vec<House>, AppError> {
        Ok(HouseRepository::new(self.db).get_all().await?)
    }

    /// Gets a house by its name exactly as stored
    pub async fn get_by_name(&self, name: &str) -> Result<Option<House>, AppError> {
        Ok(HouseRepository::new(self.db).get_by_name(name).await?)
    }

    /// Resolves a requested house name to the stored name.
    ///
    /// # Arguments
    /// - `name` - House name in any capitalization
    ///
    /// # Returns
    /// - `Ok(String)` - Stored name of the matching house
    /// - `Err(AppError::BadRequest)` - No house with that name
    pub async fn resolve(&self, name: &str) -> Result<String, AppError> {
        let normalized = normalize_house_name(name);

        HouseRepository::new(self.db)
            .get_by_name(&normalized)
            .await?
            .map(|house| house.name)
            .ok_or_else(|| AppError::BadRequest(INVALID_HOUSE.to_string()))
    }
}
