use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::house::House;

pub struct HouseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> HouseRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all houses ordered by name
    pub async fn get_all(&self) -> Result<Vec<House>, DbErr> {
        let houses = entity::prelude::House::find()
            .order_by_asc(entity::house::Column::Name)
            .all(self.db)
            .await?;

        Ok(houses.into_iter().map(House::from_entity).collect())
    }

    /// Gets a house by its exact stored name
    pub async fn get_by_name(&self, name: &str) -> Result<Option<House>, DbErr> {
        let house = entity::prelude::House::find_by_id(name.to_string())
            .one(self.db)
            .await?;

        Ok(house.map(House::from_entity))
    }

    /// Inserts a new house
    pub async fn create(&self, house: House) -> Result<House, DbErr> {
        let [color1, color2] = house.colors;

        let model = entity::house::ActiveModel {
            name: ActiveValue::Set(house.name),
            founder: ActiveValue::Set(house.founder),
            color1: ActiveValue::Set(color1),
            color2: ActiveValue::Set(color2),
        }
        .insert(self.db)
        .await?;

        Ok(House::from_entity(model))
    }
}
