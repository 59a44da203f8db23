use crate::server::{error::AppError, model::person::PersonParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod house;

fn person(name: &str, house: Option<&str>) -> PersonParams {
    PersonParams {
        name: Some(name.to_string()),
        date_of_birth: None,
        house: house.map(str::to_string),
    }
}
