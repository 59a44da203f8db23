use crate::server::{data::house::HouseRepository, model::house::House};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
mod get_by_name;
