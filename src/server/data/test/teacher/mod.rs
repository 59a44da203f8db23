use crate::server::{
    data::teacher::TeacherRepository,
    model::{person::PersonFields, teacher::SaveTeacherParams},
};
use entity::sea_orm_active_enums::EmploymentType;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod update;

fn save_params(first: &str, last: Option<&str>) -> SaveTeacherParams {
    SaveTeacherParams {
        person: PersonFields {
            first_name: first.to_string(),
            middle_name: None,
            last_name: last.map(str::to_string),
            date_of_birth: None,
            house: None,
        },
        head_of_house: false,
        employment: None,
        employment_start: None,
        employment_end: None,
    }
}
