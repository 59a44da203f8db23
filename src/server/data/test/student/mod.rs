use crate::server::{
    data::student::StudentRepository,
    model::{person::PersonFields, student::SaveStudentParams},
    util::name::split_full_name,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_name;
mod find_existing_ids;
mod get_all;
mod get_by_id;
mod update;

fn save_params(first: &str, last: Option<&str>) -> SaveStudentParams {
    SaveStudentParams {
        person: PersonFields {
            first_name: first.to_string(),
            middle_name: None,
            last_name: last.map(str::to_string),
            date_of_birth: None,
            house: None,
        },
        prefect: false,
        enrollment_year: None,
        graduation_year: None,
        graduated: false,
        school_year: None,
    }
}
