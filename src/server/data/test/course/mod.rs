use crate::server::{data::course::CourseRepository, model::course::SaveCourseParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_by_id;
mod set_teacher;
mod unassign_teacher;
mod update;

fn save_params(subject: &str, teacher_id: Option<i32>) -> SaveCourseParams {
    SaveCourseParams {
        subject: subject.to_string(),
        school_year: None,
        current: false,
        teacher_id,
    }
}
