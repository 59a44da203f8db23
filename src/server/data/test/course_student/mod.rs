use crate::server::data::course_student::CourseStudentRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete_by_student;
mod enroll;
mod remove;
mod replace_roster;
