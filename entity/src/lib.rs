//! SeaORM entities for the school administration schema.
//!
//! One module per table. Foreign keys are plain columns (`house`, `teacher_id`)
//! and the course roster lives in the `course_student` join table, so every
//! association is visible and maintained explicitly by the repositories.

pub mod prelude;

pub mod course;
pub mod course_student;
pub mod house;
pub mod sea_orm_active_enums;
pub mod student;
pub mod teacher;
