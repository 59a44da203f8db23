pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_house_table;
mod m20240101_000002_create_student_table;
mod m20240101_000003_create_teacher_table;
mod m20240101_000004_create_course_table;
mod m20240101_000005_create_course_student_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_house_table::Migration),
            Box::new(m20240101_000002_create_student_table::Migration),
            Box::new(m20240101_000003_create_teacher_table::Migration),
            Box::new(m20240101_000004_create_course_table::Migration),
            Box::new(m20240101_000005_create_course_student_table::Migration),
        ]
    }
}
