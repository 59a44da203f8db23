use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240101_000002_create_student_table::Student, m20240101_000004_create_course_table::Course,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CourseStudent::Table)
                    .if_not_exists()
                    .col(integer(CourseStudent::CourseId))
                    .col(integer(CourseStudent::StudentId))
                    .primary_key(
                        Index::create()
                            .name("pk_course_student")
                            .col(CourseStudent::CourseId)
                            .col(CourseStudent::StudentId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_student_course_id")
                            .from(CourseStudent::Table, CourseStudent::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_student_student_id")
                            .from(CourseStudent::Table, CourseStudent::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CourseStudent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CourseStudent {
    Table,
    CourseId,
    StudentId,
}
