use sea_orm_migration::{prelude::*, schema::*};

use super::m20240101_000003_create_teacher_table::Teacher;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(pk_auto(Course::Id))
                    .col(string(Course::Subject))
                    .col(integer_null(Course::SchoolYear))
                    .col(boolean(Course::Current).default(false))
                    .col(integer_null(Course::TeacherId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_teacher_id")
                            .from(Course::Table, Course::TeacherId)
                            .to(Teacher::Table, Teacher::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Course {
    Table,
    Id,
    Subject,
    SchoolYear,
    Current,
    TeacherId,
}
