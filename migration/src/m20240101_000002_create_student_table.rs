use sea_orm_migration::{prelude::*, schema::*};

use super::m20240101_000001_create_house_table::House;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_auto(Student::Id))
                    .col(string(Student::FirstName))
                    .col(string_null(Student::MiddleName))
                    .col(string_null(Student::LastName))
                    .col(date_null(Student::DateOfBirth))
                    .col(string_null(Student::House))
                    .col(boolean(Student::Prefect).default(false))
                    .col(integer_null(Student::EnrollmentYear))
                    .col(integer_null(Student::GraduationYear))
                    .col(boolean(Student::Graduated).default(false))
                    .col(integer_null(Student::SchoolYear))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_house")
                            .from(Student::Table, Student::House)
                            .to(House::Table, House::Name)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Student {
    Table,
    Id,
    FirstName,
    MiddleName,
    LastName,
    DateOfBirth,
    House,
    Prefect,
    EnrollmentYear,
    GraduationYear,
    Graduated,
    SchoolYear,
}
