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
                    .table(Teacher::Table)
                    .if_not_exists()
                    .col(pk_auto(Teacher::Id))
                    .col(string(Teacher::FirstName))
                    .col(string_null(Teacher::MiddleName))
                    .col(string_null(Teacher::LastName))
                    .col(date_null(Teacher::DateOfBirth))
                    .col(string_null(Teacher::House))
                    .col(boolean(Teacher::HeadOfHouse).default(false))
                    .col(string_null(Teacher::Employment))
                    .col(date_null(Teacher::EmploymentStart))
                    .col(date_null(Teacher::EmploymentEnd))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teacher_house")
                            .from(Teacher::Table, Teacher::House)
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
            .drop_table(Table::drop().table(Teacher::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Teacher {
    Table,
    Id,
    FirstName,
    MiddleName,
    LastName,
    DateOfBirth,
    House,
    HeadOfHouse,
    Employment,
    EmploymentStart,
    EmploymentEnd,
}
