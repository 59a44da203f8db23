use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(House::Table)
                    .if_not_exists()
                    .col(string(House::Name).primary_key())
                    .col(string(House::Founder))
                    .col(string(House::Color1))
                    .col(string(House::Color2))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(House::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum House {
    Table,
    Name,
    Founder,
    Color1,
    Color2,
}
