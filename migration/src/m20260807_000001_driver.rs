use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Driver::Table)
                    .if_not_exists()
                    .col(pk_auto(Driver::Id))
                    .col(string(Driver::Name))
                    .col(string_uniq(Driver::Email))
                    .col(string(Driver::PasswordHash))
                    .col(string(Driver::Company))
                    .col(string_null(Driver::Phone))
                    .col(timestamp(Driver::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Driver::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Driver {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Company,
    Phone,
    CreatedAt,
}
