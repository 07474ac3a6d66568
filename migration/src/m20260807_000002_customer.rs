use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260807_000001_driver::Driver;

static FK_CUSTOMER_CREATED_BY: &str = "fk-customer-created_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customer::Table)
                    .if_not_exists()
                    .col(pk_auto(Customer::Id))
                    .col(string(Customer::Name))
                    .col(string_null(Customer::Street))
                    .col(string_null(Customer::Number))
                    .col(string_null(Customer::Complement))
                    .col(string_null(Customer::Neighborhood))
                    .col(string_null(Customer::City))
                    .col(string_null(Customer::State))
                    .col(string_null(Customer::PostalCode))
                    .col(string_null(Customer::Phone))
                    .col(string_null(Customer::Email))
                    .col(string_null(Customer::TaxId))
                    .col(string(Customer::FraudDescription))
                    .col(integer(Customer::CreatedBy))
                    .col(timestamp(Customer::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CUSTOMER_CREATED_BY)
                    .from_tbl(Customer::Table)
                    .from_col(Customer::CreatedBy)
                    .to_tbl(Driver::Table)
                    .to_col(Driver::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CUSTOMER_CREATED_BY)
                    .table(Customer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Customer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Customer {
    Table,
    Id,
    Name,
    Street,
    Number,
    Complement,
    Neighborhood,
    City,
    State,
    PostalCode,
    Phone,
    Email,
    TaxId,
    FraudDescription,
    CreatedBy,
    CreatedAt,
}
