use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260807_000001_driver::Driver, m20260807_000002_customer::Customer};

static IDX_CONFIRMATION_CUSTOMER_ID: &str = "idx-customer_confirmation-customer_id";
static FK_CONFIRMATION_CUSTOMER_ID: &str = "fk-customer_confirmation-customer_id";
static FK_CONFIRMATION_DRIVER_ID: &str = "fk-customer_confirmation-driver_id";

// Deliberately no unique index on (customer_id, driver_id); the one-confirmation-
// per-driver rule is checked at the service layer.

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CustomerConfirmation::Table)
                    .if_not_exists()
                    .col(pk_auto(CustomerConfirmation::Id))
                    .col(integer(CustomerConfirmation::CustomerId))
                    .col(integer(CustomerConfirmation::DriverId))
                    .col(timestamp(CustomerConfirmation::ConfirmedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CONFIRMATION_CUSTOMER_ID)
                    .table(CustomerConfirmation::Table)
                    .col(CustomerConfirmation::CustomerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CONFIRMATION_CUSTOMER_ID)
                    .from_tbl(CustomerConfirmation::Table)
                    .from_col(CustomerConfirmation::CustomerId)
                    .to_tbl(Customer::Table)
                    .to_col(Customer::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CONFIRMATION_DRIVER_ID)
                    .from_tbl(CustomerConfirmation::Table)
                    .from_col(CustomerConfirmation::DriverId)
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
                    .name(FK_CONFIRMATION_DRIVER_ID)
                    .table(CustomerConfirmation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CONFIRMATION_CUSTOMER_ID)
                    .table(CustomerConfirmation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CONFIRMATION_CUSTOMER_ID)
                    .table(CustomerConfirmation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CustomerConfirmation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CustomerConfirmation {
    Table,
    Id,
    CustomerId,
    DriverId,
    ConfirmedAt,
}
