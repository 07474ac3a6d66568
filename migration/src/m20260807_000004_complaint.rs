use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260807_000001_driver::Driver, m20260807_000002_customer::Customer};

static FK_COMPLAINT_CUSTOMER_ID: &str = "fk-complaint-customer_id";
static FK_COMPLAINT_DRIVER_ID: &str = "fk-complaint-driver_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Complaint::Table)
                    .if_not_exists()
                    .col(pk_auto(Complaint::Id))
                    .col(integer(Complaint::CustomerId))
                    .col(integer(Complaint::DriverId))
                    .col(date(Complaint::DeliveryDate))
                    .col(string_null(Complaint::TrackingCode))
                    .col(string(Complaint::Description))
                    .col(string_len(Complaint::Status, 16))
                    .col(timestamp(Complaint::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_COMPLAINT_CUSTOMER_ID)
                    .from_tbl(Complaint::Table)
                    .from_col(Complaint::CustomerId)
                    .to_tbl(Customer::Table)
                    .to_col(Customer::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_COMPLAINT_DRIVER_ID)
                    .from_tbl(Complaint::Table)
                    .from_col(Complaint::DriverId)
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
                    .name(FK_COMPLAINT_DRIVER_ID)
                    .table(Complaint::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_COMPLAINT_CUSTOMER_ID)
                    .table(Complaint::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Complaint::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Complaint {
    Table,
    Id,
    CustomerId,
    DriverId,
    DeliveryDate,
    TrackingCode,
    Description,
    Status,
    CreatedAt,
}
