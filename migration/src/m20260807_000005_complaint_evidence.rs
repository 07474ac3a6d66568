use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260807_000004_complaint::Complaint;

static FK_EVIDENCE_COMPLAINT_ID: &str = "fk-complaint_evidence-complaint_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ComplaintEvidence::Table)
                    .if_not_exists()
                    .col(pk_auto(ComplaintEvidence::Id))
                    .col(integer(ComplaintEvidence::ComplaintId))
                    .col(string(ComplaintEvidence::Kind))
                    .col(string(ComplaintEvidence::Url))
                    .col(string_null(ComplaintEvidence::Description))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EVIDENCE_COMPLAINT_ID)
                    .from_tbl(ComplaintEvidence::Table)
                    .from_col(ComplaintEvidence::ComplaintId)
                    .to_tbl(Complaint::Table)
                    .to_col(Complaint::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_EVIDENCE_COMPLAINT_ID)
                    .table(ComplaintEvidence::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ComplaintEvidence::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ComplaintEvidence {
    Table,
    Id,
    ComplaintId,
    Kind,
    Url,
    Description,
}
