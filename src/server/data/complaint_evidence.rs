use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::model::complaint::EvidenceDto;

pub struct EvidenceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EvidenceRepository<'a, C> {
    /// Creates a new instance of [`EvidenceRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create_many(
        &self,
        complaint_id: i32,
        evidence: &[EvidenceDto],
    ) -> Result<Vec<entity::complaint_evidence::Model>, DbErr> {
        let mut models = Vec::with_capacity(evidence.len());

        for item in evidence {
            let model = entity::complaint_evidence::ActiveModel {
                complaint_id: ActiveValue::Set(complaint_id),
                kind: ActiveValue::Set(item.kind.clone()),
                url: ActiveValue::Set(item.url.clone()),
                description: ActiveValue::Set(item.description.clone()),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            models.push(model);
        }

        Ok(models)
    }

    pub async fn get_by_complaint(
        &self,
        complaint_id: i32,
    ) -> Result<Vec<entity::complaint_evidence::Model>, DbErr> {
        entity::prelude::ComplaintEvidence::find()
            .filter(entity::complaint_evidence::Column::ComplaintId.eq(complaint_id))
            .all(self.db)
            .await
    }
}
