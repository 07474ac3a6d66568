use chrono::{NaiveDate, Utc};
use entity::complaint::ComplaintStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::complaint::CreateComplaintDto;

/// Optional filters for the complaint list; date bounds are inclusive.
#[derive(Debug, Default)]
pub struct ComplaintFilter {
    pub customer_id: Option<i32>,
    pub status: Option<ComplaintStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ComplaintFilter {
    fn into_condition(self) -> Condition {
        let mut condition = Condition::all();

        if let Some(customer_id) = self.customer_id {
            condition = condition.add(entity::complaint::Column::CustomerId.eq(customer_id));
        }
        if let Some(status) = self.status {
            condition = condition.add(entity::complaint::Column::Status.eq(status));
        }
        if let Some(start_date) = self.start_date {
            condition = condition.add(entity::complaint::Column::DeliveryDate.gte(start_date));
        }
        if let Some(end_date) = self.end_date {
            condition = condition.add(entity::complaint::Column::DeliveryDate.lte(end_date));
        }

        condition
    }
}

pub struct ComplaintRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ComplaintRepository<'a, C> {
    /// Creates a new instance of [`ComplaintRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a complaint filed by the given driver, status `pending`.
    pub async fn create(
        &self,
        driver_id: i32,
        payload: &CreateComplaintDto,
    ) -> Result<entity::complaint::Model, DbErr> {
        let complaint = entity::complaint::ActiveModel {
            customer_id: ActiveValue::Set(payload.customer),
            driver_id: ActiveValue::Set(driver_id),
            delivery_date: ActiveValue::Set(payload.delivery_date),
            tracking_code: ActiveValue::Set(payload.tracking_code.clone()),
            description: ActiveValue::Set(payload.description.clone()),
            status: ActiveValue::Set(ComplaintStatus::Pending),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        complaint.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        complaint_id: i32,
    ) -> Result<Option<entity::complaint::Model>, DbErr> {
        entity::prelude::Complaint::find_by_id(complaint_id)
            .one(self.db)
            .await
    }

    pub async fn get_with_customer(
        &self,
        complaint_id: i32,
    ) -> Result<Option<(entity::complaint::Model, Option<entity::customer::Model>)>, DbErr> {
        entity::prelude::Complaint::find_by_id(complaint_id)
            .find_also_related(entity::prelude::Customer)
            .one(self.db)
            .await
    }

    /// Filtered page of complaints with their customers, newest first,
    /// plus the unpaginated total.
    pub async fn list(
        &self,
        filter: ComplaintFilter,
        page: u64,
        page_size: u64,
    ) -> Result<
        (
            Vec<(entity::complaint::Model, Option<entity::customer::Model>)>,
            u64,
        ),
        DbErr,
    > {
        let paginator = entity::prelude::Complaint::find()
            .filter(filter.into_condition())
            .order_by_desc(entity::complaint::Column::CreatedAt)
            .find_also_related(entity::prelude::Customer)
            .paginate(self.db, page_size);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((rows, total))
    }

    /// Overwrites the status. Returns `Ok(None)` when the complaint is missing.
    pub async fn update_status(
        &self,
        complaint_id: i32,
        status: ComplaintStatus,
    ) -> Result<Option<entity::complaint::Model>, DbErr> {
        let complaint = match entity::prelude::Complaint::find_by_id(complaint_id)
            .one(self.db)
            .await?
        {
            Some(complaint) => complaint,
            None => return Ok(None),
        };

        let mut complaint_am = complaint.into_active_model();
        complaint_am.status = ActiveValue::Set(status);

        let complaint = complaint_am.update(self.db).await?;

        Ok(Some(complaint))
    }
}
