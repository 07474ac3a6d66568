use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct ConfirmationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ConfirmationRepository<'a, C> {
    /// Creates a new instance of [`ConfirmationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends a confirmation; the caller is responsible for the
    /// one-confirmation-per-driver rule.
    pub async fn create(
        &self,
        customer_id: i32,
        driver_id: i32,
    ) -> Result<entity::customer_confirmation::Model, DbErr> {
        let confirmation = entity::customer_confirmation::ActiveModel {
            customer_id: ActiveValue::Set(customer_id),
            driver_id: ActiveValue::Set(driver_id),
            confirmed_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        confirmation.insert(self.db).await
    }

    /// Confirmations for one customer with confirming drivers resolved,
    /// oldest first (the creator's seed entry leads).
    pub async fn get_by_customer(
        &self,
        customer_id: i32,
    ) -> Result<
        Vec<(
            entity::customer_confirmation::Model,
            Option<entity::driver::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::CustomerConfirmation::find()
            .filter(entity::customer_confirmation::Column::CustomerId.eq(customer_id))
            .order_by_asc(entity::customer_confirmation::Column::ConfirmedAt)
            .find_also_related(entity::prelude::Driver)
            .all(self.db)
            .await
    }

    pub async fn get_by_customer_ids(
        &self,
        customer_ids: Vec<i32>,
    ) -> Result<Vec<entity::customer_confirmation::Model>, DbErr> {
        entity::prelude::CustomerConfirmation::find()
            .filter(entity::customer_confirmation::Column::CustomerId.is_in(customer_ids))
            .all(self.db)
            .await
    }
}
