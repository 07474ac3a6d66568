use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    ExprTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::customer::CreateCustomerDto;

/// Optional filters for the customer list; every field narrows the result.
#[derive(Debug, Default)]
pub struct CustomerFilter {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub postal_code: Option<String>,
}

impl CustomerFilter {
    /// Substring matches are lowered on both sides so the same statement is
    /// case-insensitive on Postgres and the sqlite test harness.
    fn into_condition(self) -> Condition {
        let mut condition = Condition::all();

        if let Some(name) = self.name {
            condition = condition.add(
                Expr::expr(Func::lower(Expr::col((
                    entity::prelude::Customer,
                    entity::customer::Column::Name,
                ))))
                .like(format!("%{}%", name.to_lowercase())),
            );
        }
        if let Some(phone) = self.phone {
            condition = condition.add(entity::customer::Column::Phone.eq(phone));
        }
        if let Some(email) = self.email {
            condition = condition.add(
                Expr::expr(Func::lower(Expr::col((
                    entity::prelude::Customer,
                    entity::customer::Column::Email,
                ))))
                .like(format!("%{}%", email.to_lowercase())),
            );
        }
        if let Some(postal_code) = self.postal_code {
            condition = condition.add(entity::customer::Column::PostalCode.eq(postal_code));
        }

        condition
    }
}

pub struct CustomerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CustomerRepository<'a, C> {
    /// Creates a new instance of [`CustomerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        created_by: i32,
        payload: &CreateCustomerDto,
    ) -> Result<entity::customer::Model, DbErr> {
        let customer = entity::customer::ActiveModel {
            name: ActiveValue::Set(payload.name.clone()),
            street: ActiveValue::Set(payload.address.street.clone()),
            number: ActiveValue::Set(payload.address.number.clone()),
            complement: ActiveValue::Set(payload.address.complement.clone()),
            neighborhood: ActiveValue::Set(payload.address.neighborhood.clone()),
            city: ActiveValue::Set(payload.address.city.clone()),
            state: ActiveValue::Set(payload.address.state.clone()),
            postal_code: ActiveValue::Set(payload.address.postal_code.clone()),
            phone: ActiveValue::Set(payload.phone.clone()),
            email: ActiveValue::Set(payload.email.clone()),
            tax_id: ActiveValue::Set(payload.tax_id.clone()),
            fraud_description: ActiveValue::Set(payload.fraud_description.clone()),
            created_by: ActiveValue::Set(created_by),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        customer.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        customer_id: i32,
    ) -> Result<Option<entity::customer::Model>, DbErr> {
        entity::prelude::Customer::find_by_id(customer_id)
            .one(self.db)
            .await
    }

    pub async fn get_with_creator(
        &self,
        customer_id: i32,
    ) -> Result<Option<(entity::customer::Model, Option<entity::driver::Model>)>, DbErr> {
        entity::prelude::Customer::find_by_id(customer_id)
            .find_also_related(entity::prelude::Driver)
            .one(self.db)
            .await
    }

    /// Filtered page of customers with their creators, newest first,
    /// plus the unpaginated total.
    pub async fn list(
        &self,
        filter: CustomerFilter,
        page: u64,
        page_size: u64,
    ) -> Result<
        (
            Vec<(entity::customer::Model, Option<entity::driver::Model>)>,
            u64,
        ),
        DbErr,
    > {
        let paginator = entity::prelude::Customer::find()
            .filter(filter.into_condition())
            .order_by_desc(entity::customer::Column::CreatedAt)
            .find_also_related(entity::prelude::Driver)
            .paginate(self.db, page_size);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((rows, total))
    }
}
