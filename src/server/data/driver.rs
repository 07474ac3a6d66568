use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct DriverRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DriverRepository<'a, C> {
    /// Creates a new instance of [`DriverRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new driver; the password must already be hashed.
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
        company: &str,
        phone: Option<String>,
    ) -> Result<entity::driver::Model, DbErr> {
        let driver = entity::driver::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            email: ActiveValue::Set(email.to_string()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            company: ActiveValue::Set(company.to_string()),
            phone: ActiveValue::Set(phone),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        driver.insert(self.db).await
    }

    pub async fn get_by_id(&self, driver_id: i32) -> Result<Option<entity::driver::Model>, DbErr> {
        entity::prelude::Driver::find_by_id(driver_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<entity::driver::Model>, DbErr> {
        entity::prelude::Driver::find()
            .filter(entity::driver::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn get_many_by_ids(
        &self,
        driver_ids: Vec<i32>,
    ) -> Result<Vec<entity::driver::Model>, DbErr> {
        entity::prelude::Driver::find()
            .filter(entity::driver::Column::Id.is_in(driver_ids))
            .all(self.db)
            .await
    }
}
