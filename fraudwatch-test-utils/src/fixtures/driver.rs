use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::{constant::TEST_PASSWORD_HASH, error::TestError};

pub struct DriverFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DriverFixtures<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a driver with standard test values and the given email.
    pub async fn insert(&self, email: &str) -> Result<entity::driver::Model, TestError> {
        self.insert_named("Test Driver", email).await
    }

    pub async fn insert_named(
        &self,
        name: &str,
        email: &str,
    ) -> Result<entity::driver::Model, TestError> {
        let driver = entity::driver::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            email: ActiveValue::Set(email.to_string()),
            password_hash: ActiveValue::Set(TEST_PASSWORD_HASH.to_string()),
            company: ActiveValue::Set("Test Logistics".to_string()),
            phone: ActiveValue::Set(Some("11999990000".to_string())),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(driver.insert(self.db).await?)
    }
}
