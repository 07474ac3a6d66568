use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub struct CustomerFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerFixtures<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a customer with standard test values. No confirmation rows are
    /// created; seed them explicitly where the test needs them.
    pub async fn insert(
        &self,
        created_by: i32,
        name: &str,
    ) -> Result<entity::customer::Model, TestError> {
        let customer = entity::customer::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            street: ActiveValue::Set(Some("Rua das Laranjeiras".to_string())),
            number: ActiveValue::Set(Some("123".to_string())),
            complement: ActiveValue::Set(None),
            neighborhood: ActiveValue::Set(Some("Centro".to_string())),
            city: ActiveValue::Set(Some("Sao Paulo".to_string())),
            state: ActiveValue::Set(Some("SP".to_string())),
            postal_code: ActiveValue::Set(Some("01000-000".to_string())),
            phone: ActiveValue::Set(Some("11988887777".to_string())),
            email: ActiveValue::Set(Some("customer@example.com".to_string())),
            tax_id: ActiveValue::Set(Some("123.456.789-00".to_string())),
            fraud_description: ActiveValue::Set(
                "Claims packages never arrive despite delivery confirmation".to_string(),
            ),
            created_by: ActiveValue::Set(created_by),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(customer.insert(self.db).await?)
    }

    pub async fn insert_confirmation(
        &self,
        customer_id: i32,
        driver_id: i32,
    ) -> Result<entity::customer_confirmation::Model, TestError> {
        let confirmation = entity::customer_confirmation::ActiveModel {
            customer_id: ActiveValue::Set(customer_id),
            driver_id: ActiveValue::Set(driver_id),
            confirmed_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(confirmation.insert(self.db).await?)
    }
}
