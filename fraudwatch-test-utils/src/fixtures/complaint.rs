use chrono::{NaiveDate, Utc};
use entity::complaint::ComplaintStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub struct ComplaintFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ComplaintFixtures<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a pending complaint with standard test values.
    pub async fn insert(
        &self,
        customer_id: i32,
        driver_id: i32,
    ) -> Result<entity::complaint::Model, TestError> {
        self.insert_with_status(customer_id, driver_id, ComplaintStatus::Pending)
            .await
    }

    pub async fn insert_with_status(
        &self,
        customer_id: i32,
        driver_id: i32,
        status: ComplaintStatus,
    ) -> Result<entity::complaint::Model, TestError> {
        let complaint = entity::complaint::ActiveModel {
            customer_id: ActiveValue::Set(customer_id),
            driver_id: ActiveValue::Set(driver_id),
            delivery_date: ActiveValue::Set(NaiveDate::from_ymd_opt(2026, 7, 14).unwrap()),
            tracking_code: ActiveValue::Set(Some("BR123456789".to_string())),
            description: ActiveValue::Set(
                "Signed for the package, later claimed non-delivery".to_string(),
            ),
            status: ActiveValue::Set(status),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(complaint.insert(self.db).await?)
    }

    pub async fn insert_evidence(
        &self,
        complaint_id: i32,
    ) -> Result<entity::complaint_evidence::Model, TestError> {
        let evidence = entity::complaint_evidence::ActiveModel {
            complaint_id: ActiveValue::Set(complaint_id),
            kind: ActiveValue::Set("photo".to_string()),
            url: ActiveValue::Set("https://cdn.example.com/doorstep.jpg".to_string()),
            description: ActiveValue::Set(Some("Package at the door".to_string())),
            ..Default::default()
        };

        Ok(evidence.insert(self.db).await?)
    }
}
