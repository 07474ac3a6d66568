use entity::complaint::ComplaintStatus;
use sea_orm::{ActiveEnum, ConnectionTrait};

use crate::{
    model::complaint::{
        ComplaintDto, ComplaintPageDto, ComplaintSummaryDto, CreateComplaintDto, EvidenceDto,
    },
    server::{
        data::{
            complaint::{ComplaintFilter, ComplaintRepository},
            complaint_evidence::EvidenceRepository,
            customer::CustomerRepository,
            driver::DriverRepository,
        },
        error::Error,
        service::{customer_ref, driver_ref, DEFAULT_PAGE_SIZE},
    },
};

/// Complaint registry rules: creation against an existing customer, filtered
/// paginated listing, and status-enum enforcement on update.
pub struct ComplaintService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ComplaintService<'a, C> {
    /// Creates a new instance of [`ComplaintService`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Files a complaint by `driver` against an existing customer, with any
    /// supplied evidence attached.
    pub async fn create(
        &self,
        driver: &entity::driver::Model,
        payload: &CreateComplaintDto,
    ) -> Result<ComplaintDto, Error> {
        if payload.description.trim().is_empty() {
            return Err(Error::Validation(
                "Complaint description is required".to_string(),
            ));
        }

        if CustomerRepository::new(self.db)
            .get_by_id(payload.customer)
            .await?
            .is_none()
        {
            return Err(Error::NotFound("Customer"));
        }

        let complaint = ComplaintRepository::new(self.db)
            .create(driver.id, payload)
            .await?;

        EvidenceRepository::new(self.db)
            .create_many(complaint.id, &payload.evidence)
            .await?;

        self.get(complaint.id).await
    }

    /// Complaint detail with customer, filer, and evidence resolved.
    pub async fn get(&self, complaint_id: i32) -> Result<ComplaintDto, Error> {
        let (complaint, maybe_customer) = ComplaintRepository::new(self.db)
            .get_with_customer(complaint_id)
            .await?
            .ok_or(Error::NotFound("Complaint"))?;

        let customer = maybe_customer.ok_or_else(|| {
            Error::InternalError(format!(
                "Failed to find customer ID {} for complaint ID {}",
                complaint.customer_id, complaint.id
            ))
        })?;

        let driver = DriverRepository::new(self.db)
            .get_by_id(complaint.driver_id)
            .await?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Failed to find filing driver ID {} for complaint ID {}",
                    complaint.driver_id, complaint.id
                ))
            })?;

        let evidence = EvidenceRepository::new(self.db)
            .get_by_complaint(complaint.id)
            .await?
            .into_iter()
            .map(|item| EvidenceDto {
                kind: item.kind,
                url: item.url,
                description: item.description,
            })
            .collect();

        Ok(ComplaintDto {
            id: complaint.id,
            customer: customer_ref(&customer),
            driver: driver_ref(&driver),
            delivery_date: complaint.delivery_date,
            tracking_code: complaint.tracking_code,
            description: complaint.description,
            evidence,
            status: complaint.status.to_value(),
            created_at: complaint.created_at,
        })
    }

    /// Filtered, paginated page of complaints, newest first.
    pub async fn list(
        &self,
        filter: ComplaintFilter,
        page: Option<u64>,
        page_size: Option<u64>,
    ) -> Result<ComplaintPageDto, Error> {
        let page = page.unwrap_or(1).max(1);
        let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1);

        let (rows, total) = ComplaintRepository::new(self.db)
            .list(filter, page, page_size)
            .await?;

        let driver_ids = rows.iter().map(|(complaint, _)| complaint.driver_id).collect();
        let drivers = DriverRepository::new(self.db)
            .get_many_by_ids(driver_ids)
            .await?;

        let complaints = rows
            .into_iter()
            .map(|(complaint, maybe_customer)| {
                let customer = maybe_customer.ok_or_else(|| {
                    Error::InternalError(format!(
                        "Failed to find customer ID {} for complaint ID {}",
                        complaint.customer_id, complaint.id
                    ))
                })?;

                let driver = drivers
                    .iter()
                    .find(|driver| driver.id == complaint.driver_id)
                    .ok_or_else(|| {
                        Error::InternalError(format!(
                            "Failed to find filing driver ID {} for complaint ID {}",
                            complaint.driver_id, complaint.id
                        ))
                    })?;

                Ok(ComplaintSummaryDto {
                    id: complaint.id,
                    customer: customer_ref(&customer),
                    driver: driver_ref(driver),
                    delivery_date: complaint.delivery_date,
                    tracking_code: complaint.tracking_code.clone(),
                    status: complaint.status.to_value(),
                    created_at: complaint.created_at,
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(ComplaintPageDto {
            success: true,
            total,
            page,
            total_pages: total.div_ceil(page_size),
            complaints,
        })
    }

    /// Overwrites the status after validating it against the enum.
    pub async fn update_status(
        &self,
        complaint_id: i32,
        status: &str,
    ) -> Result<ComplaintDto, Error> {
        let status = ComplaintStatus::try_from_value(&status.to_string())
            .map_err(|_| Error::Validation("Invalid status".to_string()))?;

        ComplaintRepository::new(self.db)
            .update_status(complaint_id, status)
            .await?
            .ok_or(Error::NotFound("Complaint"))?;

        self.get(complaint_id).await
    }
}
