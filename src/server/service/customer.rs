use sea_orm::ConnectionTrait;

use crate::{
    model::customer::{
        AddressDto, ConfirmationDto, CreateCustomerDto, CustomerDto, CustomerPageDto,
        CustomerSummaryDto,
    },
    server::{
        data::{
            customer::{CustomerFilter, CustomerRepository},
            customer_confirmation::ConfirmationRepository,
        },
        error::Error,
        service::{driver_ref, DEFAULT_PAGE_SIZE},
    },
};

/// Customer registry rules: creation with a seeded confirmation, filtered
/// paginated listing, and the one-confirmation-per-driver check.
pub struct CustomerService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CustomerService<'a, C> {
    /// Creates a new instance of [`CustomerService`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Registers a customer owned by `driver` and seeds the confirmation
    /// list with the creator's own entry.
    pub async fn create(
        &self,
        driver: &entity::driver::Model,
        payload: &CreateCustomerDto,
    ) -> Result<CustomerDto, Error> {
        if payload.name.trim().is_empty() {
            return Err(Error::Validation("Customer name is required".to_string()));
        }
        if payload.fraud_description.trim().is_empty() {
            return Err(Error::Validation(
                "Fraud description is required".to_string(),
            ));
        }

        let customer = CustomerRepository::new(self.db)
            .create(driver.id, payload)
            .await?;

        ConfirmationRepository::new(self.db)
            .create(customer.id, driver.id)
            .await?;

        self.get(customer.id).await
    }

    /// Customer detail with creator and confirmers resolved.
    pub async fn get(&self, customer_id: i32) -> Result<CustomerDto, Error> {
        let (customer, maybe_creator) = CustomerRepository::new(self.db)
            .get_with_creator(customer_id)
            .await?
            .ok_or(Error::NotFound("Customer"))?;

        let creator = maybe_creator.ok_or_else(|| {
            Error::InternalError(format!(
                "Failed to find creating driver ID {} for customer ID {}",
                customer.created_by, customer.id
            ))
        })?;

        let confirmations = ConfirmationRepository::new(self.db)
            .get_by_customer(customer.id)
            .await?
            .into_iter()
            .map(|(confirmation, maybe_driver)| {
                let driver = maybe_driver.ok_or_else(|| {
                    Error::InternalError(format!(
                        "Failed to find confirming driver ID {} for customer ID {}",
                        confirmation.driver_id, confirmation.customer_id
                    ))
                })?;

                Ok(ConfirmationDto {
                    driver: driver_ref(&driver),
                    confirmed_at: confirmation.confirmed_at,
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(CustomerDto {
            id: customer.id,
            address: address_dto(&customer),
            name: customer.name,
            phone: customer.phone,
            email: customer.email,
            tax_id: customer.tax_id,
            fraud_description: customer.fraud_description,
            created_by: driver_ref(&creator),
            created_at: customer.created_at,
            confirmations,
        })
    }

    /// Filtered, paginated page of customers, newest first.
    pub async fn list(
        &self,
        filter: CustomerFilter,
        page: Option<u64>,
        page_size: Option<u64>,
    ) -> Result<CustomerPageDto, Error> {
        let page = page.unwrap_or(1).max(1);
        let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1);

        let (rows, total) = CustomerRepository::new(self.db)
            .list(filter, page, page_size)
            .await?;

        let customer_ids = rows.iter().map(|(customer, _)| customer.id).collect();
        let confirmations = ConfirmationRepository::new(self.db)
            .get_by_customer_ids(customer_ids)
            .await?;

        let customers = rows
            .into_iter()
            .map(|(customer, maybe_creator)| {
                let creator = maybe_creator.ok_or_else(|| {
                    Error::InternalError(format!(
                        "Failed to find creating driver ID {} for customer ID {}",
                        customer.created_by, customer.id
                    ))
                })?;

                let confirmation_count = confirmations
                    .iter()
                    .filter(|confirmation| confirmation.customer_id == customer.id)
                    .count() as u64;

                Ok(CustomerSummaryDto {
                    id: customer.id,
                    name: customer.name.clone(),
                    address: address_dto(&customer),
                    phone: customer.phone.clone(),
                    email: customer.email.clone(),
                    fraud_description: customer.fraud_description.clone(),
                    created_by: driver_ref(&creator),
                    created_at: customer.created_at,
                    confirmation_count,
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(CustomerPageDto {
            success: true,
            total,
            page,
            total_pages: total.div_ceil(page_size),
            customers,
        })
    }

    /// Appends `driver`'s confirmation unless they already confirmed.
    ///
    /// Check-then-append without a transaction; two simultaneous confirms by
    /// the same driver can both pass the check.
    pub async fn confirm(
        &self,
        customer_id: i32,
        driver: &entity::driver::Model,
    ) -> Result<CustomerDto, Error> {
        let customer = CustomerRepository::new(self.db)
            .get_by_id(customer_id)
            .await?
            .ok_or(Error::NotFound("Customer"))?;

        let confirmation_repository = ConfirmationRepository::new(self.db);

        let already_confirmed = confirmation_repository
            .get_by_customer(customer.id)
            .await?
            .iter()
            .any(|(confirmation, _)| confirmation.driver_id == driver.id);

        if already_confirmed {
            return Err(Error::Validation(
                "You have already confirmed this customer".to_string(),
            ));
        }

        confirmation_repository
            .create(customer.id, driver.id)
            .await?;

        self.get(customer.id).await
    }
}

fn address_dto(customer: &entity::customer::Model) -> AddressDto {
    AddressDto {
        street: customer.street.clone(),
        number: customer.number.clone(),
        complement: customer.complement.clone(),
        neighborhood: customer.neighborhood.clone(),
        city: customer.city.clone(),
        state: customer.state.clone(),
        postal_code: customer.postal_code.clone(),
    }
}
