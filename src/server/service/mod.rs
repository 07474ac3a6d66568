//! Service layer.
//!
//! Business rules sit here, between controllers and repositories: credential
//! checks, the duplicate-confirmation rule, referenced-entity existence, and
//! composition of resolved DTOs out of explicit joins.

pub mod auth;
pub mod complaint;
pub mod customer;

use crate::model::{complaint::CustomerRefDto, driver::DriverRefDto};

/// Page size applied when the query string does not supply one.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

pub(crate) fn driver_ref(driver: &entity::driver::Model) -> DriverRefDto {
    DriverRefDto {
        id: driver.id,
        name: driver.name.clone(),
        company: driver.company.clone(),
    }
}

pub(crate) fn customer_ref(customer: &entity::customer::Model) -> CustomerRefDto {
    CustomerRefDto {
        id: customer.id,
        name: customer.name.clone(),
        phone: customer.phone.clone(),
    }
}
