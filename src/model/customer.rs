use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::driver::DriverRefDto;

/// Structured customer address; every component is optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AddressDto {
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
}

/// One driver's corroboration of a customer record.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ConfirmationDto {
    pub driver: DriverRefDto,
    pub confirmed_at: NaiveDateTime,
}

/// Customer detail view with creator and confirmers resolved.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CustomerDto {
    pub id: i32,
    pub name: String,
    pub address: AddressDto,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub tax_id: Option<String>,
    pub fraud_description: String,
    pub created_by: DriverRefDto,
    pub created_at: NaiveDateTime,
    pub confirmations: Vec<ConfirmationDto>,
}

/// One row of the customer list; confirmations are summarized as a count.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CustomerSummaryDto {
    pub id: i32,
    pub name: String,
    pub address: AddressDto,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub fraud_description: String,
    pub created_by: DriverRefDto,
    pub created_at: NaiveDateTime,
    pub confirmation_count: u64,
}

#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateCustomerDto {
    pub name: String,
    #[serde(default)]
    pub address: AddressDto,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub tax_id: Option<String>,
    pub fraud_description: String,
}

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CustomerEnvelopeDto {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub customer: CustomerDto,
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CustomerPageDto {
    pub success: bool,
    pub total: u64,
    pub page: u64,
    pub total_pages: u64,
    pub customers: Vec<CustomerSummaryDto>,
}
