use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::driver::DriverRefDto;

/// A single piece of supporting evidence attached to a complaint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct EvidenceDto {
    pub kind: String,
    pub url: String,
    pub description: Option<String>,
}

/// Display fields used when a customer is referenced from a complaint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CustomerRefDto {
    pub id: i32,
    pub name: String,
    pub phone: Option<String>,
}

/// Complaint detail view with customer and filer resolved.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ComplaintDto {
    pub id: i32,
    pub customer: CustomerRefDto,
    pub driver: DriverRefDto,
    pub delivery_date: NaiveDate,
    pub tracking_code: Option<String>,
    pub description: String,
    pub evidence: Vec<EvidenceDto>,
    pub status: String,
    pub created_at: NaiveDateTime,
}

/// One row of the complaint list; evidence is only loaded on the detail view.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ComplaintSummaryDto {
    pub id: i32,
    pub customer: CustomerRefDto,
    pub driver: DriverRefDto,
    pub delivery_date: NaiveDate,
    pub tracking_code: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateComplaintDto {
    pub customer: i32,
    pub delivery_date: NaiveDate,
    pub tracking_code: Option<String>,
    pub description: String,
    #[serde(default)]
    pub evidence: Vec<EvidenceDto>,
}

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateStatusDto {
    pub status: String,
}

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ComplaintEnvelopeDto {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub complaint: ComplaintDto,
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ComplaintPageDto {
    pub success: bool,
    pub total: u64,
    pub page: u64,
    pub total_pages: u64,
    pub complaints: Vec<ComplaintSummaryDto>,
}
