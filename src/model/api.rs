use serde::{Deserialize, Serialize};

/// The response body when an API request fails.
///
/// Every endpoint returns the same envelope shape: a `success` flag plus
/// either the payload fields or this error message.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDto {
    pub success: bool,
    /// The error message
    pub error: String,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
