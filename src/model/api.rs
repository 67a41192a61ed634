use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response for operations which have nothing to return besides success
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct SuccessDto {
    pub success: bool,
}
