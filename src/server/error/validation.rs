use axum::{
    extract::rejection::{FormRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Request input which the client is able to correct and resubmit.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Request is missing one or more required fields")]
    MissingFields,
    #[error("House name is empty after normalization")]
    EmptyHouseName,
    #[error("House name {0:?} cannot be used as a path segment")]
    ReservedHouseName(String),
    #[error("Color {0:?} is not one of the available star colors")]
    InvalidColor(String),
    #[error("Field {0} is not a finite number")]
    NonFiniteNumber(&'static str),
    #[error("Request body could not be parsed: {0}")]
    MalformedBody(String),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Validation error: {}", self);

        let message = match self {
            Self::MissingFields => "Missing required fields",
            Self::EmptyHouseName => "House name is required",
            Self::ReservedHouseName(_) => "House name is not allowed",
            Self::InvalidColor(_) => "Invalid color",
            Self::NonFiniteNumber(_) => "Invalid number",
            Self::MalformedBody(_) => "Malformed request body",
        };

        error_response(StatusCode::BAD_REQUEST, message)
    }
}

impl From<JsonRejection> for ValidationError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}

impl From<FormRejection> for ValidationError {
    fn from(rejection: FormRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}
