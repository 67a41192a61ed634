use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use entity::star_color::StarColor;
use thiserror::Error;

use crate::server::error::error_response;

/// A write which would break one of the uniqueness invariants.
///
/// Responds with 400 like a validation error, but with a message the client can branch on.
#[derive(Error, Debug)]
pub enum ConflictError {
    #[error("Color {} is already taken in house ID {house_id}", .color.id())]
    ColorTaken { house_id: i32, color: StarColor },
    #[error("House name {0:?} is already taken")]
    HouseNameTaken(String),
}

impl IntoResponse for ConflictError {
    fn into_response(self) -> Response {
        tracing::debug!("Conflict: {}", self);

        let message = match self {
            Self::ColorTaken { .. } => "Color already taken",
            Self::HouseNameTaken(_) => "House name already taken",
        };

        error_response(StatusCode::BAD_REQUEST, message)
    }
}
