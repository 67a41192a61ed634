use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Session has not joined house ID {0}")]
    HouseUserNotInSession(i32),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::HouseUserNotInSession(house_id) => {
                tracing::debug!(house_id = %house_id, "{}", self);

                error_response(StatusCode::UNAUTHORIZED, "Join the house first")
            }
        }
    }
}
