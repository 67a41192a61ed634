use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum NotFoundError {
    #[error("House ID {0} not found")]
    House(i32),
    #[error("House {0:?} not found")]
    HouseSlug(String),
    #[error("Section ID {0} not found")]
    Section(i32),
    #[error("Task ID {0} not found")]
    Task(i32),
}

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let message = match self {
            Self::House(_) | Self::HouseSlug(_) => "House not found",
            Self::Section(_) => "Section not found",
            Self::Task(_) => "Task not found",
        };

        error_response(StatusCode::NOT_FOUND, message)
    }
}
