//! Error types for the sharehouse server.
//!
//! Domain failures are split by how the caller is expected to react: validation errors for
//! input the client can correct, conflict errors for uniqueness invariants, auth errors for
//! sessions that have not joined the house they act on, and not found errors for references
//! to rows that do not exist. Everything else is an internal error which
//! is logged and answered with an opaque 500. All errors implement `IntoResponse` and use
//! `thiserror` for their `Display` and `Error` implementations.

pub mod auth;
pub mod config;
pub mod conflict;
pub mod not_found;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, conflict::ConflictError, not_found::NotFoundError,
        validation::ValidationError,
    },
};

/// Main error type for the sharehouse server.
///
/// Aggregates the domain error types and external library errors into a single type so
/// that services and controllers can use `?` throughout. The `IntoResponse` implementation
/// maps each variant onto the HTTP response returned to API consumers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Validation errors (missing fields, invalid color, malformed bodies)
/// - Conflict errors (house name or user color already taken)
/// - Auth errors (session has no user in the house)
/// - Not found errors (referenced house, section or task does not exist)
/// - External library errors (database, sessions, I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Request input the client can correct.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// A uniqueness invariant would be violated.
    #[error(transparent)]
    ConflictError(#[from] ConflictError),
    /// Session has not joined the house it acts on.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// A referenced row does not exist.
    #[error(transparent)]
    NotFoundError(#[from] NotFoundError),
    /// Internal error indicating a bug in sharehouse's code.
    #[error("Internal error with sharehouse's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Valkey session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// I/O error (binding or serving the HTTP listener).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For validation and conflict errors
/// - 401 Unauthorized - For sessions without a user in the house
/// - 404 Not Found - For references to houses, sections or tasks that do not exist
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::ConflictError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::NotFoundError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error response with the provided status code & message.
pub(crate) fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
