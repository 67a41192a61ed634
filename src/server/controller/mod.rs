//! HTTP controller endpoints for the sharehouse web API.
//!
//! Axum handlers which extract & check request fields, call into the services and return
//! JSON responses. Handlers are documented with utoipa for the OpenAPI specification.

pub mod house;
pub mod section;
pub mod star;
pub mod task;
pub mod user;
pub mod util;
