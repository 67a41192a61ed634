//! Server application models.
//!
//! Application state shared by handlers and typed wrappers around session data.

pub mod app;
pub mod session;
