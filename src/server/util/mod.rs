//! Utility functions and helpers for server operations.
//!
//! Request field validation, database error classification and the template every new
//! house is seeded with.

pub mod db;
pub mod template;
pub mod validation;
