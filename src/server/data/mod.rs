//! Data access layer repositories.
//!
//! Each repository wraps the queries for one table and is generic over the connection type,
//! so the same repository works on a pooled connection or inside a transaction.

pub mod house;
pub mod house_user;
pub mod section;
pub mod star;
pub mod task;
