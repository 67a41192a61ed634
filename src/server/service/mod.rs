//! Service layer for business logic.
//!
//! Services validate request values, enforce the house invariants (unique house slugs, one
//! user per color within a house) and coordinate repositories, wrapping multi-row writes in
//! a transaction.

pub mod house;
pub mod house_user;
pub mod section;
pub mod star;
pub mod task;
