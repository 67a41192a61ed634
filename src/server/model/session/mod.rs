//! Session data models.
//!
//! Type-safe wrappers for data kept in the tower-sessions store (Valkey backed in
//! production).

pub mod house_user;
