//! Server application core modules.
//!
//! HTTP routing, controllers, services and repositories for houses and everything they own,
//! along with configuration, startup and the session identity of house users.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
