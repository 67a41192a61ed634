//! Shared household chore tracker.
//!
//! Housemates join a house under a color, and every finished chore is rewarded with a star in
//! the color of whoever gave it. The crate serves the JSON API & its OpenAPI documentation.

pub mod model;
pub mod server;
