//! Request and response bodies of the sharehouse JSON API.

pub mod api;
pub mod house;
pub mod user;
