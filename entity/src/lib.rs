//! SeaORM entities for the sharehouse schema.
//!
//! Mirrors the tables created by the `migration` crate. The ownership chain is
//! `house` -> `house_section` -> `task` -> `star`, with `house_user` hanging off `house`.

pub mod prelude;

pub mod house;
pub mod house_section;
pub mod house_user;
pub mod star;
pub mod star_color;
pub mod task;
