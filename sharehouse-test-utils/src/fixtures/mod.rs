//! Test fixture modules for database record creation.
//!
//! - `house` - Houses, sections, tasks, stars and house users
pub mod house;
