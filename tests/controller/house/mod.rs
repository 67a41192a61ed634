//! Tests for house controller endpoints.

mod get_house;

use super::*;
