
use sharehouse_test_utils::prelude::*;

use super::*;
