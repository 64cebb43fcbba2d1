//! Testing utilities built on top of the doubles.
//!
//! This module provides assertions that panic with a readable message when a
//! double's verification fails.

mod assertions;

pub use assertions::{assert_call_args, assert_call_count, assert_captured, assert_mock_verified};
