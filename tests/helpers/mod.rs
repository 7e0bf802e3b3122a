//! Shared test helpers.

pub mod cursor;
pub mod diagnostic_helpers;
pub mod source_fixtures;
