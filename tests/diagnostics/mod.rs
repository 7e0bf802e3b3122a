//! Diagnostics tests
//!
//! Tests for:
//! - One finding per broken construct
//! - Vocabulary validity across every term
//! - Determinism and ordering
//! - Settings

pub mod tests_validation;
