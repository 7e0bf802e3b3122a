//! IDE feature tests
//!
//! Tests for:
//! - Cursor-context classification
//! - Code completion
//! - Go to definition
//! - Hover information
//! - Document symbols
//! - The analysis host

pub mod tests_classifier;
pub mod tests_goto;
pub mod tests_hover;
pub mod tests_symbols;
