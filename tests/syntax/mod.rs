//! Syntax tests
//!
//! Tests for:
//! - The line scanner on realistic lines
//! - Formatting whole documents

pub mod tests_formatting;
pub mod tests_scanner;
