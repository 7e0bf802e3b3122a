//! Foundation types for the CDL toolchain.
//!
//! This module provides the boundary value types shared by every feature:
//! - [`Position`], [`Range`] - Line/column positions (UTF-16 code units, 0-indexed)
//! - [`Location`] - A range inside a document identified by URI
//! - UTF-16 column <-> byte offset conversion for a single line
//!
//! This module has NO dependencies on other cdl modules.

mod position;
mod text;

pub use position::{Location, Position, Range};
pub use text::{byte_to_col, col_to_byte, lines, utf16_len};
