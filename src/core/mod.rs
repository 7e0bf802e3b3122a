//! Word and name helpers shared by the line-level features.

pub mod text_utils;

pub use text_utils::{extract_word_at_cursor, find_word_boundaries};
