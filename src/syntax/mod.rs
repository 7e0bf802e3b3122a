//! Line-level syntax for CDL.
//!
//! CDL is analyzed one line at a time with hand-written scanning rules:
//! - [`scanner`] finds bracket groups and operators with their nesting depth
//! - [`binding`] recognizes `@name = expr` lines and `$name` references
//! - [`formatter`] normalizes spacing with a Logos tokenizer

pub mod binding;
pub mod formatter;
pub mod scanner;

pub use binding::{BindingLine, ReferenceSpan, parse_binding, references};
pub use formatter::{FormatOptions, TextEdit, format_document, format_line, formatting_edits};
pub use scanner::{Delimiter, Group, Operator, OperatorKind, ScannedLine, scan};
