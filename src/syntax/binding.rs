//! `@name = expression` binding lines and `$name` references.
//!
//! Both are matched by hand: a binding line is, after trimming, `@`, one or
//! more name characters, optional whitespace, `=`, optional whitespace and a
//! non-empty expression. A reference is `$` followed by one or more name
//! characters.

use crate::core::text_utils::{indentation_len, name_len_at};

/// A line that binds a name. Offsets are bytes into the original line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BindingLine<'a> {
    pub name: &'a str,
    /// Offset of the first name character (one past `@`).
    pub name_start: usize,
    /// The expression, trimmed.
    pub expression: &'a str,
    /// Offset of the first expression character.
    pub expression_start: usize,
}

/// Match a binding line.
pub fn parse_binding(line: &str) -> Option<BindingLine<'_>> {
    let indent = indentation_len(line);
    let trimmed = line.trim();
    let rest = trimmed.strip_prefix('@')?;

    let name_start = indent + 1;
    let name_len = name_len_at(line, name_start);
    if name_len == 0 {
        return None;
    }
    let name = &line[name_start..name_start + name_len];

    let after_name = &rest[name_len..];
    let after_eq = after_name.trim_start().strip_prefix('=')?;
    let expression = after_eq.trim_start();
    if expression.is_empty() {
        return None;
    }
    let expression_start = indent + trimmed.len() - expression.len();

    Some(BindingLine {
        name,
        name_start,
        expression,
        expression_start,
    })
}

/// A `$name` occurrence. `start` is the offset of `$`, `end` is one past
/// the last name character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReferenceSpan<'a> {
    pub name: &'a str,
    pub start: usize,
    pub end: usize,
}

/// All `$name` references in a line, left to right.
pub fn references(line: &str) -> impl Iterator<Item = ReferenceSpan<'_>> {
    line.match_indices('$').filter_map(move |(start, _)| {
        let len = name_len_at(line, start + 1);
        (len > 0).then(|| ReferenceSpan {
            name: &line[start + 1..start + 1 + len],
            start,
            end: start + 1 + len,
        })
    })
}
