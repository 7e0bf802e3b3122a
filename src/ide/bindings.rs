//! Document bindings (`@name = expression`) and `$name` references.

use smol_str::SmolStr;

use crate::base::{Range, byte_to_col, col_to_byte, lines, utf16_len};
use crate::syntax::binding::{parse_binding, references};

/// A named definition in a document.
///
/// Identity is positional: two bindings of the same name are two distinct
/// bindings, and lookups use the first one in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub name: SmolStr,
    /// 0-based line of the `@name =` occurrence.
    pub line: u32,
    /// The bound expression, trimmed.
    pub expression: String,
    /// The name span, starting one character after `@`.
    pub name_range: Range,
}

/// All bindings in document order, duplicates included.
pub fn find_document_definitions(text: &str) -> Vec<Binding> {
    lines(text)
        .filter_map(|(line_num, line)| {
            let binding = parse_binding(line)?;
            let start = byte_to_col(line, binding.name_start);
            Some(Binding {
                name: SmolStr::new(binding.name),
                line: line_num,
                expression: binding.expression.to_string(),
                name_range: Range::on_line(line_num, start, start + utf16_len(binding.name)),
            })
        })
        .collect()
}

/// The first binding of `name` in document order.
pub fn find_binding<'a>(bindings: &'a [Binding], name: &str) -> Option<&'a Binding> {
    bindings.iter().find(|binding| binding.name == name)
}

/// The name of the `$name` reference under UTF-16 `column`, if any.
///
/// The match span is inclusive at both ends: the column of `$` and the
/// column just past the last name character both count.
pub fn is_on_reference(line: &str, column: u32) -> Option<SmolStr> {
    let cursor = col_to_byte(line, column);
    references(line)
        .find(|reference| reference.start <= cursor && cursor <= reference.end)
        .map(|reference| SmolStr::new(reference.name))
}
