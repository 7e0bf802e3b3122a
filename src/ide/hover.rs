//! Hover information implementation.

use crate::base::{Range, byte_to_col, col_to_byte};
use crate::core::text_utils::find_word_boundaries;
use crate::ide::bindings::{find_binding, find_document_definitions};
use crate::syntax::binding::references;
use crate::vocab::{Category, Vocabulary};

/// Result of a hover request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverResult {
    /// The hover content (markdown).
    pub contents: String,
    /// The hovered span.
    pub range: Range,
}

/// Category priority for hovering a vocabulary word. Mirrors the
/// go-to-definition order, then the remaining categories.
const HOVER_ORDER: [Category; 11] = [
    Category::Form,
    Category::TwinLaw,
    Category::System,
    Category::PointGroup,
    Category::Modification,
    Category::Feature,
    Category::Phenomenon,
    Category::AmorphousSubtype,
    Category::AmorphousShape,
    Category::Arrangement,
    Category::Orientation,
];

/// Get hover information at UTF-16 `column` of `line`.
///
/// `$name` shows the bound expression (needs `document`), `>` shows the
/// nested-growth documentation and vocabulary words show their
/// documentation.
pub fn hover(
    line: &str,
    column: u32,
    line_num: u32,
    document: Option<&str>,
    vocab: &Vocabulary,
) -> Option<HoverResult> {
    let cursor = col_to_byte(line, column);
    let span = |start: usize, end: usize| {
        Range::on_line(line_num, byte_to_col(line, start), byte_to_col(line, end))
    };

    if let Some(reference) = references(line).find(|r| r.start <= cursor && cursor <= r.end) {
        let bindings = find_document_definitions(document?);
        let binding = find_binding(&bindings, reference.name)?;
        return Some(HoverResult {
            contents: format!(
                "**${}** (line {})\n\n```cdl\n@{} = {}\n```",
                binding.name,
                binding.line + 1,
                binding.name,
                binding.expression
            ),
            range: span(reference.start, reference.end),
        });
    }

    if line[cursor..].starts_with('>') {
        return Some(HoverResult {
            contents: vocab.nested_growth_doc()?.to_string(),
            range: span(cursor, cursor + 1),
        });
    }

    let (start, end) = find_word_boundaries(line, cursor)?;
    let word = &line[start..end];
    let contents = word_documentation(word, vocab)?;
    Some(HoverResult {
        contents,
        range: span(start, end),
    })
}

fn word_documentation(word: &str, vocab: &Vocabulary) -> Option<String> {
    let law = format!("{}_law", word.to_lowercase());
    let (category, key) = HOVER_ORDER
        .iter()
        .find_map(|&category| {
            if vocab.contains(category, word) {
                Some((category, word))
            } else if category == Category::TwinLaw && vocab.contains(category, &law) {
                Some((category, law.as_str()))
            } else {
                None
            }
        })?;

    let mut contents = match vocab.doc(category, key) {
        Some(doc) => doc.to_string(),
        None => format!("**{key}** ({})", category.display()),
    };
    if category == Category::Form
        && let Some([h, k, l]) = vocab.form_indices(key)
    {
        contents.push_str(&format!("\n\nMiller indices: {{{h}{k}{l}}}"));
    }
    if category == Category::System
        && let Some(group) = vocab.default_point_group(key)
    {
        contents.push_str(&format!("\n\nDefault point group: `{group}`"));
    }
    Some(contents)
}
