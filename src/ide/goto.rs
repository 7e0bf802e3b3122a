//! Go-to-definition implementation.
//!
//! Two paths, in priority order: a `$name` reference resolves to the first
//! `@name =` binding of the document; otherwise the word under the cursor
//! is looked up in the vocabulary and located in the vocabulary source.

use crate::base::{Location, Range, col_to_byte};
use crate::config::AnalysisConfig;
use crate::core::text_utils::extract_word_at_cursor;
use crate::ide::bindings::{find_binding, find_document_definitions, is_on_reference};
use crate::vocab::{Category, Vocabulary, file_uri, locate};

/// Find the definition of the symbol at UTF-16 `column` of `line`.
///
/// # Arguments
/// * `line` - Text of the cursor line
/// * `column` - Cursor column (UTF-16, 0-indexed)
/// * `line_num` - Cursor line (0-indexed)
/// * `uri` - URI of the document, used for binding locations
/// * `document` - Full document text; references only resolve when given
///
/// # Returns
/// The definition location, or `None` when nothing resolves.
pub fn get_definition(
    line: &str,
    column: u32,
    line_num: u32,
    uri: &str,
    document: Option<&str>,
    vocab: &Vocabulary,
    config: &AnalysisConfig,
) -> Option<Location> {
    if let Some(document) = document.filter(|d| !d.is_empty())
        && let Some(name) = is_on_reference(line, column)
    {
        let bindings = find_document_definitions(document);
        if let Some(binding) = find_binding(&bindings, &name) {
            return Some(Location::new(uri, binding.name_range));
        }
        tracing::debug!(line = line_num, %name, "reference has no binding");
    }

    let word = extract_word_at_cursor(line, col_to_byte(line, column))?;
    vocabulary_location(word, vocab, config)
}

/// [`get_definition`] as a list: empty or a single location.
pub fn get_definitions(
    line: &str,
    column: u32,
    line_num: u32,
    uri: &str,
    document: Option<&str>,
    vocab: &Vocabulary,
    config: &AnalysisConfig,
) -> Vec<Location> {
    get_definition(line, column, line_num, uri, document, vocab, config)
        .into_iter()
        .collect()
}

/// Lookup order for a vocabulary word: named forms, twin laws (bare, then
/// with `_law`), crystal systems, point groups, then the remaining
/// categories.
fn lookup_keys(word: &str) -> Vec<(Category, String)> {
    let lowered = word.to_lowercase();
    let mut keys = vec![
        (Category::Form, lowered.clone()),
        (Category::TwinLaw, lowered.clone()),
        (Category::TwinLaw, format!("{lowered}_law")),
        (Category::System, lowered.clone()),
        (Category::PointGroup, word.to_string()),
    ];
    keys.extend(
        [
            Category::Modification,
            Category::Feature,
            Category::Phenomenon,
            Category::AmorphousSubtype,
            Category::AmorphousShape,
            Category::Arrangement,
            Category::Orientation,
        ]
        .into_iter()
        .map(|category| (category, lowered.clone())),
    );
    keys
}

fn vocabulary_location(word: &str, vocab: &Vocabulary, config: &AnalysisConfig) -> Option<Location> {
    let source = vocab.source()?;

    for (category, key) in lookup_keys(word) {
        if !vocab.contains(category, &key) {
            continue;
        }
        let Some(marker) = source.marker(category) else {
            continue;
        };
        let Some(line) = locate(source.path(), marker, &key) else {
            tracing::debug!(?category, %key, "vocabulary term not located in source");
            continue;
        };
        let uri = match file_uri(source.path()) {
            Ok(uri) => uri,
            Err(err) => {
                tracing::warn!("{err}");
                return None;
            }
        };
        return Some(Location::new(uri, Range::on_line(line, 0, config.location_span)));
    }
    None
}
