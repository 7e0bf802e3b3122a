//! Text manipulation utilities for working with CDL lines.
//!
//! Two identifier classes exist:
//! - *words*: ASCII letters, digits, `_`, `-` and `/`, so that point groups
//!   (`-43m`, `6/mmm`) and twin laws (`staurolite_60`) read as one token;
//! - *names*: the Unicode identifier-continue class used by `@name` bindings
//!   and `$name` references.
//!
//! All offsets here are byte offsets into the line.

/// Check if a character is part of an extended CDL word.
#[inline]
pub fn is_word_character(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '/')
}

/// Check if a character is part of a binding or reference name.
///
/// Uses Unicode Standard Annex #31 rules for identifier characters.
#[inline]
pub fn is_name_character(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// Find the boundaries of the word touching `position`.
///
/// The word may start at or end at `position`, so a cursor placed directly
/// after the last character still selects the word. Returns `None` when no
/// word character touches the position.
pub fn find_word_boundaries(line: &str, position: usize) -> Option<(usize, usize)> {
    let position = position.min(line.len());
    let bytes = line.as_bytes();

    // Find start of word
    let mut start = position;
    while start > 0 && is_word_character(bytes[start - 1] as char) {
        start -= 1;
    }

    // Find end of word
    let mut end = position;
    while end < bytes.len() && is_word_character(bytes[end] as char) {
        end += 1;
    }

    (start < end).then_some((start, end))
}

/// Extract the word at the cursor position in a line of text.
///
/// # Example
/// ```
/// use cdl::core::text_utils::extract_word_at_cursor;
///
/// let line = "cubic[m3m]:{111} | twin(spinel)";
/// assert_eq!(extract_word_at_cursor(line, 2), Some("cubic"));
/// assert_eq!(extract_word_at_cursor(line, 9), Some("m3m"));
/// assert_eq!(extract_word_at_cursor(line, 17), None); // pipe
/// ```
pub fn extract_word_at_cursor(line: &str, position: usize) -> Option<&str> {
    let (start, end) = find_word_boundaries(line, position)?;
    Some(&line[start..end])
}

/// The run of word characters ending exactly at `position` (possibly empty).
pub fn word_prefix_before(line: &str, position: usize) -> &str {
    let position = position.min(line.len());
    let bytes = line.as_bytes();
    let mut start = position;
    while start > 0 && is_word_character(bytes[start - 1] as char) {
        start -= 1;
    }
    &line[start..position]
}

/// The run of name characters ending exactly at `position` (possibly empty).
pub fn name_prefix_before(line: &str, position: usize) -> &str {
    let head = &line[..position.min(line.len())];
    let start = head
        .char_indices()
        .rev()
        .take_while(|(_, c)| is_name_character(*c))
        .last()
        .map_or(head.len(), |(i, _)| i);
    &head[start..]
}

/// Length in bytes of the run of name characters starting at `position`.
pub fn name_len_at(line: &str, position: usize) -> usize {
    line[position.min(line.len())..]
        .chars()
        .take_while(|c| is_name_character(*c))
        .map(char::len_utf8)
        .sum()
}

/// The last word (ASCII word characters, without `-`/`/`) in `text`,
/// ignoring trailing whitespace. Used to find the keyword owning a group.
pub fn trailing_keyword(text: &str) -> &str {
    let trimmed = text.trim_end();
    let bytes = trimmed.as_bytes();
    let mut start = trimmed.len();
    while start > 0 && (bytes[start - 1].is_ascii_alphanumeric() || bytes[start - 1] == b'_') {
        start -= 1;
    }
    &trimmed[start..]
}

/// Index of the first non-whitespace byte in `line`.
pub fn indentation_len(line: &str) -> usize {
    line.len() - line.trim_start().len()
}
