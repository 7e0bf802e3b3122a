//! Line splitting and UTF-16 column conversion.
//!
//! Scanners work on byte offsets; positions crossing the public boundary are
//! UTF-16 code units. These helpers convert between the two for one line.

/// Split a document into lines the way the host numbers them (on `\n`).
///
/// A trailing `\r` is kept on the line; callers trim when they need to.
pub fn lines(text: &str) -> impl Iterator<Item = (u32, &str)> {
    text.split('\n').enumerate().map(|(i, line)| (i as u32, line))
}

/// Number of UTF-16 code units in `text`.
pub fn utf16_len(text: &str) -> u32 {
    text.chars().map(|c| c.len_utf16() as u32).sum()
}

/// Convert a byte offset in `line` to a UTF-16 column.
///
/// Offsets past the end clamp to the line length; offsets inside a
/// multi-byte character round down to its start.
pub fn byte_to_col(line: &str, byte: usize) -> u32 {
    let mut end = byte.min(line.len());
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    utf16_len(&line[..end])
}

/// Convert a UTF-16 column to a byte offset in `line`.
///
/// Columns past the end clamp to `line.len()`; a column that splits a
/// surrogate pair resolves to the byte after that character.
pub fn col_to_byte(line: &str, col: u32) -> usize {
    let mut units = 0u32;
    for (offset, c) in line.char_indices() {
        if units >= col {
            return offset;
        }
        units += c.len_utf16() as u32;
    }
    line.len()
}
