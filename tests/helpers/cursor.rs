//! Cursor markers in test lines.

/// Marks the cursor in a test line. Not a CDL character.
pub const CURSOR: char = '^';

/// Strip the cursor marker, returning the line and the UTF-16 column.
pub fn at_cursor(marked: &str) -> (String, u32) {
    let byte = marked
        .find(CURSOR)
        .unwrap_or_else(|| panic!("no cursor marker in {marked:?}"));
    let column = marked[..byte].encode_utf16().count() as u32;
    let line = marked.replacen(CURSOR, "", 1);
    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_cursor() {
        assert_eq!(at_cursor("cubic[^"), ("cubic[".to_string(), 6));
        assert_eq!(at_cursor("é$^x"), ("é$x".to_string(), 2));
    }
}
