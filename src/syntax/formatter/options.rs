//! Formatting options

/// Formatting options for CDL documents
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Number of spaces a tab expands to
    pub tab_size: usize,
    /// Expand tabs in leading indentation to spaces (false = keep as written)
    pub insert_spaces: bool,
    /// Drop whitespace at the end of lines
    pub trim_trailing_whitespace: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            tab_size: 4,
            insert_spaces: true,
            trim_trailing_whitespace: true,
        }
    }
}

impl FormatOptions {
    /// Normalize the leading indentation of a line
    pub fn indent(&self, indentation: &str) -> String {
        if self.insert_spaces {
            indentation.replace('\t', &" ".repeat(self.tab_size))
        } else {
            indentation.to_string()
        }
    }
}
