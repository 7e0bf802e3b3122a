//! Bracket-aware line scanner.
//!
//! A single left-to-right pass over one line with an explicit stack of open
//! delimiters. It records every delimited group (closed or not) and every
//! structural operator with the nesting depth it was seen at. Everything
//! after `#` is a comment and is not scanned.
//!
//! Mismatched closers: a closer pops back to the nearest matching opener,
//! abandoning any unclosed groups above it; a closer with no matching opener
//! on the stack is ignored.

/// Delimiter pairs recognized by the scanner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// `[...]`: point groups, subtypes, counts, features
    Bracket,
    /// `{...}`: Miller indices, amorphous shapes
    Brace,
    /// `(...)`: modification arguments
    Paren,
}

impl Delimiter {
    fn from_open(c: char) -> Option<Self> {
        match c {
            '[' => Some(Delimiter::Bracket),
            '{' => Some(Delimiter::Brace),
            '(' => Some(Delimiter::Paren),
            _ => None,
        }
    }

    fn from_close(c: char) -> Option<Self> {
        match c {
            ']' => Some(Delimiter::Bracket),
            '}' => Some(Delimiter::Brace),
            ')' => Some(Delimiter::Paren),
            _ => None,
        }
    }
}

/// Structural operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    /// `>` nested growth
    Overgrowth,
    /// `~` aggregate
    Aggregate,
    /// `+` additive combination
    Combine,
    /// `|` modifier
    Pipe,
    /// `:`
    Colon,
    /// `@` scale or definition marker
    At,
    /// `$` reference marker
    Dollar,
    /// `=`
    Assign,
    /// `,`
    Comma,
}

impl OperatorKind {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '>' => Some(OperatorKind::Overgrowth),
            '~' => Some(OperatorKind::Aggregate),
            '+' => Some(OperatorKind::Combine),
            '|' => Some(OperatorKind::Pipe),
            ':' => Some(OperatorKind::Colon),
            '@' => Some(OperatorKind::At),
            '$' => Some(OperatorKind::Dollar),
            '=' => Some(OperatorKind::Assign),
            ',' => Some(OperatorKind::Comma),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            OperatorKind::Overgrowth => '>',
            OperatorKind::Aggregate => '~',
            OperatorKind::Combine => '+',
            OperatorKind::Pipe => '|',
            OperatorKind::Colon => ':',
            OperatorKind::At => '@',
            OperatorKind::Dollar => '$',
            OperatorKind::Assign => '=',
            OperatorKind::Comma => ',',
        }
    }
}

/// A delimited group. Offsets are bytes into the scanned text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Group {
    pub delimiter: Delimiter,
    /// Offset of the opening delimiter.
    pub open: usize,
    /// Offset of the closing delimiter, `None` while unclosed.
    pub close: Option<usize>,
    /// Number of groups enclosing this one.
    pub depth: usize,
}

impl Group {
    /// Byte range of the content between the delimiters (to the end of the
    /// code when unclosed).
    pub fn inner_range(&self, code_end: usize) -> std::ops::Range<usize> {
        self.open + 1..self.close.unwrap_or(code_end)
    }

    /// Offset just past the closing delimiter.
    pub fn end(&self) -> Option<usize> {
        self.close.map(|close| close + 1)
    }

    pub fn is_closed(&self) -> bool {
        self.close.is_some()
    }
}

/// A structural operator occurrence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operator {
    pub kind: OperatorKind,
    pub offset: usize,
    pub depth: usize,
}

/// The result of scanning one line.
#[derive(Clone, Debug)]
pub struct ScannedLine<'a> {
    text: &'a str,
    code_end: usize,
    groups: Vec<Group>,
    operators: Vec<Operator>,
    open_stack: Vec<usize>,
}

/// Scan a line.
pub fn scan(text: &str) -> ScannedLine<'_> {
    let mut groups: Vec<Group> = Vec::new();
    let mut operators = Vec::new();
    // Indices into `groups` of the currently open delimiters.
    let mut stack: Vec<usize> = Vec::new();
    let mut code_end = text.len();

    for (offset, c) in text.char_indices() {
        if c == '#' {
            code_end = offset;
            break;
        }
        if let Some(delimiter) = Delimiter::from_open(c) {
            stack.push(groups.len());
            groups.push(Group {
                delimiter,
                open: offset,
                close: None,
                depth: stack.len() - 1,
            });
        } else if let Some(delimiter) = Delimiter::from_close(c) {
            if let Some(pos) = stack
                .iter()
                .rposition(|&index| groups[index].delimiter == delimiter)
            {
                groups[stack[pos]].close = Some(offset);
                stack.truncate(pos);
            }
        } else if let Some(kind) = OperatorKind::from_char(c) {
            operators.push(Operator {
                kind,
                offset,
                depth: stack.len(),
            });
        }
    }

    ScannedLine {
        text,
        code_end,
        groups,
        operators,
        open_stack: stack,
    }
}

impl<'a> ScannedLine<'a> {
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// The text before any `#` comment.
    pub fn code(&self) -> &'a str {
        &self.text[..self.code_end]
    }

    /// True when the line ends inside a comment.
    pub fn has_comment(&self) -> bool {
        self.code_end < self.text.len()
    }

    /// All groups in order of their opening delimiter.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// All operators in source order.
    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    /// Operators outside any group.
    pub fn top_level_operators(&self) -> impl Iterator<Item = &Operator> {
        self.operators.iter().filter(|op| op.depth == 0)
    }

    /// The innermost group still open at the end of the text.
    pub fn innermost_open(&self) -> Option<&Group> {
        self.open_stack.last().map(|&index| &self.groups[index])
    }

    /// The group whose closing delimiter sits at `offset`.
    pub fn group_closed_at(&self, offset: usize) -> Option<&Group> {
        self.groups.iter().find(|g| g.close == Some(offset))
    }

    /// The group opening at `offset`.
    pub fn group_opened_at(&self, offset: usize) -> Option<&Group> {
        self.groups.iter().find(|g| g.open == offset)
    }

    /// The first group opening at or after `offset` with only whitespace
    /// in between.
    pub fn group_following(&self, offset: usize) -> Option<&Group> {
        let code = self.code();
        let offset = offset.min(code.len());
        let skipped = code[offset..].len() - code[offset..].trim_start().len();
        self.group_opened_at(offset + skipped)
    }

    /// The group that ends right before `offset`, skipping whitespace.
    pub fn group_preceding(&self, offset: usize) -> Option<&Group> {
        let before = self.code()[..offset.min(self.code_end)].trim_end();
        let close = before.len().checked_sub(1)?;
        self.group_closed_at(close)
    }

    /// Content of a group.
    pub fn inner(&self, group: &Group) -> &'a str {
        &self.text[group.inner_range(self.code_end)]
    }
}
