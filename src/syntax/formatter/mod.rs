//! Token-based formatter for CDL
//!
//! Formatting is line-local and mechanical. Each line is tokenized with
//! Logos and re-emitted with normalized spacing:
//! - single spaces around `>`, `~`, `+`, `|` and `=` outside any group
//! - `, ` after commas
//! - nothing inside or around brackets, `:`, `@` and `$` (a `] [` pair keeps
//!   one space when the source had one)
//! - `amorphous` and crystal-system keywords lowercased
//!
//! Leading indentation is kept (tabs optionally expanded) and comments are
//! emitted verbatim.

mod lexer;
mod options;


use lexer::{Token, TokenKind, tokenize};
pub use options::FormatOptions;

use crate::base::{Range, utf16_len};
use crate::vocab::tables::CRYSTAL_SYSTEMS;

/// A replacement of a whole line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Range,
    pub new_text: String,
}

/// A significant token with the layout facts needed to space it.
struct Placed<'a> {
    token: Token<'a>,
    /// Group depth the token sits at (an opener is outside its own group).
    depth: usize,
    /// The source had whitespace right before this token.
    spaced: bool,
}

/// Format a single line.
pub fn format_line(line: &str, options: &FormatOptions) -> String {
    let (line, cr) = match line.strip_suffix('\r') {
        Some(stripped) => (stripped, "\r"),
        None => (line, ""),
    };
    let content = line.trim_start();
    let indentation = &line[..line.len() - content.len()];
    let body = content.trim_end();
    let trailing = &content[body.len()..];

    let mut out = String::with_capacity(line.len());
    if !body.is_empty() {
        out.push_str(&options.indent(indentation));
        out.push_str(&format_tokens(body));
    }
    if !options.trim_trailing_whitespace {
        out.push_str(trailing);
    }
    out.push_str(cr);
    out
}

/// Format a whole document, line by line.
pub fn format_document(text: &str, options: &FormatOptions) -> String {
    text.split('\n')
        .map(|line| format_line(line, options))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Line replacements turning `text` into its formatted form. Unchanged lines
/// produce no edit.
pub fn formatting_edits(text: &str, options: &FormatOptions) -> Vec<TextEdit> {
    text.split('\n')
        .enumerate()
        .filter_map(|(line_num, line)| {
            let formatted = format_line(line, options);
            (formatted != line).then(|| TextEdit {
                range: Range::on_line(line_num as u32, 0, utf16_len(line)),
                new_text: formatted,
            })
        })
        .collect()
}

fn format_tokens(body: &str) -> String {
    let placed = place(tokenize(body));
    let mut out = String::with_capacity(body.len());

    for (i, current) in placed.iter().enumerate() {
        if i > 0 && needs_space(&placed[i - 1], current) {
            out.push(' ');
        }
        match current.token.kind {
            TokenKind::Word if is_keyword(current.token.text) && !after_sigil(&placed, i) => {
                out.push_str(&current.token.text.to_lowercase());
            }
            _ => out.push_str(current.token.text),
        }
    }
    out
}

/// Drop whitespace tokens, recording depth and whether space preceded.
fn place(tokens: Vec<Token<'_>>) -> Vec<Placed<'_>> {
    let mut placed = Vec::with_capacity(tokens.len());
    let mut depth = 0usize;
    let mut spaced = false;

    for token in tokens {
        if token.kind.is_trivia() {
            spaced = true;
            continue;
        }
        if token.kind.is_closer() {
            depth = depth.saturating_sub(1);
        }
        let opener = token.kind.is_opener();
        placed.push(Placed {
            token,
            depth,
            spaced,
        });
        if opener {
            depth += 1;
        }
        spaced = false;
    }
    placed
}

fn needs_space(prev: &Placed<'_>, current: &Placed<'_>) -> bool {
    let (p, c) = (prev.token.kind, current.token.kind);
    if c == TokenKind::Comment || p == TokenKind::Comma {
        return true;
    }
    if c == TokenKind::Comma {
        return false;
    }
    if (c.is_binary() && current.depth == 0) || (p.is_binary() && prev.depth == 0) {
        return true;
    }
    match (p, c) {
        (TokenKind::RBracket, TokenKind::LBracket) => current.spaced,
        (TokenKind::Word | TokenKind::Error, TokenKind::Word | TokenKind::Error) => current.spaced,
        _ => false,
    }
}

fn is_keyword(word: &str) -> bool {
    word.eq_ignore_ascii_case("amorphous")
        || CRYSTAL_SYSTEMS
            .iter()
            .any(|system| system.eq_ignore_ascii_case(word))
}

/// Binding and reference names keep their case.
fn after_sigil(placed: &[Placed<'_>], i: usize) -> bool {
    i > 0
        && matches!(
            placed[i - 1].token.kind,
            TokenKind::At | TokenKind::Dollar
        )
}
