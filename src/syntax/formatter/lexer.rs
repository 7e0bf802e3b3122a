//! Lexer for CDL lines using Logos
//!
//! Tokenizes a single line into tokens including whitespace and comments.

use logos::Logos;

/// Token kinds seen by the formatter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Whitespace,
    Comment,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    LParen,
    RParen,
    Gt,
    Tilde,
    Plus,
    Pipe,
    Eq,
    Comma,
    Colon,
    At,
    Dollar,
    Word,
    Error,
}

impl TokenKind {
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }

    pub fn is_opener(self) -> bool {
        matches!(self, TokenKind::LBracket | TokenKind::LBrace | TokenKind::LParen)
    }

    pub fn is_closer(self) -> bool {
        matches!(self, TokenKind::RBracket | TokenKind::RBrace | TokenKind::RParen)
    }

    /// Operators spaced on both sides when outside any group.
    pub fn is_binary(self) -> bool {
        matches!(
            self,
            TokenKind::Gt | TokenKind::Tilde | TokenKind::Plus | TokenKind::Pipe | TokenKind::Eq
        )
    }
}

/// Token with text and kind
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

/// Logos-based token types
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // === Trivia ===
    #[regex(r"[ \t\r]+")]
    Whitespace,

    #[regex(r"#[^\n]*", allow_greedy = true)]
    Comment,

    // === Delimiters ===
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    // === Operators ===
    #[token(">")]
    Gt,
    #[token("~")]
    Tilde,
    #[token("+")]
    Plus,
    #[token("|")]
    Pipe,
    #[token("=")]
    Eq,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token("@")]
    At,
    #[token("$")]
    Dollar,

    // === Words: names, numbers, Miller indices, point groups ===
    #[regex(r"[\w./-]+")]
    Word,
}

fn to_kind(token: LogosToken) -> TokenKind {
    match token {
        LogosToken::Whitespace => TokenKind::Whitespace,
        LogosToken::Comment => TokenKind::Comment,
        LogosToken::LBracket => TokenKind::LBracket,
        LogosToken::RBracket => TokenKind::RBracket,
        LogosToken::LBrace => TokenKind::LBrace,
        LogosToken::RBrace => TokenKind::RBrace,
        LogosToken::LParen => TokenKind::LParen,
        LogosToken::RParen => TokenKind::RParen,
        LogosToken::Gt => TokenKind::Gt,
        LogosToken::Tilde => TokenKind::Tilde,
        LogosToken::Plus => TokenKind::Plus,
        LogosToken::Pipe => TokenKind::Pipe,
        LogosToken::Eq => TokenKind::Eq,
        LogosToken::Comma => TokenKind::Comma,
        LogosToken::Colon => TokenKind::Colon,
        LogosToken::At => TokenKind::At,
        LogosToken::Dollar => TokenKind::Dollar,
        LogosToken::Word => TokenKind::Word,
    }
}

/// Tokenize a line into a vector of tokens with their text
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut lexer = LogosToken::lexer(source);

    while let Some(result) = lexer.next() {
        let text = lexer.slice();
        let kind = match result {
            Ok(token) => to_kind(token),
            Err(()) => TokenKind::Error,
        };
        tokens.push(Token { kind, text });
    }

    tokens
}
