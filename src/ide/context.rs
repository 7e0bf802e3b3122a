//! Cursor-context classification.
//!
//! Decides, from the text left of the cursor, what kind of token is expected
//! next. The input is usually incomplete, so classification works from the
//! innermost delimiter still open at the cursor (see
//! [`crate::syntax::scanner`]) and otherwise from the last structural
//! character at depth zero. The innermost, most recent anchor always wins.

use smol_str::SmolStr;

use crate::base::col_to_byte;
use crate::core::text_utils::{
    is_word_character, name_len_at, name_prefix_before, trailing_keyword, word_prefix_before,
};
use crate::syntax::scanner::{Delimiter, Group, ScannedLine, scan};
use crate::vocab::{Category, Vocabulary};

/// The kind of token expected at the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompletionContext {
    /// Start of an expression: a crystal system or `amorphous`.
    SystemStart,
    /// Inside `system[`.
    PointGroup,
    /// A form: inside `{`, or after `system[..]:`, `+` or `>`.
    FormOrMiller,
    /// After `}@`.
    Scale,
    /// After `~`.
    ArrangementType,
    /// Inside the second bracket of `~ arrangement[N] [`.
    AggregateOrientation,
    /// Inside `amorphous[`.
    AmorphousSubtype,
    /// Inside `amorphous[..]:{`.
    AmorphousShape,
    /// After `@` at line start.
    DefinitionStart,
    /// After `$`.
    Reference,
    /// Inside `modification(`.
    ModificationArg,
    /// Inside a feature bracket after a form or `phenomenon`.
    FeatureValue,
    /// After `|`.
    Modifier,
    /// Nothing sensible to offer.
    None,
}

/// Full classification result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    pub context: CompletionContext,
    /// Identifier characters immediately left of the cursor.
    pub prefix: String,
    /// The word owning the innermost group, lowercased: the system for
    /// [`CompletionContext::PointGroup`], the modification for
    /// [`CompletionContext::ModificationArg`], `phenomenon` for phenomenon
    /// features, and the leading system for forms when there is one.
    pub anchor: Option<SmolStr>,
    /// True when the cursor is already inside `{...}`.
    pub in_group: bool,
}

impl Classification {
    fn new(context: CompletionContext) -> Self {
        Self {
            context,
            prefix: String::new(),
            anchor: None,
            in_group: false,
        }
    }

    fn with_anchor(mut self, anchor: Option<&str>) -> Self {
        self.anchor = anchor.map(|a| SmolStr::new(a.to_lowercase()));
        self
    }

    fn inside_group(mut self) -> Self {
        self.in_group = true;
        self
    }

    fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }
}

/// Classify the cursor at UTF-16 `column` of `line`.
///
/// # Example
/// ```
/// use cdl::ide::{CompletionContext, classify};
/// use cdl::vocab::Vocabulary;
///
/// let vocab = Vocabulary::shared();
/// assert_eq!(classify("$pr", 3, vocab), (CompletionContext::Reference, "pr".to_string()));
/// assert_eq!(classify("cubic[m3m]:{111}@", 17, vocab).0, CompletionContext::Scale);
/// ```
pub fn classify(line: &str, column: u32, vocab: &Vocabulary) -> (CompletionContext, String) {
    let result = classify_detailed(line, column, vocab);
    (result.context, result.prefix)
}

/// Like [`classify`], also reporting the anchor word and group state.
pub fn classify_detailed(line: &str, column: u32, vocab: &Vocabulary) -> Classification {
    let before = &line[..col_to_byte(line, column)];
    let result = classify_before(before, vocab);
    tracing::trace!(
        context = ?result.context,
        prefix = %result.prefix,
        anchor = ?result.anchor,
        "classified cursor"
    );
    result
}

fn classify_before(before: &str, vocab: &Vocabulary) -> Classification {
    if scan(before).has_comment() {
        return Classification::new(CompletionContext::None);
    }

    // `$name` wins over everything else
    let name = name_prefix_before(before, before.len());
    if before[..before.len() - name.len()].ends_with('$') {
        return Classification::new(CompletionContext::Reference).with_prefix(name);
    }

    if let Some(scale) = scale_prefix(before) {
        return Classification::new(CompletionContext::Scale).with_prefix(scale);
    }

    let prefix = word_prefix_before(before, before.len());
    let head = &before[..before.len() - prefix.len()];
    let trimmed = head.trim_start();

    if trimmed.is_empty() {
        return Classification::new(CompletionContext::SystemStart).with_prefix(prefix);
    }
    if trimmed == "@" {
        return Classification::new(CompletionContext::DefinitionStart).with_prefix(prefix);
    }
    if binding_expression(head).is_some_and(|expr| expr.trim().is_empty()) {
        return Classification::new(CompletionContext::SystemStart).with_prefix(prefix);
    }

    let scanned = scan(head);
    let result = match scanned.innermost_open() {
        Some(group) => classify_in_group(&scanned, group, vocab),
        None => classify_top_level(&scanned, vocab),
    };
    result.with_prefix(prefix)
}

fn classify_in_group(scanned: &ScannedLine<'_>, group: &Group, vocab: &Vocabulary) -> Classification {
    let text = scanned.text();
    let owner = &text[..group.open];
    let keyword = trailing_keyword(owner);

    match group.delimiter {
        Delimiter::Bracket => {
            if keyword.eq_ignore_ascii_case("amorphous") {
                Classification::new(CompletionContext::AmorphousSubtype)
            } else if vocab.contains(Category::System, keyword) {
                Classification::new(CompletionContext::PointGroup).with_anchor(Some(keyword))
            } else if keyword.eq_ignore_ascii_case("phenomenon") {
                Classification::new(CompletionContext::FeatureValue).with_anchor(Some(keyword))
            } else if keyword.is_empty() {
                match scanned.group_preceding(group.open) {
                    Some(prev) if is_arrangement_count(scanned, prev) => {
                        Classification::new(CompletionContext::AggregateOrientation)
                    }
                    Some(prev) if prev.delimiter == Delimiter::Brace => {
                        Classification::new(CompletionContext::FeatureValue)
                    }
                    _ => Classification::new(CompletionContext::None),
                }
            } else {
                Classification::new(CompletionContext::None)
            }
        }
        Delimiter::Brace => {
            let amorphous_shape = owner
                .trim_end()
                .strip_suffix(':')
                .and_then(|before_colon| scanned.group_preceding(before_colon.len()))
                .is_some_and(|prev| {
                    prev.delimiter == Delimiter::Bracket
                        && trailing_keyword(&text[..prev.open]).eq_ignore_ascii_case("amorphous")
                });
            if amorphous_shape {
                Classification::new(CompletionContext::AmorphousShape)
            } else {
                Classification::new(CompletionContext::FormOrMiller)
                    .with_anchor(leading_system(text, vocab))
                    .inside_group()
            }
        }
        Delimiter::Paren => {
            if vocab.contains(Category::Modification, keyword) {
                Classification::new(CompletionContext::ModificationArg).with_anchor(Some(keyword))
            } else {
                Classification::new(CompletionContext::None)
            }
        }
    }
}

fn classify_top_level(scanned: &ScannedLine<'_>, vocab: &Vocabulary) -> Classification {
    let text = scanned.text();
    let code = text.trim_end();
    let Some(last) = code.chars().last() else {
        return Classification::new(CompletionContext::SystemStart);
    };
    let before_last = &code[..code.len() - last.len_utf8()];

    match last {
        '@' if before_last.trim_end().ends_with('}') => {
            Classification::new(CompletionContext::Scale)
        }
        '~' => Classification::new(CompletionContext::ArrangementType),
        '|' => Classification::new(CompletionContext::Modifier),
        '+' | '>' => Classification::new(CompletionContext::FormOrMiller)
            .with_anchor(leading_system(text, vocab)),
        ':' => match scanned.group_preceding(before_last.len()) {
            Some(prev) if prev.delimiter == Delimiter::Bracket => {
                let keyword = trailing_keyword(&text[..prev.open]);
                if vocab.contains(Category::System, keyword) {
                    Classification::new(CompletionContext::FormOrMiller).with_anchor(Some(keyword))
                } else {
                    Classification::new(CompletionContext::None)
                }
            }
            _ => Classification::new(CompletionContext::None),
        },
        _ => Classification::new(CompletionContext::None),
    }
}

/// A decimal typed after a depth-0 `}@`, such as the `1.` of `{111}@1.`.
fn scale_prefix(before: &str) -> Option<&str> {
    let head = before.trim_end_matches(|c: char| c.is_ascii_digit() || c == '.');
    let digits = &before[head.len()..];
    if digits.is_empty() {
        return None;
    }
    let closed = head.strip_suffix('@')?.trim_end();
    (closed.ends_with('}') && scan(head).innermost_open().is_none()).then_some(digits)
}

/// True when `group` is the `[N]` of `~ arrangement[N]`.
fn is_arrangement_count(scanned: &ScannedLine<'_>, group: &Group) -> bool {
    if group.delimiter != Delimiter::Bracket {
        return false;
    }
    let owner = scanned.text()[..group.open].trim_end();
    let keyword = trailing_keyword(owner);
    !keyword.is_empty() && owner[..owner.len() - keyword.len()].trim_end().ends_with('~')
}

/// The expression part of a line that starts with `@name =`, if it does.
pub(crate) fn binding_expression(text: &str) -> Option<&str> {
    let trimmed = text.trim_start();
    let rest = trimmed.strip_prefix('@')?;
    let name_len = name_len_at(rest, 0);
    if name_len == 0 {
        return None;
    }
    rest[name_len..].trim_start().strip_prefix('=')
}

/// The crystal system the expression on this line starts with.
fn leading_system<'a>(text: &'a str, vocab: &Vocabulary) -> Option<&'a str> {
    let expression = binding_expression(text).unwrap_or(text).trim_start();
    let len = expression
        .find(|c: char| !is_word_character(c))
        .unwrap_or(expression.len());
    let word = &expression[..len];
    vocab.contains(Category::System, word).then_some(word)
}
