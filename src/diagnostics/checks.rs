//! Per-line checkers.
//!
//! Each checker looks at one scanned line and appends zero or more findings.
//! Comments are never checked: every checker works on groups and operators
//! found by the scanner, which stops at `#`.

use crate::base::{Range, byte_to_col};
use crate::config::AnalysisConfig;
use crate::core::text_utils::{is_word_character, trailing_keyword};
use crate::ide::context::binding_expression;
use crate::syntax::scanner::{Delimiter, Group, OperatorKind, ScannedLine, scan};
use crate::vocab::{Category, Vocabulary};

use super::{Diagnostic, DiagnosticCollector, codes};

/// One line prepared for checking.
pub struct LineInput<'a> {
    pub text: &'a str,
    pub line_num: u32,
    pub scanned: ScannedLine<'a>,
}

impl<'a> LineInput<'a> {
    pub fn new(text: &'a str, line_num: u32) -> Self {
        Self {
            text,
            line_num,
            scanned: scan(text),
        }
    }

    /// Range of bytes `start..end` of this line.
    fn range(&self, start: usize, end: usize) -> Range {
        Range::on_line(
            self.line_num,
            byte_to_col(self.text, start),
            byte_to_col(self.text, end),
        )
    }

    /// The trimmed content of a group and its byte span.
    fn group_token(&self, group: &Group) -> (&'a str, usize, usize) {
        let inner = self.scanned.inner(group);
        let token = inner.trim();
        let start = group.open + 1 + (inner.len() - inner.trim_start().len());
        (token, start, start + token.len())
    }

    /// The word owning a group (`word[`, `word(`).
    fn owner(&self, group: &Group) -> &'a str {
        trailing_keyword(&self.text[..group.open])
    }

    /// `~ arrangement` occurrences: (keyword, keyword start, count group).
    fn aggregates(&self) -> Vec<(&'a str, usize, Option<&Group>)> {
        let code = self.scanned.code();
        self.scanned
            .top_level_operators()
            .filter(|op| op.kind == OperatorKind::Aggregate)
            .map(|op| {
                let after = &code[op.offset + 1..];
                let start = op.offset + 1 + (after.len() - after.trim_start().len());
                let len = code[start..]
                    .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                    .unwrap_or(code.len() - start);
                let count = self
                    .scanned
                    .group_opened_at(start + len)
                    .filter(|g| len > 0 && g.delimiter == Delimiter::Bracket);
                (&code[start..start + len], start, count)
            })
            .collect()
    }
}

/// A line checker.
pub type LineChecker = fn(&LineInput<'_>, &Vocabulary, &AnalysisConfig, &mut DiagnosticCollector);

/// All line checkers, in the order they run.
pub const LINE_CHECKERS: &[(&str, LineChecker)] = &[
    ("amorphous-subtype", check_amorphous_subtype),
    ("amorphous-shape", check_amorphous_shapes),
    ("arrangement-type", check_arrangement_type),
    ("aggregate-count", check_aggregate_count),
    ("aggregate-orientation", check_aggregate_orientation),
    ("point-group", check_point_group),
    ("twin-law", check_twin_law),
    ("modification", check_modification),
];

fn amorphous_groups<'l>(input: &'l LineInput<'_>) -> impl Iterator<Item = &'l Group> {
    input.scanned.groups().iter().filter(move |g| {
        g.delimiter == Delimiter::Bracket && input.owner(g).eq_ignore_ascii_case("amorphous")
    })
}

/// Token inside `amorphous[...]`.
pub fn check_amorphous_subtype(
    input: &LineInput<'_>,
    vocab: &Vocabulary,
    _config: &AnalysisConfig,
    out: &mut DiagnosticCollector,
) {
    for group in amorphous_groups(input) {
        let (token, start, end) = input.group_token(group);
        if token.is_empty() || vocab.contains(Category::AmorphousSubtype, token) {
            continue;
        }
        out.add(Diagnostic::warning(
            input.range(start, end),
            codes::UNKNOWN_AMORPHOUS_SUBTYPE,
            format!("Unknown amorphous subtype '{token}'"),
        ));
    }
}

/// Comma-separated tokens inside the braces of `amorphous[...]:{...}`.
pub fn check_amorphous_shapes(
    input: &LineInput<'_>,
    vocab: &Vocabulary,
    _config: &AnalysisConfig,
    out: &mut DiagnosticCollector,
) {
    for subtype in amorphous_groups(input) {
        let Some(end) = subtype.end() else { continue };
        let rest = &input.scanned.code()[end..];
        let Some(after_colon) = rest.trim_start().strip_prefix(':') else {
            continue;
        };
        let brace_at = input.scanned.code().len() - after_colon.trim_start().len();
        let Some(shapes) = input
            .scanned
            .group_opened_at(brace_at)
            .filter(|g| g.delimiter == Delimiter::Brace)
        else {
            continue;
        };

        let mut offset = shapes.open + 1;
        for piece in input.scanned.inner(shapes).split(',') {
            let token = piece.trim();
            let start = offset + (piece.len() - piece.trim_start().len());
            offset += piece.len() + 1;
            if token.is_empty() || vocab.contains(Category::AmorphousShape, token) {
                continue;
            }
            out.add(Diagnostic::warning(
                input.range(start, start + token.len()),
                codes::UNKNOWN_AMORPHOUS_SHAPE,
                format!("Unknown amorphous shape '{token}'"),
            ));
        }
    }
}

/// Keyword after `~`. An unknown arrangement breaks the aggregate structure,
/// so it is an error.
pub fn check_arrangement_type(
    input: &LineInput<'_>,
    vocab: &Vocabulary,
    _config: &AnalysisConfig,
    out: &mut DiagnosticCollector,
) {
    for (keyword, start, _) in input.aggregates() {
        if keyword.is_empty() || vocab.contains(Category::Arrangement, keyword) {
            continue;
        }
        out.add(Diagnostic::error(
            input.range(start, start + keyword.len()),
            codes::UNKNOWN_ARRANGEMENT,
            format!("Unknown aggregate arrangement '{keyword}'"),
        ));
    }
}

/// Numeric count inside `arrangement[N]`.
pub fn check_aggregate_count(
    input: &LineInput<'_>,
    _vocab: &Vocabulary,
    config: &AnalysisConfig,
    out: &mut DiagnosticCollector,
) {
    for (_, _, count) in input.aggregates() {
        let Some(group) = count else { continue };
        let (token, start, end) = input.group_token(group);
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }
        // digits only, so a failed parse is an overflow
        let too_large = token
            .parse::<u64>()
            .map_or(true, |value| value > config.aggregate_count_limit);
        if too_large {
            out.add(Diagnostic::warning(
                input.range(start, end),
                codes::AGGREGATE_COUNT_LARGE,
                format!(
                    "Aggregate count {token} exceeds the recommended maximum of {}",
                    config.aggregate_count_limit
                ),
            ));
        }
    }
}

/// `[orientation]` following `~ arrangement[N]`.
pub fn check_aggregate_orientation(
    input: &LineInput<'_>,
    vocab: &Vocabulary,
    _config: &AnalysisConfig,
    out: &mut DiagnosticCollector,
) {
    for (_, _, count) in input.aggregates() {
        let Some(orientation) = count
            .and_then(Group::end)
            .and_then(|end| input.scanned.group_following(end))
            .filter(|g| g.delimiter == Delimiter::Bracket)
        else {
            continue;
        };
        let (token, start, end) = input.group_token(orientation);
        if token.is_empty() || vocab.contains(Category::Orientation, token) {
            continue;
        }
        out.add(Diagnostic::warning(
            input.range(start, end),
            codes::UNKNOWN_ORIENTATION,
            format!("Unknown aggregate orientation '{token}'"),
        ));
    }
}

/// `system[pg]` at the start of an expression: the system must exist and
/// the point group must belong to it.
pub fn check_point_group(
    input: &LineInput<'_>,
    vocab: &Vocabulary,
    _config: &AnalysisConfig,
    out: &mut DiagnosticCollector,
) {
    let code = input.scanned.code();
    let expression = binding_expression(code).unwrap_or(code);
    let word_start = code.len() - expression.trim_start().len();
    let word_len = code[word_start..]
        .find(|c: char| !is_word_character(c))
        .unwrap_or(code.len() - word_start);
    let word = &code[word_start..word_start + word_len];
    let Some(group) = input
        .scanned
        .group_opened_at(word_start + word_len)
        .filter(|g| g.delimiter == Delimiter::Bracket)
    else {
        return;
    };
    if word.is_empty() || word.eq_ignore_ascii_case("amorphous") {
        return;
    }

    if !vocab.contains(Category::System, word) {
        out.add(Diagnostic::error(
            input.range(word_start, word_start + word_len),
            codes::UNKNOWN_SYSTEM,
            format!("Unknown crystal system '{word}'"),
        ));
        return;
    }

    let (token, start, end) = input.group_token(group);
    if token.is_empty() || vocab.is_point_group_for(word, token) {
        return;
    }
    let message = match vocab.system_for_point_group(token) {
        Some(other) => format!(
            "Point group '{token}' belongs to the {other} system, not {}",
            word.to_lowercase()
        ),
        None => format!("Unknown point group '{token}'"),
    };
    out.add(Diagnostic::error(
        input.range(start, end),
        codes::INVALID_POINT_GROUP,
        message,
    ));
}

/// First argument of `twin(...)`. Bare names also match their `_law` form.
pub fn check_twin_law(
    input: &LineInput<'_>,
    vocab: &Vocabulary,
    _config: &AnalysisConfig,
    out: &mut DiagnosticCollector,
) {
    for group in input.scanned.groups() {
        if group.delimiter != Delimiter::Paren || !input.owner(group).eq_ignore_ascii_case("twin") {
            continue;
        }
        let inner = input.scanned.inner(group);
        let first = inner.split(',').next().unwrap_or_default();
        let law = first.trim();
        if law.is_empty()
            || law.contains(':')
            || vocab.contains(Category::TwinLaw, law)
            || vocab.contains(Category::TwinLaw, &format!("{law}_law"))
        {
            continue;
        }
        let start = group.open + 1 + (first.len() - first.trim_start().len());
        out.add(Diagnostic::warning(
            input.range(start, start + law.len()),
            codes::UNKNOWN_TWIN_LAW,
            format!("Unknown twin law '{law}'"),
        ));
    }
}

/// `| name(` where `name` is not a modification.
pub fn check_modification(
    input: &LineInput<'_>,
    vocab: &Vocabulary,
    _config: &AnalysisConfig,
    out: &mut DiagnosticCollector,
) {
    let code = input.scanned.code();
    for op in input
        .scanned
        .top_level_operators()
        .filter(|op| op.kind == OperatorKind::Pipe)
    {
        let after = &code[op.offset + 1..];
        let start = op.offset + 1 + (after.len() - after.trim_start().len());
        let len = code[start..]
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(code.len() - start);
        let name = &code[start..start + len];
        if name.is_empty() || !code[start + len..].starts_with('(') {
            continue;
        }
        if vocab.contains(Category::Modification, name) {
            continue;
        }
        out.add(Diagnostic::warning(
            input.range(start, start + len),
            codes::UNKNOWN_MODIFICATION,
            format!("Unknown modification '{name}'"),
        ));
    }
}
