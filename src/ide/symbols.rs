//! Document outline.
//!
//! One node per structurally recognizable line: `@name = expr` bindings
//! become definitions, lines starting with a crystal system or `amorphous`
//! become expressions. Children come from the depth-0 operators of the
//! line. Blank lines, comments and anything else are skipped.

use smol_str::SmolStr;

use crate::base::{Range, byte_to_col, lines, utf16_len};
use crate::core::text_utils::{indentation_len, is_word_character};
use crate::syntax::binding::parse_binding;
use crate::syntax::scanner::{Delimiter, Operator, OperatorKind, ScannedLine, scan};
use crate::vocab::{Category, Vocabulary};

/// Kind of outline node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Definition,
    Expression,
    Operator,
}

impl SymbolKind {
    /// Convert to LSP symbol kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            SymbolKind::Definition => 13, // Variable
            SymbolKind::Expression => 19, // Object
            SymbolKind::Operator => 25,   // Operator
        }
    }
}

/// A node of the document outline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolNode {
    pub name: SmolStr,
    pub kind: SymbolKind,
    pub detail: String,
    /// Full extent of the node.
    pub range: Range,
    /// The part to highlight when the node is selected.
    pub selection_range: Range,
    pub children: Vec<SymbolNode>,
}

impl SymbolNode {
    fn operator(name: impl Into<SmolStr>, detail: &str, range: Range, selection_range: Range) -> Self {
        Self {
            name: name.into(),
            kind: SymbolKind::Operator,
            detail: detail.to_string(),
            range,
            selection_range,
            children: Vec::new(),
        }
    }
}

/// Build the outline of a document, one node (or none) per line.
pub fn extract_symbols(text: &str, vocab: &Vocabulary) -> Vec<SymbolNode> {
    lines(text)
        .filter_map(|(line_num, line)| line_symbol(line, line_num, vocab))
        .collect()
}

fn line_symbol(line: &str, line_num: u32, vocab: &Vocabulary) -> Option<SymbolNode> {
    let indent = indentation_len(line);
    let scanned = scan(line);
    let code = scanned.code().trim_end();
    if code.len() <= indent {
        return None;
    }
    let line_range = Range::on_line(line_num, byte_to_col(line, indent), utf16_len(code));

    if let Some(binding) = parse_binding(code) {
        let start = byte_to_col(line, binding.name_start);
        return Some(SymbolNode {
            name: SmolStr::new(binding.name),
            kind: SymbolKind::Definition,
            detail: format!("Definition: {}", binding.expression),
            range: line_range,
            selection_range: Range::on_line(line_num, start, start + utf16_len(binding.name)),
            children: extract_children(&scanned, line_num, binding.expression_start),
        });
    }

    let token_len = code[indent..]
        .find(|c: char| !is_word_character(c))
        .unwrap_or(code.len() - indent);
    let token = &code[indent..indent + token_len];
    if !(token.eq_ignore_ascii_case("amorphous") || vocab.contains(Category::System, token)) {
        return None;
    }

    let start = byte_to_col(line, indent);
    Some(SymbolNode {
        name: SmolStr::new(token),
        kind: SymbolKind::Expression,
        detail: code.trim_start().to_string(),
        range: line_range,
        selection_range: Range::on_line(line_num, start, start + utf16_len(token)),
        children: extract_children(&scanned, line_num, indent),
    })
}

/// Operator children of a line, from byte offset `start` on.
pub fn extract_children(scanned: &ScannedLine<'_>, line_num: u32, start: usize) -> Vec<SymbolNode> {
    let operators: Vec<Operator> = scanned
        .top_level_operators()
        .filter(|op| op.offset >= start)
        .filter(|op| {
            matches!(
                op.kind,
                OperatorKind::Overgrowth | OperatorKind::Aggregate | OperatorKind::Combine
            )
        })
        .copied()
        .collect();
    operator_nodes(scanned, line_num, &operators)
}

/// `>` is right-associative: every operator after it nests under it.
fn operator_nodes(scanned: &ScannedLine<'_>, line_num: u32, operators: &[Operator]) -> Vec<SymbolNode> {
    let line = scanned.text();
    let line_end = utf16_len(scanned.code().trim_end());
    let mut nodes = Vec::new();

    for (i, op) in operators.iter().enumerate() {
        let col = byte_to_col(line, op.offset);
        let selection = Range::on_line(line_num, col, col + 1);
        match op.kind {
            OperatorKind::Overgrowth => {
                let mut node = SymbolNode::operator(
                    op.kind.symbol().to_string(),
                    "Overgrowth",
                    Range::on_line(line_num, col, line_end),
                    selection,
                );
                node.children = operator_nodes(scanned, line_num, &operators[i + 1..]);
                nodes.push(node);
                break;
            }
            OperatorKind::Combine => {
                nodes.push(SymbolNode::operator(
                    op.kind.symbol().to_string(),
                    "Combination",
                    selection,
                    selection,
                ));
            }
            OperatorKind::Aggregate => nodes.push(aggregate_node(scanned, line_num, op)),
            _ => {}
        }
    }
    nodes
}

/// `~ arrangement[count] [orientation]`
fn aggregate_node(scanned: &ScannedLine<'_>, line_num: u32, op: &Operator) -> SymbolNode {
    let line = scanned.text();
    let code = scanned.code();
    let col = byte_to_col(line, op.offset);
    let selection = Range::on_line(line_num, col, col + 1);

    let after = &code[op.offset + 1..];
    let keyword_start = op.offset + 1 + (after.len() - after.trim_start().len());
    let keyword_len = code[keyword_start..]
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(code.len() - keyword_start);
    let keyword = &code[keyword_start..keyword_start + keyword_len];
    if keyword.is_empty() {
        let name = op.kind.symbol().to_string();
        return SymbolNode::operator(name, "Aggregate", selection, selection);
    }

    let mut end = keyword_start + keyword_len;
    let count = scanned
        .group_opened_at(end)
        .filter(|g| g.delimiter == Delimiter::Bracket);
    let name = match count {
        Some(group) => {
            end = group.end().unwrap_or(code.len());
            format!("{keyword}[{}]", scanned.inner(group).trim())
        }
        None => keyword.to_string(),
    };

    let mut children = Vec::new();
    if count.is_some()
        && let Some(group) = scanned
            .group_following(end)
            .filter(|g| g.delimiter == Delimiter::Bracket)
    {
        let group_end = group.end().unwrap_or(code.len());
        let range = Range::on_line(
            line_num,
            byte_to_col(line, group.open),
            byte_to_col(line, group_end),
        );
        children.push(SymbolNode::operator(
            scanned.inner(group).trim(),
            "Orientation",
            range,
            range,
        ));
        end = group_end;
    }

    let mut node = SymbolNode::operator(
        name,
        "Aggregate",
        Range::on_line(line_num, col, byte_to_col(line, end)),
        Range::on_line(line_num, byte_to_col(line, keyword_start), byte_to_col(line, keyword_start + keyword_len)),
    );
    node.children = children;
    node
}
