//! Document symbol tests for the IDE layer.

use cdl::base::Range;
use cdl::ide::{SymbolKind, SymbolNode, extract_symbols};
use cdl::vocab::Vocabulary;

use crate::helpers::source_fixtures::SAMPLE_DOC;

fn names(nodes: &[SymbolNode]) -> Vec<&str> {
    nodes.iter().map(|node| node.name.as_str()).collect()
}

fn assert_nested(node: &SymbolNode) {
    assert!(
        node.range.encloses(&node.selection_range),
        "{}: selection {:?} outside {:?}",
        node.name,
        node.selection_range,
        node.range
    );
    for child in &node.children {
        assert!(
            node.range.encloses(&child.range),
            "{} inside {}: {:?} outside {:?}",
            child.name,
            node.name,
            child.range,
            node.range
        );
        assert_nested(child);
    }
}

#[test]
fn test_sample_document_outline() {
    let nodes = extract_symbols(SAMPLE_DOC, Vocabulary::shared());
    assert_eq!(
        names(&nodes),
        vec!["prism", "rhomb", "trigonal", "cubic", "cubic", "amorphous"]
    );

    let kinds: Vec<_> = nodes.iter().map(|node| node.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SymbolKind::Definition,
            SymbolKind::Definition,
            SymbolKind::Expression,
            SymbolKind::Expression,
            SymbolKind::Expression,
            SymbolKind::Expression,
        ]
    );

    // references combined, the modifier is not an outline node
    assert_eq!(names(&nodes[2].children), vec!["+"]);
    // `+` before `>` stays a sibling
    assert_eq!(names(&nodes[3].children), vec!["+", ">"]);
    // aggregate with orientation
    assert_eq!(names(&nodes[4].children), vec!["parallel[20]"]);
    assert_eq!(names(&nodes[4].children[0].children), vec!["aligned"]);
    assert!(nodes[5].children.is_empty());
}

#[test]
fn test_ranges_nest() {
    for node in extract_symbols(SAMPLE_DOC, Vocabulary::shared()) {
        assert_nested(&node);
    }
}

#[test]
fn test_definition_ranges() {
    let nodes = extract_symbols("  @body = cubic[m3m]:{111} > {100}", Vocabulary::shared());
    let body = &nodes[0];
    assert_eq!(body.range, Range::on_line(0, 2, 34));
    assert_eq!(body.selection_range, Range::on_line(0, 3, 7));
    assert_eq!(body.detail, "Definition: cubic[m3m]:{111} > {100}");
    assert_eq!(names(&body.children), vec![">"]);
}

#[test]
fn test_system_match_is_case_insensitive() {
    let nodes = extract_symbols("Cubic[m3m]:{111}", Vocabulary::shared());
    assert_eq!(names(&nodes), vec!["Cubic"]);
}

#[test]
fn test_multibyte_columns_are_utf16() {
    let nodes = extract_symbols("@é = {111} + {100}", Vocabulary::shared());
    assert_eq!(nodes[0].selection_range, Range::on_line(0, 1, 2));
    // `+` is the 12th UTF-16 unit
    assert_eq!(nodes[0].children[0].selection_range, Range::on_line(0, 11, 12));
}
