//! Line scanner tests.

use cdl::syntax::{Delimiter, OperatorKind, parse_binding, references, scan};

use crate::helpers::source_fixtures::SAMPLE_DOC;

#[test]
fn test_top_level_operators_of_sample_lines() {
    let kinds = |line: &str| -> Vec<OperatorKind> {
        scan(line).top_level_operators().map(|op| op.kind).collect()
    };
    let lines: Vec<&str> = SAMPLE_DOC.lines().collect();

    assert!(kinds(lines[0]).is_empty(), "comment");
    assert_eq!(
        kinds(lines[3]),
        vec![
            OperatorKind::Colon,
            OperatorKind::Dollar,
            OperatorKind::Combine,
            OperatorKind::Dollar,
            OperatorKind::Pipe,
        ]
    );
    assert_eq!(
        kinds(lines[5]),
        vec![OperatorKind::Colon, OperatorKind::Aggregate]
    );
}

#[test]
fn test_groups_of_sample_lines() {
    for line in SAMPLE_DOC.lines() {
        let scanned = scan(line);
        assert!(
            scanned.groups().iter().all(|group| group.is_closed()),
            "unbalanced: {line:?}"
        );
        assert!(scanned.innermost_open().is_none());
    }

    let scanned = scan("amorphous[opalescent]:{botryoidal, massive}");
    let delimiters: Vec<_> = scanned.groups().iter().map(|g| g.delimiter).collect();
    assert_eq!(delimiters, vec![Delimiter::Bracket, Delimiter::Brace]);
    assert_eq!(scanned.inner(&scanned.groups()[1]), "botryoidal, massive");
}

#[test]
fn test_partial_line_keeps_open_groups() {
    let scanned = scan("cubic[m3m]:{111} | twin(spinel, [");
    let open = scanned.innermost_open().unwrap();
    assert_eq!(open.delimiter, Delimiter::Bracket);
    assert_eq!(open.depth, 1);
}

#[test]
fn test_bindings_and_references_of_sample() {
    let bindings: Vec<_> = SAMPLE_DOC.lines().filter_map(parse_binding).map(|b| b.name).collect();
    assert_eq!(bindings, vec!["prism", "rhomb"]);

    let names: Vec<_> = SAMPLE_DOC
        .lines()
        .flat_map(references)
        .map(|r| r.name)
        .collect();
    assert_eq!(names, vec!["prism", "rhomb"]);
}
