//! Go to definition tests for the IDE layer.

use std::path::PathBuf;

use cdl::base::{Location, Range};
use cdl::config::AnalysisConfig;
use cdl::ide::{get_definition, get_definitions, is_on_reference};
use cdl::vocab::Vocabulary;

use crate::helpers::source_fixtures::{DUPLICATE_BINDINGS, SAMPLE_DOC};

const URI: &str = "file:///gems.cdl";

fn goto_in(document: &str, line_num: u32, column: u32) -> Option<Location> {
    let line = document.lines().nth(line_num as usize)?;
    get_definition(
        line,
        column,
        line_num,
        URI,
        Some(document),
        Vocabulary::shared(),
        &AnalysisConfig::default(),
    )
}

/// The source line a vocabulary location points at.
fn target_line(location: &Location) -> String {
    let path: PathBuf = url::Url::parse(&location.uri)
        .unwrap()
        .to_file_path()
        .unwrap();
    let text = std::fs::read_to_string(path).unwrap();
    text.lines()
        .nth(location.range.start.line as usize)
        .unwrap()
        .to_string()
}

// =============================================================================
// REFERENCES
// =============================================================================

#[test]
fn test_every_column_of_a_reference_resolves() {
    // line 3: `trigonal[-3m]:$prism + $rhomb | twin(japan)`
    for column in 14..=20 {
        let location = goto_in(SAMPLE_DOC, 3, column)
            .unwrap_or_else(|| panic!("column {column} did not resolve"));
        assert_eq!(location.uri, URI);
        assert_eq!(location.range, Range::on_line(1, 1, 6), "column {column}");
    }
}

#[test]
fn test_second_reference_on_line() {
    let location = goto_in(SAMPLE_DOC, 3, 25).unwrap();
    assert_eq!(location.range, Range::on_line(2, 1, 6));
}

#[test]
fn test_duplicate_binding_resolves_to_first() {
    let location = goto_in(DUPLICATE_BINDINGS, 2, 12).unwrap();
    assert_eq!(location.range.start.line, 0);
}

#[test]
fn test_reference_detection_is_inclusive() {
    let line = "{111} + $prism";
    assert_eq!(is_on_reference(line, 8).as_deref(), Some("prism"));
    assert_eq!(is_on_reference(line, 14).as_deref(), Some("prism"));
    assert_eq!(is_on_reference(line, 7), None);
}

// =============================================================================
// VOCABULARY WORDS
// =============================================================================

#[test]
fn test_vocabulary_words_land_on_their_table_entry() {
    for (line_num, column, term) in [
        (3, 3, "trigonal"),
        (3, 11, "-3m"),
        (3, 34, "twin"),
        (3, 40, "japan"),
        (5, 22, "parallel"),
        (5, 35, "aligned"),
        (6, 12, "opalescent"),
        (6, 25, "botryoidal"),
    ] {
        let location = goto_in(SAMPLE_DOC, line_num, column)
            .unwrap_or_else(|| panic!("{term} did not resolve"));
        assert!(location.uri.ends_with("/src/vocab/tables.rs"));
        assert!(
            target_line(&location).contains(&format!("\"{term}\"")),
            "{term} landed on {:?}",
            target_line(&location)
        );
    }
}

#[test]
fn test_location_span_is_configurable() {
    let config = AnalysisConfig {
        location_span: 7,
        ..AnalysisConfig::default()
    };
    let location =
        get_definition("cubic", 0, 0, URI, None, Vocabulary::shared(), &config).unwrap();
    assert_eq!(location.range.start.character, 0);
    assert_eq!(location.range.end.character, 7);
}

#[test]
fn test_nothing_under_cursor() {
    // `:` between groups
    assert!(goto_in(SAMPLE_DOC, 3, 13).is_none());
    // unknown words resolve to nothing
    assert!(goto_in(SAMPLE_DOC, 0, 4).is_none());
}

#[test]
fn test_vocabulary_without_source() {
    let vocab = Vocabulary::empty().with_terms(cdl::vocab::Category::System, ["cubic"]);
    let config = AnalysisConfig::default();
    assert!(get_definitions("cubic", 0, 0, URI, None, &vocab, &config).is_empty());
}
