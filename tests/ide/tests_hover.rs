//! Hover tests for the IDE layer.

use cdl::base::Range;
use cdl::ide::{HoverResult, hover};
use cdl::vocab::{Category, Vocabulary};

use crate::helpers::source_fixtures::{DUPLICATE_BINDINGS, SAMPLE_DOC};

fn hover_in(document: &str, line_num: u32, column: u32) -> Option<HoverResult> {
    let line = document.lines().nth(line_num as usize)?;
    hover(line, column, line_num, Some(document), Vocabulary::shared())
}

#[test]
fn test_hover_reference_shows_binding() {
    let result = hover_in(SAMPLE_DOC, 3, 16).unwrap();
    assert!(result.contents.starts_with("**$prism** (line 2)"));
    assert!(result.contents.contains("```cdl\n@prism = {10-10}@1.0\n```"));
    assert_eq!(result.range, Range::on_line(3, 14, 20));
}

#[test]
fn test_hover_duplicate_shows_first_binding() {
    let result = hover_in(DUPLICATE_BINDINGS, 2, 12).unwrap();
    assert!(result.contents.contains("@a = {111}"));
    assert!(!result.contents.contains("{100}"));
}

#[test]
fn test_hover_system_shows_default_point_group() {
    let result = hover_in(SAMPLE_DOC, 4, 2).unwrap();
    assert!(result.contents.contains("Default point group: `m3m`"));
    assert_eq!(result.range, Range::on_line(4, 0, 5));
}

#[test]
fn test_hover_twin_law_and_modification() {
    // `twin(japan)` on line 3
    let law = hover_in(SAMPLE_DOC, 3, 39).unwrap();
    assert!(law.contents.contains("Japan Twin"));

    let modification = hover_in(SAMPLE_DOC, 3, 33).unwrap();
    assert!(modification.contents.contains("twin"));
    assert_ne!(modification.contents, law.contents);
}

#[test]
fn test_hover_twin_law_suffix() {
    let vocab = Vocabulary::empty()
        .with_terms(Category::TwinLaw, ["brazil_law"])
        .with_doc(Category::TwinLaw, "brazil_law", "Brazil law");
    let result = hover("twin(brazil)", 7, 0, None, &vocab).unwrap();
    assert_eq!(result.contents, "Brazil law");
}

#[test]
fn test_hover_nested_growth() {
    // `>` on line 4
    let line = SAMPLE_DOC.lines().nth(4).unwrap();
    let column = line.find('>').unwrap() as u32;
    let result = hover_in(SAMPLE_DOC, 4, column).unwrap();
    assert!(result.contents.contains("Nested Growth"));
    assert_eq!(result.range, Range::on_line(4, column, column + 1));
}

#[test]
fn test_hover_nothing() {
    // `:` after the point group
    assert!(hover_in(SAMPLE_DOC, 3, 13).is_none());
    assert!(hover_in(SAMPLE_DOC, 0, 4).is_none());
}
