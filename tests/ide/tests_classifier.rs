//! Cursor-context classification over realistic lines.

use cdl::ide::{CompletionContext, classify, classify_detailed};
use cdl::vocab::Vocabulary;
use rstest::rstest;

use crate::helpers::cursor::at_cursor;
use crate::helpers::source_fixtures::SAMPLE_DOC;

fn check(marked: &str) -> (CompletionContext, String) {
    let (line, column) = at_cursor(marked);
    classify(&line, column, Vocabulary::shared())
}

// =============================================================================
// TYPING A LINE FROM LEFT TO RIGHT
// =============================================================================

#[rstest]
#[case("^", CompletionContext::SystemStart, "")]
#[case("trig^", CompletionContext::SystemStart, "trig")]
#[case("trigonal[^", CompletionContext::PointGroup, "")]
#[case("trigonal[-3^", CompletionContext::PointGroup, "-3")]
#[case("trigonal[-3m]:^", CompletionContext::FormOrMiller, "")]
#[case("trigonal[-3m]:{10^", CompletionContext::FormOrMiller, "10")]
#[case("trigonal[-3m]:{10-10}@^", CompletionContext::Scale, "")]
#[case("trigonal[-3m]:{10-10}@1.^", CompletionContext::Scale, "1.")]
#[case("trigonal[-3m]:{10-10}@1.0 + ^", CompletionContext::FormOrMiller, "")]
#[case("trigonal[-3m]:{10-10}@1.0 + rh^", CompletionContext::FormOrMiller, "rh")]
#[case("trigonal[-3m]:{10-10}@1.0 | ^", CompletionContext::Modifier, "")]
#[case("trigonal[-3m]:{10-10}@1.0 | twin(^", CompletionContext::ModificationArg, "")]
#[case("trigonal[-3m]:{10-10}@1.0 | twin(ja^", CompletionContext::ModificationArg, "ja")]
#[case("trigonal[-3m]:{10-10}@1.0 | twin(japan) # ^", CompletionContext::None, "")]
fn test_typing_progression(
    #[case] marked: &str,
    #[case] context: CompletionContext,
    #[case] prefix: &str,
) {
    assert_eq!(check(marked), (context, prefix.to_string()), "{marked:?}");
}

#[rstest]
#[case("amorphous[^")]
#[case("AMORPHOUS[^")]
#[case("  amorphous [^")]
fn test_amorphous_subtype_regardless_of_case_and_spacing(#[case] marked: &str) {
    assert_eq!(check(marked).0, CompletionContext::AmorphousSubtype);
}

#[test]
fn test_innermost_group_wins() {
    // The brace is the innermost open group even though a bracket precedes it
    assert_eq!(check("cubic[m3m]:{1^").0, CompletionContext::FormOrMiller);
    // A closed point group no longer captures the cursor
    assert_eq!(check("cubic[m3m] ~ ^").0, CompletionContext::ArrangementType);
}

#[test]
fn test_binding_expression_start() {
    assert_eq!(check("@prism = ^"), (CompletionContext::SystemStart, String::new()));
    assert_eq!(check("@prism = hex^"), (CompletionContext::SystemStart, "hex".to_string()));
    assert_eq!(check("@prism = hexagonal[^").0, CompletionContext::PointGroup);
}

#[test]
fn test_reference_wins_inside_groups() {
    assert_eq!(check("cubic[m3m]:{$pr^"), (CompletionContext::Reference, "pr".to_string()));
}

#[test]
fn test_anchor_reports_owning_word() {
    let vocab = Vocabulary::shared();

    let (line, column) = at_cursor("Hexagonal[^");
    let result = classify_detailed(&line, column, vocab);
    assert_eq!(result.anchor.as_deref(), Some("hexagonal"));

    let (line, column) = at_cursor("cubic[m3m]:{111} | truncate(^");
    let result = classify_detailed(&line, column, vocab);
    assert_eq!(result.context, CompletionContext::ModificationArg);
    assert_eq!(result.anchor.as_deref(), Some("truncate"));

    let (line, column) = at_cursor("cubic[m3m]:{1^");
    let result = classify_detailed(&line, column, vocab);
    assert!(result.in_group);
    assert_eq!(result.anchor.as_deref(), Some("cubic"));
}

#[test]
fn test_multibyte_text_before_cursor() {
    let (context, prefix) = check("cubic[m3m]:{111} # é ^");
    assert_eq!(context, CompletionContext::None);
    assert!(prefix.is_empty());

    assert_eq!(check("@é = $é^"), (CompletionContext::Reference, "é".to_string()));
}

// =============================================================================
// PROPERTIES
// =============================================================================

#[test]
fn test_every_column_classifies_with_a_suffix_prefix() {
    let vocab = Vocabulary::shared();
    for line in SAMPLE_DOC.lines() {
        let width = line.encode_utf16().count() as u32;
        for column in 0..=width + 2 {
            let (_, prefix) = classify(line, column, vocab);
            let units: Vec<u16> = line.encode_utf16().take(column as usize).collect();
            let before = String::from_utf16_lossy(&units);
            assert!(
                before.ends_with(&prefix),
                "prefix {prefix:?} is not a suffix of {before:?}"
            );
        }
    }
}

#[test]
fn test_classification_is_deterministic() {
    let vocab = Vocabulary::shared();
    for line in SAMPLE_DOC.lines() {
        let width = line.encode_utf16().count() as u32;
        for column in 0..=width {
            assert_eq!(classify(line, column, vocab), classify(line, column, vocab));
        }
    }
}

#[test]
fn test_empty_vocabulary_still_classifies_structure() {
    let vocab = Vocabulary::empty();
    assert_eq!(classify("$", 1, &vocab).0, CompletionContext::Reference);
    assert_eq!(classify("{111} ~ ", 8, &vocab).0, CompletionContext::ArrangementType);
    // Without systems nothing owns the bracket
    assert_eq!(classify("cubic[", 6, &vocab).0, CompletionContext::None);
}
