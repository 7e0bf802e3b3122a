//! Validation of whole documents.

use cdl::base::Range;
use cdl::config::AnalysisConfig;
use cdl::diagnostics::{Severity, codes, validate};
use cdl::vocab::{Vocabulary, tables};
use rstest::rstest;

use crate::helpers::diagnostic_helpers::{assert_clean, assert_single, codes_for, diagnostics_for};
use crate::helpers::source_fixtures::{BROKEN_DOC, DUPLICATE_BINDINGS, SAMPLE_DOC};

// =============================================================================
// ONE FINDING PER PROBLEM
// =============================================================================

#[test]
fn test_sample_document_is_clean() {
    assert_clean(SAMPLE_DOC);
}

#[test]
fn test_broken_document_reports_each_line() {
    assert_eq!(
        codes_for(BROKEN_DOC),
        vec![
            codes::INVALID_POINT_GROUP,
            codes::UNKNOWN_SYSTEM,
            codes::UNKNOWN_AMORPHOUS_SUBTYPE,
            codes::UNKNOWN_AMORPHOUS_SHAPE,
            codes::UNKNOWN_ARRANGEMENT,
            codes::AGGREGATE_COUNT_LARGE,
            codes::UNKNOWN_ORIENTATION,
            codes::UNKNOWN_TWIN_LAW,
            codes::UNKNOWN_MODIFICATION,
            codes::UNDEFINED_REFERENCE,
        ]
    );
    let lines: Vec<u32> = diagnostics_for(BROKEN_DOC)
        .iter()
        .map(|d| d.range.start.line)
        .collect();
    assert_eq!(lines, (0..10).collect::<Vec<_>>());
}

#[test]
fn test_ranges_cover_the_offending_token() {
    let d = assert_single("amorphous[glassy]:{massive, lumpy}", codes::UNKNOWN_AMORPHOUS_SHAPE, Severity::Warning);
    assert_eq!(d.range, Range::on_line(0, 28, 33));

    let d = assert_single("cubic[m3m]:{111} ~ scattered[5]", codes::UNKNOWN_ARRANGEMENT, Severity::Error);
    assert_eq!(d.range, Range::on_line(0, 19, 28));

    let d = assert_single("cubic[6/mmm]:{111}", codes::INVALID_POINT_GROUP, Severity::Error);
    assert_eq!(d.range, Range::on_line(0, 6, 11));
    assert!(d.message.contains("hexagonal"));
}

#[test]
fn test_independent_checkers_on_one_line() {
    let codes = codes_for("cubic[m3m]:{111} ~ scattered[999] [sideways] | twin(martian)");
    assert_eq!(
        codes,
        vec![
            codes::UNKNOWN_ARRANGEMENT,
            codes::AGGREGATE_COUNT_LARGE,
            codes::UNKNOWN_ORIENTATION,
            codes::UNKNOWN_TWIN_LAW,
        ]
    );
}

#[test]
fn test_comments_are_not_checked() {
    assert_clean("# amorphous[nonsense]:{lumps} ~ scattered[9999]");
    assert_clean("cubic[m3m]:{111} # | squash(a)");
}

// =============================================================================
// VOCABULARY VALIDITY
// =============================================================================

#[rstest]
fn test_every_amorphous_subtype_is_valid(
    #[values("opalescent", "glassy", "waxy", "resinous", "cryptocrystalline")] subtype: &str,
) {
    assert_clean(&format!("amorphous[{subtype}]:{{massive}}"));
    assert_clean(&format!("amorphous[{}]:{{massive}}", subtype.to_uppercase()));
}

#[test]
fn test_every_table_term_is_accepted() {
    for shape in tables::AMORPHOUS_SHAPES {
        assert_clean(&format!("amorphous[glassy]:{{{shape}}}"));
    }
    for arrangement in tables::AGGREGATE_ARRANGEMENTS {
        for orientation in tables::AGGREGATE_ORIENTATIONS {
            assert_clean(&format!("cubic[m3m]:{{111}} ~ {arrangement}[5] [{orientation}]"));
        }
    }
    for (system, groups) in tables::POINT_GROUPS {
        for group in *groups {
            assert_clean(&format!("{system}[{group}]:{{100}}"));
        }
    }
    for law in tables::TWIN_LAWS {
        assert_clean(&format!("cubic[m3m]:{{111}} | twin({law})"));
    }
}

#[test]
fn test_arrangement_is_strict() {
    // near misses are still errors
    for keyword in ["Parallels", "rand", "radial_", "clusters"] {
        assert_single(
            &format!("cubic[m3m]:{{111}} ~ {keyword}[3]"),
            codes::UNKNOWN_ARRANGEMENT,
            Severity::Error,
        );
    }
    assert_clean("cubic[m3m]:{111} ~ PARALLEL[3]");
}

#[test]
fn test_point_groups_are_case_sensitive() {
    assert_single("cubic[M3M]:{111}", codes::INVALID_POINT_GROUP, Severity::Error);
}

// =============================================================================
// THRESHOLDS AND SETTINGS
// =============================================================================

#[rstest]
#[case(200, false)]
#[case(201, true)]
#[case(0, false)]
fn test_count_threshold(#[case] count: u64, #[case] reported: bool) {
    let source = format!("cubic[m3m]:{{111}} ~ random[{count}]");
    assert_eq!(
        codes_for(&source).contains(&codes::AGGREGATE_COUNT_LARGE.to_string()),
        reported
    );
}

#[rstest]
#[case("99999999999999999999999")]
#[case("18446744073709551616")]
#[case("0500")]
fn test_oversized_counts_are_reported(#[case] count: &str) {
    let source = format!("cubic[m3m]:{{111}} ~ random[{count}]");
    assert_single(&source, codes::AGGREGATE_COUNT_LARGE, Severity::Warning);
}

#[rstest]
#[case("many")]
#[case("+500")]
#[case("5e3")]
fn test_non_numeric_count_is_ignored(#[case] count: &str) {
    assert_clean(&format!("cubic[m3m]:{{111}} ~ random[{count}]"));
}

#[test]
fn test_duplicate_definitions() {
    let d = assert_single(DUPLICATE_BINDINGS, codes::DUPLICATE_DEFINITION, Severity::Info);
    assert_eq!(d.range, Range::on_line(1, 1, 2));
    assert!(d.message.contains("line 1"));

    let quiet = AnalysisConfig {
        report_duplicate_definitions: false,
        ..AnalysisConfig::default()
    };
    assert!(validate(DUPLICATE_BINDINGS, Vocabulary::shared(), &quiet).is_empty());
}

#[test]
fn test_reference_to_later_binding_is_defined() {
    assert_clean("cubic[m3m]:$late\n@late = {111}\n");
}

// =============================================================================
// DETERMINISM AND ORDER
// =============================================================================

#[test]
fn test_validation_is_deterministic() {
    let first = diagnostics_for(BROKEN_DOC);
    for _ in 0..5 {
        assert_eq!(diagnostics_for(BROKEN_DOC), first);
    }
}

#[test]
fn test_findings_sorted_by_position() {
    let source = format!("{BROKEN_DOC}{BROKEN_DOC}");
    let positions: Vec<_> = diagnostics_for(&source)
        .iter()
        .map(|d| (d.range.start.line, d.range.start.character))
        .collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
}

#[test]
fn test_empty_vocabulary_flags_everything_structural() {
    let diagnostics = validate(
        "cubic[m3m]:{111}",
        &Vocabulary::empty(),
        &AnalysisConfig::default(),
    );
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(&*diagnostics[0].code, codes::UNKNOWN_SYSTEM);
}
