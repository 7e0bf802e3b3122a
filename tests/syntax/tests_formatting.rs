//! Document formatting tests.

use cdl::ide::extract_symbols;
use cdl::syntax::{FormatOptions, format_document, formatting_edits};
use cdl::vocab::Vocabulary;

use crate::helpers::diagnostic_helpers::codes_for;
use crate::helpers::source_fixtures::{BROKEN_DOC, SAMPLE_DOC};

const MESSY: &str = "\
# Quartz and friends
@prism={10-10}@1.0
@rhomb  =  {10-11}@0.8
Trigonal [-3m] : $prism+$rhomb|twin( japan )
cubic[m3m]:{111}@1.0+{100}@0.3>{110}@0.5
cubic[m3m]:{111}~parallel[20]   [aligned]
AMORPHOUS [opalescent]:{botryoidal,massive}
";

#[test]
fn test_messy_document_formats_to_sample() {
    let formatted = format_document(MESSY, &FormatOptions::default());
    assert_eq!(formatted, SAMPLE_DOC);
}

#[test]
fn test_sample_document_needs_no_edits() {
    assert!(formatting_edits(SAMPLE_DOC, &FormatOptions::default()).is_empty());
}

#[test]
fn test_edits_touch_only_changed_lines() {
    let edits = formatting_edits(MESSY, &FormatOptions::default());
    let lines: Vec<u32> = edits.iter().map(|edit| edit.range.start.line).collect();
    assert_eq!(lines, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_formatting_preserves_meaning() {
    let options = FormatOptions::default();
    for source in [MESSY, BROKEN_DOC] {
        let formatted = format_document(source, &options);
        assert_eq!(codes_for(&formatted), codes_for(source));

        let before: Vec<_> = extract_symbols(source, Vocabulary::shared())
            .into_iter()
            .map(|node| node.name.to_lowercase())
            .collect();
        let after: Vec<_> = extract_symbols(&formatted, Vocabulary::shared())
            .into_iter()
            .map(|node| node.name.to_lowercase())
            .collect();
        assert_eq!(before, after);
    }
}

#[test]
fn test_formatting_is_idempotent() {
    let options = FormatOptions::default();
    for source in [MESSY, BROKEN_DOC, SAMPLE_DOC] {
        let once = format_document(source, &options);
        assert_eq!(format_document(&once, &options), once);
    }
}
