//! Diagnostic assertion helpers.

use cdl::config::AnalysisConfig;
use cdl::diagnostics::{Diagnostic, Severity, validate};
use cdl::vocab::Vocabulary;

/// All diagnostics for a source with the builtin vocabulary and default settings.
pub fn diagnostics_for(source: &str) -> Vec<Diagnostic> {
    validate(source, Vocabulary::shared(), &AnalysisConfig::default())
}

/// Codes of all diagnostics, in reported order.
pub fn codes_for(source: &str) -> Vec<String> {
    diagnostics_for(source)
        .iter()
        .map(|d| d.code.to_string())
        .collect()
}

/// Assert a source produces no diagnostics at all.
pub fn assert_clean(source: &str) {
    let diagnostics = diagnostics_for(source);
    assert!(
        diagnostics.is_empty(),
        "Expected no diagnostics, got {}:\n{}",
        diagnostics.len(),
        describe(&diagnostics)
    );
}

/// Assert a source produces exactly one diagnostic, with this code and severity.
pub fn assert_single(source: &str, code: &str, severity: Severity) -> Diagnostic {
    let diagnostics = diagnostics_for(source);
    assert_eq!(
        diagnostics.len(),
        1,
        "Expected one diagnostic for {source:?}, got:\n{}",
        describe(&diagnostics)
    );
    let diagnostic = diagnostics.into_iter().next().unwrap();
    assert_eq!(&*diagnostic.code, code);
    assert_eq!(diagnostic.severity, severity);
    diagnostic
}

fn describe(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| {
            format!(
                "  Line {}:{} [{}] {}",
                d.range.start.line + 1,
                d.range.start.character,
                d.code,
                d.message
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
