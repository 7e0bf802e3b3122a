//! Diagnostics: vocabulary and structure validation.
//!
//! Every line runs through every checker in [`checks::LINE_CHECKERS`]; a
//! checker only appends findings and never stops the others, so one line
//! can surface several independent problems. Document-level checks (undefined
//! references, duplicate bindings) run after the line pass. The result is
//! stably sorted by position.

pub mod checks;

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::base::{Range, byte_to_col, lines};
use crate::config::AnalysisConfig;
use crate::ide::bindings::find_document_definitions;
use crate::syntax::binding::references;
use crate::syntax::scanner::scan;
use crate::vocab::Vocabulary;

pub use checks::{LineChecker, LineInput, LINE_CHECKERS};

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Convert to LSP severity number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            Severity::Error => 1,
            Severity::Warning => 2,
            Severity::Info => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

/// A diagnostic finding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub range: Range,
    pub severity: Severity,
    /// Stable kebab-case code, see [`codes`].
    pub code: Arc<str>,
    pub message: Arc<str>,
}

impl Diagnostic {
    fn new(severity: Severity, range: Range, code: &str, message: impl Into<Arc<str>>) -> Self {
        Self {
            range,
            severity,
            code: Arc::from(code),
            message: message.into(),
        }
    }

    /// Create a new error diagnostic.
    pub fn error(range: Range, code: &str, message: impl Into<Arc<str>>) -> Self {
        Self::new(Severity::Error, range, code, message)
    }

    /// Create a new warning diagnostic.
    pub fn warning(range: Range, code: &str, message: impl Into<Arc<str>>) -> Self {
        Self::new(Severity::Warning, range, code, message)
    }

    /// Create a new informational diagnostic.
    pub fn info(range: Range, code: &str, message: impl Into<Arc<str>>) -> Self {
        Self::new(Severity::Info, range, code, message)
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Diagnostic codes.
pub mod codes {
    pub const UNKNOWN_AMORPHOUS_SUBTYPE: &str = "unknown-amorphous-subtype";
    pub const UNKNOWN_AMORPHOUS_SHAPE: &str = "unknown-amorphous-shape";
    /// Breaks structural parsing downstream, so reported as an error.
    pub const UNKNOWN_ARRANGEMENT: &str = "unknown-arrangement";
    pub const AGGREGATE_COUNT_LARGE: &str = "aggregate-count-large";
    pub const INVALID_POINT_GROUP: &str = "invalid-point-group";
    pub const UNKNOWN_SYSTEM: &str = "unknown-system";
    pub const UNKNOWN_ORIENTATION: &str = "unknown-orientation";
    pub const UNKNOWN_TWIN_LAW: &str = "unknown-twin-law";
    pub const UNKNOWN_MODIFICATION: &str = "unknown-modification";
    pub const UNDEFINED_REFERENCE: &str = "undefined-reference";
    pub const DUPLICATE_DEFINITION: &str = "duplicate-definition";
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects findings during validation.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get all diagnostics, in insertion order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Get the number of errors.
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    /// Get the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    /// Consume the collector, stably sorted by (line, column).
    pub fn into_sorted(mut self) -> Vec<Diagnostic> {
        self.diagnostics
            .sort_by_key(|d| (d.range.start.line, d.range.start.character));
        self.diagnostics
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Validate a document.
///
/// Deterministic: identical text, vocabulary and config always give the
/// same ordered findings.
pub fn validate(text: &str, vocab: &Vocabulary, config: &AnalysisConfig) -> Vec<Diagnostic> {
    let mut collector = DiagnosticCollector::new();

    for (line_num, line) in lines(text) {
        let input = LineInput::new(line, line_num);
        for (_, checker) in LINE_CHECKERS {
            checker(&input, vocab, config, &mut collector);
        }
    }

    if config.report_undefined_references {
        check_undefined_references(text, &mut collector);
    }
    if config.report_duplicate_definitions {
        check_duplicate_definitions(text, &mut collector);
    }

    tracing::debug!(
        errors = collector.error_count(),
        warnings = collector.warning_count(),
        total = collector.diagnostics().len(),
        "validated document"
    );
    collector.into_sorted()
}

/// `$name` with no `@name =` anywhere in the document.
pub fn check_undefined_references(text: &str, out: &mut DiagnosticCollector) {
    let bindings = find_document_definitions(text);

    for (line_num, line) in lines(text) {
        let code = scan(line).code();
        for reference in references(code) {
            if bindings.iter().any(|b| b.name == reference.name) {
                continue;
            }
            out.add(Diagnostic::warning(
                Range::on_line(
                    line_num,
                    byte_to_col(line, reference.start),
                    byte_to_col(line, reference.end),
                ),
                codes::UNDEFINED_REFERENCE,
                format!("Undefined reference '${}'", reference.name),
            ));
        }
    }
}

/// Second and later bindings of a name. References always resolve to the
/// first one, which this finding points out.
pub fn check_duplicate_definitions(text: &str, out: &mut DiagnosticCollector) {
    let bindings = find_document_definitions(text);
    let mut first_lines: FxHashMap<&str, u32> = FxHashMap::default();

    for binding in &bindings {
        match first_lines.get(binding.name.as_str()) {
            Some(first) => out.add(Diagnostic::info(
                binding.name_range,
                codes::DUPLICATE_DEFINITION,
                format!(
                    "'{}' is already defined on line {}; references resolve to the first definition",
                    binding.name,
                    first + 1
                ),
            )),
            None => {
                first_lines.insert(binding.name.as_str(), binding.line);
            }
        }
    }
}
