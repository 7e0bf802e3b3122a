//! Analysis settings.

/// Tunables for diagnostics and go-to-definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Aggregate counts above this produce `aggregate-count-large`.
    pub aggregate_count_limit: u64,
    /// Width (UTF-16 units) of the range returned for a vocabulary location.
    pub location_span: u32,
    /// Report second and later bindings of the same name.
    pub report_duplicate_definitions: bool,
    /// Report `$name` references with no binding in the document.
    pub report_undefined_references: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            aggregate_count_limit: 200,
            location_span: 20,
            report_duplicate_definitions: true,
            report_undefined_references: true,
        }
    }
}

impl AnalysisConfig {
    pub fn with_aggregate_count_limit(mut self, limit: u64) -> Self {
        self.aggregate_count_limit = limit;
        self
    }

    /// Only the checks with a fixed vocabulary: no document-level findings.
    pub fn line_checks_only(mut self) -> Self {
        self.report_duplicate_definitions = false;
        self.report_undefined_references = false;
        self
    }
}
