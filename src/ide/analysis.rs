//! AnalysisHost and Analysis: unified entry point for IDE features.
//!
//! `Analysis` is a cheap, stateless view over a [`Vocabulary`] and an
//! [`AnalysisConfig`]. Every query takes the line (and, where references
//! matter, the whole document) as input. `AnalysisHost` adds a store of open
//! documents keyed by URI for callers that want the host to hold text.
//!
//! ## Usage
//!
//! ```
//! use cdl::ide::AnalysisHost;
//!
//! let mut host = AnalysisHost::default();
//! host.set_document("file:///gems.cdl", "@prism = {10-10}@1.0\ncubic[m3m]:$prism\n");
//!
//! let analysis = host.analysis();
//! let location = analysis.goto_at("file:///gems.cdl", 1, 13).unwrap();
//! assert_eq!(location.range.start.line, 0);
//! ```

use rustc_hash::FxHashMap;

use crate::base::Location;
use crate::config::AnalysisConfig;
use crate::diagnostics::{self, Diagnostic};
use crate::syntax::formatter::{self, FormatOptions, TextEdit};
use crate::vocab::Vocabulary;

use super::{
    Binding, Classification, CompletionContext, CompletionItem, HoverResult, SymbolNode,
};

/// Owns open documents plus the vocabulary and settings used to analyze them.
///
/// Apply changes via `set_document()` and `remove_document()`, then query
/// through `analysis()`.
pub struct AnalysisHost {
    vocab: Vocabulary,
    config: AnalysisConfig,
    documents: FxHashMap<String, String>,
}

impl Default for AnalysisHost {
    fn default() -> Self {
        Self::new(Vocabulary::builtin(), AnalysisConfig::default())
    }
}

impl AnalysisHost {
    pub fn new(vocab: Vocabulary, config: AnalysisConfig) -> Self {
        Self {
            vocab,
            config,
            documents: FxHashMap::default(),
        }
    }

    /// Set (or replace) the text of a document.
    pub fn set_document(&mut self, uri: impl Into<String>, text: impl Into<String>) {
        let uri = uri.into();
        tracing::trace!(%uri, "document updated");
        self.documents.insert(uri, text.into());
    }

    /// Remove a document from storage.
    pub fn remove_document(&mut self, uri: &str) {
        self.documents.remove(uri);
    }

    pub fn has_document(&self, uri: &str) -> bool {
        self.documents.contains_key(uri)
    }

    /// Get the text of an open document.
    pub fn document(&self, uri: &str) -> Option<&str> {
        self.documents.get(uri).map(String::as_str)
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Replace the analysis settings.
    pub fn set_config(&mut self, config: AnalysisConfig) {
        self.config = config;
    }

    /// Get a snapshot for querying.
    pub fn analysis(&self) -> HostAnalysis<'_> {
        HostAnalysis {
            analysis: Analysis::new(&self.vocab, self.config.clone()),
            documents: &self.documents,
        }
    }
}

/// Stateless query surface over a vocabulary and settings.
#[derive(Clone)]
pub struct Analysis<'a> {
    vocab: &'a Vocabulary,
    config: AnalysisConfig,
}

impl<'a> Analysis<'a> {
    pub fn new(vocab: &'a Vocabulary, config: AnalysisConfig) -> Self {
        Self { vocab, config }
    }

    /// Analysis over the process-wide builtin vocabulary with default settings.
    pub fn builtin() -> Analysis<'static> {
        Analysis::new(Vocabulary::shared(), AnalysisConfig::default())
    }

    pub fn vocabulary(&self) -> &'a Vocabulary {
        self.vocab
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    // ==================== Line-based features ====================

    /// What kind of token is expected at the cursor, and the typed prefix.
    pub fn classify(&self, line: &str, column: u32) -> (CompletionContext, String) {
        super::classify(line, column, self.vocab)
    }

    /// [`Analysis::classify`] with the owning word and group facts.
    pub fn classify_detailed(&self, line: &str, column: u32) -> Classification {
        super::classify_detailed(line, column, self.vocab)
    }

    /// Get completions at a position.
    pub fn completions(
        &self,
        line: &str,
        column: u32,
        document: Option<&str>,
    ) -> Vec<CompletionItem> {
        super::completions(line, column, document, self.vocab)
    }

    /// Name of the `$reference` under the cursor.
    pub fn reference_at(&self, line: &str, column: u32) -> Option<smol_str::SmolStr> {
        super::is_on_reference(line, column)
    }

    /// Go to definition at a position.
    pub fn get_definition(
        &self,
        line: &str,
        column: u32,
        line_num: u32,
        uri: &str,
        document: Option<&str>,
    ) -> Option<Location> {
        super::get_definition(line, column, line_num, uri, document, self.vocab, &self.config)
    }

    /// Go to definition as a list (empty or one location).
    pub fn get_definitions(
        &self,
        line: &str,
        column: u32,
        line_num: u32,
        uri: &str,
        document: Option<&str>,
    ) -> Vec<Location> {
        super::get_definitions(line, column, line_num, uri, document, self.vocab, &self.config)
    }

    /// Get hover information at a position.
    pub fn hover(
        &self,
        line: &str,
        column: u32,
        line_num: u32,
        document: Option<&str>,
    ) -> Option<HoverResult> {
        super::hover(line, column, line_num, document, self.vocab)
    }

    // ==================== Document-based features ====================

    /// All `@name = expr` bindings in document order.
    pub fn definitions(&self, document: &str) -> Vec<Binding> {
        super::find_document_definitions(document)
    }

    /// Get the outline of a document.
    pub fn document_symbols(&self, document: &str) -> Vec<SymbolNode> {
        super::extract_symbols(document, self.vocab)
    }

    /// Validate a document.
    pub fn diagnostics(&self, document: &str) -> Vec<Diagnostic> {
        diagnostics::validate(document, self.vocab, &self.config)
    }

    /// Line edits that format a document.
    pub fn formatting(&self, document: &str, options: &FormatOptions) -> Vec<TextEdit> {
        formatter::formatting_edits(document, options)
    }
}

/// [`Analysis`] plus the documents held by an [`AnalysisHost`], queried by URI.
///
/// Queries on an unknown URI or a line past the end return nothing.
pub struct HostAnalysis<'a> {
    analysis: Analysis<'a>,
    documents: &'a FxHashMap<String, String>,
}

impl<'a> HostAnalysis<'a> {
    /// The stateless analysis underneath.
    pub fn analysis(&self) -> &Analysis<'a> {
        &self.analysis
    }

    fn line(&self, uri: &str, line_num: u32) -> Option<(&'a str, &'a str)> {
        let document = self.documents.get(uri)?.as_str();
        let line = document.split('\n').nth(line_num as usize)?;
        Some((document, line.strip_suffix('\r').unwrap_or(line)))
    }

    pub fn completions_at(&self, uri: &str, line_num: u32, column: u32) -> Vec<CompletionItem> {
        self.line(uri, line_num)
            .map(|(document, line)| self.analysis.completions(line, column, Some(document)))
            .unwrap_or_default()
    }

    pub fn goto_at(&self, uri: &str, line_num: u32, column: u32) -> Option<Location> {
        let (document, line) = self.line(uri, line_num)?;
        self.analysis
            .get_definition(line, column, line_num, uri, Some(document))
    }

    pub fn hover_at(&self, uri: &str, line_num: u32, column: u32) -> Option<HoverResult> {
        let (document, line) = self.line(uri, line_num)?;
        self.analysis.hover(line, column, line_num, Some(document))
    }

    pub fn document_symbols(&self, uri: &str) -> Vec<SymbolNode> {
        self.documents
            .get(uri)
            .map(|document| self.analysis.document_symbols(document))
            .unwrap_or_default()
    }

    pub fn diagnostics(&self, uri: &str) -> Vec<Diagnostic> {
        self.documents
            .get(uri)
            .map(|document| self.analysis.diagnostics(document))
            .unwrap_or_default()
    }

    pub fn formatting(&self, uri: &str, options: &FormatOptions) -> Vec<TextEdit> {
        self.documents
            .get(uri)
            .map(|document| self.analysis.formatting(document, options))
            .unwrap_or_default()
    }
}
