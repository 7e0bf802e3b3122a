//! Completion suggestions implementation.

use std::sync::Arc;

use crate::ide::bindings::find_document_definitions;
use crate::ide::context::{Classification, CompletionContext, classify_detailed};
use crate::vocab::{Category, Vocabulary};

/// Kind of completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionKind {
    /// Crystal systems, `amorphous`, modifications, arrangements
    Keyword,
    /// Members of a closed vocabulary set
    EnumMember,
    /// Named forms
    Form,
    /// Miller indices and scales
    Value,
    /// Document bindings
    Reference,
    Snippet,
}

impl CompletionKind {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::Keyword => 14,    // Keyword
            CompletionKind::EnumMember => 20, // EnumMember
            CompletionKind::Form => 7,        // Class
            CompletionKind::Value => 12,      // Value
            CompletionKind::Reference => 6,   // Variable
            CompletionKind::Snippet => 15,    // Snippet
        }
    }
}

/// A completion suggestion.
#[derive(Clone, Debug)]
pub struct CompletionItem {
    /// The text to insert.
    pub label: Arc<str>,
    /// The kind of completion.
    pub kind: CompletionKind,
    /// Detail text (shown after label).
    pub detail: Option<Arc<str>>,
    /// Documentation (shown in popup).
    pub documentation: Option<Arc<str>>,
    /// Text to insert (if different from label).
    pub insert_text: Option<Arc<str>>,
    /// Sort priority (lower = higher priority).
    pub sort_priority: u32,
}

impl CompletionItem {
    /// Create a new completion item.
    pub fn new(label: impl Into<Arc<str>>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            documentation: None,
            insert_text: None,
            sort_priority: 100,
        }
    }

    /// Set the detail text.
    pub fn with_detail(mut self, detail: impl Into<Arc<str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Set the documentation.
    pub fn with_documentation(mut self, doc: impl Into<Arc<str>>) -> Self {
        self.documentation = Some(doc.into());
        self
    }

    /// Set the documentation if there is any.
    fn with_doc(mut self, doc: Option<&Arc<str>>) -> Self {
        self.documentation = doc.cloned();
        self
    }

    /// Set the insert text.
    pub fn with_insert_text(mut self, text: impl Into<Arc<str>>) -> Self {
        self.insert_text = Some(text.into());
        self
    }

    /// Set the sort priority.
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.sort_priority = priority;
        self
    }
}

/// Axis arguments accepted by the geometric modifications.
const AXES: [&str; 3] = ["a", "b", "c"];

/// Get completion suggestions at a position.
///
/// # Arguments
/// * `line` - Text of the cursor line
/// * `column` - Cursor column (UTF-16, 0-indexed)
/// * `document` - Full document text, needed for `$name` suggestions
/// * `vocab` - The vocabulary to draw terms from
///
/// # Returns
/// Suggestions whose label starts with the typed prefix (case-insensitive),
/// in vocabulary table order.
pub fn completions(
    line: &str,
    column: u32,
    document: Option<&str>,
    vocab: &Vocabulary,
) -> Vec<CompletionItem> {
    let classification = classify_detailed(line, column, vocab);
    let mut items = candidates(&classification, document, vocab);

    let prefix = classification.prefix.to_lowercase();
    items.retain(|item| item.label.to_lowercase().starts_with(&prefix));

    for (i, item) in items.iter_mut().enumerate() {
        if item.sort_priority == 100 {
            item.sort_priority = 100 + i as u32;
        }
    }
    items.sort_by_key(|item| item.sort_priority);
    items.dedup_by(|a, b| a.label == b.label);

    tracing::debug!(
        context = ?classification.context,
        count = items.len(),
        "completions"
    );
    items
}

fn candidates(
    classification: &Classification,
    document: Option<&str>,
    vocab: &Vocabulary,
) -> Vec<CompletionItem> {
    let anchor = classification.anchor.as_deref();

    match classification.context {
        CompletionContext::SystemStart => {
            let mut items: Vec<_> = vocab
                .terms(Category::System)
                .map(|system| {
                    let item = CompletionItem::new(system, CompletionKind::Keyword)
                        .with_doc(vocab.doc(Category::System, system));
                    match vocab.default_point_group(system) {
                        Some(group) => item.with_detail(format!("crystal system, default {group}")),
                        None => item.with_detail("crystal system"),
                    }
                })
                .collect();
            items.push(
                CompletionItem::new("amorphous", CompletionKind::Keyword)
                    .with_detail("non-crystalline material")
                    .with_insert_text("amorphous["),
            );
            items
        }
        CompletionContext::DefinitionStart => vec![
            CompletionItem::new("name = expression", CompletionKind::Snippet)
                .with_detail("named definition")
                .with_insert_text("name = "),
        ],
        CompletionContext::PointGroup => {
            let groups: Vec<&str> = match anchor {
                Some(system) => vocab
                    .point_groups_for(system)
                    .iter()
                    .map(|g| g.as_str())
                    .collect(),
                None => vocab.terms(Category::PointGroup).collect(),
            };
            let default = anchor.and_then(|system| vocab.default_point_group(system));
            groups
                .into_iter()
                .map(|group| {
                    let item = CompletionItem::new(group, CompletionKind::EnumMember)
                        .with_doc(vocab.doc(Category::PointGroup, group));
                    if Some(group) == default {
                        item.with_detail("default point group").with_priority(10)
                    } else {
                        item.with_detail("point group")
                    }
                })
                .collect()
        }
        CompletionContext::FormOrMiller => form_candidates(vocab, anchor, classification.in_group),
        CompletionContext::Scale => vocab
            .scales()
            .iter()
            .map(|scale| CompletionItem::new(scale.as_str(), CompletionKind::Value).with_detail("scale"))
            .collect(),
        CompletionContext::ArrangementType => terms(vocab, Category::Arrangement, CompletionKind::Keyword),
        CompletionContext::AggregateOrientation => {
            terms(vocab, Category::Orientation, CompletionKind::EnumMember)
        }
        CompletionContext::AmorphousSubtype => {
            terms(vocab, Category::AmorphousSubtype, CompletionKind::EnumMember)
        }
        CompletionContext::AmorphousShape => {
            terms(vocab, Category::AmorphousShape, CompletionKind::EnumMember)
        }
        CompletionContext::Reference => {
            let Some(document) = document else {
                return Vec::new();
            };
            find_document_definitions(document)
                .into_iter()
                .map(|binding| {
                    CompletionItem::new(binding.name.as_str(), CompletionKind::Reference)
                        .with_detail(format!("@{} (line {})", binding.name, binding.line + 1))
                        .with_documentation(format!("```cdl\n{}\n```", binding.expression))
                })
                .collect()
        }
        CompletionContext::ModificationArg => match anchor {
            Some("twin") => terms(vocab, Category::TwinLaw, CompletionKind::EnumMember),
            Some("truncate" | "bevel") => form_candidates(vocab, None, false),
            _ => AXES
                .iter()
                .map(|axis| CompletionItem::new(*axis, CompletionKind::Value).with_detail("axis"))
                .collect(),
        },
        CompletionContext::FeatureValue => {
            if anchor == Some("phenomenon") {
                terms(vocab, Category::Phenomenon, CompletionKind::EnumMember)
            } else {
                terms(vocab, Category::Feature, CompletionKind::EnumMember)
            }
        }
        CompletionContext::Modifier => {
            let mut items = terms(vocab, Category::Modification, CompletionKind::Keyword);
            items.push(
                CompletionItem::new("phenomenon", CompletionKind::Keyword)
                    .with_detail("optical phenomenon")
                    .with_insert_text("phenomenon["),
            );
            items
        }
        CompletionContext::None => Vec::new(),
    }
}

/// Every term of a category with its documentation.
fn terms(vocab: &Vocabulary, category: Category, kind: CompletionKind) -> Vec<CompletionItem> {
    vocab
        .terms(category)
        .map(|name| {
            CompletionItem::new(name, kind)
                .with_detail(category.display())
                .with_doc(vocab.doc(category, name))
        })
        .collect()
}

/// Named forms and Miller indices. Inside `{...}` only the bare indices are
/// offered.
fn form_candidates(vocab: &Vocabulary, system: Option<&str>, in_group: bool) -> Vec<CompletionItem> {
    let indices: Vec<&str> = match system {
        Some(system) if !vocab.miller_indices_for(system).is_empty() => vocab
            .miller_indices_for(system)
            .iter()
            .map(|m| m.as_str())
            .collect(),
        _ => vocab.all_miller_indices(),
    };

    let mut items = Vec::new();
    if !in_group {
        items.extend(vocab.terms(Category::Form).map(|form| {
            let item = CompletionItem::new(form, CompletionKind::Form)
                .with_doc(vocab.doc(Category::Form, form));
            match vocab.form_indices(form) {
                Some([h, k, l]) => item.with_detail(format!("{{{h}{k}{l}}}")),
                None => item.with_detail("named form"),
            }
        }));
    }
    items.extend(indices.into_iter().map(|index| {
        let label = if in_group {
            index.trim_start_matches('{').trim_end_matches('}')
        } else {
            index
        };
        CompletionItem::new(label, CompletionKind::Value).with_detail("Miller index")
    }));
    items
}
