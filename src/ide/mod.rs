//! IDE features: high-level APIs for editor handlers.
//!
//! Each function corresponds to an editor request and works on live,
//! possibly malformed text: a single line plus the cursor column, and the
//! whole document when `$references` matter. Nothing is parsed into a tree;
//! every feature runs on the line scanner in [`crate::syntax::scanner`].
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take text in, return data out
//! 2. **No LSP types**: Uses our own types, converted at the LSP boundary
//!    (`to_lsp` gives the wire numbers)
//! 3. **No errors**: absence is `None` or an empty `Vec`
//!
//! ## Usage
//!
//! ```
//! use cdl::ide::{Analysis, CompletionContext};
//!
//! let analysis = Analysis::builtin();
//! let (context, prefix) = analysis.classify("cubic[m", 7);
//! assert_eq!(context, CompletionContext::PointGroup);
//! assert_eq!(prefix, "m");
//! ```

mod analysis;
pub(crate) mod bindings;
mod completion;
pub(crate) mod context;
mod goto;
mod hover;
mod symbols;

pub use analysis::{Analysis, AnalysisHost, HostAnalysis};
pub use bindings::{Binding, find_binding, find_document_definitions, is_on_reference};
pub use completion::{CompletionItem, CompletionKind, completions};
pub use context::{Classification, CompletionContext, classify, classify_detailed};
pub use goto::{get_definition, get_definitions};
pub use hover::{HoverResult, hover};
pub use symbols::{SymbolKind, SymbolNode, extract_children, extract_symbols};
