//! # cdl-base
//!
//! Editor intelligence for the Crystal Description Language (CDL): cursor
//! context classification, completion, go-to-definition, hover, document
//! outline, diagnostics and formatting.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide          → IDE features (completion, hover, goto-def, outline)
//!   ↓
//! diagnostics  → Vocabulary validation of live text
//!   ↓
//! syntax       → Line scanner, bindings, formatter
//!   ↓
//! vocab        → Fixed term tables and their source locations
//!   ↓
//! core         → Word and name boundary helpers
//!   ↓
//! base         → Primitives (Position, Range, Location, UTF-16 columns)
//! ```

// ============================================================================
// MODULES (dependency order: base → core → vocab → syntax → diagnostics → ide)
// ============================================================================

/// Foundation types: Position, Range, Location, column conversion
pub mod base;

/// Word boundaries and identifier classes
pub mod core;

/// Domain vocabulary: systems, point groups, forms, twin laws, ...
pub mod vocab;

/// Syntax: line scanner, bindings, formatter
pub mod syntax;

/// Diagnostics: per-line and document-level checks
pub mod diagnostics;

/// IDE features: completion, hover, goto-definition, document symbols
pub mod ide;

/// Analysis settings
pub mod config;

// Re-export foundation types
pub use base::{Location, Position, Range};
pub use config::AnalysisConfig;
pub use vocab::{Category, Vocabulary};
