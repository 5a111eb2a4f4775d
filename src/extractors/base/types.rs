// Base Types for structscan
//
// The node snapshot routed through the extraction pipeline, plus the
// extraction configuration shared by the driver and the manager.

use serde::Serialize;
use std::fmt;

/// Configuration for a single extraction run
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Capacity of the declaration handoff channel.
    /// `Some(0)` is a rendezvous handoff, `None` is unbounded.
    pub channel_capacity: Option<usize>,
    /// Skip anonymous (punctuation/keyword) tree-sitter nodes during the walk
    pub named_only: bool,
    /// Extract from trees that contain ERROR/MISSING nodes instead of rejecting them
    pub allow_syntax_errors: bool,
    /// Process batch units on the rayon thread pool
    pub parallel: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            channel_capacity: Some(0),
            named_only: true,
            allow_syntax_errors: false,
            parallel: false,
        }
    }
}

/// Half-open byte range `[start, end)` of a node in its source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// What the pipeline cares about in a node; everything else is `Other`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Opens a type declaration scope (Go `type_spec`, Rust `struct_item`, ...)
    TypeDecl,
    /// Opens a field scope inside a type declaration
    FieldDecl,
    /// A name token
    Identifier,
    Other,
}

/// Owned snapshot of one visited syntax-tree node
///
/// The pipeline never sees children; it only receives nodes in pre-order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    /// Grammar-level node kind as reported by tree-sitter
    pub grammar_kind: &'static str,
    pub span: Span,
    /// Start line number (1-based)
    pub line: usize,
    /// Source text, only kept for leaf nodes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl SyntaxNode {
    pub fn new(kind: NodeKind, grammar_kind: &'static str, span: Span, line: usize) -> Self {
        Self {
            kind,
            grammar_kind,
            span,
            line,
            text: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Position used for all scope-boundary comparisons
    pub fn position(&self) -> usize {
        self.span.start
    }

    pub fn is(&self, kind: NodeKind) -> bool {
        self.kind == kind
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.grammar_kind, self.text())
    }
}
