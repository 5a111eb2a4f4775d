use super::FieldAccumulator;
use crate::extractors::base::{NodeKind, Span, SyntaxNode};
use serde::Serialize;

/// Outcome of offering a node to an open type declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclStep {
    /// The declaration keeps ownership
    Continue,
    /// A new field was opened; it owns the following nodes until it releases
    Delegate,
    /// The node lies past the declaration; the declaration is complete
    Complete,
}

/// One type declaration: its name token and its fields in source order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeDeclAccumulator {
    decl: SyntaxNode,
    name: Option<SyntaxNode>,
    fields: Vec<FieldAccumulator>,
}

impl TypeDeclAccumulator {
    pub fn new(decl: SyntaxNode) -> Self {
        Self {
            decl,
            name: None,
            fields: Vec::new(),
        }
    }

    /// Declaration name, `None` when no identifier followed the declaration node
    pub fn name(&self) -> Option<&str> {
        self.name.as_ref().map(SyntaxNode::text)
    }

    pub fn fields(&self) -> &[FieldAccumulator] {
        &self.fields
    }

    pub fn span(&self) -> Span {
        self.decl.span
    }

    pub fn line(&self) -> usize {
        self.decl.line
    }

    /// Grammar kind of the originating declaration node
    pub fn label(&self) -> &'static str {
        self.decl.grammar_kind
    }

    /// Half-open: a node starting at `span.end` is outside
    pub fn contains(&self, node: &SyntaxNode) -> bool {
        node.position() < self.decl.span.end
    }

    pub fn consume(&mut self, node: SyntaxNode) -> DeclStep {
        if self.name.is_none() && node.is(NodeKind::Identifier) {
            self.name = Some(node);
            return DeclStep::Continue;
        }
        if !self.contains(&node) {
            return DeclStep::Complete;
        }
        // Header tokens before the name never open fields
        if self.name.is_some() && node.is(NodeKind::FieldDecl) {
            self.fields.push(FieldAccumulator::new(node));
            return DeclStep::Delegate;
        }
        DeclStep::Continue
    }

    /// The field opened by the most recent `DeclStep::Delegate`
    pub(super) fn active_field(&mut self) -> Option<&mut FieldAccumulator> {
        self.fields.last_mut()
    }
}
