use super::{Consumed, Consumer};
use crate::extractors::base::{NodeKind, Span, SyntaxNode};
use serde::Serialize;

/// One field of a type declaration: its name token and every token after
/// it that still falls inside the field's span.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldAccumulator {
    field: SyntaxNode,
    name: Option<SyntaxNode>,
    definition: Vec<SyntaxNode>,
}

impl FieldAccumulator {
    pub fn new(field: SyntaxNode) -> Self {
        Self {
            field,
            name: None,
            definition: Vec::new(),
        }
    }

    /// Field name, `None` when no identifier was seen inside the field
    pub fn name(&self) -> Option<&str> {
        self.name.as_ref().map(SyntaxNode::text)
    }

    /// Tokens after the name, in visitation order
    pub fn definition(&self) -> &[SyntaxNode] {
        &self.definition
    }

    pub fn span(&self) -> Span {
        self.field.span
    }

    /// Grammar kind of the originating field node
    pub fn label(&self) -> &'static str {
        self.field.grammar_kind
    }

    pub fn line(&self) -> usize {
        self.field.line
    }
}

impl Consumer for FieldAccumulator {
    fn consume(&mut self, node: SyntaxNode) -> Consumed {
        // A sibling field starts; the parent decides what to do with it
        if node.is(NodeKind::FieldDecl) {
            return Consumed::Release(node);
        }
        if node.position() > self.field.span.end {
            return Consumed::Release(node);
        }

        if self.name.is_some() {
            self.definition.push(node);
        } else if node.is(NodeKind::Identifier) {
            self.name = Some(node);
        }
        Consumed::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(kind: NodeKind, grammar_kind: &'static str, start: usize, end: usize) -> SyntaxNode {
        SyntaxNode::new(kind, grammar_kind, Span::new(start, end), 1)
    }

    fn ident(text: &str, start: usize) -> SyntaxNode {
        node(NodeKind::Identifier, "field_identifier", start, start + text.len()).with_text(text)
    }

    #[test]
    fn test_first_identifier_becomes_name() {
        let mut field = FieldAccumulator::new(node(NodeKind::FieldDecl, "field_declaration", 10, 15));

        assert!(matches!(field.consume(ident("X", 10)), Consumed::Continue));
        assert!(matches!(field.consume(ident("int", 12)), Consumed::Continue));

        assert_eq!(field.name(), Some("X"));
        assert_eq!(field.definition().len(), 1);
        assert_eq!(field.definition()[0].text(), "int");
    }

    #[test]
    fn test_leading_non_identifiers_are_skipped() {
        let mut field = FieldAccumulator::new(node(NodeKind::FieldDecl, "field_declaration", 0, 12));

        assert!(matches!(
            field.consume(node(NodeKind::Other, "visibility_modifier", 0, 3)),
            Consumed::Continue
        ));
        assert_eq!(field.name(), None);
        assert!(field.definition().is_empty());

        field.consume(ident("x", 4));
        assert_eq!(field.name(), Some("x"));
        assert!(field.definition().is_empty());
    }

    #[test]
    fn test_sibling_field_is_released_untouched() {
        let mut field = FieldAccumulator::new(node(NodeKind::FieldDecl, "field_declaration", 0, 5));
        field.consume(ident("X", 0));

        let sibling = node(NodeKind::FieldDecl, "field_declaration", 2, 8);
        match field.consume(sibling.clone()) {
            Consumed::Release(returned) => assert_eq!(returned, sibling),
            Consumed::Continue => panic!("sibling field must be released"),
        }
        assert!(field.definition().is_empty());
    }

    #[test]
    fn test_release_only_past_field_end() {
        let mut field = FieldAccumulator::new(node(NodeKind::FieldDecl, "field_declaration", 0, 5));
        field.consume(ident("X", 0));

        // Starting exactly at the field end still belongs to the field
        assert!(matches!(
            field.consume(node(NodeKind::Other, "comment", 5, 9)),
            Consumed::Continue
        ));
        assert!(matches!(
            field.consume(node(NodeKind::Other, "comment", 6, 9)),
            Consumed::Release(_)
        ));
        assert_eq!(field.definition().len(), 1);
    }

    #[test]
    fn test_definition_keeps_order_and_multiplicity() {
        let mut field = FieldAccumulator::new(node(NodeKind::FieldDecl, "field_declaration", 0, 30));
        field.consume(ident("Items", 0));
        for (i, tok) in ["map", "string", "string"].iter().enumerate() {
            field.consume(ident(tok, 6 + i * 7));
        }

        let texts: Vec<&str> = field.definition().iter().map(SyntaxNode::text).collect();
        assert_eq!(texts, vec!["map", "string", "string"]);
    }
}
