// Identifier creation from syntax nodes

use super::extractor::BaseExtractor;
use super::types::{DeclarationKind, Identifier};
use crate::syntax::SyntaxNode;

impl BaseExtractor {
    /// Record `node` as a declared name of the given kind
    pub fn create_identifier(&self, node: &SyntaxNode, kind: DeclarationKind) -> Identifier {
        let span = node.span();

        let code_context = self.extract_code_context(span.start.line, span.end.line);

        Identifier {
            name: self.get_node_text(node),
            kind,
            start_line: span.start.line,
            start_column: span.start.column,
            end_line: span.end.line,
            end_column: span.end.column,
            code_context,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::ContextConfig;
    use crate::syntax::{NodeKind, Position, Span};

    #[test]
    fn test_create_identifier_copies_span() {
        let node = SyntaxNode::leaf(
            NodeKind::Identifier,
            "total",
            Span::new(Position::new(3, 4), Position::new(3, 9)),
        );
        let base = BaseExtractor::new();

        let id = base.create_identifier(&node, DeclarationKind::Variable);
        assert_eq!(id.name, "total");
        assert_eq!(id.kind, DeclarationKind::Variable);
        assert_eq!((id.start_line, id.start_column), (3, 4));
        assert_eq!((id.end_line, id.end_column), (3, 9));
        assert!(id.code_context.is_none());
    }

    #[test]
    fn test_create_identifier_quotes_source_line() {
        let node = SyntaxNode::leaf(
            NodeKind::Identifier,
            "x",
            Span::new(Position::new(1, 4), Position::new(1, 5)),
        );
        let base = BaseExtractor::with_source("let x = 1", ContextConfig::default());

        let id = base.create_identifier(&node, DeclarationKind::Constant);
        assert_eq!(id.code_context.as_deref(), Some("  ➤   1: let x = 1"));
    }
}
