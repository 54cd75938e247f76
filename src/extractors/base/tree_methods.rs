// Syntax tree navigation helpers for BaseExtractor

use super::extractor::BaseExtractor;
use crate::error::{ExtractError, Result};
use crate::syntax::{NodeKind, SyntaxNode};

impl BaseExtractor {
    /// Locate the identifier a declaration site names
    ///
    /// Returns the first `Identifier` leaf in pre-order (the node itself
    /// included), or `None` when the subtree names nothing, as with `_`.
    pub fn find_identifier<'a>(&self, node: &'a SyntaxNode) -> Option<&'a SyntaxNode> {
        node.descendants()
            .find(|n| n.kind() == NodeKind::Identifier)
    }

    /// Direct child the grammar guarantees at this position
    pub fn require_child<'a>(
        &self,
        node: &'a SyntaxNode,
        kind: NodeKind,
        expected: &'static str,
    ) -> Result<&'a SyntaxNode> {
        node.child(kind)
            .ok_or_else(|| ExtractError::contract(node, expected))
    }
}
