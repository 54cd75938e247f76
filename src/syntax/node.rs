// Syntax node model
//
// The declaration extractors never look at tree-sitter nodes directly. Source is
// lowered once (see lower.rs) into this owned, immutable tree whose node kinds
// follow the Swift reference grammar productions the extractors dispatch on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Grammar production a [`SyntaxNode`] was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Root of one parsed source file
    ProgramUnit,
    /// `let p1 = e1, p2 = e2`
    ConstantDeclaration,
    /// `var p1 = e1, ...` or `var name: Type { ... }`
    VariableDeclaration,
    PatternInitializerList,
    PatternInitializer,
    /// `= expression`
    Initializer,
    /// Name of a variable declared without an initializer list (computed/observed/protocol)
    VariableName,
    TypeAnnotation,
    /// Wrapper around exactly one pattern variant (or another pattern)
    Pattern,
    IdentifierPattern,
    TuplePattern,
    TuplePatternElementList,
    TuplePatternElement,
    /// `.some(x)`, `Result.failure(let e)`
    EnumCasePattern,
    /// `_`
    WildcardPattern,
    ExpressionPattern,
    Expression,
    PrefixExpression,
    /// `let pattern` / `var pattern` inside a matching position
    ValueBindingPattern,
    ParameterClause,
    Parameter,
    ExternalParameterName,
    LocalParameterName,
    /// `let a = x, b = y, var c = z` in `if`/`guard`/`while`
    OptionalBindingCondition,
    OptionalBindingHead,
    OptionalBindingContinuationList,
    OptionalBindingContinuation,
    Identifier,
    /// Keyword or punctuation leaf
    Token,
    /// Any production the extractors do not inspect
    Other,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::ProgramUnit => "program_unit",
            NodeKind::ConstantDeclaration => "constant_declaration",
            NodeKind::VariableDeclaration => "variable_declaration",
            NodeKind::PatternInitializerList => "pattern_initializer_list",
            NodeKind::PatternInitializer => "pattern_initializer",
            NodeKind::Initializer => "initializer",
            NodeKind::VariableName => "variable_name",
            NodeKind::TypeAnnotation => "type_annotation",
            NodeKind::Pattern => "pattern",
            NodeKind::IdentifierPattern => "identifier_pattern",
            NodeKind::TuplePattern => "tuple_pattern",
            NodeKind::TuplePatternElementList => "tuple_pattern_element_list",
            NodeKind::TuplePatternElement => "tuple_pattern_element",
            NodeKind::EnumCasePattern => "enum_case_pattern",
            NodeKind::WildcardPattern => "wildcard_pattern",
            NodeKind::ExpressionPattern => "expression_pattern",
            NodeKind::Expression => "expression",
            NodeKind::PrefixExpression => "prefix_expression",
            NodeKind::ValueBindingPattern => "value_binding_pattern",
            NodeKind::ParameterClause => "parameter_clause",
            NodeKind::Parameter => "parameter",
            NodeKind::ExternalParameterName => "external_parameter_name",
            NodeKind::LocalParameterName => "local_parameter_name",
            NodeKind::OptionalBindingCondition => "optional_binding_condition",
            NodeKind::OptionalBindingHead => "optional_binding_head",
            NodeKind::OptionalBindingContinuationList => "optional_binding_continuation_list",
            NodeKind::OptionalBindingContinuation => "optional_binding_continuation",
            NodeKind::Identifier => "identifier",
            NodeKind::Token => "token",
            NodeKind::Other => "other",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Source position: 1-based line, 0-based column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// Immutable node of a lowered Swift syntax tree
///
/// Leaves carry their exact source text. Branches built from tree-sitter nodes
/// carry the exact source slice; branches assembled by hand carry the child
/// texts joined by single spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    kind: NodeKind,
    text: String,
    span: Span,
    children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn leaf(kind: NodeKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
            children: Vec::new(),
        }
    }

    pub fn token(text: impl Into<String>, span: Span) -> Self {
        Self::leaf(NodeKind::Token, text, span)
    }

    pub fn branch(kind: NodeKind, children: Vec<SyntaxNode>) -> Self {
        let span = match (children.first(), children.last()) {
            (Some(first), Some(last)) => Span::new(first.span.start, last.span.end),
            _ => Span::default(),
        };
        let text = children
            .iter()
            .map(|c| c.text.as_str())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            kind,
            text,
            span,
            children,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn start(&self) -> Position {
        self.span.start
    }

    pub fn children(&self) -> &[SyntaxNode] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// First direct child of the given kind
    pub fn child(&self, kind: NodeKind) -> Option<&SyntaxNode> {
        self.children.iter().find(|c| c.kind == kind)
    }

    /// All direct children of the given kind, in order
    pub fn children_of(&self, kind: NodeKind) -> impl Iterator<Item = &SyntaxNode> + '_ {
        self.children.iter().filter(move |c| c.kind == kind)
    }

    /// Whether a direct child spells exactly `text`
    pub fn has_child_text(&self, text: &str) -> bool {
        self.children.iter().any(|c| c.text == text)
    }

    /// First leaf in document order (the node's first token); a childless node is its own
    pub fn first_leaf(&self) -> &SyntaxNode {
        let mut current = self;
        while let Some(first) = current.children.first() {
            current = first;
        }
        current
    }

    /// Pre-order iterator over this node and all of its descendants
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

pub struct Descendants<'a> {
    stack: Vec<&'a SyntaxNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a SyntaxNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(line: u32, start: u32, end: u32) -> Span {
        Span::new(Position::new(line, start), Position::new(line, end))
    }

    #[test]
    fn test_branch_spans_its_children() {
        let node = SyntaxNode::branch(
            NodeKind::Other,
            vec![
                SyntaxNode::token("let", span(1, 0, 3)),
                SyntaxNode::leaf(NodeKind::Identifier, "a", span(1, 4, 5)),
            ],
        );

        assert_eq!(node.span(), span(1, 0, 5));
        assert_eq!(node.text(), "let a");
    }

    #[test]
    fn test_empty_branch_has_default_span() {
        let node = SyntaxNode::branch(NodeKind::Other, vec![]);
        assert_eq!(node.span(), Span::default());
        assert_eq!(node.text(), "");
        assert!(std::ptr::eq(node.first_leaf(), &node));
    }

    #[test]
    fn test_descendants_are_pre_order() {
        let tree = SyntaxNode::branch(
            NodeKind::ProgramUnit,
            vec![
                SyntaxNode::branch(
                    NodeKind::Pattern,
                    vec![SyntaxNode::leaf(NodeKind::Identifier, "a", span(1, 0, 1))],
                ),
                SyntaxNode::leaf(NodeKind::Identifier, "b", span(1, 2, 3)),
            ],
        );

        let kinds: Vec<NodeKind> = tree.descendants().map(|n| n.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::ProgramUnit,
                NodeKind::Pattern,
                NodeKind::Identifier,
                NodeKind::Identifier
            ]
        );
    }

    #[test]
    fn test_first_leaf_is_leading_token() {
        let node = SyntaxNode::branch(
            NodeKind::ValueBindingPattern,
            vec![
                SyntaxNode::token("var", span(1, 5, 8)),
                SyntaxNode::branch(
                    NodeKind::Pattern,
                    vec![SyntaxNode::leaf(NodeKind::Identifier, "x", span(1, 9, 10))],
                ),
            ],
        );

        assert_eq!(node.first_leaf().text(), "var");
        assert!(node.has_child_text("var"));
        assert_eq!(node.children_of(NodeKind::Pattern).count(), 1);
    }
}
