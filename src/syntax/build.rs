// Hand-assembly of syntax trees
//
// Used by tests and by callers that already hold a parse from another front end.
// Leaves are laid out on the current line in the order they are created, one
// space apart, so every identifier gets a distinct, deterministic position.
// Nested calls create inner leaves first, so columns follow creation order
// rather than the order the finished tree prints in.

use std::cell::Cell;

use super::node::{NodeKind, Position, Span, SyntaxNode};

/// Builds syntax trees shaped like the lowered Swift grammar
pub struct SyntaxBuilder {
    cursor: Cell<Position>,
}

impl Default for SyntaxBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxBuilder {
    pub fn new() -> Self {
        Self {
            cursor: Cell::new(Position::new(1, 0)),
        }
    }

    /// Continue laying out leaves at the start of the next line
    pub fn newline(&self) {
        let current = self.cursor.get();
        self.cursor.set(Position::new(current.line + 1, 0));
    }

    fn place(&self, kind: NodeKind, text: &str) -> SyntaxNode {
        let start = self.cursor.get();
        let width = text.chars().count() as u32;
        let end = Position::new(start.line, start.column + width);
        self.cursor.set(Position::new(start.line, end.column + 1));
        SyntaxNode::leaf(kind, text, Span::new(start, end))
    }

    pub fn token(&self, text: &str) -> SyntaxNode {
        self.place(NodeKind::Token, text)
    }

    pub fn identifier(&self, name: &str) -> SyntaxNode {
        self.place(NodeKind::Identifier, name)
    }

    pub fn program(&self, statements: Vec<SyntaxNode>) -> SyntaxNode {
        SyntaxNode::branch(NodeKind::ProgramUnit, statements)
    }

    pub fn other(&self, children: Vec<SyntaxNode>) -> SyntaxNode {
        SyntaxNode::branch(NodeKind::Other, children)
    }

    // -- patterns -------------------------------------------------------------

    /// `name`
    pub fn identifier_pattern(&self, name: &str) -> SyntaxNode {
        let inner = SyntaxNode::branch(NodeKind::IdentifierPattern, vec![self.identifier(name)]);
        SyntaxNode::branch(NodeKind::Pattern, vec![inner])
    }

    /// `name: Type`
    pub fn typed_identifier_pattern(&self, name: &str, type_name: &str) -> SyntaxNode {
        let inner = SyntaxNode::branch(NodeKind::IdentifierPattern, vec![self.identifier(name)]);
        let annotation = self.type_annotation(type_name);
        SyntaxNode::branch(NodeKind::Pattern, vec![inner, annotation])
    }

    /// `_`
    pub fn wildcard_pattern(&self) -> SyntaxNode {
        let inner = SyntaxNode::branch(NodeKind::WildcardPattern, vec![self.token("_")]);
        SyntaxNode::branch(NodeKind::Pattern, vec![inner])
    }

    fn tuple(&self, elements: Vec<SyntaxNode>) -> SyntaxNode {
        let mut children = vec![self.token("(")];
        if !elements.is_empty() {
            let mut list = Vec::new();
            for (i, element) in elements.into_iter().enumerate() {
                if i > 0 {
                    list.push(self.token(","));
                }
                list.push(SyntaxNode::branch(
                    NodeKind::TuplePatternElement,
                    vec![element],
                ));
            }
            children.push(SyntaxNode::branch(NodeKind::TuplePatternElementList, list));
        }
        children.push(self.token(")"));
        SyntaxNode::branch(NodeKind::TuplePattern, children)
    }

    /// `(p1, p2, ...)`; an empty element list builds `()`
    pub fn tuple_pattern(&self, elements: Vec<SyntaxNode>) -> SyntaxNode {
        let tuple = self.tuple(elements);
        SyntaxNode::branch(NodeKind::Pattern, vec![tuple])
    }

    /// `.case_name` or `.case_name(p1, ...)`
    pub fn enum_case_pattern(
        &self,
        case_name: &str,
        payload: Option<Vec<SyntaxNode>>,
    ) -> SyntaxNode {
        let mut children = vec![self.token("."), self.token(case_name)];
        if let Some(elements) = payload {
            children.push(self.tuple(elements));
        }
        let inner = SyntaxNode::branch(NodeKind::EnumCasePattern, children);
        SyntaxNode::branch(NodeKind::Pattern, vec![inner])
    }

    /// `let pattern` / `var pattern` in a matching position
    pub fn value_binding(&self, keyword: &str, pattern: SyntaxNode) -> SyntaxNode {
        SyntaxNode::branch(
            NodeKind::ValueBindingPattern,
            vec![self.token(keyword), pattern],
        )
    }

    /// [`value_binding`](Self::value_binding) wrapped as a pattern
    pub fn value_binding_pattern(&self, keyword: &str, pattern: SyntaxNode) -> SyntaxNode {
        let binding = self.value_binding(keyword, pattern);
        SyntaxNode::branch(NodeKind::Pattern, vec![binding])
    }

    /// `pattern as Type`
    pub fn cast_pattern(&self, pattern: SyntaxNode, type_name: &str) -> SyntaxNode {
        SyntaxNode::branch(
            NodeKind::Pattern,
            vec![pattern, self.token("as"), self.token(type_name)],
        )
    }

    /// Expression pattern over a prefix expression built from `parts`
    pub fn expression_pattern(&self, parts: Vec<SyntaxNode>) -> SyntaxNode {
        let prefix = SyntaxNode::branch(NodeKind::PrefixExpression, parts);
        let expression = SyntaxNode::branch(NodeKind::Expression, vec![prefix]);
        let inner = SyntaxNode::branch(NodeKind::ExpressionPattern, vec![expression]);
        SyntaxNode::branch(NodeKind::Pattern, vec![inner])
    }

    pub fn type_annotation(&self, type_name: &str) -> SyntaxNode {
        SyntaxNode::branch(
            NodeKind::TypeAnnotation,
            vec![self.token(":"), self.token(type_name)],
        )
    }

    // -- declarations ---------------------------------------------------------

    /// `= value`
    pub fn initializer(&self, value: &str) -> SyntaxNode {
        SyntaxNode::branch(
            NodeKind::Initializer,
            vec![self.token("="), self.token(value)],
        )
    }

    /// `pattern = value`
    pub fn pattern_initializer(&self, pattern: SyntaxNode, value: &str) -> SyntaxNode {
        let initializer = self.initializer(value);
        SyntaxNode::branch(NodeKind::PatternInitializer, vec![pattern, initializer])
    }

    fn initializer_list(&self, initializers: Vec<SyntaxNode>) -> SyntaxNode {
        let mut list = Vec::new();
        for (i, initializer) in initializers.into_iter().enumerate() {
            if i > 0 {
                list.push(self.token(","));
            }
            list.push(initializer);
        }
        SyntaxNode::branch(NodeKind::PatternInitializerList, list)
    }

    /// `let p1 = e1, p2 = e2, ...`
    pub fn constant_declaration(&self, initializers: Vec<SyntaxNode>) -> SyntaxNode {
        let keyword = self.token("let");
        let list = self.initializer_list(initializers);
        SyntaxNode::branch(NodeKind::ConstantDeclaration, vec![keyword, list])
    }

    /// `var p1 = e1, p2 = e2, ...`
    pub fn variable_declaration(&self, initializers: Vec<SyntaxNode>) -> SyntaxNode {
        let keyword = self.token("var");
        let list = self.initializer_list(initializers);
        SyntaxNode::branch(NodeKind::VariableDeclaration, vec![keyword, list])
    }

    /// `var name: Type { ... }`
    pub fn computed_variable(&self, name: &str, type_name: &str) -> SyntaxNode {
        let keyword = self.token("var");
        let variable_name = SyntaxNode::branch(NodeKind::VariableName, vec![self.identifier(name)]);
        let annotation = self.type_annotation(type_name);
        let body = self.other(vec![self.token("{"), self.token("}")]);
        SyntaxNode::branch(
            NodeKind::VariableDeclaration,
            vec![keyword, variable_name, annotation, body],
        )
    }

    /// `var? external? local: Type`; an external name of `_` has no identifier
    pub fn parameter(&self, external: Option<&str>, local: &str, is_var: bool) -> SyntaxNode {
        let mut children = Vec::new();
        if is_var {
            children.push(self.token("var"));
        }
        if let Some(external) = external {
            let name = if external == "_" {
                self.token("_")
            } else {
                self.identifier(external)
            };
            children.push(SyntaxNode::branch(NodeKind::ExternalParameterName, vec![name]));
        }
        children.push(SyntaxNode::branch(
            NodeKind::LocalParameterName,
            vec![self.identifier(local)],
        ));
        children.push(self.type_annotation("Int"));
        SyntaxNode::branch(NodeKind::Parameter, children)
    }

    /// `(param, param, ...)`
    pub fn parameter_clause(&self, parameters: Vec<SyntaxNode>) -> SyntaxNode {
        let mut children = vec![self.token("(")];
        for (i, parameter) in parameters.into_iter().enumerate() {
            if i > 0 {
                children.push(self.token(","));
            }
            children.push(parameter);
        }
        children.push(self.token(")"));
        SyntaxNode::branch(NodeKind::ParameterClause, children)
    }

    // -- optional binding -----------------------------------------------------

    /// `let pattern = value` / `var pattern = value`
    pub fn binding_head(&self, keyword: &str, pattern: SyntaxNode, value: &str) -> SyntaxNode {
        let keyword = self.token(keyword);
        let initializer = self.initializer(value);
        SyntaxNode::branch(
            NodeKind::OptionalBindingHead,
            vec![keyword, pattern, initializer],
        )
    }

    /// Continuation that restates its keyword
    pub fn continuation_with_keyword(&self, head: SyntaxNode) -> SyntaxNode {
        SyntaxNode::branch(NodeKind::OptionalBindingContinuation, vec![head])
    }

    /// Continuation that inherits the keyword in force: `pattern = value`
    pub fn continuation(&self, pattern: SyntaxNode, value: &str) -> SyntaxNode {
        let initializer = self.initializer(value);
        SyntaxNode::branch(
            NodeKind::OptionalBindingContinuation,
            vec![pattern, initializer],
        )
    }

    /// `head, continuation, continuation, ...`
    pub fn optional_binding(&self, head: SyntaxNode, continuations: Vec<SyntaxNode>) -> SyntaxNode {
        let mut children = vec![head];
        if !continuations.is_empty() {
            let mut list = Vec::new();
            for continuation in continuations {
                list.push(self.token(","));
                list.push(continuation);
            }
            children.push(SyntaxNode::branch(
                NodeKind::OptionalBindingContinuationList,
                list,
            ));
        }
        SyntaxNode::branch(NodeKind::OptionalBindingCondition, children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaves_are_placed_in_creation_order() {
        let b = SyntaxBuilder::new();
        let decl =
            b.constant_declaration(vec![b.pattern_initializer(b.identifier_pattern("a"), "1")]);

        let positions: Vec<(String, Position)> = decl
            .descendants()
            .filter(|n| n.is_leaf())
            .map(|n| (n.text().to_string(), n.start()))
            .collect();

        // "a", "=", "1" are created before the "let" keyword
        assert_eq!(positions[0], ("let".to_string(), Position::new(1, 6)));
        assert_eq!(positions[1], ("a".to_string(), Position::new(1, 0)));
        assert_eq!(positions[2], ("=".to_string(), Position::new(1, 2)));
        assert_eq!(positions[3], ("1".to_string(), Position::new(1, 4)));
    }

    #[test]
    fn test_newline_resets_column() {
        let b = SyntaxBuilder::new();
        b.identifier("first");
        b.newline();
        let second = b.identifier("second");
        assert_eq!(second.start(), Position::new(2, 0));
    }

    #[test]
    fn test_empty_tuple_has_no_element_list() {
        let b = SyntaxBuilder::new();
        let pattern = b.tuple_pattern(vec![]);
        let tuple = pattern.child(NodeKind::TuplePattern).unwrap();
        assert!(tuple.child(NodeKind::TuplePatternElementList).is_none());
    }
}
