// Tree-sitter lowering
//
// Converts a tree-sitter-swift parse into the grammar-shaped SyntaxNode tree.
// tree-sitter-swift hides most pattern productions, so the pieces of a pattern
// (and of an `if let` clause) arrive as flat runs of siblings. Each run is
// regrouped here into the production the declaration extractors dispatch on.

use tracing::{debug, warn};
use tree_sitter::{Node, Parser, Tree};

use super::node::{NodeKind, Position, Span, SyntaxNode};
use crate::error::{ExtractError, Result};

/// Direct children that end a binding clause inside a condition list
const CLAUSE_TERMINATORS: &[&str] = &[",", "{", "else", "in", "where"];

/// Reserved words error recovery can leave under a `simple_identifier`
const RESERVED_WORDS: &[&str] = &[
    "as", "break", "case", "catch", "class", "continue", "default", "defer", "deinit", "do",
    "else", "enum", "extension", "fallthrough", "false", "for", "func", "guard", "if", "import",
    "in", "init", "inout", "is", "let", "nil", "operator", "protocol", "repeat", "return",
    "static", "struct", "subscript", "switch", "throw", "true", "try", "typealias", "var",
    "where", "while",
];

/// Child kinds that turn a `var` declarator into a bare variable name
const BARE_VARIABLE_BODIES: &[&str] = &[
    "computed_property",
    "willset_didset_block",
    "protocol_property_requirements",
];

/// Parse Swift source with tree-sitter-swift and lower it
pub fn parse_swift(content: &str) -> Result<SyntaxNode> {
    let language = crate::language::get_tree_sitter_language("swift")?;
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| ExtractError::Parse(format!("Failed to set Swift language: {}", e)))?;

    let tree = parser
        .parse(content, None)
        .ok_or_else(|| ExtractError::Parse("tree-sitter produced no tree".to_string()))?;

    Ok(lower_tree(&tree, content))
}

/// Lower an already-parsed tree-sitter-swift tree into a program unit
pub fn lower_tree(tree: &Tree, content: &str) -> SyntaxNode {
    let root = tree.root_node();
    if root.has_error() {
        warn!("Swift source has syntax errors; erroneous regions are lowered as opaque nodes");
    }

    let lowerer = Lowerer { content };
    let children = lowerer.lower_run(&children_of(root));
    lowerer.branch(NodeKind::ProgramUnit, &root, children)
}

fn children_of(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.children(&mut cursor).collect()
}

struct Lowerer<'src> {
    content: &'src str,
}

impl<'src> Lowerer<'src> {
    fn text(&self, node: &Node) -> String {
        let bytes = self.content.as_bytes();
        let (start, end) = (node.start_byte(), node.end_byte());
        if start <= end && end <= bytes.len() {
            String::from_utf8_lossy(&bytes[start..end]).to_string()
        } else {
            String::new()
        }
    }

    fn span(&self, node: &Node) -> Span {
        let start = node.start_position();
        let end = node.end_position();
        Span::new(
            Position::new(start.row as u32 + 1, start.column as u32),
            Position::new(end.row as u32 + 1, end.column as u32),
        )
    }

    fn leaf(&self, kind: NodeKind, node: &Node) -> SyntaxNode {
        SyntaxNode::leaf(kind, self.text(node), self.span(node))
    }

    fn branch(&self, kind: NodeKind, node: &Node, children: Vec<SyntaxNode>) -> SyntaxNode {
        SyntaxNode::branch(kind, children)
            .with_text(self.text(node))
            .with_span(self.span(node))
    }

    /// A `simple_identifier` that names something in the source
    ///
    /// Zero-width MISSING nodes and keywords swallowed during error recovery
    /// do not.
    fn is_identifier(&self, node: &Node) -> bool {
        node.kind() == "simple_identifier"
            && !node.is_missing()
            && !RESERVED_WORDS.contains(&self.text(node).as_str())
    }

    /// Identifier leaf, or a plain token when the node names nothing
    fn name_leaf(&self, node: &Node) -> SyntaxNode {
        if self.is_identifier(node) {
            self.leaf(NodeKind::Identifier, node)
        } else {
            self.leaf(NodeKind::Token, node)
        }
    }

    /// `let`/`var` spelled by a value_binding_pattern node
    fn keyword_token(&self, node: &Node) -> SyntaxNode {
        SyntaxNode::token(self.text(node).trim(), self.span(node))
    }

    fn lower_node(&self, node: Node) -> SyntaxNode {
        match node.kind() {
            "property_declaration" | "protocol_property_declaration" => self.lower_property(node),
            "pattern" => self.lower_pattern(node),
            "parameter" | "lambda_parameter" => self.lower_parameter(node),
            "lambda_function_type_parameters" => {
                let children = self.lower_run(&children_of(node));
                self.branch(NodeKind::ParameterClause, &node, children)
            }
            "type_annotation" => {
                let children = self.lower_run(&children_of(node));
                self.branch(NodeKind::TypeAnnotation, &node, children)
            }
            "simple_identifier" => self.name_leaf(&node),
            "ERROR" => {
                warn!(
                    "Syntax error at {}:{}, lowering as opaque node",
                    node.start_position().row + 1,
                    node.start_position().column
                );
                let children = self.lower_run(&children_of(node));
                self.branch(NodeKind::Other, &node, children)
            }
            _ if node.child_count() == 0 => self.leaf(NodeKind::Token, &node),
            _ => {
                let children = self.lower_run(&children_of(node));
                self.branch(NodeKind::Other, &node, children)
            }
        }
    }

    /// Lower a run of sibling nodes, regrouping binding clauses and parameters
    ///
    /// Conditions of `if`, `guard` and `while` place their binding clauses
    /// directly among the statement's children. Consecutive clauses become one
    /// optional-binding condition; a clause preceded by `case` is a value
    /// binding pattern instead. Function parameters arrive between bare
    /// parentheses and are grouped into a parameter clause.
    fn lower_run(&self, nodes: &[Node]) -> Vec<SyntaxNode> {
        let nodes = self.splice_recovered_clauses(nodes);
        let nodes = nodes.as_slice();

        let mut lowered = Vec::new();
        // Head clause first, continuations after it
        let mut clauses: Vec<SyntaxNode> = Vec::new();
        let mut i = 0;

        while i < nodes.len() {
            let node = nodes[i];

            if node.kind() == "value_binding_pattern" {
                let end = clause_end(nodes, i);
                let clause = &nodes[i..end];
                if i > 0 && nodes[i - 1].kind() == "case" {
                    flush_binding_run(&mut clauses, &mut lowered);
                    lowered.extend(self.lower_case_binding(clause));
                } else {
                    let head = self.lower_binding_head(clause);
                    if clauses.is_empty() {
                        clauses.push(head);
                    } else {
                        clauses.push(SyntaxNode::branch(
                            NodeKind::OptionalBindingContinuation,
                            vec![head],
                        ));
                    }
                }
                i = end;
                continue;
            }

            if node.kind() == "," && !clauses.is_empty() {
                match nodes.get(i + 1) {
                    Some(next) if next.kind() == "value_binding_pattern" => {
                        i += 1;
                        continue;
                    }
                    Some(next) if self.is_inherited_clause(next) => {
                        clauses.push(self.lower_inherited_clause(*next));
                        i += 2;
                        continue;
                    }
                    _ => {}
                }
            }

            flush_binding_run(&mut clauses, &mut lowered);
            if node.kind() == "(" && nodes.get(i + 1).is_some_and(|n| n.kind() == "parameter") {
                let end = nodes[i..]
                    .iter()
                    .position(|n| n.kind() == ")")
                    .map_or(nodes.len(), |close| i + close + 1);
                lowered.push(self.parameter_clause(&nodes[i..end]));
                i = end;
                continue;
            }
            lowered.push(self.lower_node(node));
            i += 1;
        }

        flush_binding_run(&mut clauses, &mut lowered);
        lowered
    }

    /// Inline ERROR nodes that hold binding clauses cut loose by recovery
    ///
    /// tree-sitter-swift rejects `if let a = x, b = y` and keeps `, b = y` as
    /// an assignment inside an ERROR node. Splicing its children back in lets
    /// the clause join the run it belongs to.
    fn splice_recovered_clauses<'t>(&self, nodes: &[Node<'t>]) -> Vec<Node<'t>> {
        let mut spliced = Vec::with_capacity(nodes.len());
        for node in nodes {
            if node.kind() == "ERROR" && self.holds_inherited_clause(node) {
                warn!(
                    "Recovering binding clause from syntax error at {}:{}",
                    node.start_position().row + 1,
                    node.start_position().column
                );
                spliced.extend(self.splice_recovered_clauses(&children_of(*node)));
            } else {
                spliced.push(*node);
            }
        }
        spliced
    }

    fn holds_inherited_clause(&self, error: &Node) -> bool {
        let children = children_of(*error);
        children
            .windows(2)
            .any(|pair| pair[0].kind() == "," && self.is_inherited_clause(&pair[1]))
            || children
                .iter()
                .any(|c| c.kind() == "ERROR" && self.holds_inherited_clause(c))
    }

    /// `name = value` standing where a binding clause without keyword goes
    fn is_inherited_clause(&self, node: &Node) -> bool {
        if node.kind() != "assignment" {
            return false;
        }
        let bare_target = node
            .child_by_field_name("target")
            .and_then(|target| bare_identifier(target).filter(|id| self.is_identifier(id)))
            .is_some();
        let plain_assign = node
            .child_by_field_name("operator")
            .is_some_and(|op| self.text(&op) == "=");
        bare_target && plain_assign
    }

    /// Continuation clause that inherits the keyword in force
    fn lower_inherited_clause(&self, assignment: Node) -> SyntaxNode {
        let children = children_of(assignment);
        let target = assignment.child_by_field_name("target");
        let value_start = children
            .iter()
            .position(|c| target.is_some_and(|t| t.id() == c.id()))
            .map_or(0, |idx| idx + 1);

        let mut clause = Vec::new();
        if let Some(identifier) = target.and_then(bare_identifier) {
            let name = self.leaf(NodeKind::Identifier, &identifier);
            let pattern = self.branch(NodeKind::IdentifierPattern, &identifier, vec![name]);
            clause.push(SyntaxNode::branch(NodeKind::Pattern, vec![pattern]));
        }
        clause.push(SyntaxNode::branch(
            NodeKind::Initializer,
            self.lower_run(&children[value_start..]),
        ));
        self.branch(NodeKind::OptionalBindingContinuation, &assignment, clause)
    }

    /// `( parameter, parameter, ... )`
    fn parameter_clause(&self, parts: &[Node]) -> SyntaxNode {
        let mut children = vec![self.leaf(NodeKind::Token, &parts[0])];
        let inner_end = if parts.len() > 1 && parts[parts.len() - 1].kind() == ")" {
            parts.len() - 1
        } else {
            parts.len()
        };
        children.extend(self.lower_run(&parts[1..inner_end]));
        if inner_end < parts.len() {
            children.push(self.leaf(NodeKind::Token, &parts[inner_end]));
        }
        SyntaxNode::branch(NodeKind::ParameterClause, children)
    }

    /// `let pattern = value` or the shorthand `let name`
    fn lower_binding_head(&self, clause: &[Node]) -> SyntaxNode {
        let mut children = vec![self.keyword_token(&clause[0])];
        let rest = &clause[1..];

        match rest.iter().position(|c| c.kind() == "=") {
            Some(eq) => {
                children.push(self.pattern_from_parts(&rest[..eq]));
                children.push(SyntaxNode::branch(
                    NodeKind::Initializer,
                    self.lower_run(&rest[eq..]),
                ));
            }
            None => children.push(self.shorthand_pattern(rest)),
        }

        SyntaxNode::branch(NodeKind::OptionalBindingHead, children)
    }

    /// `case let pattern = value`: the binding keyword prefixes a matching pattern
    fn lower_case_binding(&self, clause: &[Node]) -> Vec<SyntaxNode> {
        match clause.iter().position(|c| c.kind() == "=") {
            Some(eq) => vec![
                self.pattern_from_parts(&clause[..eq]),
                SyntaxNode::branch(NodeKind::Initializer, self.lower_run(&clause[eq..])),
            ],
            None => vec![self.pattern_from_parts(clause)],
        }
    }

    /// `if let x` sugar: the bound name doubles as the unwrapped expression
    fn shorthand_pattern(&self, parts: &[Node]) -> SyntaxNode {
        let prefix = SyntaxNode::branch(NodeKind::PrefixExpression, self.lower_run(parts));
        let expression = SyntaxNode::branch(NodeKind::Expression, vec![prefix]);
        let inner = SyntaxNode::branch(NodeKind::ExpressionPattern, vec![expression]);
        SyntaxNode::branch(NodeKind::Pattern, vec![inner])
    }

    fn lower_property(&self, node: Node) -> SyntaxNode {
        let children = children_of(node);

        let Some(keyword) = self.declaration_keyword(&children) else {
            debug!("property_declaration without let/var at {:?}", self.span(&node));
            let lowered = self.lower_run(&children);
            return self.branch(NodeKind::Other, &node, lowered);
        };
        let Some(first_pattern) = children.iter().position(|c| c.kind() == "pattern") else {
            let lowered = self.lower_run(&children);
            return self.branch(NodeKind::Other, &node, lowered);
        };

        let mut lowered: Vec<SyntaxNode> = children[..first_pattern]
            .iter()
            .map(|c| {
                if c.kind() == "value_binding_pattern" {
                    self.keyword_token(c)
                } else {
                    self.lower_node(*c)
                }
            })
            .collect();

        let declarators = split_declarators(&children[first_pattern..]);
        let bare = keyword == "var"
            && (node.kind() == "protocol_property_declaration"
                || declarators.iter().any(|(parts, _)| {
                    parts
                        .iter()
                        .any(|p| BARE_VARIABLE_BODIES.contains(&p.kind()))
                }));

        if bare {
            for (parts, comma) in &declarators {
                lowered.push(self.variable_name(parts[0]));
                lowered.extend(self.lower_run(&parts[1..]));
                if let Some(comma) = comma {
                    lowered.push(self.leaf(NodeKind::Token, comma));
                }
            }
            return self.branch(NodeKind::VariableDeclaration, &node, lowered);
        }

        let mut list = Vec::new();
        for (parts, comma) in &declarators {
            list.push(self.pattern_initializer(parts));
            if let Some(comma) = comma {
                list.push(self.leaf(NodeKind::Token, comma));
            }
        }
        lowered.push(SyntaxNode::branch(NodeKind::PatternInitializerList, list));

        let kind = if keyword == "let" {
            NodeKind::ConstantDeclaration
        } else {
            NodeKind::VariableDeclaration
        };
        self.branch(kind, &node, lowered)
    }

    /// Keyword of a property declaration; protocol requirements nest it in the pattern
    fn declaration_keyword(&self, children: &[Node]) -> Option<String> {
        let direct = children.iter().find(|c| c.kind() == "value_binding_pattern");
        let nested = || {
            children
                .iter()
                .filter(|c| c.kind() == "pattern")
                .flat_map(|p| children_of(*p))
                .find(|c| c.kind() == "value_binding_pattern")
        };

        direct
            .copied()
            .or_else(nested)
            .map(|vbp| self.text(&vbp).trim().to_string())
            .filter(|k| k == "let" || k == "var")
    }

    fn variable_name(&self, pattern: Node) -> SyntaxNode {
        let children = self
            .first_simple_identifier(pattern)
            .map(|identifier| self.leaf(NodeKind::Identifier, &identifier))
            .into_iter()
            .collect();
        self.branch(NodeKind::VariableName, &pattern, children)
    }

    /// `pattern (: Type)? (= value)?`
    fn pattern_initializer(&self, parts: &[Node]) -> SyntaxNode {
        let eq = parts.iter().position(|c| c.kind() == "=");
        let (pattern_parts, value_parts) = match eq {
            Some(eq) => (&parts[..eq], &parts[eq..]),
            None => (parts, &parts[parts.len()..]),
        };

        let pattern = if pattern_parts.len() == 1 {
            self.lower_pattern(pattern_parts[0])
        } else {
            // pattern followed by its type annotation
            SyntaxNode::branch(NodeKind::Pattern, self.lower_run(pattern_parts))
        };

        let mut children = vec![pattern];
        if !value_parts.is_empty() {
            children.push(SyntaxNode::branch(
                NodeKind::Initializer,
                self.lower_run(value_parts),
            ));
        }
        SyntaxNode::branch(NodeKind::PatternInitializer, children)
    }

    fn lower_pattern(&self, node: Node) -> SyntaxNode {
        let children = self.pattern_children(&children_of(node));
        self.branch(NodeKind::Pattern, &node, children)
    }

    fn pattern_from_parts(&self, parts: &[Node]) -> SyntaxNode {
        if let [single] = parts {
            if single.kind() == "pattern" {
                return self.lower_pattern(*single);
            }
        }
        SyntaxNode::branch(NodeKind::Pattern, self.pattern_children(parts))
    }

    /// Children of a Pattern node: exactly one variant plus trailing tokens
    fn pattern_children(&self, parts: &[Node]) -> Vec<SyntaxNode> {
        if let Some(idx) = parts.iter().position(|p| p.kind() == "value_binding_pattern") {
            let mut children = self.lower_run(&parts[..idx]);
            let keyword = self.keyword_token(&parts[idx]);
            let inner = self.pattern_from_parts(&parts[idx + 1..]);
            children.push(SyntaxNode::branch(
                NodeKind::ValueBindingPattern,
                vec![keyword, inner],
            ));
            return children;
        }

        let lead = parts.iter().take_while(|p| p.kind() == "case").count();
        let mut children: Vec<SyntaxNode> = parts[..lead]
            .iter()
            .map(|p| self.leaf(NodeKind::Token, p))
            .collect();
        let rest = &parts[lead..];
        let Some(first) = rest.first() else {
            return children;
        };

        match first.kind() {
            "(" => {
                let (tuple, consumed) = self.tuple_pattern(rest);
                children.push(tuple);
                children.extend(self.lower_run(&rest[consumed..]));
            }
            "wildcard_pattern" => {
                let wildcard = SyntaxNode::token("_", self.span(first));
                children.push(self.branch(NodeKind::WildcardPattern, first, vec![wildcard]));
                children.extend(self.lower_run(&rest[1..]));
            }
            "." | "user_type" if rest.iter().take(2).any(|p| p.kind() == ".") => {
                children.push(self.enum_case_pattern(rest));
            }
            "simple_identifier"
                if self.is_identifier(first) && rest[1..].iter().all(is_pattern_suffix) =>
            {
                let identifier = self.leaf(NodeKind::Identifier, first);
                children.push(self.branch(NodeKind::IdentifierPattern, first, vec![identifier]));
                children.extend(self.lower_run(&rest[1..]));
            }
            "is" => children.extend(self.lower_run(rest)),
            _ if rest.iter().any(|p| p.kind() == "pattern") => {
                // `pattern as Type` and other wrappers around one inner pattern
                children.extend(self.lower_run(rest));
            }
            _ => {
                let prefix = SyntaxNode::branch(NodeKind::PrefixExpression, self.lower_run(rest));
                let expression = SyntaxNode::branch(NodeKind::Expression, vec![prefix]);
                children.push(SyntaxNode::branch(
                    NodeKind::ExpressionPattern,
                    vec![expression],
                ));
            }
        }
        children
    }

    /// `Type.case(p1, ...)`; `parts` starts at the type or the dot
    fn enum_case_pattern(&self, parts: &[Node]) -> SyntaxNode {
        let mut children = Vec::new();
        let mut i = 0;
        while i < parts.len() {
            if parts[i].kind() == "(" {
                let (tuple, consumed) = self.tuple_pattern(&parts[i..]);
                children.push(tuple);
                i += consumed;
                continue;
            }
            children.push(self.lower_node(parts[i]));
            i += 1;
        }
        SyntaxNode::branch(NodeKind::EnumCasePattern, children)
    }

    /// `( element, element, ... )`; returns the tuple and how many parts it used
    fn tuple_pattern(&self, parts: &[Node]) -> (SyntaxNode, usize) {
        let close = parts.iter().position(|p| p.kind() == ")");
        let end = close.unwrap_or(parts.len());

        let mut list = Vec::new();
        let mut element_start = 1;
        for (i, part) in parts.iter().enumerate().take(end).skip(1) {
            if part.kind() == "," {
                list.push(self.tuple_element(&parts[element_start..i]));
                list.push(self.leaf(NodeKind::Token, part));
                element_start = i + 1;
            }
        }
        if element_start < end {
            list.push(self.tuple_element(&parts[element_start..end]));
        }

        let mut children = vec![self.leaf(NodeKind::Token, &parts[0])];
        if !list.is_empty() {
            children.push(SyntaxNode::branch(NodeKind::TuplePatternElementList, list));
        }
        if let Some(close) = close {
            children.push(self.leaf(NodeKind::Token, &parts[close]));
        }

        let consumed = close.map_or(parts.len(), |c| c + 1);
        (SyntaxNode::branch(NodeKind::TuplePattern, children), consumed)
    }

    /// `pattern` or `label: pattern`
    fn tuple_element(&self, parts: &[Node]) -> SyntaxNode {
        let mut children = Vec::new();
        match parts.iter().rposition(|p| p.kind() == "pattern") {
            Some(idx) => {
                children.extend(parts[..idx].iter().map(|p| self.leaf(NodeKind::Token, p)));
                children.push(self.lower_pattern(parts[idx]));
                children.extend(self.lower_run(&parts[idx + 1..]));
            }
            None => children.push(self.pattern_from_parts(parts)),
        }
        SyntaxNode::branch(NodeKind::TuplePatternElement, children)
    }

    fn lower_parameter(&self, node: Node) -> SyntaxNode {
        let Some(name) = node.child_by_field_name("name") else {
            let children = self.lower_run(&children_of(node));
            return self.branch(NodeKind::Other, &node, children);
        };
        let external = node.child_by_field_name("external_name");

        let children = children_of(node)
            .into_iter()
            .map(|child| {
                if external.is_some_and(|e| e.id() == child.id()) {
                    let inner = self.name_leaf(&child);
                    self.branch(NodeKind::ExternalParameterName, &child, vec![inner])
                } else if child.id() == name.id() {
                    let inner = self.name_leaf(&child);
                    self.branch(NodeKind::LocalParameterName, &child, vec![inner])
                } else {
                    self.lower_node(child)
                }
            })
            .collect();

        self.branch(NodeKind::Parameter, &node, children)
    }

    fn first_simple_identifier<'t>(&self, node: Node<'t>) -> Option<Node<'t>> {
        if self.is_identifier(&node) {
            return Some(node);
        }
        children_of(node)
            .into_iter()
            .find_map(|child| self.first_simple_identifier(child))
    }
}

/// Index one past the last node of the clause starting at `start`
fn clause_end(nodes: &[Node], start: usize) -> usize {
    nodes[start + 1..]
        .iter()
        .position(|n| CLAUSE_TERMINATORS.contains(&n.kind()))
        .map(|offset| start + 1 + offset)
        .unwrap_or(nodes.len())
}

/// The identifier an expression consists of, if it is nothing else
fn bare_identifier(node: Node<'_>) -> Option<Node<'_>> {
    match node.kind() {
        "simple_identifier" => Some(node),
        "directly_assignable_expression" if node.named_child_count() == 1 => {
            node.named_child(0).and_then(bare_identifier)
        }
        _ => None,
    }
}

/// Tokens that may trail a bound identifier inside a pattern
fn is_pattern_suffix(node: &Node) -> bool {
    matches!(node.kind(), "type_annotation" | "type_constraints" | "?" | "!")
}

/// Declarators of a property declaration, each with the comma that follows it
fn split_declarators<'a, 't>(parts: &'a [Node<'t>]) -> Vec<(&'a [Node<'t>], Option<&'a Node<'t>>)> {
    let mut declarators = Vec::new();
    let mut start = 0;
    for (i, part) in parts.iter().enumerate() {
        if part.kind() == "," && parts.get(i + 1).is_some_and(|n| n.kind() == "pattern") {
            declarators.push((&parts[start..i], Some(part)));
            start = i + 1;
        }
    }
    if start < parts.len() {
        declarators.push((&parts[start..], None));
    }
    declarators
}

/// Close an open run of binding clauses into one optional-binding condition
fn flush_binding_run(clauses: &mut Vec<SyntaxNode>, lowered: &mut Vec<SyntaxNode>) {
    if clauses.is_empty() {
        return;
    }

    let mut drained = clauses.drain(..);
    let mut children = Vec::new();
    if let Some(head) = drained.next() {
        children.push(head);
    }

    let continuations: Vec<SyntaxNode> = drained.collect();
    if !continuations.is_empty() {
        children.push(SyntaxNode::branch(
            NodeKind::OptionalBindingContinuationList,
            continuations,
        ));
    }

    lowered.push(SyntaxNode::branch(
        NodeKind::OptionalBindingCondition,
        children,
    ));
}
