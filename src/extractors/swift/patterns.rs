use crate::error::{ExtractError, Result};
use crate::extractors::base::BaseExtractor;
use crate::syntax::{NodeKind, SyntaxNode};

/// Unwind a `Pattern` node to the identifiers it binds, left to right
///
/// Wildcards bind nothing. Variants without names of their own (value
/// bindings nested in a tuple, `is Type`) also contribute nothing here;
/// nested value bindings are reached by the tree walk instead.
pub(super) fn evaluate_pattern<'a>(
    base: &BaseExtractor,
    pattern: &'a SyntaxNode,
    names: &mut Vec<&'a SyntaxNode>,
) -> Result<()> {
    if let Some(identifier_pattern) = pattern.child(NodeKind::IdentifierPattern) {
        let identifier = base
            .find_identifier(identifier_pattern)
            .ok_or_else(|| ExtractError::contract(identifier_pattern, "an identifier"))?;
        names.push(identifier);
    } else if let Some(tuple) = pattern.child(NodeKind::TuplePattern) {
        evaluate_tuple(base, tuple, names)?;
    } else if let Some(enum_case) = pattern.child(NodeKind::EnumCasePattern) {
        // `.none` carries no payload
        if let Some(payload) = enum_case.child(NodeKind::TuplePattern) {
            evaluate_tuple(base, payload, names)?;
        }
    } else if let Some(inner) = pattern.child(NodeKind::Pattern) {
        evaluate_pattern(base, inner, names)?;
    } else if let Some(expression_pattern) = pattern.child(NodeKind::ExpressionPattern) {
        evaluate_expression_pattern(base, expression_pattern, names)?;
    }
    Ok(())
}

fn evaluate_tuple<'a>(
    base: &BaseExtractor,
    tuple: &'a SyntaxNode,
    names: &mut Vec<&'a SyntaxNode>,
) -> Result<()> {
    let Some(elements) = tuple.child(NodeKind::TuplePatternElementList) else {
        return Ok(());
    };
    for element in elements.children_of(NodeKind::TuplePatternElement) {
        let inner = base.require_child(element, NodeKind::Pattern, "a pattern")?;
        evaluate_pattern(base, inner, names)?;
    }
    Ok(())
}

/// Shorthand `if let x`: the first identifier of the prefix expression
///
/// No check is made that the expression is a bare name, so `f(y)` yields `f`.
fn evaluate_expression_pattern<'a>(
    base: &BaseExtractor,
    expression_pattern: &'a SyntaxNode,
    names: &mut Vec<&'a SyntaxNode>,
) -> Result<()> {
    let expression =
        base.require_child(expression_pattern, NodeKind::Expression, "an expression")?;
    let prefix =
        base.require_child(expression, NodeKind::PrefixExpression, "a prefix expression")?;
    if let Some(identifier) = base.find_identifier(prefix) {
        names.push(identifier);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::SyntaxBuilder;

    fn evaluate(pattern: &SyntaxNode) -> Vec<String> {
        let base = BaseExtractor::new();
        let mut names = Vec::new();
        evaluate_pattern(&base, pattern, &mut names).unwrap();
        names.iter().map(|n| n.text().to_string()).collect()
    }

    #[test]
    fn test_identifier_pattern() {
        let b = SyntaxBuilder::new();
        assert_eq!(evaluate(&b.identifier_pattern("x")), vec!["x"]);
    }

    #[test]
    fn test_typed_identifier_pattern() {
        let b = SyntaxBuilder::new();
        assert_eq!(evaluate(&b.typed_identifier_pattern("x", "Int")), vec!["x"]);
    }

    #[test]
    fn test_nested_tuples_unwind_left_to_right() {
        let b = SyntaxBuilder::new();
        let pattern = b.tuple_pattern(vec![
            b.tuple_pattern(vec![b.identifier_pattern("a"), b.wildcard_pattern()]),
            b.identifier_pattern("b"),
            b.tuple_pattern(vec![b.tuple_pattern(vec![b.identifier_pattern("c")])]),
        ]);

        assert_eq!(evaluate(&pattern), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_tuple_binds_nothing() {
        let b = SyntaxBuilder::new();
        assert!(evaluate(&b.tuple_pattern(vec![])).is_empty());
    }

    #[test]
    fn test_enum_case_payload_is_a_tuple() {
        let b = SyntaxBuilder::new();
        let pattern = b.enum_case_pattern(
            "pair",
            Some(vec![b.identifier_pattern("left"), b.identifier_pattern("right")]),
        );
        assert_eq!(evaluate(&pattern), vec!["left", "right"]);
    }

    #[test]
    fn test_enum_case_without_payload() {
        let b = SyntaxBuilder::new();
        assert!(evaluate(&b.enum_case_pattern("none", None)).is_empty());
    }

    #[test]
    fn test_wrapping_pattern_recurses() {
        let b = SyntaxBuilder::new();
        let pattern = b.cast_pattern(b.identifier_pattern("shape"), "Circle");
        assert_eq!(evaluate(&pattern), vec!["shape"]);
    }

    #[test]
    fn test_wildcard_binds_nothing() {
        let b = SyntaxBuilder::new();
        assert!(evaluate(&b.wildcard_pattern()).is_empty());
    }

    #[test]
    fn test_nested_value_binding_is_left_to_the_walk() {
        let b = SyntaxBuilder::new();
        let pattern = b.tuple_pattern(vec![
            b.value_binding_pattern("let", b.identifier_pattern("a")),
            b.identifier_pattern("b"),
        ]);
        assert_eq!(evaluate(&pattern), vec!["b"]);
    }

    #[test]
    fn test_shorthand_expression_pattern() {
        let b = SyntaxBuilder::new();
        let pattern = b.expression_pattern(vec![b.identifier("user")]);
        assert_eq!(evaluate(&pattern), vec!["user"]);
    }

    #[test]
    fn test_expression_pattern_surfaces_first_identifier_of_any_expression() {
        // Known limitation: `Int(key)` is a call, yet its argument surfaces as a bound name
        let b = SyntaxBuilder::new();
        let call = b.other(vec![b.token("Int"), b.token("("), b.identifier("key"), b.token(")")]);
        let pattern = b.expression_pattern(vec![call]);
        assert_eq!(evaluate(&pattern), vec!["key"]);
    }

    #[test]
    fn test_expression_pattern_without_identifier() {
        let b = SyntaxBuilder::new();
        assert!(evaluate(&b.expression_pattern(vec![b.token("42")])).is_empty());
    }

    #[test]
    fn test_tuple_element_without_pattern_is_a_contract_violation() {
        let b = SyntaxBuilder::new();
        let element = SyntaxNode::branch(NodeKind::TuplePatternElement, vec![b.identifier("x")]);
        let list = SyntaxNode::branch(NodeKind::TuplePatternElementList, vec![element]);
        let tuple = SyntaxNode::branch(
            NodeKind::TuplePattern,
            vec![b.token("("), list, b.token(")")],
        );
        let pattern = SyntaxNode::branch(NodeKind::Pattern, vec![tuple]);

        let base = BaseExtractor::new();
        let mut names = Vec::new();
        let err = evaluate_pattern(&base, &pattern, &mut names).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::ContractViolation {
                node: NodeKind::TuplePatternElement,
                ..
            }
        ));
    }

    #[test]
    fn test_expression_pattern_without_prefix_is_a_contract_violation() {
        let b = SyntaxBuilder::new();
        let expression = SyntaxNode::branch(NodeKind::Expression, vec![b.identifier("x")]);
        let inner = SyntaxNode::branch(NodeKind::ExpressionPattern, vec![expression]);
        let pattern = SyntaxNode::branch(NodeKind::Pattern, vec![inner]);

        let base = BaseExtractor::new();
        let mut names = Vec::new();
        assert!(evaluate_pattern(&base, &pattern, &mut names).is_err());
    }
}
