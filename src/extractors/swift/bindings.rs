// Optional-binding clause lists
//
// In `if let a = x, b = y, var c = z, d = w` a clause that omits its keyword
// takes the keyword of the nearest clause before it that spelled one.

use crate::error::{ExtractError, Result};
use crate::extractors::base::DeclarationKind;
use crate::syntax::{NodeKind, SyntaxNode};

/// One clause of an optional-binding condition with its keyword resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindingClause<'a> {
    pub keyword: DeclarationKind,
    pub pattern: &'a SyntaxNode,
    /// Whether the clause spelled its keyword rather than inheriting it
    pub explicit: bool,
}

/// Resolve the keyword in force for every clause of an `OptionalBindingCondition`
///
/// Clauses come back in source order, head first.
pub fn resolve_binding_clauses(condition: &SyntaxNode) -> Result<Vec<BindingClause<'_>>> {
    let head = condition
        .child(NodeKind::OptionalBindingHead)
        .ok_or_else(|| ExtractError::contract(condition, "a binding head"))?;
    let first = explicit_clause(head)?;

    let mut current = first.keyword;
    let mut clauses = vec![first];

    let Some(list) = condition.child(NodeKind::OptionalBindingContinuationList) else {
        return Ok(clauses);
    };

    for continuation in list.children_of(NodeKind::OptionalBindingContinuation) {
        let clause = match continuation.child(NodeKind::OptionalBindingHead) {
            Some(head) => explicit_clause(head)?,
            None => {
                let pattern = continuation
                    .child(NodeKind::Pattern)
                    .ok_or_else(|| ExtractError::contract(continuation, "a pattern"))?;
                BindingClause {
                    keyword: current,
                    pattern,
                    explicit: false,
                }
            }
        };
        current = clause.keyword;
        clauses.push(clause);
    }

    Ok(clauses)
}

/// `let pattern = value` / `var pattern = value`
fn explicit_clause(head: &SyntaxNode) -> Result<BindingClause<'_>> {
    let keyword = DeclarationKind::from_keyword(head.first_leaf().text())
        .ok_or_else(|| ExtractError::contract(head, "a let or var keyword"))?;
    let pattern = head
        .child(NodeKind::Pattern)
        .ok_or_else(|| ExtractError::contract(head, "a pattern"))?;

    Ok(BindingClause {
        keyword,
        pattern,
        explicit: true,
    })
}
