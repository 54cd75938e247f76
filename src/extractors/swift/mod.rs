// Swift declaration extractor - let/var declared names from a lowered syntax tree
// Organized into focused modules:
// - patterns.rs: unwinding patterns to the names they bind
// - bindings.rs: keyword propagation across optional-binding clause lists
// - parameters.rs: function and closure parameters

pub mod bindings;
pub(super) mod parameters;
pub(super) mod patterns;

use tracing::{debug, trace};

use crate::error::{ExtractError, Result};
use crate::extractors::base::{BaseExtractor, DeclarationKind, ExtractionResult, Identifier};
use crate::syntax::{NodeKind, SyntaxNode};

pub use bindings::{resolve_binding_clauses, BindingClause};
pub use parameters::parameter_kind;

/// Collects the names bound by one binding keyword across a syntax tree
///
/// One extractor serves one request: [`extract`](Self::extract) consumes it.
pub struct DeclarationExtractor {
    base: BaseExtractor,
    target: DeclarationKind,
    declarations: Vec<Identifier>,
}

impl DeclarationExtractor {
    pub fn new(target: DeclarationKind) -> Self {
        Self::with_base(BaseExtractor::new(), target)
    }

    /// Extractor whose identifiers quote context from the base's source text
    pub fn with_base(base: BaseExtractor, target: DeclarationKind) -> Self {
        Self {
            base,
            target,
            declarations: Vec::new(),
        }
    }

    /// Walk `unit` once and return every name its target keyword binds
    ///
    /// Stops at the first malformed declaration site.
    pub fn extract(mut self, unit: &SyntaxNode) -> Result<ExtractionResult> {
        debug!(
            "Extracting {} names from {} at {}",
            self.target,
            unit.kind(),
            unit.start()
        );
        self.visit_node(unit)?;
        debug!("Found {} {} names", self.declarations.len(), self.target);
        Ok(ExtractionResult::new(self.target, self.declarations))
    }

    fn visit_node(&mut self, node: &SyntaxNode) -> Result<()> {
        match node.kind() {
            NodeKind::ConstantDeclaration => {
                if self.target == DeclarationKind::Constant {
                    let list = self.base.require_child(
                        node,
                        NodeKind::PatternInitializerList,
                        "a pattern initializer list",
                    )?;
                    self.extract_initializer_list(list)?;
                }
            }
            NodeKind::VariableDeclaration => {
                // Computed and observed variables carry a VariableName instead
                if self.target == DeclarationKind::Variable {
                    if let Some(list) = node.child(NodeKind::PatternInitializerList) {
                        self.extract_initializer_list(list)?;
                    }
                }
            }
            NodeKind::VariableName => {
                if self.target == DeclarationKind::Variable {
                    if let Some(identifier) = self.base.find_identifier(node) {
                        trace!("Bare variable {}", identifier.text());
                        self.record(identifier);
                    }
                }
            }
            NodeKind::ValueBindingPattern => {
                let keyword = node.first_leaf().text();
                if keyword == self.target.keyword() {
                    let pattern =
                        self.base
                            .require_child(node, NodeKind::Pattern, "a bound pattern")?;
                    trace!("Value binding `{}` at {}", keyword, node.start());
                    self.extract_pattern(pattern)?;
                }
            }
            NodeKind::Parameter => self.extract_parameter(node)?,
            NodeKind::OptionalBindingCondition => {
                for clause in resolve_binding_clauses(node)? {
                    if clause.keyword == self.target {
                        self.extract_pattern(clause.pattern)?;
                    }
                }
            }
            _ => {}
        }

        for child in node.children() {
            self.visit_node(child)?;
        }
        Ok(())
    }

    /// `p1 = e1, p2 = e2, ...` of a declaration whose keyword matched
    fn extract_initializer_list(&mut self, list: &SyntaxNode) -> Result<()> {
        for initializer in list.children_of(NodeKind::PatternInitializer) {
            let pattern = initializer
                .child(NodeKind::Pattern)
                .ok_or_else(|| ExtractError::contract(initializer, "a pattern"))?;
            self.extract_pattern(pattern)?;
        }
        Ok(())
    }

    fn extract_pattern(&mut self, pattern: &SyntaxNode) -> Result<()> {
        let mut names = Vec::new();
        patterns::evaluate_pattern(&self.base, pattern, &mut names)?;
        for name in names {
            self.record(name);
        }
        Ok(())
    }

    fn record(&mut self, identifier: &SyntaxNode) {
        let identifier = self.base.create_identifier(identifier, self.target);
        self.declarations.push(identifier);
    }
}
