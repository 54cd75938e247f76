use tracing::trace;

use super::DeclarationExtractor;
use crate::error::Result;
use crate::extractors::base::DeclarationKind;
use crate::syntax::{NodeKind, SyntaxNode};

/// Parameters bind constants unless marked `var`
pub fn parameter_kind(parameter: &SyntaxNode) -> DeclarationKind {
    if parameter.has_child_text("var") {
        DeclarationKind::Variable
    } else {
        DeclarationKind::Constant
    }
}

/// Extracts function and closure parameter names
impl DeclarationExtractor {
    /// Records the external (argument label) name, then the local name
    pub(super) fn extract_parameter(&mut self, parameter: &SyntaxNode) -> Result<()> {
        if parameter_kind(parameter) != self.target {
            return Ok(());
        }

        let local = self.base.require_child(
            parameter,
            NodeKind::LocalParameterName,
            "a local parameter name",
        )?;

        if let Some(external) = parameter.child(NodeKind::ExternalParameterName) {
            // `_` labels carry no identifier
            if let Some(identifier) = self.base.find_identifier(external) {
                trace!("Parameter label {}", identifier.text());
                self.record(identifier);
            }
        }
        if let Some(identifier) = self.base.find_identifier(local) {
            self.record(identifier);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractError;
    use crate::syntax::SyntaxBuilder;

    fn parameter_names(parameter: &SyntaxNode, kind: DeclarationKind) -> Vec<String> {
        DeclarationExtractor::new(kind)
            .extract(parameter)
            .unwrap()
            .names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_parameter_kind() {
        let b = SyntaxBuilder::new();
        assert_eq!(parameter_kind(&b.parameter(None, "x", true)), DeclarationKind::Variable);
        assert_eq!(parameter_kind(&b.parameter(None, "x", false)), DeclarationKind::Constant);
    }

    #[test]
    fn test_external_name_precedes_local_name() {
        let b = SyntaxBuilder::new();
        let parameter = b.parameter(Some("from"), "start", false);

        assert_eq!(
            parameter_names(&parameter, DeclarationKind::Constant),
            vec!["from", "start"]
        );
        assert!(parameter_names(&parameter, DeclarationKind::Variable).is_empty());
    }

    #[test]
    fn test_underscore_label_is_skipped() {
        let b = SyntaxBuilder::new();
        let parameter = b.parameter(Some("_"), "value", true);
        assert_eq!(parameter_names(&parameter, DeclarationKind::Variable), vec!["value"]);
    }

    #[test]
    fn test_parameter_without_local_name_is_a_contract_violation() {
        let b = SyntaxBuilder::new();
        let broken = SyntaxNode::branch(NodeKind::Parameter, vec![b.type_annotation("Int")]);

        let err = DeclarationExtractor::new(DeclarationKind::Constant)
            .extract(&broken)
            .unwrap_err();
        assert!(matches!(
            err,
            ExtractError::ContractViolation {
                node: NodeKind::Parameter,
                ..
            }
        ));
    }
}
