//! Declaration extraction entry points
//!
//! The two pure functions every caller goes through. Each builds one
//! [`DeclarationExtractor`] for its keyword, walks the given subtree once and
//! returns the names in document order.

use crate::error::Result;
use crate::extractors::base::{DeclarationKind, ExtractionResult};
use crate::extractors::swift::DeclarationExtractor;
use crate::syntax::SyntaxNode;

/// Every name bound with `let` under `unit`
///
/// `unit` is normally a program unit, but any subtree is accepted.
///
/// # Example
/// ```rust
/// use swiftdecl_core::{extract_constant_names, parse_swift};
///
/// let unit = parse_swift("let a = 1, b = 2\n")?;
/// assert_eq!(extract_constant_names(&unit)?.names(), vec!["a", "b"]);
/// # Ok::<(), swiftdecl_core::ExtractError>(())
/// ```
pub fn extract_constant_names(unit: &SyntaxNode) -> Result<ExtractionResult> {
    extract_names(unit, DeclarationKind::Constant)
}

/// Every name bound with `var` under `unit`
pub fn extract_variable_names(unit: &SyntaxNode) -> Result<ExtractionResult> {
    extract_names(unit, DeclarationKind::Variable)
}

/// Names bound by the given keyword under `unit`
pub fn extract_names(unit: &SyntaxNode, kind: DeclarationKind) -> Result<ExtractionResult> {
    DeclarationExtractor::new(kind).extract(unit)
}
