// Swiftdecl Core - let/var declared names from Swift syntax trees
//
// Source is parsed with tree-sitter-swift, lowered into an owned syntax tree
// (syntax/), and walked by the declaration extractors (extractors/).

pub mod error;
pub mod extractors;
pub mod language;
pub mod syntax;

pub use error::{ExtractError, Result};
pub use extractors::{
    extract_constant_names, extract_names, extract_variable_names, ContextConfig,
    DeclarationKind, DeclarationSet, ExtractionResult, ExtractorManager, Identifier,
};
pub use syntax::{parse_swift, NodeKind, Position, Span, SyntaxBuilder, SyntaxNode};
