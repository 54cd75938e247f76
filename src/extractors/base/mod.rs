// Base Extractor Types for declaration extraction
//
// - types.rs: Data structures (Identifier, DeclarationKind, ExtractionResult, ContextConfig)
// - extractor.rs: BaseExtractor implementation (source text and code context)
// - tree_methods.rs: Syntax tree navigation, including the identifier locator
// - creation_methods.rs: Identifier construction from syntax nodes

pub mod creation_methods;
pub mod extractor;
pub mod tree_methods;
pub mod types;

// Re-export key types for external use
pub use extractor::BaseExtractor;
pub use types::{ContextConfig, DeclarationKind, DeclarationSet, ExtractionResult, Identifier};
