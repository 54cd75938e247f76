//! Declaration extractors
//!
//! - `base` - shared extractor state, identifier data and tree navigation
//! - `swift` - the let/var declaration walk over lowered Swift syntax trees
//! - `factory` - the `extract_constant_names` / `extract_variable_names` entry points
//! - `manager` - ExtractorManager public API over source text and files

pub mod base;
pub mod factory;
pub mod manager;
pub mod swift;

// Re-export the public API
pub use base::{ContextConfig, DeclarationKind, DeclarationSet, ExtractionResult, Identifier};
pub use factory::{extract_constant_names, extract_names, extract_variable_names};
pub use manager::ExtractorManager;
