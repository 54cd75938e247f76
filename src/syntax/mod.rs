//! Swift syntax tree consumed by the declaration extractors
//!
//! - `node.rs` - the immutable [`SyntaxNode`] tree and its [`NodeKind`] tags
//! - `lower.rs` - tree-sitter-swift parse trees lowered into [`SyntaxNode`]s
//! - `build.rs` - hand assembly of trees (tests, foreign front ends)

pub mod build;
pub mod lower;
pub mod node;

pub use build::SyntaxBuilder;
pub use lower::{lower_tree, parse_swift};
pub use node::{NodeKind, Position, Span, SyntaxNode};
