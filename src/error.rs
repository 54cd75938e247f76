use thiserror::Error;

use crate::syntax::{NodeKind, Position, SyntaxNode};

#[derive(Error, Debug)]
pub enum ExtractError {
    /// The syntax tree does not have the shape its parser guarantees
    #[error("Malformed {node} at {position}: expected {expected}")]
    ContractViolation {
        node: NodeKind,
        expected: &'static str,
        position: Position,
    },
    #[error("Parsing error: {0}")]
    Parse(String),
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("Language setup error: {0}")]
    Language(#[from] anyhow::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExtractError {
    /// `node` lacks the child its production requires
    pub fn contract(node: &SyntaxNode, expected: &'static str) -> Self {
        ExtractError::ContractViolation {
            node: node.kind(),
            expected,
            position: node.start(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
