// Base Extractor Types
//
// Data structures produced by the declaration extractors.

use serde::{Deserialize, Serialize};

/// Configuration for code context extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextConfig {
    /// Number of lines to show before the declaration
    pub lines_before: usize,
    /// Number of lines to show after the declaration
    pub lines_after: usize,
    /// Maximum line length to display (longer lines get truncated)
    pub max_line_length: usize,
    /// Whether to show line numbers in context
    pub show_line_numbers: bool,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            lines_before: 3,
            lines_after: 3,
            max_line_length: 120,
            show_line_numbers: true,
        }
    }
}

/// Which binding keyword an extraction targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    /// Immutable binding (`let`)
    Constant,
    /// Mutable binding (`var`)
    Variable,
}

impl DeclarationKind {
    /// The Swift keyword that introduces this kind of binding
    pub fn keyword(&self) -> &'static str {
        match self {
            DeclarationKind::Constant => "let",
            DeclarationKind::Variable => "var",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "let" => Some(DeclarationKind::Constant),
            "var" => Some(DeclarationKind::Variable),
            _ => None,
        }
    }
}

impl std::fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeclarationKind::Constant => write!(f, "constant"),
            DeclarationKind::Variable => write!(f, "variable"),
        }
    }
}

/// A declared name extracted from a Swift syntax tree
///
/// Positions follow the syntax tree: lines are 1-based, columns 0-based.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identifier {
    /// Identifier name as it appears in code
    pub name: String,
    /// Binding keyword the declaration site resolved to
    pub kind: DeclarationKind,
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
    /// Source lines around the identifier, when the source text was available
    pub code_context: Option<String>,
}

/// Declared names of one kind, in document order
///
/// Not deduplicated: a name declared twice appears twice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractionResult {
    pub kind: DeclarationKind,
    pub identifiers: Vec<Identifier>,
}

impl ExtractionResult {
    pub fn new(kind: DeclarationKind, identifiers: Vec<Identifier>) -> Self {
        Self { kind, identifiers }
    }

    /// Just the names, in order
    pub fn names(&self) -> Vec<&str> {
        self.identifiers.iter().map(|i| i.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Identifier> {
        self.identifiers.iter()
    }
}

impl IntoIterator for ExtractionResult {
    type Item = Identifier;
    type IntoIter = std::vec::IntoIter<Identifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.identifiers.into_iter()
    }
}

impl<'a> IntoIterator for &'a ExtractionResult {
    type Item = &'a Identifier;
    type IntoIter = std::slice::Iter<'a, Identifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.identifiers.iter()
    }
}

/// Constant and variable names of one source unit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeclarationSet {
    pub constants: ExtractionResult,
    pub variables: ExtractionResult,
}

impl DeclarationSet {
    /// Pretty-printed JSON for downstream reporters
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identifier(name: &str, kind: DeclarationKind) -> Identifier {
        Identifier {
            name: name.to_string(),
            kind,
            start_line: 1,
            start_column: 0,
            end_line: 1,
            end_column: name.len() as u32,
            code_context: None,
        }
    }

    #[test]
    fn test_keyword_round_trip() {
        for kind in [DeclarationKind::Constant, DeclarationKind::Variable] {
            assert_eq!(DeclarationKind::from_keyword(kind.keyword()), Some(kind));
        }
        assert_eq!(DeclarationKind::from_keyword("case"), None);
    }

    #[test]
    fn test_result_keeps_duplicates_in_order() {
        let result = ExtractionResult::new(
            DeclarationKind::Constant,
            vec![
                identifier("a", DeclarationKind::Constant),
                identifier("b", DeclarationKind::Constant),
                identifier("a", DeclarationKind::Constant),
            ],
        );

        assert_eq!(result.names(), vec!["a", "b", "a"]);
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_declaration_set_json_uses_snake_case_kinds() {
        let set = DeclarationSet {
            constants: ExtractionResult::new(
                DeclarationKind::Constant,
                vec![identifier("limit", DeclarationKind::Constant)],
            ),
            variables: ExtractionResult::new(DeclarationKind::Variable, vec![]),
        };

        let json = set.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["constants"]["kind"], "constant");
        assert_eq!(value["constants"]["identifiers"][0]["name"], "limit");
        assert_eq!(value["variables"]["identifiers"].as_array().unwrap().len(), 0);
    }
}
