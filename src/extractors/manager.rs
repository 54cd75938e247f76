//! ExtractorManager - Public API for declaration extraction from Swift source
//!
//! Parses source text with tree-sitter-swift, lowers it, and runs the
//! declaration extractors over the result. Identifiers extracted here carry
//! code context quoted from the source.

use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::{ExtractError, Result};
use crate::extractors::base::{
    BaseExtractor, ContextConfig, DeclarationKind, DeclarationSet, ExtractionResult,
};
use crate::extractors::swift::DeclarationExtractor;
use crate::language::detect_language_from_extension;
use crate::syntax::SyntaxNode;

/// Manager for Swift declaration extraction
pub struct ExtractorManager {
    context_config: ContextConfig,
}

impl Default for ExtractorManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractorManager {
    pub fn new() -> Self {
        Self {
            context_config: ContextConfig::default(),
        }
    }

    /// Manager that renders code context with the given settings
    pub fn with_context_config(context_config: ContextConfig) -> Self {
        Self { context_config }
    }

    pub fn supported_languages(&self) -> Vec<&'static str> {
        vec!["swift"]
    }

    /// Parse Swift source into a program unit
    pub fn parse_swift(&self, content: &str) -> Result<SyntaxNode> {
        crate::syntax::parse_swift(content)
    }

    /// Names bound by one keyword in `content`
    pub fn extract_names(&self, content: &str, kind: DeclarationKind) -> Result<ExtractionResult> {
        let unit = self.parse_swift(content)?;
        self.extractor(content, kind).extract(&unit)
    }

    /// Constant and variable names of `content`
    pub fn extract_declarations(&self, content: &str) -> Result<DeclarationSet> {
        let unit = self.parse_swift(content)?;

        let constants = self
            .extractor(content, DeclarationKind::Constant)
            .extract(&unit)?;
        let variables = self
            .extractor(content, DeclarationKind::Variable)
            .extract(&unit)?;

        debug!(
            "Extracted {} constants and {} variables",
            constants.len(),
            variables.len()
        );
        Ok(DeclarationSet {
            constants,
            variables,
        })
    }

    /// Read a `.swift` file and extract its declarations
    pub fn extract_file(&self, file_path: &Path) -> Result<DeclarationSet> {
        self.check_language(&file_path.to_string_lossy())?;
        let content = std::fs::read_to_string(file_path)?;
        debug!("Extracting declarations from {}", file_path.display());
        self.extract_declarations(&content)
    }

    /// Extract declarations from many `(file_path, content)` pairs in parallel
    ///
    /// Results keep the input order. A failing file does not stop the batch;
    /// its error is logged and returned in its slot.
    pub fn extract_files_batch(&self, files: &[(String, String)]) -> Vec<Result<DeclarationSet>> {
        files
            .par_iter()
            .map(|(file_path, content)| {
                let result = self
                    .check_language(file_path)
                    .and_then(|_| self.extract_declarations(content));
                if let Err(e) = &result {
                    warn!("Failed to extract declarations from {}: {}", file_path, e);
                }
                result
            })
            .collect()
    }

    fn extractor(&self, content: &str, kind: DeclarationKind) -> DeclarationExtractor {
        let base = BaseExtractor::with_source(content, self.context_config.clone());
        DeclarationExtractor::with_base(base, kind)
    }

    fn check_language(&self, file_path: &str) -> Result<()> {
        let extension = Path::new(file_path)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");

        match detect_language_from_extension(extension) {
            Some("swift") => Ok(()),
            _ => Err(ExtractError::UnsupportedLanguage(format!(
                "{} (only .swift files are supported)",
                file_path
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SOURCE: &str = r#"import Foundation

let maxRetries = 3
var attempts = 0

func fetch(from url: String) {
    if let data = load(url), var body = decode(data) {
        print(body)
    }
}
"#;

    #[test]
    fn test_supported_languages() {
        assert_eq!(ExtractorManager::new().supported_languages(), vec!["swift"]);
    }

    #[test]
    fn test_extract_declarations_splits_by_keyword() {
        let manager = ExtractorManager::new();
        let set = manager.extract_declarations(SOURCE).unwrap();

        assert_eq!(
            set.constants.names(),
            vec!["maxRetries", "from", "url", "data"]
        );
        assert_eq!(set.variables.names(), vec!["attempts", "body"]);
    }

    #[test]
    fn test_identifiers_carry_code_context() {
        let manager = ExtractorManager::with_context_config(ContextConfig {
            lines_before: 0,
            lines_after: 0,
            max_line_length: 120,
            show_line_numbers: true,
        });
        let result = manager
            .extract_names("let a = 1\nlet b = 2\n", DeclarationKind::Constant)
            .unwrap();

        assert_eq!(result.names(), vec!["a", "b"]);
        let b = &result.identifiers[1];
        assert_eq!((b.start_line, b.start_column), (2, 4));
        assert_eq!(b.code_context.as_deref(), Some("  ➤   2: let b = 2"));
    }

    #[test]
    fn test_extract_file_reads_swift_source() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Counter.swift");
        fs::write(&path, "var count = 0\nlet step = 1\n").unwrap();

        let set = ExtractorManager::new().extract_file(&path).unwrap();
        assert_eq!(set.variables.names(), vec!["count"]);
        assert_eq!(set.constants.names(), vec!["step"]);
    }

    #[test]
    fn test_extract_file_rejects_other_languages() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("main.rs");
        fs::write(&path, "let x = 1;").unwrap();

        let err = ExtractorManager::new().extract_file(&path).unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedLanguage(_)));
    }

    #[test]
    fn test_extract_file_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Missing.swift");

        let err = ExtractorManager::new().extract_file(&path).unwrap_err();
        assert!(matches!(err, ExtractError::Io(_)));
    }

    #[test]
    fn test_batch_preserves_order_and_isolates_failures() {
        let files = vec![
            ("a.swift".to_string(), "let first = 1\n".to_string()),
            ("b.py".to_string(), "second = 2\n".to_string()),
            ("c.swift".to_string(), "var third = 3\n".to_string()),
        ];

        let results = ExtractorManager::new().extract_files_batch(&files);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().constants.names(), vec!["first"]);
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().variables.names(), vec!["third"]);
    }

    #[test]
    fn test_declaration_set_serializes_to_json() {
        let set = ExtractorManager::new()
            .extract_declarations("let answer = 42\n")
            .unwrap();
        let json = set.to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["constants"]["identifiers"][0]["name"], "answer");
        assert_eq!(value["constants"]["identifiers"][0]["start_line"], 1);
    }
}
