//! Language Support - tree-sitter language configuration
//!
//! Swift is the only language the declaration extractors understand, but the
//! lookup stays keyed by language name so callers can route files the same way
//! for every front end.

use anyhow::Result;

/// Get tree-sitter language parser for a given language name
pub fn get_tree_sitter_language(language: &str) -> Result<tree_sitter::Language> {
    match language {
        "swift" => Ok(tree_sitter_swift::LANGUAGE.into()),
        _ => Err(anyhow::anyhow!(
            "Unsupported language: '{}'. Supported languages: swift",
            language
        )),
    }
}

/// Detect language from file extension
///
/// Returns the language name that can be passed to `get_tree_sitter_language()`.
pub fn detect_language_from_extension(extension: &str) -> Option<&'static str> {
    match extension {
        "swift" => Some("swift"),
        _ => None,
    }
}
