// BaseExtractor implementation
//
// Holds the optional source text and context settings shared by the
// declaration extractors.

use std::borrow::Cow;

use tracing::debug;

use super::types::ContextConfig;
use crate::syntax::SyntaxNode;

/// Shared state for declaration extractors
///
/// The source text is optional: trees assembled by hand (or handed over by
/// another front end) have no text to quote, so identifiers simply carry no
/// code context.
#[derive(Debug, Clone, Default)]
pub struct BaseExtractor {
    pub content: Option<String>,
    pub context_config: ContextConfig,
}

impl BaseExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extractor that quotes surrounding lines from `content`
    pub fn with_source(content: impl Into<String>, context_config: ContextConfig) -> Self {
        let content = content.into();
        debug!("BaseExtractor over {} bytes of source", content.len());
        Self {
            content: Some(content),
            context_config,
        }
    }

    /// Text of a syntax node
    pub fn get_node_text(&self, node: &SyntaxNode) -> String {
        node.text().to_string()
    }

    /// Source lines around `first_line..=last_line` (1-based), declaration lines marked
    ///
    /// `None` without source text or when the lines lie past its end.
    pub(crate) fn extract_code_context(&self, first_line: u32, last_line: u32) -> Option<String> {
        let lines: Vec<&str> = self.content.as_deref()?.lines().collect();
        let first = (first_line.max(1) - 1) as usize;
        let last = (last_line.max(first_line).max(1) - 1) as usize;
        if first >= lines.len() {
            return None;
        }

        let config = &self.context_config;
        let window_start = first.saturating_sub(config.lines_before);
        let window_end = (last + config.lines_after).min(lines.len() - 1);

        let rendered: Vec<String> = (window_start..=window_end)
            .map(|row| {
                let marker = if (first..=last).contains(&row) { "  ➤ " } else { "    " };
                let text = clip_line(lines[row], config.max_line_length);
                if config.show_line_numbers {
                    format!("{}{:3}: {}", marker, row + 1, text)
                } else {
                    format!("{}{}", marker, text)
                }
            })
            .collect();

        Some(rendered.join("\n"))
    }
}

/// Cut `line` to `max_len` bytes on a char boundary, ending in `...`
fn clip_line(line: &str, max_len: usize) -> Cow<'_, str> {
    if line.len() <= max_len {
        return Cow::Borrowed(line);
    }
    let mut cut = max_len.saturating_sub(3);
    while cut > 0 && !line.is_char_boundary(cut) {
        cut -= 1;
    }
    Cow::Owned(format!("{}...", &line[..cut]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "import Foundation\n\nlet answer = 42\nvar counter = 0\nprint(answer)\n";

    #[test]
    fn test_no_context_without_source() {
        let base = BaseExtractor::new();
        assert!(base.extract_code_context(1, 1).is_none());
    }

    #[test]
    fn test_context_marks_declaration_line() {
        let config = ContextConfig {
            lines_before: 1,
            lines_after: 1,
            ..ContextConfig::default()
        };
        let base = BaseExtractor::with_source(SOURCE, config);

        let context = base.extract_code_context(3, 3).unwrap();
        let lines: Vec<&str> = context.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "      2: ");
        assert_eq!(lines[1], "  ➤   3: let answer = 42");
        assert_eq!(lines[2], "      4: var counter = 0");
    }

    #[test]
    fn test_context_truncates_long_lines() {
        let config = ContextConfig {
            lines_before: 0,
            lines_after: 0,
            max_line_length: 10,
            show_line_numbers: false,
        };
        let base = BaseExtractor::with_source("let identifierThatIsLong = 1", config);

        assert_eq!(base.extract_code_context(1, 1).unwrap(), "  ➤ let ide...");
    }

    #[test]
    fn test_multi_line_span_marks_every_line() {
        let config = ContextConfig {
            lines_before: 0,
            lines_after: 0,
            ..ContextConfig::default()
        };
        let base = BaseExtractor::with_source(SOURCE, config);

        let context = base.extract_code_context(3, 4).unwrap();
        assert_eq!(context, "  ➤   3: let answer = 42\n  ➤   4: var counter = 0");
    }

    #[test]
    fn test_multibyte_line_is_clipped_on_a_char_boundary() {
        assert_eq!(clip_line("let café = 1", 11), "let caf...");
        assert_eq!(clip_line("short", 8), "short");
    }

    #[test]
    fn test_line_past_end_has_no_context() {
        let base = BaseExtractor::with_source(SOURCE, ContextConfig::default());
        assert!(base.extract_code_context(41, 41).is_none());
    }
}
