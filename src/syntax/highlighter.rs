//! Highlighter façade
//!
//! A `Highlighter` binds one theme to one language's pattern table and
//! turns whole code blocks into numbered, tokenized lines.

use serde::Serialize;
use tracing::trace;

use super::language::{tokenize_line, Language};
use super::rules::TokenPattern;
use super::style::{style_for_name, TokenStyle};
use super::theme::Theme;
use super::tokens::{Token, TokenType};

/// Language used when none is given
pub const DEFAULT_LANGUAGE: &str = "javascript";

/// One tokenized line of a code block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightedLine {
    pub tokens: Vec<Token>,
    /// 1-based
    pub line_number: usize,
    pub content: String,
}

impl HighlightedLine {
    /// Rebuild the line from its token values
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.value.as_str()).collect()
    }
}

/// A reusable highlighter for one theme/language pair
#[derive(Debug, Clone)]
pub struct Highlighter {
    theme: Theme,
    language: Language,
    patterns: &'static [TokenPattern],
}

impl Highlighter {
    /// Create a highlighter; unknown languages use the JavaScript table
    pub fn new(theme: Theme, language: &str) -> Self {
        let language = Language::from_name(language);
        Self::for_language(theme, language)
    }

    /// Create a highlighter for an already resolved language
    pub fn for_language(theme: Theme, language: Language) -> Self {
        Self {
            theme,
            language,
            patterns: language.patterns(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Split `code` on `\n` and tokenize every line
    ///
    /// A trailing newline yields a final empty line, and empty input
    /// yields one empty line.
    pub fn highlight_code(&self, code: &str) -> Vec<HighlightedLine> {
        trace!(language = %self.language, bytes = code.len(), "highlighting");
        code.split('\n')
            .enumerate()
            .map(|(idx, line)| HighlightedLine {
                tokens: tokenize_line(self.patterns, line),
                line_number: idx + 1,
                content: line.to_string(),
            })
            .collect()
    }

    /// Color for a category label
    pub fn color_for_token_type(&self, token_type: &str) -> &str {
        match TokenType::from_name(token_type) {
            Some(token_type) => self.theme.color_for(token_type),
            None => &self.theme.foreground,
        }
    }

    /// Style triple for a category label
    pub fn style_for_token_type(&self, token_type: &str) -> TokenStyle {
        style_for_name(token_type, &self.theme)
    }
}

/// Highlight `code` with a throwaway highlighter
pub fn highlight_code(code: &str, theme: &Theme, language: Option<&str>) -> Vec<HighlightedLine> {
    Highlighter::new(theme.clone(), language.unwrap_or(DEFAULT_LANGUAGE)).highlight_code(code)
}

/// Style for a category label under `theme`
pub fn token_style(token_type: &str, theme: &Theme) -> TokenStyle {
    Highlighter::new(theme.clone(), DEFAULT_LANGUAGE).style_for_token_type(token_type)
}
