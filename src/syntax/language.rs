//! Language selection and line tokenization
//!
//! Each `Language` owns an immutable pattern table. `tokenize_line` runs
//! a table over one line and resolves overlapping matches into a gap-free
//! token sequence.

use std::fmt;
use std::sync::OnceLock;

use tracing::debug;

use super::builtin;
use super::rules::{PatternMatch, TokenPattern};
use super::tokens::{Token, TokenType};

/// Languages with a builtin pattern table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    JavaScript,
    TypeScript,
    Python,
    Json,
}

static JAVASCRIPT: OnceLock<Vec<TokenPattern>> = OnceLock::new();
static TYPESCRIPT: OnceLock<Vec<TokenPattern>> = OnceLock::new();
static PYTHON: OnceLock<Vec<TokenPattern>> = OnceLock::new();
static JSON: OnceLock<Vec<TokenPattern>> = OnceLock::new();

impl Language {
    /// Resolve a language identifier, case-insensitively
    ///
    /// Unknown identifiers fall back to JavaScript.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "javascript" | "js" | "jsx" | "mjs" | "cjs" => Language::JavaScript,
            "typescript" | "ts" | "tsx" => Language::TypeScript,
            "python" | "py" => Language::Python,
            "json" => Language::Json,
            other => {
                debug!(language = other, "unsupported language, using javascript");
                Language::JavaScript
            }
        }
    }

    /// Guess a language from a file extension, if it is one we know
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "js" | "jsx" | "mjs" | "cjs" => Some(Language::JavaScript),
            "ts" | "tsx" | "mts" | "cts" => Some(Language::TypeScript),
            "py" | "pyw" => Some(Language::Python),
            "json" => Some(Language::Json),
            _ => None,
        }
    }

    /// Canonical identifier
    pub fn name(&self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Python => "python",
            Language::Json => "json",
        }
    }

    /// The compiled pattern table, built on first use
    pub fn patterns(&self) -> &'static [TokenPattern] {
        match self {
            Language::JavaScript => compiled(&JAVASCRIPT, *self, builtin::javascript::patterns),
            Language::TypeScript => compiled(&TYPESCRIPT, *self, builtin::typescript::patterns),
            Language::Python => compiled(&PYTHON, *self, builtin::python::patterns),
            Language::Json => compiled(&JSON, *self, builtin::json::patterns),
        }
    }
}

fn compiled(
    cell: &'static OnceLock<Vec<TokenPattern>>,
    language: Language,
    build: fn() -> Vec<TokenPattern>,
) -> &'static [TokenPattern] {
    cell.get_or_init(|| {
        let table = build();
        debug!(language = language.name(), patterns = table.len(), "compiled pattern table");
        table
    })
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify one line into ordered, non-overlapping, gap-free tokens
///
/// Overlaps are settled by greedy interval scheduling: matches are taken
/// in (start, priority) order and any match intersecting an accepted one
/// is dropped whole. Whatever it covered beyond the winner ends up in a
/// `text` token.
pub fn tokenize_line(patterns: &[TokenPattern], line: &str) -> Vec<Token> {
    if line.trim().is_empty() {
        return vec![Token::new(TokenType::Text, line, 0, line.len())];
    }

    let mut candidates: Vec<PatternMatch> = patterns
        .iter()
        .flat_map(|pattern| pattern.matches(line))
        .collect();

    // Stable sort keeps table order for equal (start, priority) pairs.
    candidates.sort_by_key(|m| (m.start, m.priority));

    // Candidates arrive in start order, so a candidate intersects an
    // accepted span exactly when it starts before the furthest accepted end.
    let mut accepted: Vec<PatternMatch> = Vec::new();
    let mut covered_until = 0;
    for candidate in candidates {
        if candidate.start >= covered_until {
            covered_until = candidate.end;
            accepted.push(candidate);
        }
    }
    accepted.sort_by_key(|m| m.start);
    debug_assert!(accepted.windows(2).all(|w| !w[0].overlaps(&w[1])));

    let mut tokens = Vec::with_capacity(accepted.len() * 2 + 1);
    let mut cursor = 0;
    for m in &accepted {
        if m.start > cursor {
            tokens.push(Token::new(TokenType::Text, line, cursor, m.start));
        }
        tokens.push(Token::new(m.token_type, line, m.start, m.end));
        cursor = m.end;
    }
    if cursor < line.len() {
        tokens.push(Token::new(TokenType::Text, line, cursor, line.len()));
    }

    tokens
}
