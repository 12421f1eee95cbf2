//! Token types for syntax highlighting
//!
//! This module defines the lexical categories a pattern table can
//! assign, and the `Token` produced for every piece of a line.

use serde::Serialize;

/// Lexical categories for syntax highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenType {
    /// Language keywords (if, const, return, etc.)
    Keyword,
    /// String literals
    String,
    /// Numeric literals
    Number,
    /// true / false
    Boolean,
    /// null, undefined, None
    Null,
    /// Line and single-line block comments
    Comment,
    /// Operators (+, ===, =>, etc.)
    Operator,
    /// Brackets, separators, dots
    Punctuation,
    /// Called identifiers
    Function,
    /// Plain identifiers
    Variable,
    /// Identifiers accessed through a dot
    Property,
    /// Capitalized type-like identifiers
    ClassName,
    /// ALL_CAPS identifiers
    Constant,
    /// Regular expression literals
    Regex,
    /// Escape sequences outside strings
    Escape,
    /// Unclassified text between matches
    Text,
}

impl TokenType {
    /// Every classified category, in declaration order
    pub const CLASSIFIED: [TokenType; 15] = [
        TokenType::Keyword,
        TokenType::String,
        TokenType::Number,
        TokenType::Boolean,
        TokenType::Null,
        TokenType::Comment,
        TokenType::Operator,
        TokenType::Punctuation,
        TokenType::Function,
        TokenType::Variable,
        TokenType::Property,
        TokenType::ClassName,
        TokenType::Constant,
        TokenType::Regex,
        TokenType::Escape,
    ];

    /// The category label used by themes and renderers
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Keyword => "keyword",
            TokenType::String => "string",
            TokenType::Number => "number",
            TokenType::Boolean => "boolean",
            TokenType::Null => "null",
            TokenType::Comment => "comment",
            TokenType::Operator => "operator",
            TokenType::Punctuation => "punctuation",
            TokenType::Function => "function",
            TokenType::Variable => "variable",
            TokenType::Property => "property",
            TokenType::ClassName => "className",
            TokenType::Constant => "constant",
            TokenType::Regex => "regex",
            TokenType::Escape => "escape",
            TokenType::Text => "text",
        }
    }

    /// Parse a category label; unknown labels give `None`
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "keyword" => Some(TokenType::Keyword),
            "string" => Some(TokenType::String),
            "number" => Some(TokenType::Number),
            "boolean" => Some(TokenType::Boolean),
            "null" => Some(TokenType::Null),
            "comment" => Some(TokenType::Comment),
            "operator" => Some(TokenType::Operator),
            "punctuation" => Some(TokenType::Punctuation),
            "function" => Some(TokenType::Function),
            "variable" => Some(TokenType::Variable),
            "property" => Some(TokenType::Property),
            "className" => Some(TokenType::ClassName),
            "constant" => Some(TokenType::Constant),
            "regex" => Some(TokenType::Regex),
            "escape" => Some(TokenType::Escape),
            "text" => Some(TokenType::Text),
            _ => None,
        }
    }
}

/// A classified piece of one line
///
/// `start` and `end` are byte offsets into the line, `end` exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub token_type: TokenType,
    pub value: String,
    pub start: usize,
    pub end: usize,
}

impl Token {
    /// Build a token for `line[start..end]`
    pub fn new(token_type: TokenType, line: &str, start: usize, end: usize) -> Self {
        Self {
            token_type,
            value: line[start..end].to_string(),
            start,
            end,
        }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Only a blank line's single text token can be empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
