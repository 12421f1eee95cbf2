//! codelight - regex-table syntax highlighting for code snippets
//!
//! ```
//! use codelight::{Highlighter, Theme, TokenType};
//!
//! let highlighter = Highlighter::new(Theme::dark(), "javascript");
//! let lines = highlighter.highlight_code("const x = 1;");
//! assert_eq!(lines[0].tokens[0].token_type, TokenType::Keyword);
//! ```

pub mod error;
pub mod syntax;

pub use error::{HighlightError, Result};
pub use syntax::{
    highlight_code, token_style, HighlightedLine, Highlighter, Language, Theme, Token,
    TokenStyle, TokenType, DEFAULT_LANGUAGE,
};
