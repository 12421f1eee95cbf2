//! Syntax highlighting
//!
//! This module provides the regex-table tokenizer and its surroundings:
//! - Pattern tables per language (`builtin`)
//! - Line tokenization with overlap resolution (`language`)
//! - Themes and the category → style mapping (`theme`, `style`)
//! - The `Highlighter` façade over whole code blocks

mod builtin;
mod highlighter;
mod language;
mod rules;
mod style;
mod theme;
mod tokens;

pub use highlighter::{highlight_code, token_style, HighlightedLine, Highlighter, DEFAULT_LANGUAGE};
pub use language::{tokenize_line, Language};
pub use rules::{PatternMatch, TokenPattern};
pub use style::{style_for, style_for_name, FontStyle, FontWeight, TokenStyle};
pub use theme::{parse_hex_color, Theme};
pub use tokens::{Token, TokenType};
