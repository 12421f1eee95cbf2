//! Color themes for token categories
//!
//! A `Theme` is a plain lookup table from category to color string. The
//! highlighter trusts whatever theme it is given; validation happens here,
//! when a theme is loaded from TOML.
//!
//! Example theme file:
//! ```toml
//! foreground = "#d4d4d4"
//! background = "#1e1e1e"
//! keyword = "#c586c0"
//! string = "#ce9178"
//! # ... one entry per category, className in camelCase
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::tokens::TokenType;
use crate::error::{HighlightError, Result};

/// Display colors for every token category
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Theme {
    /// Color for plain text and unknown categories
    pub foreground: String,
    /// Optional block background
    #[serde(default)]
    pub background: Option<String>,
    pub keyword: String,
    pub string: String,
    pub number: String,
    pub boolean: String,
    pub null: String,
    pub comment: String,
    pub operator: String,
    pub punctuation: String,
    pub function: String,
    pub variable: String,
    pub property: String,
    pub class_name: String,
    pub constant: String,
    pub regex: String,
    pub escape: String,
}

impl Theme {
    /// Dark palette
    pub fn dark() -> Self {
        Self {
            foreground: "#d4d4d4".into(),
            background: Some("#1e1e1e".into()),
            keyword: "#c586c0".into(),
            string: "#ce9178".into(),
            number: "#b5cea8".into(),
            boolean: "#569cd6".into(),
            null: "#569cd6".into(),
            comment: "#6a9955".into(),
            operator: "#d4d4d4".into(),
            punctuation: "#808080".into(),
            function: "#dcdcaa".into(),
            variable: "#9cdcfe".into(),
            property: "#9cdcfe".into(),
            class_name: "#4ec9b0".into(),
            constant: "#4fc1ff".into(),
            regex: "#d16969".into(),
            escape: "#d7ba7d".into(),
        }
    }

    /// Light palette
    pub fn light() -> Self {
        Self {
            foreground: "#24292e".into(),
            background: Some("#ffffff".into()),
            keyword: "#d73a49".into(),
            string: "#032f62".into(),
            number: "#005cc5".into(),
            boolean: "#005cc5".into(),
            null: "#005cc5".into(),
            comment: "#6a737d".into(),
            operator: "#d73a49".into(),
            punctuation: "#586069".into(),
            function: "#6f42c1".into(),
            variable: "#e36209".into(),
            property: "#005cc5".into(),
            class_name: "#6f42c1".into(),
            constant: "#005cc5".into(),
            regex: "#032f62".into(),
            escape: "#22863a".into(),
        }
    }

    /// Look up a builtin theme by name
    pub fn builtin(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "dark" => Ok(Self::dark()),
            "light" => Ok(Self::light()),
            _ => Err(HighlightError::UnknownTheme(name.to_string())),
        }
    }

    /// Parse and validate a theme from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let theme: Theme = toml::from_str(contents)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Load and validate a theme file
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading theme");
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Color for a category; `Text` uses the foreground
    pub fn color_for(&self, token_type: TokenType) -> &str {
        match token_type {
            TokenType::Keyword => &self.keyword,
            TokenType::String => &self.string,
            TokenType::Number => &self.number,
            TokenType::Boolean => &self.boolean,
            TokenType::Null => &self.null,
            TokenType::Comment => &self.comment,
            TokenType::Operator => &self.operator,
            TokenType::Punctuation => &self.punctuation,
            TokenType::Function => &self.function,
            TokenType::Variable => &self.variable,
            TokenType::Property => &self.property,
            TokenType::ClassName => &self.class_name,
            TokenType::Constant => &self.constant,
            TokenType::Regex => &self.regex,
            TokenType::Escape => &self.escape,
            TokenType::Text => &self.foreground,
        }
    }

    /// Check that every color is a `#rgb` or `#rrggbb` hex string
    pub fn validate(&self) -> Result<()> {
        check_color("foreground", &self.foreground)?;
        if let Some(background) = &self.background {
            check_color("background", background)?;
        }
        for token_type in TokenType::CLASSIFIED {
            check_color(token_type.name(), self.color_for(token_type))?;
        }
        Ok(())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

fn check_color(key: &'static str, value: &str) -> Result<()> {
    if parse_hex_color(value).is_some() {
        Ok(())
    } else {
        Err(HighlightError::InvalidColor {
            key,
            value: value.to_string(),
        })
    }
}

/// Parse `#rgb` / `#rrggbb` into RGB components
pub fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|d| d * 17);
            Some((digit(0)?, digit(1)?, digit(2)?))
        }
        6 => {
            let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some((pair(0)?, pair(2)?, pair(4)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dark_toml() -> String {
        let theme = Theme::dark();
        let mut out = format!("foreground = \"{}\"\n", theme.foreground);
        for token_type in TokenType::CLASSIFIED {
            out.push_str(&format!(
                "{} = \"{}\"\n",
                token_type.name(),
                theme.color_for(token_type)
            ));
        }
        out
    }

    #[test]
    fn test_builtin_themes_validate() {
        assert!(Theme::dark().validate().is_ok());
        assert!(Theme::light().validate().is_ok());
        assert_eq!(Theme::builtin("Light").unwrap(), Theme::light());
        assert!(matches!(Theme::builtin("neon"), Err(HighlightError::UnknownTheme(_))));
    }

    #[test]
    fn test_from_toml() {
        let theme = Theme::from_toml_str(&dark_toml()).unwrap();
        assert_eq!(theme.class_name, Theme::dark().class_name);
        assert_eq!(theme.background, None);
    }

    #[test]
    fn test_missing_key_is_rejected() {
        let contents = dark_toml().replace("comment = ", "# comment = ");
        let err = Theme::from_toml_str(&contents).unwrap_err();
        assert!(matches!(err, HighlightError::ThemeParse(_)));
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let contents = dark_toml().replace("#c586c0", "purple");
        let err = Theme::from_toml_str(&contents).unwrap_err();
        assert!(matches!(err, HighlightError::InvalidColor { key: "keyword", .. }));
    }

    #[test]
    fn test_text_uses_foreground() {
        let theme = Theme::light();
        assert_eq!(theme.color_for(TokenType::Text), theme.foreground);
        assert_eq!(theme.color_for(TokenType::ClassName), theme.class_name);
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#ff8000"), Some((255, 128, 0)));
        assert_eq!(parse_hex_color("#fff"), Some((255, 255, 255)));
        assert_eq!(parse_hex_color("ff8000"), None);
        assert_eq!(parse_hex_color("#ff80"), None);
        assert_eq!(parse_hex_color("#gg0000"), None);
    }
}
