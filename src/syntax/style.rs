//! Style mapping for token categories
//!
//! Turns a category and a theme into the color/weight/style triple a
//! renderer applies. The mapping is total: unknown categories render as
//! plain foreground text.

use serde::Serialize;

use super::theme::Theme;
use super::tokens::TokenType;

/// Font weight override
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FontWeight {
    #[serde(rename = "bold")]
    Bold,
    #[serde(rename = "600")]
    SemiBold,
    #[serde(rename = "500")]
    Medium,
}

/// Font style override
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Italic,
}

/// Display style for one token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenStyle {
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
}

impl TokenStyle {
    /// Plain color, no overrides
    pub fn plain(color: &str) -> Self {
        Self {
            color: color.to_string(),
            font_weight: None,
            font_style: None,
        }
    }

    /// Builder: set weight
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.font_style = Some(FontStyle::Italic);
        self
    }

    /// Check if this style only sets a color
    pub fn is_plain(&self) -> bool {
        self.font_weight.is_none() && self.font_style.is_none()
    }
}

/// Style for a category under `theme`
pub fn style_for(token_type: TokenType, theme: &Theme) -> TokenStyle {
    let style = TokenStyle::plain(theme.color_for(token_type));
    match token_type {
        TokenType::Keyword | TokenType::Boolean | TokenType::Null => {
            style.with_weight(FontWeight::Bold)
        }
        TokenType::Comment => style.with_italic(),
        TokenType::Function => style.with_weight(FontWeight::SemiBold),
        TokenType::ClassName | TokenType::Constant => style.with_weight(FontWeight::Medium),
        _ => style,
    }
}

/// Style for a category label; unknown labels get the foreground
pub fn style_for_name(name: &str, theme: &Theme) -> TokenStyle {
    match TokenType::from_name(name) {
        Some(token_type) => style_for(token_type, theme),
        None => TokenStyle::plain(&theme.foreground),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_categories() {
        let theme = Theme::dark();
        for token_type in [TokenType::Keyword, TokenType::Boolean, TokenType::Null] {
            let style = style_for(token_type, &theme);
            assert_eq!(style.color, theme.color_for(token_type));
            assert_eq!(style.font_weight, Some(FontWeight::Bold));
            assert_eq!(style.font_style, None);
        }
    }

    #[test]
    fn test_comment_is_italic_only() {
        let theme = Theme::dark();
        let style = style_for_name("comment", &theme);
        assert_eq!(style, TokenStyle::plain(&theme.comment).with_italic());
        assert_eq!(style.font_weight, None);
    }

    #[test]
    fn test_weights() {
        let theme = Theme::light();
        assert_eq!(style_for(TokenType::Function, &theme).font_weight, Some(FontWeight::SemiBold));
        assert_eq!(style_for(TokenType::ClassName, &theme).font_weight, Some(FontWeight::Medium));
        assert_eq!(style_for(TokenType::Constant, &theme).font_weight, Some(FontWeight::Medium));
        assert!(style_for(TokenType::String, &theme).is_plain());
        assert!(style_for(TokenType::Regex, &theme).is_plain());
    }

    #[test]
    fn test_unknown_and_text_use_foreground() {
        let theme = Theme::dark();
        assert_eq!(style_for_name("unknownTypeXYZ", &theme), TokenStyle::plain(&theme.foreground));
        assert_eq!(style_for_name("text", &theme), TokenStyle::plain(&theme.foreground));
    }

    #[test]
    fn test_serialized_keys() {
        let theme = Theme::dark();
        let comment = serde_json::to_value(style_for(TokenType::Comment, &theme)).unwrap();
        assert_eq!(comment, serde_json::json!({ "color": theme.comment.clone(), "fontStyle": "italic" }));
        let function = serde_json::to_value(style_for(TokenType::Function, &theme)).unwrap();
        assert_eq!(function["fontWeight"], "600");
        let plain = serde_json::to_value(style_for_name("nope", &theme)).unwrap();
        assert_eq!(plain, serde_json::json!({ "color": theme.foreground.clone() }));
    }
}
