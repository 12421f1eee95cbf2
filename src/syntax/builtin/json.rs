//! JSON pattern table

use crate::syntax::rules::TokenPattern;
use crate::syntax::tokens::TokenType;

/// Create the JSON pattern table
pub fn patterns() -> Vec<TokenPattern> {
    super::compile([
        // Object keys
        (TokenType::Property, r#"("(?:[^"\\]|\\.)*")\s*:"#, 1),
        (TokenType::String, r#""(?:[^"\\]|\\.)*"?"#, 2),
        (TokenType::Number, r"-?\b\d+(?:\.\d+)?(?:[eE][+-]?\d+)?\b", 3),
        (TokenType::Boolean, r"\b(?:true|false)\b", 4),
        (TokenType::Null, r"\bnull\b", 5),
        (TokenType::Punctuation, r"[{}\[\],:]", 6),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::language::tokenize_line;

    #[test]
    fn test_json_object_line() {
        let tokens = tokenize_line(&patterns(), r#"  "name": "n", "age": -4.5, "ok": null"#);
        let kinds: Vec<(TokenType, &str)> = tokens
            .iter()
            .filter(|t| t.token_type != TokenType::Text)
            .map(|t| (t.token_type, t.value.as_str()))
            .collect();
        assert_eq!(
            kinds,
            vec![
                (TokenType::Property, r#""name""#),
                (TokenType::Punctuation, ":"),
                (TokenType::String, r#""n""#),
                (TokenType::Punctuation, ","),
                (TokenType::Property, r#""age""#),
                (TokenType::Punctuation, ":"),
                (TokenType::Number, "-4.5"),
                (TokenType::Punctuation, ","),
                (TokenType::Property, r#""ok""#),
                (TokenType::Punctuation, ":"),
                (TokenType::Null, "null"),
            ]
        );
    }
}
