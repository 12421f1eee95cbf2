//! Python language definition

use crate::syntax::rules::TokenPattern;
use crate::syntax::tokens::TokenType;

/// Create the Python pattern table
pub fn patterns() -> Vec<TokenPattern> {
    super::compile([
        (TokenType::Comment, r"#.*$", 1),
        // Triple-quoted strings only close on the same line; the rest of
        // the line is taken otherwise.
        (
            TokenType::String,
            r#"(?:\b[rRbBuUfF]{1,2})?(?:"""(?:[^\\]|\\.)*?(?:"""|$)|'''(?:[^\\]|\\.)*?(?:'''|$)|"(?:[^"\\]|\\.)*"?|'(?:[^'\\]|\\.)*'?)"#,
            2,
        ),
        (
            TokenType::Escape,
            r"\\(?:N\{[^}]*\}|u[0-9A-Fa-f]{4}|U[0-9A-Fa-f]{8}|x[0-9A-Fa-f]{2}|[0-7]{1,3}|.)",
            3,
        ),
        (
            TokenType::Keyword,
            r"\b(?:and|as|assert|async|await|break|case|class|continue|def|del|elif|else|except|finally|for|from|global|if|import|in|is|lambda|match|nonlocal|not|or|pass|raise|return|try|while|with|yield)\b",
            4,
        ),
        (TokenType::Boolean, r"\b(?:True|False)\b", 5),
        (TokenType::Null, r"\bNone\b", 6),
        (
            TokenType::Number,
            r"\b(?:0[xX][0-9a-fA-F_]+|0[bB][01_]+|0[oO][0-7_]+|\d[\d_]*(?:\.[\d_]*)?(?:[eE][+-]?\d+)?[jJ]?)\b|\B\.\d[\d_]*(?:[eE][+-]?\d+)?[jJ]?\b",
            7,
        ),
        (TokenType::Function, r"(?:^|\s)(@[A-Za-z_][\w.]*)", 8),
        (TokenType::Constant, r"\b[A-Z][A-Z0-9_]*[A-Z0-9]\b", 9),
        (TokenType::ClassName, r"\b[A-Z][A-Za-z0-9_]*", 10),
        (TokenType::Function, r"\b([A-Za-z_]\w*)\s*\(", 11),
        (TokenType::Property, r"\.\s*([A-Za-z_]\w*)", 12),
        (TokenType::Variable, r"\b[A-Za-z_]\w*", 13),
        (
            TokenType::Operator,
            r"->|:=|\*\*=?|//=?|<<=?|>>=?|==|!=|<=|>=|[-+*/%@&|^~<>=]=?",
            14,
        ),
        (TokenType::Punctuation, r"[{}()\[\];,.:]", 15),
    ])
}
