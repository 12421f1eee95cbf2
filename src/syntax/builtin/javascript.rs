//! JavaScript pattern table (also the fallback for unknown languages)

use crate::syntax::rules::TokenPattern;
use crate::syntax::tokens::TokenType;

pub const KEYWORDS: &str = "async|await|break|case|catch|class|const|continue|debugger|default|\
delete|do|else|export|extends|finally|for|from|function|if|import|in|instanceof|let|new|of|\
return|static|super|switch|this|throw|try|typeof|var|void|while|with|yield";

/// Create the JavaScript pattern table
pub fn patterns() -> Vec<TokenPattern> {
    with_keywords(KEYWORDS)
}

/// The JavaScript table with a custom keyword alternation
pub(crate) fn with_keywords(keywords: &str) -> Vec<TokenPattern> {
    let keyword = format!(r"\b(?:{keywords})\b");

    super::compile([
        (TokenType::Comment, r"//.*$|/\*.*?(?:\*/|$)", 1),
        (
            TokenType::String,
            r#""(?:[^"\\]|\\.)*"?|'(?:[^'\\]|\\.)*'?|`(?:[^`\\]|\\.)*`?"#,
            2,
        ),
        // A slash only opens a regex after an operator or opening bracket.
        (
            TokenType::Regex,
            r"(?:^|[=(,:!&|?{};\[]|\breturn|\btypeof)\s*(/(?:[^/*\\\[\n]|\\.|\[(?:[^\]\\\n]|\\.)*\])(?:[^/\\\[\n]|\\.|\[(?:[^\]\\\n]|\\.)*\])*/[dgimsuyv]*)",
            3,
        ),
        (
            TokenType::Escape,
            r"\\(?:u\{[0-9A-Fa-f]+\}|u[0-9A-Fa-f]{4}|x[0-9A-Fa-f]{2}|[0-7]{1,3}|.)",
            4,
        ),
        (TokenType::Keyword, keyword.as_str(), 5),
        (TokenType::Boolean, r"\b(?:true|false)\b", 6),
        (TokenType::Null, r"\b(?:null|undefined)\b", 7),
        (
            TokenType::Number,
            r"\b(?:0[xX][0-9a-fA-F_]+|0[bB][01_]+|0[oO][0-7_]+|\d[\d_]*(?:\.[\d_]*)?(?:[eE][+-]?\d+)?)n?\b|\B\.\d[\d_]*(?:[eE][+-]?\d+)?\b",
            8,
        ),
        (TokenType::Constant, r"\b[A-Z][A-Z0-9_]*[A-Z0-9]\b", 9),
        (TokenType::ClassName, r"\b[A-Z][A-Za-z0-9_$]*", 10),
        (TokenType::Function, r"(?:^|[^\w$])([A-Za-z_$][\w$]*)\s*\(", 11),
        // Spread is not member access. Members named like keywords
        // (`foo.class`) stay keywords: same start, and keyword ranks first.
        (
            TokenType::Property,
            r"\.\.\.[A-Za-z_$][\w$]*|\.\s*([A-Za-z_$][\w$]*)",
            12,
        ),
        (TokenType::Variable, r"(?:^|[^\w$])([A-Za-z_$][\w$]*)", 13),
        (
            TokenType::Operator,
            r"=>|\.\.\.|\?\?=?|\?\.|\*\*=?|===?|!==?|<<=?|>>>?=?|&&=?|\|\|=?|\+\+|--|[-+*/%&|^~!<>=?:]=?",
            14,
        ),
        (TokenType::Punctuation, r"[{}()\[\];,.]", 15),
    ])
}
