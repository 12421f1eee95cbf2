//! TypeScript pattern table

use super::javascript;
use crate::syntax::rules::TokenPattern;
use crate::syntax::tokens::TokenType;

const TS_KEYWORDS: &str = "abstract|asserts|declare|enum|implements|infer|interface|is|keyof|\
namespace|override|private|protected|public|readonly|satisfies|type|unique|\
any|bigint|boolean|never|number|object|string|symbol|unknown";

/// Create the TypeScript pattern table
///
/// JavaScript plus the TypeScript keywords and primitive type names, and
/// decorators highlighted like calls.
pub fn patterns() -> Vec<TokenPattern> {
    let keywords = format!("{}|{}", javascript::KEYWORDS, TS_KEYWORDS);
    let mut table = javascript::with_keywords(&keywords);
    table.extend(super::compile([(
        TokenType::Function,
        r"@[A-Za-z_$][\w$]*",
        16,
    )]));
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::language::tokenize_line;

    fn kind_of(line: &str, value: &str) -> Option<TokenType> {
        tokenize_line(&patterns(), line)
            .into_iter()
            .find(|t| t.value == value)
            .map(|t| t.token_type)
    }

    #[test]
    fn test_type_keywords() {
        assert_eq!(kind_of("interface Props {", "interface"), Some(TokenType::Keyword));
        assert_eq!(kind_of("let n: number = 1", "number"), Some(TokenType::Keyword));
        assert_eq!(kind_of("type Id = string", "type"), Some(TokenType::Keyword));
        assert_eq!(kind_of("interface Props {", "Props"), Some(TokenType::ClassName));
    }

    #[test]
    fn test_decorator() {
        assert_eq!(kind_of("@Component", "@Component"), Some(TokenType::Function));
    }

    #[test]
    fn test_javascript_rules_still_apply() {
        assert_eq!(kind_of("const x = 1;", "const"), Some(TokenType::Keyword));
        assert_eq!(kind_of("// note", "// note"), Some(TokenType::Comment));
    }
}
