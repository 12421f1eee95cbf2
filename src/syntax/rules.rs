//! Pattern rules for syntax highlighting
//!
//! A `TokenPattern` pairs a regex with the category it assigns and a
//! priority used to break ties between matches starting at the same
//! offset.

use regex::Regex;

use super::tokens::TokenType;
use crate::error::{HighlightError, Result};

/// One entry of a language's pattern table
///
/// When the regex has a capture group, group 1 is the classified span and
/// the rest of the match is context only (the regex engine has no
/// lookaround). A match in which group 1 did not take part classifies
/// nothing. Without a group the whole match is the span.
#[derive(Debug, Clone)]
pub struct TokenPattern {
    /// Category assigned to matches
    pub token_type: TokenType,
    /// Compiled regex, applied to a single line
    pub pattern: Regex,
    /// Lower wins when matches share a start offset
    pub priority: u32,
}

/// A span found by one pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternMatch {
    pub start: usize,
    pub end: usize,
    pub token_type: TokenType,
    pub priority: u32,
}

impl PatternMatch {
    /// Check whether two half-open spans share any byte
    pub fn overlaps(&self, other: &PatternMatch) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl TokenPattern {
    /// Compile a pattern rule
    pub fn new(token_type: TokenType, pattern: &str, priority: u32) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|source| HighlightError::InvalidPattern {
            token_type: token_type.name(),
            source,
        })?;
        Ok(Self {
            token_type,
            pattern,
            priority,
        })
    }

    /// Collect every match of this pattern in `line`
    ///
    /// The search restarts after each match. A zero-length match moves the
    /// search forward one character, so patterns that can match the empty
    /// string still terminate. Empty spans are never reported.
    pub fn matches(&self, line: &str) -> Vec<PatternMatch> {
        let mut found = Vec::new();
        let mut from = 0;

        while from <= line.len() {
            let Some(caps) = self.pattern.captures_at(line, from) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };
            let span = if self.pattern.captures_len() > 1 {
                caps.get(1)
            } else {
                Some(whole)
            };

            if let Some(span) = span.filter(|s| s.end() > s.start()) {
                found.push(PatternMatch {
                    start: span.start(),
                    end: span.end(),
                    token_type: self.token_type,
                    priority: self.priority,
                });
            }

            // Resume after the span, not the trailing context, so the
            // context can start the next match.
            let resume = span.map_or(whole.end(), |s| s.end());
            from = if resume > from {
                resume
            } else if whole.end() > from {
                whole.end()
            } else {
                next_char_boundary(line, from)
            };
        }

        found
    }
}

/// First char boundary strictly after `pos` (or one past the end)
fn next_char_boundary(line: &str, pos: usize) -> usize {
    let mut next = pos + 1;
    while next < line.len() && !line.is_char_boundary(next) {
        next += 1;
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(pattern: &TokenPattern, line: &str) -> Vec<(usize, usize)> {
        pattern.matches(line).iter().map(|m| (m.start, m.end)).collect()
    }

    #[test]
    fn test_repeated_matches() {
        let rule = TokenPattern::new(TokenType::Number, r"\d+", 3).unwrap();
        assert_eq!(spans(&rule, "a 12 b 345"), vec![(2, 4), (7, 10)]);
        assert!(rule.matches("no numbers").is_empty());
    }

    #[test]
    fn test_capture_group_is_span() {
        let rule = TokenPattern::new(TokenType::Function, r"([A-Za-z_]\w*)\s*\(", 1).unwrap();
        assert_eq!(spans(&rule, "foo (bar(1))"), vec![(0, 3), (5, 8)]);
    }

    #[test]
    fn test_group_not_taking_part_classifies_nothing() {
        let rule = TokenPattern::new(TokenType::Property, r"\.\.\.\w+|\.(\w+)", 1).unwrap();
        assert_eq!(spans(&rule, "f(...rest).len"), vec![(11, 14)]);
    }

    #[test]
    fn test_zero_length_matches_terminate() {
        let rule = TokenPattern::new(TokenType::Variable, r"x*", 1).unwrap();
        assert_eq!(spans(&rule, "axxbx"), vec![(1, 3), (4, 5)]);
    }

    #[test]
    fn test_zero_length_advance_respects_utf8() {
        let rule = TokenPattern::new(TokenType::Variable, r"b*", 1).unwrap();
        assert_eq!(spans(&rule, "é€b"), vec![(5, 6)]);
    }

    #[test]
    fn test_invalid_pattern() {
        let err = TokenPattern::new(TokenType::String, r"(unclosed", 1).unwrap_err();
        assert!(matches!(err, HighlightError::InvalidPattern { token_type: "string", .. }));
    }

    #[test]
    fn test_overlaps() {
        let a = PatternMatch { start: 0, end: 5, token_type: TokenType::Keyword, priority: 1 };
        let b = PatternMatch { start: 4, end: 6, token_type: TokenType::Variable, priority: 5 };
        let c = PatternMatch { start: 5, end: 6, token_type: TokenType::Variable, priority: 5 };
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }
}
