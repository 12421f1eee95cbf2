//! Built-in pattern tables
//!
//! Each table is an ordered list of (category, regex, priority) entries.
//! Priorities within a table are distinct; lower wins on ties.

pub mod javascript;
pub mod json;
pub mod python;
pub mod typescript;

use tracing::warn;

use super::rules::TokenPattern;
use super::tokens::TokenType;

/// Compile table entries, skipping (and logging) any that fail
pub(crate) fn compile<I, S>(entries: I) -> Vec<TokenPattern>
where
    I: IntoIterator<Item = (TokenType, S, u32)>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .filter_map(|(token_type, pattern, priority)| {
            match TokenPattern::new(token_type, pattern.as_ref(), priority) {
                Ok(rule) => Some(rule),
                Err(err) => {
                    warn!(%err, "skipping builtin pattern");
                    None
                }
            }
        })
        .collect()
}
