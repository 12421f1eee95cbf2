//! Error types for codelight

use thiserror::Error;

/// Result type alias for codelight operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Errors raised at the edges of the highlighter (pattern construction,
/// theme loading, the command line). Highlighting itself never fails.
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid pattern for {token_type}: {source}")]
    InvalidPattern {
        token_type: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("Theme parse error: {0}")]
    ThemeParse(#[from] toml::de::Error),

    #[error("Invalid color for {key}: {value}")]
    InvalidColor { key: &'static str, value: String },

    #[error("No such theme: {0}")]
    UnknownTheme(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Message(String),
}
