//! Configuration file support
//!
//! Settings live in `.codelight.conf` in the home directory (`HOME`, or
//! `USERPROFILE` on Windows). Each line is `key = value`; `#` starts a
//! comment. Unknown keys and unparsable values are logged and ignored.
//!
//! ```text
//! # codelight configuration
//! theme = light
//! line-numbers = true
//! language = typescript
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use codelight::{Result, Theme, DEFAULT_LANGUAGE};
use tracing::{debug, warn};

const CONFIG_FILE: &str = ".codelight.conf";

#[cfg(windows)]
const HOME_VAR: &str = "USERPROFILE";
#[cfg(not(windows))]
const HOME_VAR: &str = "HOME";

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Builtin theme name or path to a TOML theme file
    pub theme: String,
    /// Whether to print a line-number gutter
    pub show_line_numbers: bool,
    /// Language when neither flag nor file extension decides
    pub language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            show_line_numbers: false,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl Config {
    /// Path of the settings file, if a home directory is known
    pub fn config_path() -> Option<PathBuf> {
        std::env::var_os(HOME_VAR).map(|home| PathBuf::from(home).join(CONFIG_FILE))
    }

    /// Read the settings file; a missing file means defaults
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(contents) => {
                debug!(path = %path.display(), "loaded config");
                Self::from_contents(&contents)
            }
            Err(_) => Self::default(),
        }
    }

    /// Build a config from file contents, starting from defaults
    fn from_contents(contents: &str) -> Self {
        let mut config = Self::default();

        for (idx, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match line.split_once('=') {
                Some((key, value)) => config.set(idx + 1, key.trim(), value.trim()),
                None => warn!(line = idx + 1, "config line has no '=', ignored"),
            }
        }

        config
    }

    /// Apply one `key = value` setting
    fn set(&mut self, line: usize, key: &str, value: &str) {
        if value.is_empty() {
            return;
        }
        match key.to_lowercase().as_str() {
            "theme" => self.theme = value.to_string(),
            "language" => self.language = value.to_string(),
            "line-numbers" => match parse_bool(value) {
                Some(flag) => self.show_line_numbers = flag,
                None => warn!(line, value, "line-numbers expects a boolean, ignored"),
            },
            other => warn!(line, key = other, "unknown config key, ignored"),
        }
    }

    /// Resolve the configured theme: a builtin name, else a file path
    pub fn resolve_theme(&self) -> Result<Theme> {
        match Theme::builtin(&self.theme) {
            Ok(theme) => Ok(theme),
            Err(_) if Path::new(&self.theme).is_file() => Theme::load(Path::new(&self.theme)),
            Err(err) => Err(err),
        }
    }
}

/// Parse a boolean setting; `None` when it is neither yes nor no
fn parse_bool(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codelight::HighlightError;

    #[test]
    fn test_from_contents() {
        let config = Config::from_contents(
            r#"
# Comment
theme = light
LINE-NUMBERS = yes
language = Python
        "#,
        );

        assert_eq!(config.theme, "light");
        assert!(config.show_line_numbers);
        assert_eq!(config.language, "Python");
    }

    #[test]
    fn test_unknown_and_malformed_lines_are_ignored() {
        let config = Config::from_contents("tab-width = 4\njust some words\nline-numbers = maybe");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_empty_values_keep_defaults() {
        assert_eq!(Config::from_contents("theme =\nlanguage ="), Config::default());
    }

    #[test]
    fn test_later_lines_win() {
        let config = Config::from_contents("theme = light\ntheme = dark");
        assert_eq!(config.theme, "dark");
    }

    #[test]
    fn test_resolve_theme() {
        let mut config = Config::default();
        assert_eq!(config.resolve_theme().unwrap(), Theme::dark());

        config.theme = "/nonexistent/theme.toml".to_string();
        assert!(matches!(config.resolve_theme(), Err(HighlightError::UnknownTheme(_))));
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("Yes"), Some(true));
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("No"), Some(false));
        assert_eq!(parse_bool("anything"), None);
    }
}
