//! codelight - highlight code snippets in the terminal

mod config;
mod render;

use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use codelight::{HighlightError, Highlighter, Language, Result, Theme};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use config::Config;
use render::Renderer;

/// Command-line options, layered over the config file
#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    language: Option<String>,
    theme: Option<String>,
    line_numbers: bool,
    json: bool,
    file: Option<PathBuf>,
}

enum Action {
    Run(Options),
    Help,
    Version,
}

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("CODELIGHT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let options = match parse_args(&args)? {
        Action::Help => {
            print_usage();
            return Ok(());
        }
        Action::Version => {
            println!("codelight {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Action::Run(options) => options,
    };

    let mut config = Config::load();
    if let Some(theme) = &options.theme {
        config.theme = theme.clone();
    }
    config.show_line_numbers |= options.line_numbers;

    let code = read_input(options.file.as_deref())?;
    let language = pick_language(&options, &config);
    let theme: Theme = config.resolve_theme()?;
    debug!(%language, theme = %config.theme, "highlighting input");

    let highlighter = Highlighter::for_language(theme, language);
    let lines = highlighter.highlight_code(&code);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if options.json {
        serde_json::to_writer_pretty(&mut out, &lines)?;
        writeln!(out)?;
    } else {
        Renderer::new(&highlighter, config.show_line_numbers).render(&mut out, &lines)?;
    }

    Ok(())
}

fn parse_args(args: &[String]) -> Result<Action> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Action::Help),
            "--version" | "-V" => return Ok(Action::Version),
            "--lang" | "-l" => options.language = Some(value_for(arg, iter.next())?),
            "--theme" | "-t" => options.theme = Some(value_for(arg, iter.next())?),
            "--line-numbers" | "-n" => options.line_numbers = true,
            "--json" => options.json = true,
            "-" => options.file = None,
            other if other.starts_with('-') => {
                return Err(HighlightError::Message(format!("Unknown option: {other}")));
            }
            path => options.file = Some(PathBuf::from(path)),
        }
    }

    Ok(Action::Run(options))
}

fn value_for(flag: &str, value: Option<&String>) -> Result<String> {
    value
        .cloned()
        .ok_or_else(|| HighlightError::Message(format!("{flag} needs a value")))
}

/// Flag, then file extension, then config
fn pick_language(options: &Options, config: &Config) -> Language {
    if let Some(name) = &options.language {
        return Language::from_name(name);
    }
    options
        .file
        .as_deref()
        .and_then(Path::extension)
        .and_then(|ext| ext.to_str())
        .and_then(Language::from_extension)
        .unwrap_or_else(|| Language::from_name(&config.language))
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut code = String::new();
            io::stdin().read_to_string(&mut code)?;
            Ok(code)
        }
    }
}

fn print_usage() {
    println!("codelight {} - syntax highlighting for code snippets", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: codelight [OPTIONS] [FILE]");
    println!();
    println!("Reads FILE, or stdin when FILE is missing or '-'.");
    println!();
    println!("Options:");
    println!("  -l, --lang LANG      javascript, typescript, python, json (default: by extension)");
    println!("  -t, --theme THEME    dark, light, or a path to a TOML theme");
    println!("  -n, --line-numbers   Show line numbers");
    println!("      --json           Print tokens as JSON instead of colored text");
    println!("  -h, --help           Show this help message");
    println!("  -V, --version        Show version information");
    println!();
    println!("Settings are read from ~/.codelight.conf; set CODELIGHT_LOG=debug for logs.");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn options(list: &[&str]) -> Options {
        match parse_args(&args(list)).unwrap() {
            Action::Run(options) => options,
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_parse_args() {
        let parsed = options(&["-l", "ts", "--theme", "light", "-n", "--json", "app.js"]);
        assert_eq!(
            parsed,
            Options {
                language: Some("ts".to_string()),
                theme: Some("light".to_string()),
                line_numbers: true,
                json: true,
                file: Some(PathBuf::from("app.js")),
            }
        );
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(parse_args(&args(&["--lang"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
        assert!(matches!(parse_args(&args(&["-h", "x"])), Ok(Action::Help)));
    }

    #[test]
    fn test_pick_language() {
        let config = Config::default();
        assert_eq!(pick_language(&options(&["a.py"]), &config), Language::Python);
        assert_eq!(pick_language(&options(&["-l", "json", "a.py"]), &config), Language::Json);
        assert_eq!(pick_language(&options(&["a.rb"]), &config), Language::JavaScript);

        let config = Config {
            language: "typescript".to_string(),
            ..Config::default()
        };
        assert_eq!(pick_language(&options(&[]), &config), Language::TypeScript);
    }
}
