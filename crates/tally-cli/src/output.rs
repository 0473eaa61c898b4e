//! Output management and formatting.
//!
//! Decorated messages (`success`, `info`, ...) go through the quiet gate,
//! which JSON output also closes.
//! Command results go through [`OutputManager::result`], which always prints
//! and switches to JSON when asked.

use std::fmt::Display;
use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Flag first, then config, then Auto → Human (TTY) or Plain (piped).
        let requested = match args.output_format {
            OutputFormat::Auto => parse_format(&config.output.format),
            explicit => explicit,
        };
        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            // In JSON mode stdout carries only the JSON document.
            quiet: args.quiet || resolved_format == OutputFormat::Json,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Print a command result.
    ///
    /// Never suppressed by `--quiet`: the result is the point of the command.
    /// In JSON mode the value is serialised on a single line.
    pub fn result<T>(&self, value: &T) -> io::Result<()>
    where
        T: Serialize + Display,
    {
        let line = self.render(value)?;
        self.term.write_line(&line)
    }

    fn render<T>(&self, value: &T) -> io::Result<String>
    where
        T: Serialize + Display,
    {
        if self.resolved_format == OutputFormat::Json {
            serde_json::to_string(value).map_err(io::Error::other)
        } else {
            Ok(value.to_string())
        }
    }

    /// Serialise `value` as pretty JSON.  Not suppressed in quiet mode.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` when results should be emitted as JSON.
    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }
}

fn parse_format(value: &str) -> OutputFormat {
    match value.to_ascii_lowercase().as_str() {
        "human" => OutputFormat::Human,
        "plain" => OutputFormat::Plain,
        "json" => OutputFormat::Json,
        _ => OutputFormat::Auto,
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::AppConfig;

    fn make_manager(quiet: bool, no_color: bool) -> OutputManager {
        with_format(quiet, no_color, OutputFormat::Human)
    }

    fn with_format(quiet: bool, no_color: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: format, // explicit, avoids TTY detection in tests
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[derive(Serialize)]
    struct Count {
        word_count: usize,
    }

    impl Display for Count {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "Word count: {}", self.word_count)
        }
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true);
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn no_color_flag_reported() {
        let colored = make_manager(false, false);
        let no_color = make_manager(false, true);
        assert!(!colored.no_color);
        assert!(no_color.no_color);
    }

    #[test]
    fn format_accessor_returns_resolved() {
        let out = with_format(false, false, OutputFormat::Plain);
        assert_eq!(out.resolved_format, OutputFormat::Plain);
        assert!(out.no_color);
    }

    #[test]
    fn config_format_applies_when_flag_is_auto() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        };
        let mut config = AppConfig::default();
        config.output.format = "json".into();
        assert!(OutputManager::new(&args, &config).is_json());
    }

    #[test]
    fn render_human_uses_display() {
        let out = with_format(false, true, OutputFormat::Plain);
        let line = out.render(&Count { word_count: 3 }).unwrap();
        assert_eq!(line, "Word count: 3");
    }

    #[test]
    fn render_json_uses_serde() {
        let out = with_format(true, true, OutputFormat::Json);
        let line = out.render(&Count { word_count: 3 }).unwrap();
        assert_eq!(line, r#"{"word_count":3}"#);
    }

    #[test]
    fn parse_format_is_case_insensitive() {
        assert_eq!(parse_format("JSON"), OutputFormat::Json);
        assert_eq!(parse_format("plain"), OutputFormat::Plain);
        assert_eq!(parse_format("whatever"), OutputFormat::Auto);
    }
}
