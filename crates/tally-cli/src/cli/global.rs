//! Flags shared by every `tally` subcommand.
//!
//! Flattened into [`super::Cli`] and marked `global`, so they may appear
//! before or after the subcommand name.

use clap::Args;
use std::path::PathBuf;

/// Flags accepted by every subcommand.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Log level, raised once per repetition.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Show more log output on stderr (-v, -vv, -vvv)",
        long_help = "Raise the log level written to stderr:
    (default) - warnings and errors
    -v        - info: one line per counting or rename step
    -vv       - debug: normalization, token samples, skipped files
    -vvv      - trace: span entry and exit
RUST_LOG takes precedence when set."
    )]
    pub verbose: u8,

    /// Hide progress and summary lines.
    ///
    /// `count` and `freq` results are printed regardless.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print only results and errors"
    )]
    pub quiet: bool,

    /// Plain output with no ANSI escapes; also set by `NO_COLOR`.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Never colorize output"
    )]
    pub no_color: bool,

    /// TOML file read instead of the platform default location.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read settings from FILE (must exist)"
    )]
    pub config: Option<PathBuf>,

    /// Rendering of results on stdout.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Result format: auto, human, plain or json"
    )]
    pub output_format: OutputFormat,
}

/// How results are rendered on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `output.format` from config, else human on a terminal and plain when piped.
    #[default]
    Auto,
    /// Colored, decorated text.
    Human,
    /// Undecorated text for scripts.
    Plain,
    /// One JSON document per result; log lines become JSON too.
    Json,
}
