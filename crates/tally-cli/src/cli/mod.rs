//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "tally",
    bin_name = "tally",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Simple text processing utility and template renamer",
    long_about = "Tally counts words and word frequencies in text given on the \
                  command line or read from a file, and renames the template \
                  project it ships in.",
    after_help = "EXAMPLES:\n\
        \x20 tally count \"a b c\"\n\
        \x20 tally freq spam -t \"spam spam eggs\"\n\
        \x20 tally count --file notes.txt\n\
        \x20 tally rename --new-name my_app --dry-run",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Count words in text.
    #[command(
        visible_alias = "c",
        about = "Count words in text",
        after_help = "EXAMPLES:\n\
            \x20 tally count \"hello world\"\n\
            \x20 tally count --file input.txt"
    )]
    Count(CountArgs),

    /// Count the frequency of one word.
    #[command(
        visible_alias = "f",
        about = "Count frequency of a specific word",
        after_help = "EXAMPLES:\n\
            \x20 tally freq spam --text \"spam spam eggs\"\n\
            \x20 tally freq the --file book.txt"
    )]
    Freq(FreqArgs),

    /// Rename the template project.
    #[command(
        about = "Update the project name throughout the template",
        after_help = "EXAMPLES:\n\
            \x20 tally rename --new-name my_app\n\
            \x20 tally rename --new-name my_app --old-name project_name -v\n\
            \x20 tally rename --new-name my_app --dry-run"
    )]
    Rename(RenameArgs),

    /// Inspect the Tally configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 tally config get rename.old_name\n\
            \x20 tally config list\n\
            \x20 tally config path"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 tally completions bash > ~/.local/share/bash-completion/completions/tally\n\
            \x20 tally completions zsh  > ~/.zfunc/_tally\n\
            \x20 tally completions fish > ~/.config/fish/completions/tally.fish"
    )]
    Completions(CompletionsArgs),
}

// ── count ─────────────────────────────────────────────────────────────────────

/// Arguments for `tally count`.
#[derive(Debug, Args)]
pub struct CountArgs {
    /// Text to count words in.
    #[arg(value_name = "TEXT", help = "Text to count words in")]
    pub text: Option<String>,

    /// Read the text from a file instead.
    #[arg(
        long = "file",
        value_name = "PATH",
        help = "File to read text from (exclusive with positional text)"
    )]
    pub file: Option<PathBuf>,
}

// ── freq ──────────────────────────────────────────────────────────────────────

/// Arguments for `tally freq`.
#[derive(Debug, Args)]
pub struct FreqArgs {
    /// Word to look for (case-sensitive, matched exactly).
    #[arg(value_name = "WORD", help = "Word to count frequency of")]
    pub word: String,

    /// Text to search in.
    #[arg(short = 't', long = "text", value_name = "TEXT", help = "Text to search in")]
    pub text: Option<String>,

    /// Read the text from a file instead.
    #[arg(
        long = "file",
        value_name = "PATH",
        help = "File to read text from (exclusive with --text)"
    )]
    pub file: Option<PathBuf>,
}

// ── rename ────────────────────────────────────────────────────────────────────

/// Arguments for `tally rename`.
#[derive(Debug, Args)]
pub struct RenameArgs {
    /// New project name; must be a valid Rust identifier.
    #[arg(long = "new-name", value_name = "NAME", help = "The new project name to apply")]
    pub new_name: String,

    /// Template name to replace.  Falls back to `rename.old_name` from config.
    #[arg(
        long = "old-name",
        value_name = "NAME",
        help = "The original template name to replace (default: project_name)"
    )]
    pub old_name: Option<String>,

    /// Project root holding `Cargo.toml` and `crates/`.
    #[arg(
        long = "root",
        value_name = "DIR",
        default_value = ".",
        help = "Project root directory"
    )]
    pub root: PathBuf,

    /// Report what would change without modifying anything.
    #[arg(long = "dry-run", help = "Show the changes without modifying any files")]
    pub dry_run: bool,

    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Skip confirmation and rename immediately")]
    pub yes: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `tally completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `tally config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `rename.old_name`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_count_with_text() {
        let cli = Cli::parse_from(["tally", "count", "a b"]);
        match cli.command {
            Commands::Count(args) => {
                assert_eq!(args.text.as_deref(), Some("a b"));
                assert!(args.file.is_none());
            }
            _ => panic!("expected Count command"),
        }
    }

    #[test]
    fn parse_count_without_input_is_accepted_by_clap() {
        // Missing input is reported by the command, not by clap.
        let cli = Cli::try_parse_from(["tally", "count"]);
        assert!(cli.is_ok());
    }

    #[test]
    fn parse_freq_with_short_text_flag() {
        let cli = Cli::parse_from(["tally", "freq", "b", "-t", "a b b"]);
        match cli.command {
            Commands::Freq(args) => {
                assert_eq!(args.word, "b");
                assert_eq!(args.text.as_deref(), Some("a b b"));
            }
            _ => panic!("expected Freq command"),
        }
    }

    #[test]
    fn freq_requires_word() {
        assert!(Cli::try_parse_from(["tally", "freq"]).is_err());
    }

    #[test]
    fn parse_rename_defaults() {
        let cli = Cli::parse_from(["tally", "rename", "--new-name", "my_app"]);
        match cli.command {
            Commands::Rename(args) => {
                assert_eq!(args.new_name, "my_app");
                assert!(args.old_name.is_none());
                assert_eq!(args.root, PathBuf::from("."));
                assert!(!args.dry_run);
                assert!(!args.yes);
            }
            _ => panic!("expected Rename command"),
        }
    }

    #[test]
    fn rename_requires_new_name() {
        assert!(Cli::try_parse_from(["tally", "rename"]).is_err());
    }

    #[test]
    fn unknown_command_is_rejected() {
        let err = Cli::try_parse_from(["tally", "unknown"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["tally", "--quiet", "--verbose", "count", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_help_describes_result_flags() {
        use clap::CommandFactory;
        let help = Cli::command().render_help().to_string();
        assert!(help.contains("Print only results and errors"));
        assert!(help.contains("Result format"));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["tally", "count", "x", "-vv", "--output-format", "json"]);
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.output_format, OutputFormat::Json);
    }
}
