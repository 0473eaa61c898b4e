//! Resolution of the text a command operates on.
//!
//! `count` and `freq` accept text either inline or from a file, never both.
//! An empty inline string counts as not given.

use std::io;
use std::path::Path;

use tracing::debug;

use tally_core::domain::TextProcessor;

use crate::error::{CliError, CliResult, IntoCli};

/// Build a [`TextProcessor`] from exactly one of `text` or `file`.
pub fn load_text(text: Option<&str>, file: Option<&Path>) -> CliResult<TextProcessor> {
    let text = text.filter(|t| !t.is_empty());

    match (text, file) {
        (Some(_), Some(_)) => Err(CliError::invalid_input("Cannot specify both text and file")),
        (None, None) => Err(CliError::invalid_input("Must specify either text or file")),
        (Some(text), None) => Ok(TextProcessor::new(text)),
        (None, Some(path)) => read_file(path),
    }
}

fn read_file(path: &Path) -> CliResult<TextProcessor> {
    debug!(path = %path.display(), "Reading input file");

    let bytes = match std::fs::read(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(CliError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        other => other.with_cli_context(|| format!("Failed to read {}", path.display()))?,
    };

    Ok(TextProcessor::from_utf8(bytes)?)
}
