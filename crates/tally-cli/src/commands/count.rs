//! Implementation of the `tally count` command.

use std::fmt;

use serde::Serialize;
use tracing::instrument;

use crate::{cli::CountArgs, error::CliResult, output::OutputManager};

use super::input::load_text;

/// Result of `tally count`.
#[derive(Debug, Serialize)]
pub struct WordCount {
    pub word_count: usize,
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word_count)
    }
}

#[instrument(skip_all)]
pub fn execute(args: CountArgs, output: OutputManager) -> CliResult<()> {
    let processor = load_text(args.text.as_deref(), args.file.as_deref())?;
    let result = WordCount {
        word_count: processor.count_words(),
    };
    output.result(&result)?;
    Ok(())
}
