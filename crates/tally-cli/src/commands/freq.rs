//! Implementation of the `tally freq` command.

use std::fmt;

use serde::Serialize;
use tracing::instrument;

use crate::{cli::FreqArgs, error::CliResult, output::OutputManager};

use super::input::load_text;

/// Result of `tally freq`.
#[derive(Debug, Serialize)]
pub struct WordFrequency {
    pub word: String,
    pub frequency: usize,
}

impl fmt::Display for WordFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.frequency)
    }
}

#[instrument(skip_all, fields(word = %args.word))]
pub fn execute(args: FreqArgs, output: OutputManager) -> CliResult<()> {
    let processor = load_text(args.text.as_deref(), args.file.as_deref())?;
    let frequency = processor.word_frequency(&args.word);
    output.result(&WordFrequency {
        word: args.word,
        frequency,
    })?;
    Ok(())
}
