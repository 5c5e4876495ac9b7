//! Dispatch of parsed subcommands onto [`TextOps`].

use crate::args::Command;
use std::io::{self, Write};
use tkit_textops::{TextError, TextOps};
use tracing::debug;

/// Result of a single command, ready to be written to stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// A single line of text.
    Text(String),
    /// One entry per line.
    Lines(Vec<String>),
    /// Outcome of a predicate; printed as `true`/`false`.
    Flag(bool),
}

impl Output {
    /// Writes the output followed by a newline per entry.
    ///
    /// # Errors
    /// Propagates I/O errors from the writer.
    pub fn write_to(&self, mut writer: impl Write) -> io::Result<()> {
        match self {
            Self::Text(text) => writeln!(writer, "{text}"),
            Self::Lines(lines) => lines.iter().try_for_each(|line| writeln!(writer, "{line}")),
            Self::Flag(flag) => writeln!(writer, "{flag}"),
        }
    }

    /// `false` only for a failed predicate.
    #[must_use]
    pub const fn success(&self) -> bool {
        !matches!(self, Self::Flag(false))
    }
}

/// Runs `command` against `text`.
///
/// # Errors
/// Returns [`TextError::InvalidArgument`] for an unknown pool type in `random` or `pool`.
pub fn execute(text: &TextOps, command: &Command) -> Result<Output, TextError> {
    debug!(?command, encoding = %text.encoding(), "Executing command");

    let output = match command {
        Command::Length { value } => Output::Text(text.length(value).to_string()),
        Command::Lower { value } => Output::Text(text.lower(value)),
        Command::Upper { value } => Output::Text(text.upper(value)),
        Command::Title { value } => Output::Text(text.title(value)),
        Command::Limit { value, limit, end } => Output::Text(text.limit(value, *limit, end)),
        Command::LimitExact { value, limit, end } => {
            Output::Text(text.limit_exact(value, *limit, end))
        },
        Command::Words { value, words, end } => Output::Text(text.words(value, *words, end)),
        Command::Classify { value } => Output::Text(text.classify(value)),
        Command::Segments { value } => {
            Output::Lines(text.segments(value).into_iter().map(str::to_owned).collect())
        },
        Command::Random { length, kind } => Output::Text(text.random(*length, kind)?),
        Command::Is { pattern, value } => Output::Flag(text.is(pattern, value)),
        Command::Slug { value, separator } => Output::Text(text.slug(value, separator)),
        Command::Ascii { value } => Output::Text(text.ascii(value)),
        Command::Pool { kind } => Output::Text(text.pool(kind)?.to_owned()),
    };

    Ok(output)
}
