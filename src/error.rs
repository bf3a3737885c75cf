//! Error types for lexicon loading and corpus scoring

use std::io;

use thiserror::Error;

/// Errors raised while loading a lexicon
///
/// Any of these aborts the whole load; no partially filled lexicon is
/// ever handed back to the caller.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The lexicon source could not be opened or read
    #[error("cannot read lexicon '{path}': {source}")]
    Io {
        /// Path (or stream description) of the lexicon source
        path: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A line has no `,` between word and score
    #[error("line {line_number}: missing ',' separator in {line:?}")]
    MissingSeparator {
        /// 1-based line number
        line_number: usize,
        /// Offending line
        line: String,
    },

    /// The score segment is not a finite decimal number
    #[error("line {line_number}: invalid score {value:?}")]
    InvalidScore {
        /// 1-based line number
        line_number: usize,
        /// Text that failed to parse
        value: String,
    },
}

/// Errors that can occur during a scoring run
#[derive(Debug, Error)]
pub enum SentimentError {
    /// Lexicon load failed
    #[error("lexicon load failed: {0}")]
    Load(#[from] LoadError),

    /// The record source could not be opened or read
    #[error("cannot read records '{path}': {source}")]
    RecordSource {
        /// Path (or stream description) of the record source
        path: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Invalid configuration or input parameters
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, SentimentError>;
